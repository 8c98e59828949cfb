//! The Smart Battery Data Specification register map.
//!
//! See <http://sbs-forum.org/specs/sbdat110.pdf>. Only the registers printed
//! by this crate are described here.

pub mod format;
mod table;

pub use table::REGISTERS;

pub const MANUFACTURER_ACCESS: u8 = 0x00;
pub const TEMPERATURE: u8 = 0x08;
pub const VOLTAGE: u8 = 0x09;
pub const CURRENT: u8 = 0x0a;
pub const RELATIVE_STATE_OF_CHARGE: u8 = 0x0d;
pub const ABSOLUTE_STATE_OF_CHARGE: u8 = 0x0e;
pub const REMAINING_CAPACITY: u8 = 0x0f;
pub const FULL_CHARGE_CAPACITY: u8 = 0x10;
pub const CHARGING_CURRENT: u8 = 0x14;
pub const CHARGING_VOLTAGE: u8 = 0x15;
pub const BATTERY_STATUS: u8 = 0x16;
pub const CYCLE_COUNT: u8 = 0x17;
pub const DESIGN_CAPACITY: u8 = 0x18;
pub const DESIGN_VOLTAGE: u8 = 0x19;
pub const MANUFACTURE_DATE: u8 = 0x1b;
pub const MANUFACTURER_NAME: u8 = 0x20;
pub const DEVICE_NAME: u8 = 0x21;
pub const DEVICE_CHEMISTRY: u8 = 0x22;

/// How a register is read off the bus and turned into text.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    /// One SMBus word read, rendered by the given formatter.
    Word(fn(u16) -> String),
    /// A length-prefixed string: the length byte is read first, then a block
    /// of that many characters plus the length byte itself.
    Text,
}

/// A register as it appears in the printed report.
#[derive(Debug, Clone, Copy)]
pub struct Register {
    pub label: &'static str,
    pub address: u8,
    pub kind: Kind,
    /// Print an empty line after this register.
    pub separator: bool,
}

impl Register {
    pub const fn word(label: &'static str, address: u8, format: fn(u16) -> String) -> Self {
        Self {
            label,
            address,
            kind: Kind::Word(format),
            separator: false,
        }
    }

    pub const fn text(label: &'static str, address: u8) -> Self {
        Self {
            label,
            address,
            kind: Kind::Text,
            separator: false,
        }
    }

    pub const fn then_blank_line(self) -> Self {
        Self {
            separator: true,
            ..self
        }
    }
}
