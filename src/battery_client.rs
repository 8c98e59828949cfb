//! Read the register map of a Smart Battery Data Specification battery over SMBus.
//!
//! The battery controller sits at a fixed SMBus address. Each value is a
//! single register read followed by a small conversion to display text; string
//! values are length-prefixed and need a byte read for the length and a block
//! read for the characters.

use log::debug;
use log::warn;

use crate::battery_report::BatteryReport;
use crate::battery_report::Reading;
use crate::error::ReadError;
use crate::error::SmbusError;
use crate::register;
use crate::register::format;
use crate::register::Kind;
use crate::register::Register;
use crate::register::REGISTERS;
use crate::smbus_client::LinuxSmbus;
use crate::smbus_client::Smbus;

pub struct BatteryClient<B = LinuxSmbus> {
    bus: B,
}

impl BatteryClient<LinuxSmbus> {
    /// The I2C bus the battery is wired to (`/dev/i2c-1`).
    pub const I2C_BUS: u8 = 1;
    /// The SBS standard 7 bit address of a smart battery.
    pub const BATTERY_ADDRESS: u16 = 0x0b;

    pub fn new_default() -> Self {
        Self::new(Self::I2C_BUS, Self::BATTERY_ADDRESS)
    }

    /// Create a new `BatteryClient` on `/dev/i2c-{bus}`.
    ///
    /// Nothing is opened here; the bus is opened for each transaction.
    pub fn new(bus: u8, address: u16) -> Self {
        Self::with_bus(LinuxSmbus::new(bus, address))
    }
}

impl<B: Smbus> BatteryClient<B> {
    // Exclusive bound; a one byte SMBus block count allows at most 31 characters here.
    const MAX_STRING_LEN: u8 = 32;
    // Written to ManufacturerAccess to start charging a Dell U4873.
    const INIT_CHARGING_COMMAND: u16 = 0x000a;

    pub fn with_bus(bus: B) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Read every known register, in print order.
    ///
    /// A register that fails is recorded as failed and the next one is read
    /// anyway; this never gives up part way through.
    pub fn fetch_report(&mut self) -> BatteryReport {
        let readings = REGISTERS
            .iter()
            .map(|register| {
                let value = self.read_register(register);
                if let Err(err) = &value {
                    warn!(
                        "BATTERY: reading {} (0x{:02x}) failed: {err}",
                        register.label, register.address
                    );
                }
                Reading {
                    label: register.label,
                    address: register.address,
                    value,
                    separator: register.separator,
                }
            })
            .collect();

        BatteryReport { readings }
    }

    /// Read one register and format it for display.
    pub fn read_register(&mut self, register: &Register) -> Result<String, ReadError> {
        match register.kind {
            Kind::Word(to_text) => {
                let value = self.bus.read_word(register.address)?;
                Ok(to_text(value))
            }
            Kind::Text => {
                let len = self.bus.read_byte(register.address)?;
                debug!("BATTERY: 0x{:02x} reports string length {len}", register.address);
                self.read_string(register.address, len)
            }
        }
    }

    /// Read up to `len` characters from a length-prefixed string register.
    ///
    /// `len` must be in `1..=31`, otherwise no transaction is issued. The block
    /// read asks for one more byte than `len` to cover the length byte, which
    /// is dropped.
    pub fn read_string(&mut self, address: u8, len: u8) -> Result<String, ReadError> {
        if len == 0 || len >= Self::MAX_STRING_LEN {
            return Err(ReadError::InvalidLength(len));
        }

        let block = self.bus.read_block(address, len + 1)?;
        Ok(format::text(&block))
    }

    /// Send the charging init command some Dell batteries need before they
    /// will accept a charge.
    ///
    /// Other batteries may interpret this ManufacturerAccess write
    /// differently. It is never sent by [`Self::fetch_report`].
    pub fn init_charging(&mut self) -> Result<(), SmbusError> {
        self.bus
            .write_word(register::MANUFACTURER_ACCESS, Self::INIT_CHARGING_COMMAND)
    }
}
