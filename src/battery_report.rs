use std::fmt;

use crate::error::ReadError;

/// The outcome of reading one register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub label: &'static str,
    pub address: u8,
    /// The formatted value, or why it could not be read
    pub value: Result<String, ReadError>,
    pub separator: bool,
}

impl Reading {
    /// The value as printed: the formatted text or [`BatteryReport::ERROR_TOKEN`].
    pub fn display_value(&self) -> &str {
        match &self.value {
            Ok(value) => value,
            Err(_) => BatteryReport::ERROR_TOKEN,
        }
    }
}

/// Every register read in one pass over the battery, in print order.
///
/// `Display` renders the report as the plain text transcript, one
/// `label: value` line per register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryReport {
    pub readings: Vec<Reading>,
}

impl BatteryReport {
    /// Printed in place of a value that could not be read.
    pub const ERROR_TOKEN: &'static str = "ERROR";

    pub fn get(&self, address: u8) -> Option<&Reading> {
        self.readings.iter().find(|r| r.address == address)
    }

    pub fn failures(&self) -> usize {
        self.readings.iter().filter(|r| r.value.is_err()).count()
    }
}

impl fmt::Display for BatteryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for reading in &self.readings {
            writeln!(f, "{}: {}", reading.label, reading.display_value())?;
            if reading.separator {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[test]
fn test_display_report() {
    use crate::error::SmbusError;

    let report = BatteryReport {
        readings: vec![
            Reading {
                label: "battery status",
                address: 0x16,
                value: Ok("0xe0".to_string()),
                separator: true,
            },
            Reading {
                label: "cycle count",
                address: 0x17,
                value: Err(SmbusError::TransportFailure("NACK".to_string()).into()),
                separator: false,
            },
            Reading {
                label: "device name",
                address: 0x21,
                value: Err(ReadError::InvalidLength(0)),
                separator: false,
            },
        ],
    };

    assert_eq!(
        report.to_string(),
        "battery status: 0xe0\n\ncycle count: ERROR\ndevice name: ERROR\n"
    );
    assert_eq!(report.failures(), 2);
    assert_eq!(report.get(0x16).map(Reading::display_value), Some("0xe0"));
    assert!(report.get(0x08).is_none());
}
