//! Read status data from Smart Battery Data Specification (SBS) compliant battery controllers over SMBus
//!
//! Tested with a Dell U4873 laptop battery pack wired to the I2C pins of a Raspberry Pi.
//! The GND, SDA, SCL, SP (system present) and V+ pins of the battery need to be connected.
//! V+ powers the battery controller when the cells are fully discharged.
//!
//! Currently the following data can be read:
//!
//! - Temperature (°C)
//! - Voltage and design voltage (V)
//! - Current (mA)
//! - Remaining, full charge and design capacity
//! - Relative and absolute state of charge (%)
//! - Battery status flags
//! - Charging current and voltage
//! - Cycles (count)
//! - Manufacture date
//! - Manufacturer name, device name and chemistry
//!
//! # Example
//!
//! ```no_run
//! let mut battery_client = sbsread::BatteryClient::new_default();
//! let report = battery_client.fetch_report();
//! print!("{report}");
//! ```

mod battery_client;
mod battery_report;
mod error;
pub mod register;
mod smbus_client;

pub use battery_client::BatteryClient;
pub use battery_report::BatteryReport;
pub use battery_report::Reading;
pub use error::ReadError;
pub use error::SmbusError;
pub use smbus_client::LinuxSmbus;
pub use smbus_client::Smbus;
