use std::path::Path;
use std::path::PathBuf;

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;
use i2cdev::linux::LinuxI2CError;
use log::debug;

use crate::error::SmbusError;

/// The SMBus transactions needed to talk to a smart battery.
///
/// Each call is one complete transaction against the battery's address.
/// Implementations must not retry; a failed call is reported once and the
/// caller decides what to do with it.
pub trait Smbus {
    /// SMBus "read word": a 16 bit little-endian value from `register`.
    fn read_word(&mut self, register: u8) -> Result<u16, SmbusError>;

    /// SMBus "read byte" from `register`.
    fn read_byte(&mut self, register: u8) -> Result<u8, SmbusError>;

    /// I2C block read of `len` bytes starting at `register`.
    fn read_block(&mut self, register: u8, len: u8) -> Result<Vec<u8>, SmbusError>;

    /// SMBus "write word" of `value` to `register`.
    fn write_word(&mut self, register: u8, value: u16) -> Result<(), SmbusError>;
}

/// An [`Smbus`] on a Linux `/dev/i2c-N` character device.
///
/// The device node is opened for every transaction and closed again when the
/// transaction returns, so no handle is held between register reads.
#[derive(Debug, Clone)]
pub struct LinuxSmbus {
    path: PathBuf,
    address: u16,
}

impl LinuxSmbus {
    pub fn new(bus: u8, address: u16) -> Self {
        Self {
            path: PathBuf::from(format!("/dev/i2c-{bus}")),
            address,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn address(&self) -> u16 {
        self.address
    }

    fn transact<T>(
        &self,
        transaction: impl FnOnce(&mut LinuxI2CDevice) -> Result<T, LinuxI2CError>,
    ) -> Result<T, SmbusError> {
        let mut device = LinuxI2CDevice::new(self.path(), self.address()).map_err(|err| {
            SmbusError::TransportFailure(format!("open {}: {err}", self.path().display()))
        })?;
        transaction(&mut device).map_err(|err| SmbusError::TransportFailure(err.to_string()))
    }
}

impl Smbus for LinuxSmbus {
    fn read_word(&mut self, register: u8) -> Result<u16, SmbusError> {
        let value = self.transact(|device| device.smbus_read_word_data(register))?;
        debug!("SMBUS: RX word 0x{register:02x} = 0x{value:04x}");
        Ok(value)
    }

    fn read_byte(&mut self, register: u8) -> Result<u8, SmbusError> {
        let value = self.transact(|device| device.smbus_read_byte_data(register))?;
        debug!("SMBUS: RX byte 0x{register:02x} = 0x{value:02x}");
        Ok(value)
    }

    fn read_block(&mut self, register: u8, len: u8) -> Result<Vec<u8>, SmbusError> {
        let data = self.transact(|device| device.smbus_read_i2c_block_data(register, len))?;
        let h_data = hex::encode(&data);
        debug!("SMBUS: RX block 0x{register:02x} ({len} requested) = 0x{h_data}");
        Ok(data)
    }

    fn write_word(&mut self, register: u8, value: u16) -> Result<(), SmbusError> {
        debug!("SMBUS: TX word 0x{register:02x} = 0x{value:04x}");
        self.transact(|device| device.smbus_write_word_data(register, value))
    }
}

#[test]
fn test_device_path_from_bus_number() {
    let bus = LinuxSmbus::new(1, 0x0b);
    assert_eq!(bus.path(), Path::new("/dev/i2c-1"));
    assert_eq!(bus.address(), 0x0b);
}

#[test]
fn test_missing_bus_is_a_transport_failure() {
    // Bus numbers this high are never registered by i2c-dev.
    let mut bus = LinuxSmbus::new(250, 0x0b);
    let result = bus.read_word(0x08);
    assert!(matches!(result, Err(SmbusError::TransportFailure(_))));
}
