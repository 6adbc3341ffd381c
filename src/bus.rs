//! Byte-register transport used to reach the expander.

use crate::error::{Error, Result};
use embedded_hal::i2c::{Error as _, I2c};
use log::trace;

/// SMBus-style byte register access: one byte read or write at a device
/// address and register offset.
///
/// Device addresses are given in 8-bit form (R/W bit included), matching the
/// addresses printed in the F75111 datasheet.
pub trait SmBus {
    /// Reads one byte from `offset` on the device at `address`.
    fn read_byte_data(&mut self, address: u8, offset: u8) -> Result<u8>;

    /// Writes `value` to `offset` on the device at `address`.
    fn write_byte_data(&mut self, address: u8, offset: u8, value: u8) -> Result<()>;
}

impl<T: SmBus + ?Sized> SmBus for &mut T {
    fn read_byte_data(&mut self, address: u8, offset: u8) -> Result<u8> {
        (**self).read_byte_data(address, offset)
    }

    fn write_byte_data(&mut self, address: u8, offset: u8, value: u8) -> Result<()> {
        (**self).write_byte_data(address, offset, value)
    }
}

/// [`SmBus`] adapter over any blocking `embedded-hal` I²C bus.
///
/// On Linux this wraps e.g. an `/dev/i2c-0` handle from an embedded-hal
/// implementation crate.
#[derive(Debug)]
pub struct I2cBus<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> I2cBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Releases the underlying I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn bus_error(address: u8, offset: u8, err: I2C::Error) -> Error {
        Error::Bus {
            address,
            offset,
            message: format!("{:?}", err.kind()),
        }
    }
}

impl<I2C: I2c> SmBus for I2cBus<I2C> {
    fn read_byte_data(&mut self, address: u8, offset: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(address >> 1, &[offset], &mut buf)
            .map_err(|e| Self::bus_error(address, offset, e))?;
        trace!("SMBus read 0x{:02X}[0x{:02X}] = 0x{:02X}", address, offset, buf[0]);
        Ok(buf[0])
    }

    fn write_byte_data(&mut self, address: u8, offset: u8, value: u8) -> Result<()> {
        trace!("SMBus write 0x{:02X}[0x{:02X}] = 0x{:02X}", address, offset, value);
        self.i2c
            .write(address >> 1, &[offset, value])
            .map_err(|e| Self::bus_error(address, offset, e))
    }
}
