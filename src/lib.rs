//! # f75111-gpio
//!
//! A Rust crate for driving the GPIO banks of the Fintek F75111 I/O expander
//! over SMBus, as wired on the Advantech TREK-550 platform.
//!
//! The crate talks to the chip through the [`SmBus`] trait. [`I2cBus`] adapts
//! any blocking `embedded-hal` 1.0 I²C bus to it.
//!
//! ## Features
//!
//! *   Explicit device handle ([`F75111`]) with open/close lifecycle and an
//!     availability check.
//! *   Logical pin operations on the three banks (pins 10-17, 20-27, 30-33):
//!     *   Setting/getting pin direction.
//!     *   Reading pin status (output latch or input data, by direction).
//!     *   Writing pin status, keeping the output driving enable register of
//!         banks A and B in step with the output data register.
//!     *   Shared-function check for GPIO12.
//! *   Introspection: counting input/output pins, fixed capability masks.
//! *   Eight user pins with a fixed table (0-3 outputs, 4-7 inputs), single and
//!     bulk (masked) operations.
//! *   USB hub power control through GPIO10.
//!
//! ## Register Conventions
//!
//! *   Direction registers use `0` for output and `1` for input. See
//!     [`GpioDirection::bit`].
//! *   Bit *i* of every user mask is user pin *i*, least significant bit first.
//! *   Nothing is cached: every call goes to the chip, and multi-register
//!     sequences are not rolled back on failure.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use embedded_hal::i2c::I2c;
//! use f75111_gpio::{F75111, GpioLevel, I2cBus, Result};
//!
//! fn toggle_outputs<I: I2c>(i2c: I) -> Result<()> {
//!     let mut dev = F75111::open(I2cBus::new(i2c));
//!
//!     // Drive user outputs 0 and 2 high, 1 and 3 low.
//!     dev.write_user_multi(0x0F, 0b0101)?;
//!
//!     // Sample the four inputs.
//!     let inputs = dev.read_user_multi(0xF0)?;
//!     println!("inputs: {:08b}", inputs);
//!
//!     dev.write_user(0, GpioLevel::Low)?;
//!     dev.close();
//!     Ok(())
//! }
//! ```

mod bank;
mod bus;
mod consts;
mod device;
mod error;
pub mod gpio;
mod introspect;
mod pin;
mod user;

pub use bank::{resolve, Bank};
pub use bus::{I2cBus, SmBus};
pub use consts::F75111_ADDR;
pub use device::{library_version, Config, WritePolicy, F75111};
pub use error::{Error, ErrorKind, Result};
pub use gpio::{GpioDirection, GpioLevel, GpioPin};
pub use introspect::MaskKind;
pub use user::{user_pin, UserPin, USER_PINS};

/// Raw register offsets, for tests and diagnostics.
pub mod registers {
    pub use crate::consts::{bank_a, bank_b, bank_c, FUNC_SEL_SHARED_MASK, REG_FUNC_SEL};
}
