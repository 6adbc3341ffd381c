use crate::bank::{self, Bank};
use crate::error::Result;

/// Pin direction.
///
/// The F75111 direction registers use `0` for output and `1` for input.
/// [`GpioDirection::bit`] and [`GpioDirection::from_bit`] are the only places
/// that encode this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioDirection {
    Output,
    Input,
}

impl GpioDirection {
    /// Register bit value for this direction (Output = 0, Input = 1).
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            GpioDirection::Output => 0,
            GpioDirection::Input => 1,
        }
    }

    /// Decodes a direction register bit (zero = Output, non-zero = Input).
    #[inline]
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            GpioDirection::Output
        } else {
            GpioDirection::Input
        }
    }

    /// Applies this direction to the bits selected by `mask` in a direction
    /// register value.
    #[inline]
    pub(crate) fn apply(self, reg_val: u8, mask: u8) -> u8 {
        match self {
            GpioDirection::Output => reg_val & !mask,
            GpioDirection::Input => reg_val | mask,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioLevel {
    Low,
    High,
}

impl GpioLevel {
    #[inline]
    pub fn is_high(self) -> bool {
        self == GpioLevel::High
    }

    #[inline]
    pub(crate) fn apply(self, reg_val: u8, mask: u8) -> u8 {
        match self {
            GpioLevel::High => reg_val | mask,
            GpioLevel::Low => reg_val & !mask,
        }
    }
}

impl From<bool> for GpioLevel {
    fn from(high: bool) -> Self {
        if high {
            GpioLevel::High
        } else {
            GpioLevel::Low
        }
    }
}

/// A valid logical GPIO pin number (10-17, 20-27 or 30-33).
/// Use `GpioPin::new(num)` to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GpioPin {
    number: u8,
    bank: Bank,
    bit: u8,
}

impl GpioPin {
    /// Creates a new GpioPin, returning `PinOutOfRange` for numbers outside the
    /// bank ranges (including the gaps 18-19 and 28-29).
    pub fn new(pin_num: u8) -> Result<Self> {
        let (bank, bit) = bank::resolve(pin_num)?;
        Ok(GpioPin {
            number: pin_num,
            bank,
            bit,
        })
    }

    /// Returns the logical pin number.
    #[inline]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Returns the bank the pin belongs to.
    #[inline]
    pub fn bank(&self) -> Bank {
        self.bank
    }

    /// Returns the bit index within the bank's registers.
    #[inline]
    pub fn bit_index(&self) -> u8 {
        self.bit
    }

    /// Returns the bit mask (1 << bit_index) for register operations.
    #[inline]
    pub fn mask(&self) -> u8 {
        1u8 << self.bit
    }
}
