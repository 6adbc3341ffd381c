//! Register banks of the F75111 and logical pin resolution.

use crate::consts::{self, bank_a, bank_b, bank_c};
use crate::error::{Error, Result};

/// One of the three GPIO register banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    /// GPIO1x, logical pins 10-17.
    A,
    /// GPIO2x, logical pins 20-27.
    B,
    /// GPIO3x, logical pins 30-33.
    C,
}

impl Bank {
    pub const ALL: [Bank; 3] = [Bank::A, Bank::B, Bank::C];

    pub fn direction_reg(self) -> u8 {
        match self {
            Bank::A => bank_a::REG_DIRECTION,
            Bank::B => bank_b::REG_DIRECTION,
            Bank::C => bank_c::REG_DIRECTION,
        }
    }

    pub fn output_data_reg(self) -> u8 {
        match self {
            Bank::A => bank_a::REG_OUTPUT_DATA,
            Bank::B => bank_b::REG_OUTPUT_DATA,
            Bank::C => bank_c::REG_OUTPUT_DATA,
        }
    }

    pub fn input_data_reg(self) -> u8 {
        match self {
            Bank::A => bank_a::REG_INPUT_DATA,
            Bank::B => bank_b::REG_INPUT_DATA,
            Bank::C => bank_c::REG_INPUT_DATA,
        }
    }

    /// Output driving enable register. Bank C has none.
    pub fn drive_enable_reg(self) -> Option<u8> {
        match self {
            Bank::A => Some(bank_a::REG_DRIVE_ENABLE),
            Bank::B => Some(bank_b::REG_DRIVE_ENABLE),
            Bank::C => None,
        }
    }

    /// First logical pin number of the bank.
    pub fn first_pin(self) -> u8 {
        match self {
            Bank::A => bank_a::PIN_MIN,
            Bank::B => bank_b::PIN_MIN,
            Bank::C => bank_c::PIN_MIN,
        }
    }

    /// Number of hardware-controlled pins in the bank.
    pub fn width(self) -> u8 {
        match self {
            Bank::A => bank_a::PIN_MAX - bank_a::PIN_MIN,
            Bank::B => bank_b::PIN_MAX - bank_b::PIN_MIN,
            Bank::C => bank_c::PIN_MAX - bank_c::PIN_MIN,
        }
    }

    /// Mask of the register bits backed by a pin.
    pub fn valid_mask(self) -> u8 {
        ((1u16 << self.width()) - 1) as u8
    }
}

/// Resolves a logical pin number to its bank and bit index.
pub fn resolve(pin: u8) -> Result<(Bank, u8)> {
    let bank = match pin {
        p if (bank_a::PIN_MIN..bank_a::PIN_MAX).contains(&p) => Bank::A,
        p if (bank_b::PIN_MIN..bank_b::PIN_MAX).contains(&p) => Bank::B,
        p if (bank_c::PIN_MIN..bank_c::PIN_MAX).contains(&p) => Bank::C,
        _ => return Err(Error::PinOutOfRange { pin }),
    };
    Ok((bank, pin - bank.first_pin()))
}

/// True for the one (bank, bit) pair gated by the function select register.
#[inline]
pub(crate) fn is_shared_function(bank: Bank, bit: u8) -> bool {
    bank == Bank::A && bit == consts::SHARED_FUNCTION_PIN - bank_a::PIN_MIN
}
