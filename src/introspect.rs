//! Pin counting and capability masks.

use crate::bank::Bank;
use crate::bus::SmBus;
use crate::consts::{self, user};
use crate::device::F75111;
use crate::error::{Error, Result};
use log::{trace, warn};

/// Selector for [`F75111::query_mask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    /// All user pins present on the board.
    PinFull,
    /// User pins whose direction can be changed.
    Configurable,
    /// User pins fixed as outputs.
    Direction,
}

impl MaskKind {
    /// Maps a raw SUSI-style flag value to a mask kind.
    pub fn from_flag(flag: u32) -> Result<Self> {
        match flag {
            user::FLAG_PIN_FULL => Ok(MaskKind::PinFull),
            user::FLAG_CONFIGURABLE => Ok(MaskKind::Configurable),
            user::FLAG_DIRECTION => Ok(MaskKind::Direction),
            other => Err(Error::InvalidArgument(format!(
                "unknown mask flag 0x{:02X}",
                other
            ))),
        }
    }

    /// Fixed mask value for this kind. Bit *i* is user pin *i*.
    pub fn mask(self) -> u32 {
        match self {
            MaskKind::PinFull => user::MASK_PIN_FULL,
            MaskKind::Configurable => user::MASK_CONFIGURABLE,
            MaskKind::Direction => user::MASK_DIRECTION,
        }
    }
}

impl<B: SmBus> F75111<B> {
    fn count_pins_inner(&mut self) -> Result<(u32, u32)> {
        self.ensure_ready()?;
        let mut inputs = 0;
        for bank in Bank::ALL {
            let reg_val = self.read_register(bank.direction_reg())?;
            let stray = reg_val & !bank.valid_mask();
            if stray != 0 {
                warn!(
                    "Direction register 0x{:02X} has bits outside bank {:?}: 0x{:02X}",
                    bank.direction_reg(),
                    bank,
                    stray
                );
            }
            inputs += (reg_val & bank.valid_mask()).count_ones();
        }
        let outputs = consts::MAX_GPIOS - inputs;
        trace!("GPIO count: {} inputs, {} outputs", inputs, outputs);
        Ok((inputs, outputs))
    }

    /// Counts the hardware pins currently configured as input and output.
    ///
    /// Returns `(inputs, outputs)`; the two always add up to 20.
    pub fn count_pins(&mut self) -> Result<(u32, u32)> {
        let result = self.count_pins_inner();
        self.record(result)
    }

    /// Returns the fixed capability mask for `kind`.
    pub fn query_mask(&mut self, kind: MaskKind) -> Result<u32> {
        let result = self.ensure_ready().map(|_| kind.mask());
        self.record(result)
    }

    /// Like [`query_mask`](Self::query_mask), selecting the mask by raw flag
    /// value (`0x01`, `0x02` or `0x20`).
    pub fn query_mask_flag(&mut self, flag: u32) -> Result<u32> {
        let result = self
            .ensure_ready()
            .and_then(|_| MaskKind::from_flag(flag))
            .map(MaskKind::mask);
        self.record(result)
    }
}
