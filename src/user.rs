//! The eight user-facing pins and their bitmask operations.
//!
//! User pin *i* corresponds to bit *i* of every mask, least significant bit
//! first. Indices 0-3 are fixed outputs and 4-7 fixed inputs; the partition
//! lives in [`USER_PINS`] and is enforced from there.

use crate::bus::SmBus;
use crate::consts::user;
use crate::device::{F75111, WritePolicy};
use crate::error::{self, Error, Result};
use crate::gpio::{GpioDirection, GpioLevel};
use log::debug;

/// One entry of the user pin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserPin {
    /// Logical pin number on the expander.
    pub physical: u8,
    /// Direction the pin is wired for on the board.
    pub direction: GpioDirection,
}

const fn output(physical: u8) -> UserPin {
    UserPin {
        physical,
        direction: GpioDirection::Output,
    }
}

const fn input(physical: u8) -> UserPin {
    UserPin {
        physical,
        direction: GpioDirection::Input,
    }
}

/// User pin table, indexed by user pin index.
pub const USER_PINS: [UserPin; user::PIN_COUNT as usize] = [
    output(16),
    output(17),
    output(20),
    output(21),
    input(25),
    input(26),
    input(27),
    input(15),
];

/// Looks up a user pin index (0-7).
pub fn user_pin(index: u8) -> Result<UserPin> {
    USER_PINS
        .get(index as usize)
        .copied()
        .ok_or_else(|| error::invalid_user_pin(index))
}

// Indices of the set bits of `mask` among the user pins, ascending.
fn mask_indices(mask: u32) -> impl Iterator<Item = u8> {
    (0..user::PIN_COUNT).filter(move |&i| mask & (1u32 << i) != 0)
}

impl<B: SmBus> F75111<B> {
    fn check_user_direction(index: u8, direction: GpioDirection) -> Result<()> {
        let entry = user_pin(index)?;
        if entry.direction != direction {
            return Err(Error::InvalidArgument(format!(
                "user pin {} is fixed as {:?}, cannot set {:?}",
                index, entry.direction, direction
            )));
        }
        Ok(())
    }

    fn check_user_write(&self, index: u8, level: GpioLevel) -> Result<UserPin> {
        let entry = user_pin(index)?;
        match self.config().write_policy {
            WritePolicy::OutputsOnly => {
                if entry.direction != GpioDirection::Output {
                    return Err(Error::InvalidArgument(format!(
                        "user pin {} is an input and cannot be written",
                        index
                    )));
                }
            }
            WritePolicy::Legacy => {
                if index < user::OUTPUT_COUNT || !level.is_high() {
                    return Err(Error::InvalidArgument(format!(
                        "user pin {} / {:?} rejected by legacy write guard",
                        index, level
                    )));
                }
            }
        }
        Ok(entry)
    }

    fn read_user_inner(&mut self, index: u8) -> Result<GpioLevel> {
        self.ensure_ready()?;
        let entry = user_pin(index)?;
        self.read_status_inner(entry.physical)
    }

    fn write_user_inner(&mut self, index: u8, level: GpioLevel) -> Result<()> {
        self.ensure_ready()?;
        let entry = self.check_user_write(index, level)?;
        self.write_status_inner(entry.physical, level)
    }

    // --- Single user pin ---

    /// Validates a direction request for a user pin.
    ///
    /// The direction of every user pin is fixed by the board, so this issues no
    /// register writes: it fails with `InvalidArgument` if `direction` differs
    /// from the table and otherwise returns the direction mask.
    pub fn set_user_direction(&mut self, index: u8, direction: GpioDirection) -> Result<u32> {
        let result = self
            .ensure_ready()
            .and_then(|_| Self::check_user_direction(index, direction))
            .map(|_| user::MASK_DIRECTION);
        self.record(result)
    }

    /// Reads the status of user pin `index`.
    pub fn read_user(&mut self, index: u8) -> Result<GpioLevel> {
        let result = self.read_user_inner(index);
        self.record(result)
    }

    /// Writes the status of user pin `index`, subject to the configured
    /// [`WritePolicy`].
    pub fn write_user(&mut self, index: u8, level: GpioLevel) -> Result<()> {
        let result = self.write_user_inner(index, level);
        self.record(result)
    }

    // --- Bulk user pin operations ---
    // Bits are processed in ascending order and the first failure aborts the
    // batch. Earlier pins are not rolled back.

    /// Applies [`set_user_direction`](Self::set_user_direction) to every user
    /// pin selected by `target_mask`. A set bit in `desired_mask` requests
    /// Output, a clear bit Input, the same encoding as the returned direction
    /// mask.
    pub fn set_user_direction_multi(&mut self, target_mask: u32, desired_mask: u32) -> Result<u32> {
        let result = self.ensure_ready().and_then(|_| {
            for i in mask_indices(target_mask) {
                let direction = if desired_mask & (1u32 << i) != 0 {
                    GpioDirection::Output
                } else {
                    GpioDirection::Input
                };
                Self::check_user_direction(i, direction)?;
            }
            Ok(user::MASK_DIRECTION)
        });
        self.record(result)
    }

    /// Reads every user pin selected by `target_mask`. Bit *i* of the result is
    /// set when user pin *i* reads High.
    pub fn read_user_multi(&mut self, target_mask: u32) -> Result<u32> {
        let result = self.ensure_ready().and_then(|_| {
            let mut status_mask = 0u32;
            for i in mask_indices(target_mask) {
                if self.read_user_inner(i)?.is_high() {
                    status_mask |= 1u32 << i;
                }
            }
            Ok(status_mask)
        });
        self.record(result)
    }

    /// Writes every user pin selected by `target_mask` to the matching bit of
    /// `status_mask`.
    ///
    /// Under [`WritePolicy::Legacy`] each pin is handed the raw masked bit
    /// `status_mask & (1 << i)`, which only counts as High when it equals 1.
    pub fn write_user_multi(&mut self, target_mask: u32, status_mask: u32) -> Result<()> {
        let result = self.ensure_ready().and_then(|_| {
            debug!(
                "Writing user pins: mask=0x{:02X}, status=0x{:02X}",
                target_mask, status_mask
            );
            let legacy = self.config().write_policy == WritePolicy::Legacy;
            for i in mask_indices(target_mask) {
                let raw = status_mask & (1u32 << i);
                let level = if legacy {
                    GpioLevel::from(raw == 1)
                } else {
                    GpioLevel::from(raw != 0)
                };
                self.write_user_inner(i, level)?;
            }
            Ok(())
        });
        self.record(result)
    }
}
