//! Single-pin operations on logical pin numbers (10-17, 20-27, 30-33).
//!
//! Each operation is a fixed sequence of register round trips. A bus failure
//! aborts the sequence where it happened; registers already written keep their
//! new value.

use crate::bank;
use crate::bus::SmBus;
use crate::consts;
use crate::device::F75111;
use crate::error::{Error, Result};
use crate::gpio::{GpioDirection, GpioLevel, GpioPin};
use log::debug;

impl<B: SmBus> F75111<B> {
    /// Fails with `PinReserved` if `pin` is the shared-function pin and the
    /// function select register has handed it to another function.
    fn check_shared_function(&mut self, pin: GpioPin) -> Result<()> {
        if !bank::is_shared_function(pin.bank(), pin.bit_index()) {
            return Ok(());
        }
        let func_sel = self.read_register(consts::REG_FUNC_SEL)?;
        if func_sel & consts::FUNC_SEL_SHARED_MASK != 0 {
            debug!(
                "GPIO{} unavailable: function select = 0x{:02X}",
                pin.number(),
                func_sel
            );
            return Err(Error::PinReserved { pin: pin.number() });
        }
        Ok(())
    }

    // Common prologue of every single-pin operation.
    fn prepare_pin(&mut self, pin_num: u8) -> Result<GpioPin> {
        self.ensure_ready()?;
        let pin = GpioPin::new(pin_num)?;
        self.check_shared_function(pin)?;
        Ok(pin)
    }

    fn set_direction_inner(&mut self, pin_num: u8, direction: GpioDirection) -> Result<()> {
        let pin = self.prepare_pin(pin_num)?;
        debug!("Setting GPIO{} direction: {:?}", pin.number(), direction);
        self.modify_register(pin.bank().direction_reg(), |val| {
            direction.apply(val, pin.mask())
        })?;
        Ok(())
    }

    fn direction_inner(&mut self, pin_num: u8) -> Result<GpioDirection> {
        let pin = self.prepare_pin(pin_num)?;
        let reg_val = self.read_register(pin.bank().direction_reg())?;
        Ok(GpioDirection::from_bit(reg_val & pin.mask()))
    }

    pub(crate) fn read_status_inner(&mut self, pin_num: u8) -> Result<GpioLevel> {
        let pin = self.prepare_pin(pin_num)?;
        let bank = pin.bank();
        let dir_val = self.read_register(bank.direction_reg())?;
        let data_reg = match GpioDirection::from_bit(dir_val & pin.mask()) {
            GpioDirection::Output => bank.output_data_reg(),
            GpioDirection::Input => bank.input_data_reg(),
        };
        let data = self.read_register(data_reg)?;
        Ok(GpioLevel::from(data & pin.mask() != 0))
    }

    pub(crate) fn write_status_inner(&mut self, pin_num: u8, level: GpioLevel) -> Result<()> {
        let pin = self.prepare_pin(pin_num)?;
        let bank = pin.bank();
        let mask = pin.mask();
        let dir_val = self.read_register(bank.direction_reg())?;
        if GpioDirection::from_bit(dir_val & mask) == GpioDirection::Input {
            return Err(Error::WrongDirection { pin: pin.number() });
        }
        debug!("Setting GPIO{} {:?}", pin.number(), level);
        self.modify_register(bank.output_data_reg(), |val| level.apply(val, mask))?;
        // The driver only follows the data bit when its enable bit matches.
        if let Some(drive_reg) = bank.drive_enable_reg() {
            self.modify_register(drive_reg, |val| level.apply(val, mask))?;
        }
        Ok(())
    }

    // --- Single Pin GPIO ---

    /// Sets the direction of a logical pin.
    ///
    /// Reads the bank's direction register, updates the pin's bit (clear for
    /// Output, set for Input) and writes it back.
    pub fn set_direction(&mut self, pin: u8, direction: GpioDirection) -> Result<()> {
        let result = self.set_direction_inner(pin, direction);
        self.record(result)
    }

    /// Reads back the configured direction of a logical pin.
    pub fn direction(&mut self, pin: u8) -> Result<GpioDirection> {
        let result = self.direction_inner(pin);
        self.record(result)
    }

    /// Reads the status of a logical pin.
    ///
    /// Output pins report their output data bit, input pins their input data
    /// bit.
    pub fn read_status(&mut self, pin: u8) -> Result<GpioLevel> {
        let result = self.read_status_inner(pin);
        self.record(result)
    }

    /// Writes the status of a logical pin configured as output.
    ///
    /// Fails with `WrongDirection` on an input pin after reading only the
    /// direction register. On banks A and B the driving enable bit is updated
    /// to the same level right after the output data bit. If that second step
    /// fails the output data register keeps its new value.
    pub fn write_status(&mut self, pin: u8, level: GpioLevel) -> Result<()> {
        let result = self.write_status_inner(pin, level);
        self.record(result)
    }

    /// Switches the board's USB hub on or off through GPIO10.
    pub fn usb_hub_control(&mut self, enable: bool) -> Result<()> {
        debug!("USB hub {}", if enable { "on" } else { "off" });
        if enable {
            self.set_direction(consts::USB_HUB_PIN, GpioDirection::Output)?;
            self.write_status(consts::USB_HUB_PIN, GpioLevel::High)
        } else {
            self.write_status(consts::USB_HUB_PIN, GpioLevel::Low)?;
            self.set_direction(consts::USB_HUB_PIN, GpioDirection::Input)
        }
    }
}
