//! Internal constants, register addresses, and bit definitions.

/// Default SMBus address of the F75111 (8-bit form, R/W bit included).
pub const F75111_ADDR: u8 = 0x9C;

/// Configuration and function select register.
pub const REG_FUNC_SEL: u8 = 0x03;

/// Bits [3:2] of the function select register. Non-zero means GPIO12 belongs
/// to another on-chip function.
pub const FUNC_SEL_SHARED_MASK: u8 = 0b0000_1100;

/// Total number of hardware-controlled GPIO bits across all banks.
pub const MAX_GPIOS: u32 = 20;

// --- Per-bank registers ---
pub mod bank_a {
    // GPIO1x, logical pins 10-17
    pub const REG_DIRECTION: u8 = 0x10;
    pub const REG_OUTPUT_DATA: u8 = 0x11;
    pub const REG_INPUT_DATA: u8 = 0x12;
    pub const REG_DRIVE_ENABLE: u8 = 0x1B;
    pub const PIN_MIN: u8 = 10;
    pub const PIN_MAX: u8 = 18; // Exclusive
}

pub mod bank_b {
    // GPIO2x, logical pins 20-27
    pub const REG_DIRECTION: u8 = 0x20;
    pub const REG_OUTPUT_DATA: u8 = 0x21;
    pub const REG_INPUT_DATA: u8 = 0x22;
    pub const REG_DRIVE_ENABLE: u8 = 0x2B;
    pub const PIN_MIN: u8 = 20;
    pub const PIN_MAX: u8 = 28; // Exclusive
}

pub mod bank_c {
    // GPIO3x, logical pins 30-33. No driving enable register.
    pub const REG_DIRECTION: u8 = 0x40;
    pub const REG_OUTPUT_DATA: u8 = 0x41;
    pub const REG_INPUT_DATA: u8 = 0x42;
    pub const PIN_MIN: u8 = 30;
    pub const PIN_MAX: u8 = 34; // Exclusive
}

/// Logical pin 12, bank A bit 2. Shared with another chip function.
pub const SHARED_FUNCTION_PIN: u8 = 12;

/// Logical pin wired to the board's USB hub enable.
pub const USB_HUB_PIN: u8 = 10;

// --- User pin layout ---
pub mod user {
    /// Number of user-facing pins.
    pub const PIN_COUNT: u8 = 8;
    /// User indices below this are outputs, the rest are inputs.
    pub const OUTPUT_COUNT: u8 = 4;

    // Raw mask selector flags
    pub const FLAG_PIN_FULL: u32 = 0x01;
    pub const FLAG_CONFIGURABLE: u32 = 0x02;
    pub const FLAG_DIRECTION: u32 = 0x20;

    // Mask values
    pub const MASK_PIN_FULL: u32 = 0xFF;
    pub const MASK_CONFIGURABLE: u32 = 0x00;
    /// Bit set = user pin is an output.
    pub const MASK_DIRECTION: u32 = 0x0F;
}
