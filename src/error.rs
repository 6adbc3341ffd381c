use thiserror::Error;

/// Errors that can occur when driving the F75111 GPIO expander.
///
/// Every failure is returned straight to the caller. Multi-register sequences
/// that fail partway are not rolled back, so after an error the chip state
/// should be re-read before relying on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The bus handle has been closed (or was never opened).
    #[error("Device not ready: SMBus handle is not open")]
    NotReady,
    /// A function argument is malformed or violates the fixed pin layout.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Logical pin number is outside the three bank ranges.
    #[error("GPIO pin {pin} out of range (valid: 10-17, 20-27, 30-33)")]
    PinOutOfRange {
        /// The rejected logical pin number.
        pin: u8,
    },
    /// The shared-function pin is claimed by another chip function.
    #[error("GPIO pin {pin} is reserved by the function select register")]
    PinReserved {
        /// The reserved logical pin number.
        pin: u8,
    },
    /// A status write was attempted on a pin configured as input.
    #[error("GPIO pin {pin} is configured as input and cannot be written")]
    WrongDirection {
        /// The logical pin number that was written.
        pin: u8,
    },
    /// The underlying register transport failed.
    #[error("SMBus transfer failed at device 0x{address:02X}, offset 0x{offset:02X}: {message}")]
    Bus {
        /// 8-bit device address of the transfer.
        address: u8,
        /// Register offset of the transfer.
        offset: u8,
        /// Transport-specific detail.
        message: String,
    },
    /// The operation has no hardware backing on this platform.
    #[error("Operation not supported: {0}")]
    Unsupported(String),
}

/// Coarse classification of an [`Error`], cheap to copy and store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotReady,
    InvalidArgument,
    OutOfRange,
    PinReserved,
    WrongDirection,
    Bus,
    Unsupported,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotReady => ErrorKind::NotReady,
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::PinOutOfRange { .. } => ErrorKind::OutOfRange,
            Error::PinReserved { .. } => ErrorKind::PinReserved,
            Error::WrongDirection { .. } => ErrorKind::WrongDirection,
            Error::Bus { .. } => ErrorKind::Bus,
            Error::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

/// Result type alias for F75111 operations.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn invalid_user_pin(index: u8) -> Error {
    Error::InvalidArgument(format!("user pin index {} out of range (0-7)", index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Error::NotReady.kind(), ErrorKind::NotReady);
        assert_eq!(Error::PinOutOfRange { pin: 19 }.kind(), ErrorKind::OutOfRange);
        assert_eq!(
            Error::Bus {
                address: 0x9C,
                offset: 0x10,
                message: "nack".into()
            }
            .kind(),
            ErrorKind::Bus
        );
    }

    #[test]
    fn bus_error_message_names_offset() {
        let err = Error::Bus {
            address: 0x9C,
            offset: 0x1B,
            message: "timeout".into(),
        };
        assert_eq!(
            err.to_string(),
            "SMBus transfer failed at device 0x9C, offset 0x1B: timeout"
        );
    }
}
