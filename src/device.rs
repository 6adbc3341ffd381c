//! Device handle, configuration and register access for the F75111.

use crate::bus::SmBus;
use crate::consts;
use crate::error::{Error, ErrorKind, Result};
use log::{debug, trace};

/// How [`F75111::write_user`](crate::F75111::write_user) guards user pin
/// indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Only the output pins (user indices 0-3) may be written, either level.
    #[default]
    OutputsOnly,
    /// Reproduces the guard of the vendor SUSI library: indices 0-3 are
    /// rejected, as is a Low level, so only indices 4-7 written High pass.
    Legacy,
}

/// Handle configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// 8-bit SMBus address of the expander.
    pub address: u8,
    /// Guard applied to user pin writes.
    pub write_policy: WritePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: consts::F75111_ADDR,
            write_policy: WritePolicy::OutputsOnly,
        }
    }
}

impl Config {
    /// Configuration matching the vendor library's behaviour bit for bit.
    pub fn legacy() -> Self {
        Config {
            write_policy: WritePolicy::Legacy,
            ..Config::default()
        }
    }
}

/// Returns the library version as (major, minor).
pub fn library_version() -> (u16, u16) {
    (
        env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
        env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
    )
}

/// A handle to an F75111 GPIO expander on an SMBus.
///
/// The handle owns the bus. Every operation is a sequence of blocking register
/// round trips with no local caching and no internal locking: callers sharing
/// one expander between threads must serialize access themselves, otherwise
/// interleaved read-modify-write sequences can desynchronize the output data
/// and driving enable registers.
///
/// After [`close`](Self::close) every operation fails with
/// [`Error::NotReady`] without touching the bus.
#[derive(Debug)]
pub struct F75111<B> {
    bus: Option<B>,
    config: Config,
    last_error: Option<ErrorKind>,
}

impl<B: SmBus> F75111<B> {
    // --- Lifecycle ---

    /// Opens a handle on `bus` with the default configuration.
    pub fn open(bus: B) -> Self {
        Self::with_config(bus, Config::default())
    }

    /// Opens a handle on `bus` with an explicit configuration.
    pub fn with_config(bus: B, config: Config) -> Self {
        debug!(
            "Opened F75111 handle at 0x{:02X} ({:?})",
            config.address, config.write_policy
        );
        Self {
            bus: Some(bus),
            config,
            last_error: None,
        }
    }

    /// Closes the handle, returning the bus if it was still open.
    pub fn close(&mut self) -> Option<B> {
        let bus = self.bus.take();
        if bus.is_some() {
            debug!("Closed F75111 handle at 0x{:02X}", self.config.address);
        }
        bus
    }

    /// Consumes the handle and returns the bus, if still open.
    pub fn into_inner(mut self) -> Option<B> {
        self.bus.take()
    }

    /// Whether the bus is open and GPIO operations can run.
    pub fn is_available(&self) -> bool {
        self.bus.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Kind of the most recent failed operation. Not cleared by later successes.
    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    pub fn clear_last_error(&mut self) {
        self.last_error = None;
    }

    pub(crate) fn record<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            trace!("F75111 operation failed: {}", e);
            self.last_error = Some(e.kind());
        }
        result
    }

    pub(crate) fn ensure_ready(&self) -> Result<()> {
        if self.bus.is_some() {
            Ok(())
        } else {
            Err(Error::NotReady)
        }
    }

    // --- Register Access ---

    pub(crate) fn read_register(&mut self, offset: u8) -> Result<u8> {
        let address = self.config.address;
        let bus = self.bus.as_mut().ok_or(Error::NotReady)?;
        let value = bus.read_byte_data(address, offset)?;
        trace!("Read Reg 0x{:02X} = 0x{:02X}", offset, value);
        Ok(value)
    }

    pub(crate) fn write_register(&mut self, offset: u8, value: u8) -> Result<()> {
        let address = self.config.address;
        let bus = self.bus.as_mut().ok_or(Error::NotReady)?;
        trace!("Write Reg 0x{:02X} = 0x{:02X}", offset, value);
        bus.write_byte_data(address, offset, value)
    }

    /// Read-modify-write of one register through `f`. Returns the value written.
    pub(crate) fn modify_register(&mut self, offset: u8, f: impl FnOnce(u8) -> u8) -> Result<u8> {
        let current = self.read_register(offset)?;
        let new_val = f(current);
        self.write_register(offset, new_val)?;
        Ok(new_val)
    }
}
