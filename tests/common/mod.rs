//! In-memory F75111 register file shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use f75111_gpio::{Error, Result, SmBus, F75111_ADDR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u8),
    Write(u8, u8),
}

#[derive(Debug, Clone, Copy)]
struct Fault {
    on_write: bool,
    offset: u8,
    nth: usize,
}

/// Register file keyed by offset. Unset registers read as zero.
#[derive(Debug, Default)]
pub struct RegisterFile {
    regs: HashMap<u8, u8>,
    log: Vec<Access>,
    fault: Option<Fault>,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, offset: u8, value: u8) -> Self {
        self.regs.insert(offset, value);
        self
    }

    pub fn get(&self, offset: u8) -> u8 {
        self.regs.get(&offset).copied().unwrap_or(0)
    }

    pub fn set(&mut self, offset: u8, value: u8) {
        self.regs.insert(offset, value);
    }

    /// Fails the `nth` (1-based) read of `offset`.
    pub fn fail_read(&mut self, offset: u8, nth: usize) {
        self.fault = Some(Fault {
            on_write: false,
            offset,
            nth,
        });
    }

    /// Fails the `nth` (1-based) write of `offset`.
    pub fn fail_write(&mut self, offset: u8, nth: usize) {
        self.fault = Some(Fault {
            on_write: true,
            offset,
            nth,
        });
    }

    pub fn log(&self) -> &[Access] {
        &self.log
    }

    pub fn write_count(&self) -> usize {
        self.log
            .iter()
            .filter(|a| matches!(a, Access::Write(..)))
            .count()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    fn check_fault(&self, on_write: bool, address: u8, offset: u8) -> Result<()> {
        if address != F75111_ADDR {
            return Err(Error::Bus {
                address,
                offset,
                message: "no device".into(),
            });
        }
        if let Some(fault) = self.fault {
            if fault.on_write == on_write && fault.offset == offset {
                let seen = self
                    .log
                    .iter()
                    .filter(|a| match a {
                        Access::Read(o) => !on_write && *o == offset,
                        Access::Write(o, _) => on_write && *o == offset,
                    })
                    .count();
                if seen == fault.nth {
                    return Err(Error::Bus {
                        address,
                        offset,
                        message: "injected fault".into(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl SmBus for RegisterFile {
    fn read_byte_data(&mut self, address: u8, offset: u8) -> Result<u8> {
        self.log.push(Access::Read(offset));
        self.check_fault(false, address, offset)?;
        Ok(self.get(offset))
    }

    fn write_byte_data(&mut self, address: u8, offset: u8, value: u8) -> Result<()> {
        self.log.push(Access::Write(offset, value));
        self.check_fault(true, address, offset)?;
        self.regs.insert(offset, value);
        Ok(())
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
