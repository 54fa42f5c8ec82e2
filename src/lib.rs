//! Endian-aware register access over a two-wire (I2C) bus.
//!
//! A [`RegisterBus`] drives a [`Wire`] channel through one addressed
//! transaction per call: the register selector byte first, then the value
//! bytes ordered the way the target device expects them.
//!
//! ```ignore
//! use i2c_register::{Endianness, HalWire, RegisterBus};
//!
//! let mut bus = RegisterBus::new(HalWire::new(i2c));
//! bus.write(0x10, 0x1234u16, 0x48, Endianness::Big)?;
//!
//! let mut raw = 0u32;
//! bus.read(0x20, &mut raw, 0x48, Endianness::Big)?;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
mod fmt;

mod bus;
mod endian;
pub mod error;
pub mod wire;
mod word;

pub use bus::{Device, RegisterBus};
pub use endian::Endianness;
pub use error::{Error, ErrorKind};
pub use wire::hal::HalWire;
pub use wire::Wire;
pub use word::Word;
