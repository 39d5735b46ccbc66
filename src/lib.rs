//! A `no_std`, no-alloc data-EEPROM emulation over high-endurance flash.
//!
//! Many small microcontrollers ship without data EEPROM but reserve a small
//! high-endurance flash (HEF) region for frequent data storage. That region
//! follows program-flash rules: it is programmed in write-unit-sized chunks
//! and erased in coarser erase-unit-sized blocks. This crate reconciles the
//! two models and presents the byte/word random-access interface a classic
//! on-chip EEPROM would offer.
//!
//! # Features
//!
//! - **Zero heap allocation** - scratch buffers are stack arrays sized by
//!   const generics
//! - **Write-skip** - a write matching the stored value performs no flash
//!   access, conserving the limited erase-cycle endurance
//! - **Capability-driven strategy** - direct writes on devices whose write
//!   unit equals their erase unit, read-modify-erase-write everywhere else,
//!   selected once at configuration time
//! - **Scoped interrupt masking** - the erase+rewrite sequence runs inside a
//!   `critical_section::with` block, so interrupts are re-enabled on every
//!   exit path
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  Caller             │ read_byte / write_word / write_block ...
//! └─────────┬───────────┘
//!           │ logical offset in [0, capacity)
//! ┌─────────▼───────────┐
//! │  HefStore           │ bounds check, write-skip, word masking,
//! │                     │ read-modify-erase-write cycle
//! └─────────┬───────────┘
//!           │ absolute word address = base + offset
//! ┌─────────▼───────────┐
//! │  FlashDriver (HW)   │ read_words / write_words / erase_block
//! └─────────────────────┘
//! ```
//!
//! One logical offset maps to one native flash word. Byte mode stores its
//! payload in the low 8 bits of each word; word mode uses the full 12- or
//! 14-bit width, masked with the device's native word mask. The two modes
//! are independent views over the same flash region and should not be mixed
//! within one deployment without agreement between the callers involved.
//!
//! # Example
//!
//! ```rust,ignore
//! use hef_eeprom::prelude::*;
//!
//! // PIC16F1455-style geometry: HEF at 0x1F80, 128 words, 32-word rows.
//! let caps = HefCapabilities::new(0x1F80, 128, 1, 32, 0x3FFF)?;
//! let mut store: HefStore<_, 32> = HefStore::new(flash, caps)?;
//!
//! store.write_byte(5, 0x42);          // erase row, patch, rewrite
//! assert_eq!(store.read_byte(5), 0x42);
//! store.write_byte(5, 0x42);          // same value: no flash access
//! ```
//!
//! A power loss between the erase and the rewrite loses the prior contents
//! of that one block. This layer neither detects nor recovers from it; any
//! scheme that erases before writing carries the same window, and callers
//! needing stronger guarantees must journal above this crate.

#![deny(unsafe_code)]
#![no_std]

pub mod hef;

pub mod prelude {
    pub use crate::hef::prelude::*;
}
