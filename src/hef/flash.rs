//! Raw flash driver contract.
//!
//! The store is hardware-agnostic: the chip-specific layer (or a mock, in
//! tests) supplies these three primitives over absolute word addresses.
//! Interrupt masking is deliberately not part of the contract - the store
//! brackets its critical sections with [`critical_section::with`], so the
//! target's `critical-section` implementation owns that concern.

/// Primitive read/erase/program operations over absolute flash addresses.
///
/// Operations are infallible: on the target class this crate serves, a
/// flash primitive either succeeds or the device is non-functional, and no
/// partial-failure codes exist to propagate. Implementations for parts
/// that can report errors should panic or latch a fault out of band.
pub trait FlashDriver {
    /// Reads `out.len()` consecutive flash words starting at `addr`.
    ///
    /// Bits above the device's native word width may be returned as junk;
    /// the store masks them before use.
    fn read_words(&mut self, addr: u32, out: &mut [u16]);

    /// Programs `words` starting at `addr`.
    ///
    /// Hazardous if the destination is not erased, except on devices whose
    /// write unit equals their erase unit (programming a row there replaces
    /// its contents wholesale). Implementations own any write-latch
    /// buffering their part needs for sub-row transfers.
    fn write_words(&mut self, addr: u32, words: &[u16]);

    /// Erases the erase-unit-sized block starting at `addr`.
    ///
    /// `addr` must be erase-unit aligned. Erased words read back with all
    /// payload bits set.
    fn erase_block(&mut self, addr: u32);
}
