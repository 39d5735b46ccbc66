//! Test support utilities - only compiled in test builds.

use crate::hef::{caps::HefCapabilities, flash::FlashDriver, store::HefStore};

/// Instrumented in-memory flash of `N` words with program-as-AND
/// semantics: programming can only clear bits, so writing over
/// non-erased space is observable, exactly as on hardware.
pub struct MockFlash<const N: usize> {
    base: u32,
    words: [u16; N],
    mask: u16,
    erase_unit: usize,
    /// Write latch covers a whole row: programming replaces contents
    /// instead of AND-ing (models devices where write unit == erase unit).
    direct: bool,
    pub erases: usize,
    pub programs: usize,
    pub reads: usize,
}

impl<const N: usize> MockFlash<N> {
    pub fn new(base: u32, erase_unit: usize, mask: u16) -> Self {
        Self {
            base,
            words: [mask; N],
            mask,
            erase_unit,
            direct: false,
            erases: 0,
            programs: 0,
            reads: 0,
        }
    }

    /// Mock for direct-write devices: one-word rows, self-erasing writes.
    pub fn direct(base: u32, mask: u16) -> Self {
        Self {
            direct: true,
            ..Self::new(base, 1, mask)
        }
    }

    /// Raw stored word, bypassing the driver interface and counters.
    pub fn word(&self, idx: usize) -> u16 {
        self.words[idx]
    }

    /// Plants a raw word, bypassing erase/program semantics. Lets tests
    /// model pre-existing data or junk bits above the payload mask.
    pub fn poke(&mut self, idx: usize, word: u16) {
        self.words[idx] = word;
    }

    /// Overwrites every word, counters untouched.
    pub fn fill(&mut self, word: u16) {
        self.words = [word; N];
    }

    fn index(&self, addr: u32) -> usize {
        let idx = (addr - self.base) as usize;
        assert!(idx < N, "address {addr:#06X} outside mock flash");
        idx
    }
}

impl<const N: usize> FlashDriver for MockFlash<N> {
    fn read_words(&mut self, addr: u32, out: &mut [u16]) {
        self.reads += 1;
        let idx = self.index(addr);
        out.copy_from_slice(&self.words[idx..idx + out.len()]);
    }

    fn write_words(&mut self, addr: u32, words: &[u16]) {
        self.programs += 1;
        let idx = self.index(addr);
        for (slot, word) in self.words[idx..idx + words.len()].iter_mut().zip(words) {
            if self.direct {
                *slot = *word;
            } else {
                *slot &= *word;
            }
        }
    }

    fn erase_block(&mut self, addr: u32) {
        assert_eq!(
            addr % self.erase_unit as u32,
            0,
            "erase address {addr:#06X} not block-aligned"
        );
        self.erases += 1;
        let idx = self.index(addr);
        for slot in &mut self.words[idx..idx + self.erase_unit] {
            *slot = self.mask;
        }
    }
}

/// PIC16F1455 geometry: HEF at 0x1F80, 128 words, 32-word erase rows,
/// single-word writes, 14-bit words.
pub fn f1455_caps() -> HefCapabilities {
    HefCapabilities::new(0x1F80, 128, 1, 32, 0x3FFF).unwrap()
}

/// Standard test fixture over the PIC16F1455 geometry.
pub fn f1455_store() -> HefStore<MockFlash<128>, 32> {
    HefStore::new(MockFlash::new(0x1F80, 32, 0x3FFF), f1455_caps()).unwrap()
}
