//! Contiguous bulk transfers.
//!
//! Reads pass straight through to the driver's bulk read. Writes program
//! the destination directly, with no erase and no write-skip: the caller
//! is responsible for writing only to already-erased space. Single-unit
//! writes trade throughput for that safety net; block writes trade the
//! safety net for throughput. The asymmetry is deliberate and visible
//! here rather than papered over.

use crate::hef::{caps::ERASED_BYTE, flash::FlashDriver, store::HefStore};

impl<F: FlashDriver, const ES: usize> HefStore<F, ES> {
    /// Reads `out.len()` consecutive bytes starting at `offset`.
    ///
    /// The portion of the request beyond capacity reads as erased flash
    /// ([`ERASED_BYTE`]); no error is raised.
    pub fn read_block(&mut self, offset: u16, out: &mut [u8]) {
        let in_range = self.clamp(offset, out.len());

        let mut scratch = [0u16; ES];
        let mut pos = 0;
        while pos < in_range {
            let chunk = (in_range - pos).min(ES);
            let addr = self.caps.absolute(offset + pos as u16);
            self.flash.read_words(addr, &mut scratch[..chunk]);
            for (dst, word) in out[pos..pos + chunk].iter_mut().zip(&scratch[..chunk]) {
                *dst = *word as u8;
            }
            pos += chunk;
        }

        for byte in &mut out[in_range..] {
            *byte = ERASED_BYTE;
        }
    }

    /// Programs `data.len()` consecutive bytes starting at `offset`.
    ///
    /// The destination must already be erased. The whole transfer runs
    /// inside one critical section; the portion beyond capacity is
    /// silently dropped.
    pub fn write_block(&mut self, offset: u16, data: &[u8]) {
        let in_range = self.clamp(offset, data.len());
        if in_range == 0 {
            return;
        }

        critical_section::with(|_| {
            let mut scratch = [0u16; ES];
            let mut pos = 0;
            while pos < in_range {
                let chunk = (in_range - pos).min(ES);
                for (word, byte) in scratch[..chunk].iter_mut().zip(&data[pos..pos + chunk]) {
                    *word = u16::from(*byte);
                }
                let addr = self.caps.absolute(offset + pos as u16);
                self.flash.write_words(addr, &scratch[..chunk]);
                pos += chunk;
            }
        });
    }

    /// Reads `out.len()` consecutive native words starting at `offset`,
    /// each masked to the device's word width.
    ///
    /// The portion beyond capacity reads as erased words.
    pub fn read_block_words(&mut self, offset: u16, out: &mut [u16]) {
        let in_range = self.clamp(offset, out.len());

        if in_range > 0 {
            self.flash
                .read_words(self.caps.absolute(offset), &mut out[..in_range]);
        }
        let mask = self.caps.word_mask();
        for word in &mut out[..in_range] {
            *word &= mask;
        }
        for word in &mut out[in_range..] {
            *word = mask;
        }
    }

    /// Programs `words.len()` consecutive native words starting at
    /// `offset`, each masked to the device's word width.
    ///
    /// Same contract as [`Self::write_block`]: destination must be
    /// erased, transfer runs in one critical section, the out-of-range
    /// tail is dropped.
    pub fn write_block_words(&mut self, offset: u16, words: &[u16]) {
        let in_range = self.clamp(offset, words.len());
        if in_range == 0 {
            return;
        }
        let mask = self.caps.word_mask();

        critical_section::with(|_| {
            let mut scratch = [0u16; ES];
            let mut pos = 0;
            while pos < in_range {
                let chunk = (in_range - pos).min(ES);
                for (dst, src) in scratch[..chunk].iter_mut().zip(&words[pos..pos + chunk]) {
                    *dst = *src & mask;
                }
                let addr = self.caps.absolute(offset + pos as u16);
                self.flash.write_words(addr, &scratch[..chunk]);
                pos += chunk;
            }
        });
    }

    /// Number of requested units that fall inside the configured region.
    fn clamp(&self, offset: u16, len: usize) -> usize {
        if !self.caps.in_bounds(offset) {
            return 0;
        }
        len.min(usize::from(self.caps.capacity() - offset))
    }
}
