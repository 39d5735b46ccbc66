use crate::hef::{
    caps::{ERASED_BYTE, HefCapabilities},
    error::ConfigError,
    flash::FlashDriver,
};

/// How single-unit writes reach flash. Selected once at construction from
/// the capability descriptor, never re-decided per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteScheme {
    /// Write unit equals erase unit: program the word in place.
    Direct,
    /// Erase unit is coarser: read-modify-erase-write the containing block.
    EraseRewrite,
}

/// Byte/word random-access store over a high-endurance flash region.
///
/// `ES` is the erase unit in words and sizes the stack scratch buffer used
/// by the read-modify-erase-write cycle; it must match the descriptor's
/// erase unit.
///
/// Out-of-range semantics follow classic EEPROM emulation: reads beyond
/// capacity return the erased sentinel and writes beyond capacity are
/// silently dropped. Neither is an error - out-of-range access behaves
/// like unprogrammed flash and must never corrupt adjacent regions.
pub struct HefStore<F: FlashDriver, const ES: usize> {
    pub(crate) flash: F,
    pub(crate) caps: HefCapabilities,
    scheme: WriteScheme,
}

impl<F: FlashDriver, const ES: usize> HefStore<F, ES> {
    /// Binds a driver to a validated descriptor.
    ///
    /// # Errors
    /// [`ConfigError::EraseUnitMismatch`] if `ES` disagrees with
    /// `caps.erase_unit()`.
    pub fn new(flash: F, caps: HefCapabilities) -> Result<Self, ConfigError> {
        if caps.erase_unit() != ES {
            return Err(ConfigError::EraseUnitMismatch);
        }

        let scheme = if caps.direct_write() {
            WriteScheme::Direct
        } else {
            WriteScheme::EraseRewrite
        };

        Ok(Self {
            flash,
            caps,
            scheme,
        })
    }

    /// The descriptor this store was configured with.
    pub fn capabilities(&self) -> &HefCapabilities {
        &self.caps
    }

    /// Releases the underlying driver.
    pub fn into_flash(self) -> F {
        self.flash
    }

    /// Reads the byte stored at `offset`.
    ///
    /// Returns [`ERASED_BYTE`] for offsets at or beyond capacity.
    pub fn read_byte(&mut self, offset: u16) -> u8 {
        if !self.caps.in_bounds(offset) {
            return ERASED_BYTE;
        }
        self.word_at(offset) as u8
    }

    /// Writes one byte at `offset`, skipping flash entirely when the
    /// stored byte already matches.
    ///
    /// Out-of-range offsets are silently ignored.
    pub fn write_byte(&mut self, offset: u16, value: u8) {
        if !self.caps.in_bounds(offset) {
            return;
        }
        if self.word_at(offset) as u8 == value {
            return;
        }
        self.store_unit(offset, u16::from(value));
    }

    /// Reads the native flash word stored at `offset`, masked to the
    /// device's word width.
    ///
    /// Returns the erased word (all payload bits set) for offsets at or
    /// beyond capacity.
    pub fn read_word(&mut self, offset: u16) -> u16 {
        if !self.caps.in_bounds(offset) {
            return self.caps.erased_word();
        }
        self.word_at(offset)
    }

    /// Writes one native word at `offset`.
    ///
    /// `value` is masked to the device's word width before both the
    /// write-skip comparison and the program, so bits above the mask can
    /// neither defeat the skip nor land in reserved word bits.
    pub fn write_word(&mut self, offset: u16, value: u16) {
        if !self.caps.in_bounds(offset) {
            return;
        }
        let value = value & self.caps.word_mask();
        if self.word_at(offset) == value {
            return;
        }
        self.store_unit(offset, value);
    }

    /// One masked word from flash. Caller has already bounds-checked.
    fn word_at(&mut self, offset: u16) -> u16 {
        let mut word = [0u16; 1];
        self.flash.read_words(self.caps.absolute(offset), &mut word);
        word[0] & self.caps.word_mask()
    }

    fn store_unit(&mut self, offset: u16, word: u16) {
        let addr = self.caps.absolute(offset);
        match self.scheme {
            WriteScheme::Direct => self.flash.write_words(addr, &[word]),
            WriteScheme::EraseRewrite => self.rewrite_block(addr, word),
        }
    }

    /// Read-modify-erase-write cycle for one word.
    ///
    /// The whole sequence runs inside a critical section so no interrupt
    /// handler observes the block half-rewritten. The cheap read-and-skip
    /// check has already happened outside it, keeping the masked window as
    /// short as the flash latency allows. A power loss between the erase
    /// and the last chunk write loses the block's prior contents; nothing
    /// at this layer detects or repairs that.
    fn rewrite_block(&mut self, addr: u32, word: u16) {
        let block = self.caps.block_base(addr);
        let rel = (addr - block) as usize;
        let write_unit = self.caps.write_unit();

        critical_section::with(|_| {
            let mut scratch = [0u16; ES];
            self.flash.read_words(block, &mut scratch);
            scratch[rel] = word;
            self.flash.erase_block(block);

            let mut chunk_addr = block;
            for chunk in scratch.chunks(write_unit) {
                self.flash.write_words(chunk_addr, chunk);
                chunk_addr += write_unit as u32;
            }
        });
    }
}
