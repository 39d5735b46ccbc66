use crate::hef::error::ConfigError;

/// Value read from an erased flash location, truncated to the byte payload.
pub const ERASED_BYTE: u8 = 0xFF;

/// Static facts about the underlying high-endurance flash region.
///
/// All sizes are in native flash words: one logical offset maps to one
/// flash word, whether the caller stores bytes or full words in it.
/// Validated once by [`HefCapabilities::new`] and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HefCapabilities {
    base_address: u32,
    capacity: u16,
    write_unit: usize,
    erase_unit: usize,
    word_mask: u16,
}

impl HefCapabilities {
    /// Builds a descriptor, rejecting any geometry that would corrupt the
    /// bounds-checking or block-alignment logic downstream.
    ///
    /// # Errors
    /// * [`ConfigError::CapacityZero`] - `capacity` is 0
    /// * [`ConfigError::WriteUnitZero`] - `write_unit` is 0
    /// * [`ConfigError::EraseNotPowerOfTwo`] - `erase_unit` is not a power of two
    /// * [`ConfigError::EraseSmallerThanWrite`] - `erase_unit < write_unit`
    /// * [`ConfigError::WriteUnitNotDivisor`] - `write_unit` does not divide `erase_unit`
    /// * [`ConfigError::BaseMisaligned`] - `base_address` is not erase-unit aligned
    /// * [`ConfigError::CapacityNotBlockMultiple`] - a block-rewrite device's
    ///   `capacity` is not a whole number of erase units
    /// * [`ConfigError::BadWordMask`] - `word_mask` is 0 or not contiguous from bit 0
    pub fn new(
        base_address: u32,
        capacity: u16,
        write_unit: usize,
        erase_unit: usize,
        word_mask: u16,
    ) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::CapacityZero);
        }
        if write_unit == 0 {
            return Err(ConfigError::WriteUnitZero);
        }
        if !erase_unit.is_power_of_two() {
            return Err(ConfigError::EraseNotPowerOfTwo);
        }
        if erase_unit < write_unit {
            return Err(ConfigError::EraseSmallerThanWrite);
        }
        if erase_unit % write_unit != 0 {
            return Err(ConfigError::WriteUnitNotDivisor);
        }
        if base_address % erase_unit as u32 != 0 {
            return Err(ConfigError::BaseMisaligned);
        }
        // Block rewrites erase and reprogram a whole erase unit, so every
        // block the region starts must lie entirely inside it. Direct-write
        // devices never rewrite blocks and may end mid-block.
        if erase_unit > write_unit && usize::from(capacity) % erase_unit != 0 {
            return Err(ConfigError::CapacityNotBlockMultiple);
        }
        // Contiguous-from-bit-0 check: a valid mask plus one is a power of two.
        if word_mask == 0 || (word_mask & word_mask.wrapping_add(1)) != 0 {
            return Err(ConfigError::BadWordMask);
        }

        Ok(Self {
            base_address,
            capacity,
            write_unit,
            erase_unit,
            word_mask,
        })
    }

    /// First absolute word address of the region.
    pub fn base_address(&self) -> u32 {
        self.base_address
    }

    /// Usable capacity in logical units (flash words).
    pub fn capacity(&self) -> u16 {
        self.capacity
    }

    /// Smallest programmable chunk, in words.
    pub fn write_unit(&self) -> usize {
        self.write_unit
    }

    /// Smallest erasable block, in words.
    pub fn erase_unit(&self) -> usize {
        self.erase_unit
    }

    /// Payload bits carried by one native flash word.
    pub fn word_mask(&self) -> u16 {
        self.word_mask
    }

    /// Bit width of one native flash word (12 or 14 on the PIC parts).
    pub fn word_bits(&self) -> u32 {
        self.word_mask.count_ones()
    }

    /// True when writes need no prior erase (write unit == erase unit).
    pub fn direct_write(&self) -> bool {
        self.write_unit == self.erase_unit
    }

    /// Translates a logical offset to an absolute flash word address.
    ///
    /// Callers must have bounds-checked `offset` with [`Self::in_bounds`];
    /// every public store operation re-verifies this independently.
    pub fn absolute(&self, offset: u16) -> u32 {
        self.base_address + u32::from(offset)
    }

    /// True when `offset` addresses a word inside the configured region.
    pub fn in_bounds(&self, offset: u16) -> bool {
        offset < self.capacity
    }

    /// Start address of the erase block containing `absolute`.
    pub fn block_base(&self, absolute: u32) -> u32 {
        absolute & !(self.erase_unit as u32 - 1)
    }

    /// Value an erased word reads back as, under this device's mask.
    pub fn erased_word(&self) -> u16 {
        self.word_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // PIC16F1455 geometry: HEF at 0x1F80, 128 words, 32-word rows.
    fn f1455() -> HefCapabilities {
        HefCapabilities::new(0x1F80, 128, 1, 32, 0x3FFF).unwrap()
    }

    #[test]
    fn rejects_invalid_geometry() {
        let cases = [
            (
                HefCapabilities::new(0x1F80, 0, 1, 32, 0x3FFF),
                ConfigError::CapacityZero,
            ),
            (
                HefCapabilities::new(0x1F80, 128, 0, 32, 0x3FFF),
                ConfigError::WriteUnitZero,
            ),
            (
                HefCapabilities::new(0x1F80, 128, 1, 24, 0x3FFF),
                ConfigError::EraseNotPowerOfTwo,
            ),
            (
                HefCapabilities::new(0x1F80, 128, 32, 16, 0x3FFF),
                ConfigError::EraseSmallerThanWrite,
            ),
            (
                HefCapabilities::new(0x1F80, 128, 3, 32, 0x3FFF),
                ConfigError::WriteUnitNotDivisor,
            ),
            (
                HefCapabilities::new(0x1F81, 128, 1, 32, 0x3FFF),
                ConfigError::BaseMisaligned,
            ),
            (
                HefCapabilities::new(0x1F80, 40, 1, 32, 0x3FFF),
                ConfigError::CapacityNotBlockMultiple,
            ),
            (
                HefCapabilities::new(0x1F80, 128, 1, 32, 0),
                ConfigError::BadWordMask,
            ),
            (
                HefCapabilities::new(0x1F80, 128, 1, 32, 0x3FFE),
                ConfigError::BadWordMask,
            ),
        ];

        for (result, expected) in cases {
            assert_eq!(result.unwrap_err(), expected);
        }
    }

    #[test]
    fn address_translation() {
        let caps = f1455();
        assert_eq!(caps.absolute(0), 0x1F80);
        assert_eq!(caps.absolute(127), 0x1FFF);
    }

    #[test]
    fn bounds_check() {
        let caps = f1455();
        assert!(caps.in_bounds(0));
        assert!(caps.in_bounds(127));
        assert!(!caps.in_bounds(128));
        assert!(!caps.in_bounds(u16::MAX));
    }

    #[test]
    fn block_base_alignment() {
        let caps = f1455();
        assert_eq!(caps.block_base(0x1F80), 0x1F80);
        assert_eq!(caps.block_base(0x1F85), 0x1F80);
        assert_eq!(caps.block_base(0x1F9F), 0x1F80);
        assert_eq!(caps.block_base(0x1FA0), 0x1FA0);
    }

    #[test]
    fn word_bits_follow_mask() {
        assert_eq!(f1455().word_bits(), 14);
        let baseline = HefCapabilities::new(0x00C0, 128, 1, 16, 0x0FFF).unwrap();
        assert_eq!(baseline.word_bits(), 12);
    }

    #[test]
    fn direct_write_detection() {
        assert!(!f1455().direct_write());
        let direct = HefCapabilities::new(0x1F80, 128, 32, 32, 0x3FFF).unwrap();
        assert!(direct.direct_write());
    }

    #[test]
    fn partial_last_block_rejected_unless_direct() {
        // A rewrite of the last block would erase words 40..63, past the
        // configured region, so this geometry must not construct.
        assert!(matches!(
            HefCapabilities::new(0x1F80, 40, 1, 32, 0x3FFF),
            Err(ConfigError::CapacityNotBlockMultiple)
        ));
        // Direct-write devices never rewrite blocks; a mid-block end is fine.
        assert!(HefCapabilities::new(0x1F80, 40, 32, 32, 0x3FFF).is_ok());
    }
}
