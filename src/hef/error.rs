/// Errors rejected at configuration time, before any flash is touched.
///
/// Runtime access never fails: out-of-range reads return the erased
/// sentinel and out-of-range writes are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Capacity of zero logical units.
    CapacityZero,
    /// Write unit of zero words.
    WriteUnitZero,
    /// Erase unit is not a power of two.
    EraseNotPowerOfTwo,
    /// Erase unit is smaller than the write unit.
    EraseSmallerThanWrite,
    /// Write unit does not divide the erase unit evenly.
    WriteUnitNotDivisor,
    /// Base address is not aligned to the erase unit.
    BaseMisaligned,
    /// Capacity does not cover whole erase blocks on a device that needs
    /// block rewrites.
    CapacityNotBlockMultiple,
    /// Word mask is zero or has holes below its top bit.
    BadWordMask,
    /// Store's const erase-unit parameter disagrees with the descriptor.
    EraseUnitMismatch,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::CapacityZero => write!(f, "capacity of zero logical units"),
            ConfigError::WriteUnitZero => write!(f, "write unit of zero words"),
            ConfigError::EraseNotPowerOfTwo => write!(f, "erase unit is not a power of two"),
            ConfigError::EraseSmallerThanWrite => {
                write!(f, "erase unit is smaller than the write unit")
            }
            ConfigError::WriteUnitNotDivisor => {
                write!(f, "write unit does not divide the erase unit evenly")
            }
            ConfigError::BaseMisaligned => {
                write!(f, "base address is not aligned to the erase unit")
            }
            ConfigError::CapacityNotBlockMultiple => {
                write!(f, "capacity does not cover whole erase blocks")
            }
            ConfigError::BadWordMask => {
                write!(f, "word mask is zero or has holes below its top bit")
            }
            ConfigError::EraseUnitMismatch => {
                write!(f, "const erase-unit parameter disagrees with the descriptor")
            }
        }
    }
}
