//! Per-device HEF address table.
//!
//! Pure configuration data: which parts place their high-endurance flash
//! where, and how wide their native words are. Consumed once at
//! initialization to build a [`HefCapabilities`]; nothing in the store
//! logic depends on it.

use heapless::FnvIndexMap;

use crate::hef::{caps::HefCapabilities, error::ConfigError};

/// 12-bit words on the baseline PIC10 parts.
const MASK_12: u16 = 0x0FFF;
/// 14-bit words on the enhanced-midrange PIC12/PIC16 parts.
const MASK_14: u16 = 0x3FFF;

/// Static HEF facts for one part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceInfo {
    /// First absolute word address of the HEF region.
    pub base_address: u32,
    /// Usable HEF capacity in words.
    pub capacity: u16,
    /// Native flash word mask.
    pub word_mask: u16,
}

impl DeviceInfo {
    const fn new(base_address: u32, word_mask: u16) -> Self {
        // All currently known PIC10/12/16 parts expose 128 words of HEF.
        Self {
            base_address,
            capacity: 128,
            word_mask,
        }
    }

    /// Builds a validated descriptor from this part's facts and the flash
    /// geometry reported by its programming spec.
    pub fn capabilities(
        &self,
        write_unit: usize,
        erase_unit: usize,
    ) -> Result<HefCapabilities, ConfigError> {
        HefCapabilities::new(
            self.base_address,
            self.capacity,
            write_unit,
            erase_unit,
            self.word_mask,
        )
    }
}

const DEVICES: &[(&str, DeviceInfo)] = &[
    // PIC10 family (baseline, 12-bit words)
    ("PIC10F320", DeviceInfo::new(0x00C0, MASK_12)),
    ("PIC10F322", DeviceInfo::new(0x01C0, MASK_12)),
    // PIC12 family
    ("PIC12F1501", DeviceInfo::new(0x0380, MASK_14)),
    ("PIC12F1571", DeviceInfo::new(0x0780, MASK_14)),
    ("PIC12F1572", DeviceInfo::new(0x0780, MASK_14)),
    ("PIC12F1612", DeviceInfo::new(0x0F80, MASK_14)),
    // PIC16 family (145x)
    ("PIC16F1454", DeviceInfo::new(0x1F80, MASK_14)),
    ("PIC16F1455", DeviceInfo::new(0x1F80, MASK_14)),
    ("PIC16F1459", DeviceInfo::new(0x1F80, MASK_14)),
    // PIC16 family (150x)
    ("PIC16F1501", DeviceInfo::new(0x0380, MASK_14)),
    ("PIC16F1503", DeviceInfo::new(0x0780, MASK_14)),
    ("PIC16F1507", DeviceInfo::new(0x0780, MASK_14)),
    ("PIC16F1508", DeviceInfo::new(0x0F80, MASK_14)),
    ("PIC16F1509", DeviceInfo::new(0x1F80, MASK_14)),
    // PIC16 family (151x)
    ("PIC16F1512", DeviceInfo::new(0x0780, MASK_14)),
    ("PIC16F1513", DeviceInfo::new(0x0F80, MASK_14)),
    ("PIC16F1516", DeviceInfo::new(0x1F80, MASK_14)),
    ("PIC16F1517", DeviceInfo::new(0x1F80, MASK_14)),
    ("PIC16F1518", DeviceInfo::new(0x3F80, MASK_14)),
    ("PIC16F1519", DeviceInfo::new(0x3F80, MASK_14)),
    // PIC16 family (152x)
    ("PIC16F1526", DeviceInfo::new(0x1F80, MASK_14)),
    ("PIC16F1527", DeviceInfo::new(0x1F80, MASK_14)),
    // PIC16 family (161x)
    ("PIC16F1615", DeviceInfo::new(0x1F80, MASK_14)),
    ("PIC16F1619", DeviceInfo::new(0x1F80, MASK_14)),
    // PIC16 family (170x)
    ("PIC16F1703", DeviceInfo::new(0x0780, MASK_14)),
    ("PIC16F1704", DeviceInfo::new(0x0F80, MASK_14)),
    ("PIC16F1707", DeviceInfo::new(0x0780, MASK_14)),
    ("PIC16F1708", DeviceInfo::new(0x0F80, MASK_14)),
    ("PIC16F1713", DeviceInfo::new(0x0F80, MASK_14)),
    // PIC16 family (171x)
    ("PIC16F1716", DeviceInfo::new(0x1F80, MASK_14)),
    ("PIC16F1717", DeviceInfo::new(0x1F80, MASK_14)),
    ("PIC16F1718", DeviceInfo::new(0x3F80, MASK_14)),
    ("PIC16F1719", DeviceInfo::new(0x3F80, MASK_14)),
];

/// Part-number lookup table, populated once at construction.
pub struct DeviceTable {
    map: FnvIndexMap<&'static str, DeviceInfo, 64>,
}

impl DeviceTable {
    pub fn new() -> Self {
        let mut map = FnvIndexMap::new();
        for (part, info) in DEVICES {
            // Capacity 64 exceeds the table; insertion cannot fail.
            let _ = map.insert(*part, *info);
        }
        debug_assert_eq!(map.len(), DEVICES.len());
        Self { map }
    }

    /// Looks up a part by its full name, e.g. `"PIC16F1455"`.
    pub fn lookup(&self, part: &str) -> Option<&DeviceInfo> {
        self.map.get(part)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for DeviceTable {
    fn default() -> Self {
        Self::new()
    }
}
