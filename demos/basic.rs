//! Basic example: EEPROM-style access over emulated high-endurance flash
//!
//! This example demonstrates:
//! - Building a capability descriptor for a PIC16F1455-style part
//! - Byte and word reads/writes with write-skip
//! - The read-modify-erase-write cycle preserving block neighbors
//! - Bulk block transfers

use hef_eeprom::prelude::*;

/// In-memory stand-in for the flash controller. On hardware this would
/// issue the part's unlock sequence and row program/erase commands.
struct RamFlash {
    words: Vec<u16>,
    erases: usize,
}

const BASE: u32 = 0x1F80;
const ERASE_ROW: usize = 32;

impl FlashDriver for RamFlash {
    fn read_words(&mut self, addr: u32, out: &mut [u16]) {
        let idx = (addr - BASE) as usize;
        out.copy_from_slice(&self.words[idx..idx + out.len()]);
    }

    fn write_words(&mut self, addr: u32, words: &[u16]) {
        let idx = (addr - BASE) as usize;
        for (slot, word) in self.words[idx..idx + words.len()].iter_mut().zip(words) {
            *slot &= *word; // programming only clears bits
        }
    }

    fn erase_block(&mut self, addr: u32) {
        self.erases += 1;
        let idx = (addr - BASE) as usize;
        for slot in &mut self.words[idx..idx + ERASE_ROW] {
            *slot = 0x3FFF;
        }
    }
}

fn main() {
    // PIC16F1455 geometry: HEF at 0x1F80, 128 words, 32-word erase rows,
    // single-word writes, 14-bit native words.
    let caps = HefCapabilities::new(BASE, 128, 1, ERASE_ROW, 0x3FFF).unwrap();
    let flash = RamFlash {
        words: vec![0x3FFF; 128],
        erases: 0,
    };
    let mut store: HefStore<_, ERASE_ROW> = HefStore::new(flash, caps).unwrap();

    println!("=== Byte access ===");
    store.write_byte(5, 0x42);
    println!("byte[5]  = {:#04X}", store.read_byte(5));
    println!("byte[6]  = {:#04X} (still erased)", store.read_byte(6));

    // Writing the same value again spends no erase cycle.
    store.write_byte(5, 0x42);
    println!("rewrote byte[5] with the same value: write-skip, no flash access");

    println!("\n=== Word access ===");
    store.write_word(10, 0x7ABC); // bits above the 14-bit mask are stripped
    println!("word[10] = {:#06X} (0x7ABC masked to 14 bits)", store.read_word(10));

    println!("\n=== Block transfer ===");
    let payload = *b"hello hef";
    store.write_block(64, &payload);
    let mut back = [0u8; 9];
    store.read_block(64, &mut back);
    println!("block[64..73] = {:?}", core::str::from_utf8(&back).unwrap());

    println!("\n=== Out-of-range semantics ===");
    store.write_byte(300, 0x99); // silently dropped
    println!("byte[300] = {:#04X} (erased sentinel)", store.read_byte(300));

    let flash = store.into_flash();
    println!("\ntotal erase cycles spent: {}", flash.erases);
}
