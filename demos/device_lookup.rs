//! Device table example: resolving a part number to a capability descriptor
//!
//! The table mirrors the HEF placement of the known PIC10/12/16 parts.
//! Lookup happens once at initialization; the store itself never consults
//! the table again.

use hef_eeprom::prelude::*;

fn main() {
    let table = DeviceTable::new();

    for part in ["PIC10F320", "PIC12F1501", "PIC16F1455", "PIC16F1519"] {
        let info = table.lookup(part).expect("part in table");
        // Enhanced-midrange parts erase 32-word rows and program one word
        // at a time; real firmware would take these from the device header.
        let caps = info.capabilities(1, 32).unwrap();
        println!(
            "{part}: HEF {:>3} words @ {:#06X}, {}-bit words",
            caps.capacity(),
            caps.base_address(),
            caps.word_bits(),
        );
    }

    match table.lookup("PIC16F877A") {
        Some(_) => unreachable!(),
        None => println!("\nPIC16F877A has real data EEPROM - not in the HEF table"),
    }
}
