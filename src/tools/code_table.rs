//! String table for the LZW decoder.
//!
//! Every code maps to a string through a chain of prefix links: an entry
//! holds the last byte of its string and the code of the string one byte
//! shorter.  Entries live in a flat arena indexed by code value, with
//! `NO_CODE` as the null link, so a slot fits in six bytes and the table
//! state is plain data.

use crate::lzw::{CODE_FIRST,CSIZE,NO_CODE};

#[derive(Clone,Copy)]
pub struct CodeEntry {
    /// code of the prefix string, `NO_CODE` for roots and vacant slots
    pub prev: u16,
    /// length of the full string ending here, 0 marks a vacant slot
    pub length: u16,
    /// last byte of the string
    pub value: u8,
    /// first byte of the string, cached so new entries are built in O(1)
    pub firstchar: u8
}

const VACANT: CodeEntry = CodeEntry {
    prev: NO_CODE,
    length: 0,
    value: 0,
    firstchar: 0
};

pub struct CodeTable {
    entries: Vec<CodeEntry>
}

impl CodeTable {
    /// Allocate the arena and preload the single-byte roots.  The clear and
    /// end-of-information slots stay vacant forever.
    pub fn new() -> Self {
        let mut entries = vec![VACANT;CSIZE];
        for code in 0..256 {
            entries[code] = CodeEntry {
                prev: NO_CODE,
                length: 1,
                value: code as u8,
                firstchar: code as u8
            };
        }
        Self {
            entries
        }
    }
    /// drop every string learned since the last clear
    pub fn reset(&mut self) {
        self.entries[CODE_FIRST as usize..].fill(VACANT);
    }
    pub fn get(&self,code: u16) -> &CodeEntry {
        &self.entries[code as usize]
    }
    pub fn set(&mut self,code: u16,ent: CodeEntry) {
        self.entries[code as usize] = ent;
    }
}

#[test]
fn roots_are_preloaded() {
    let table = CodeTable::new();
    for code in [0u16,1,65,255] {
        let ent = table.get(code);
        assert_eq!(ent.prev,NO_CODE);
        assert_eq!(ent.length,1);
        assert_eq!(ent.value,code as u8);
        assert_eq!(ent.firstchar,code as u8);
    }
    // clear and end-of-information slots are vacant
    assert_eq!(table.get(256).length,0);
    assert_eq!(table.get(257).length,0);
    assert_eq!(table.get(CODE_FIRST).length,0);
}

#[test]
fn reset_drops_learned_strings() {
    let mut table = CodeTable::new();
    table.set(CODE_FIRST,CodeEntry { prev: 65, length: 2, value: 66, firstchar: 65 });
    table.set(4095,CodeEntry { prev: CODE_FIRST, length: 3, value: 67, firstchar: 65 });
    table.reset();
    assert_eq!(table.get(CODE_FIRST).length,0);
    assert_eq!(table.get(CODE_FIRST).prev,NO_CODE);
    assert_eq!(table.get(4095).length,0);
    // roots survive
    assert_eq!(table.get(65).length,1);
}
