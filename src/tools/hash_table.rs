//! String matcher for the LZW encoder.
//!
//! Open addressing with double hashing, no chaining, on the packed
//! (prefix code, next byte) key.  This is a variant of Knuth's algorithm D
//! with a relatively-prime secondary probe; the table size leaves the load
//! factor near 91% when the code space is exhausted.

use crate::lzw::{BITS_MAX,HSIZE,HSHIFT};

#[derive(Clone,Copy)]
pub struct HashEntry {
    /// packed key `(next_byte << BITS_MAX) | prefix_code`, -1 when empty
    pub hash: i64,
    /// code assigned to the string
    pub code: u16
}

const EMPTY: HashEntry = HashEntry {
    hash: -1,
    code: 0
};

pub enum Probe {
    /// the string is in the table under this code
    Hit(u16),
    /// the string is absent, and belongs in this slot
    Miss(usize)
}

pub struct HashTable {
    slots: Vec<HashEntry>
}

impl HashTable {
    pub fn new() -> Self {
        Self {
            slots: vec![EMPTY;HSIZE]
        }
    }
    /// empty every slot, done at strip start and on every table reset
    pub fn clear(&mut self) {
        self.slots.fill(EMPTY);
    }
    /// Look for the string formed by the `prefix` code plus one more byte.
    /// The secondary probe steps backwards by `HSIZE - h`, which is what
    /// keeps long collision chains rare right up to a full code space.
    pub fn probe(&self,prefix: u16,next: u8) -> Probe {
        let fcode = ((next as i64) << BITS_MAX) | prefix as i64;
        let mut h = ((next as usize) << HSHIFT) ^ prefix as usize;
        debug_assert!(h < HSIZE);
        if self.slots[h].hash == fcode {
            return Probe::Hit(self.slots[h].code);
        }
        if self.slots[h].hash >= 0 {
            let disp = if h == 0 { 1 } else { HSIZE - h };
            loop {
                h = if h >= disp { h - disp } else { h + HSIZE - disp };
                if self.slots[h].hash == fcode {
                    return Probe::Hit(self.slots[h].code);
                }
                if self.slots[h].hash < 0 {
                    break;
                }
            }
        }
        Probe::Miss(h)
    }
    /// fill a slot previously returned by `probe`
    pub fn install(&mut self,slot: usize,prefix: u16,next: u8,code: u16) {
        self.slots[slot] = HashEntry {
            hash: ((next as i64) << BITS_MAX) | prefix as i64,
            code
        };
    }
}

#[test]
fn probe_hits_after_install() {
    let mut tab = HashTable::new();
    let slot = match tab.probe(65,66) {
        Probe::Miss(slot) => slot,
        Probe::Hit(_) => panic!("hit in empty table")
    };
    tab.install(slot,65,66,258);
    match tab.probe(65,66) {
        Probe::Hit(code) => assert_eq!(code,258),
        Probe::Miss(_) => panic!("installed string not found")
    }
    // a different string with the same prefix is still a miss
    assert!(matches!(tab.probe(65,67),Probe::Miss(_)));
}

#[test]
fn secondary_probe_resolves_collisions() {
    // (prefix 0, byte 0) and (prefix 32, byte 1) both hash to slot 0
    let mut tab = HashTable::new();
    let s1 = match tab.probe(0,0) {
        Probe::Miss(slot) => slot,
        _ => panic!("expected miss")
    };
    assert_eq!(s1,0);
    tab.install(s1,0,0,258);
    let s2 = match tab.probe(32,1) {
        Probe::Miss(slot) => slot,
        _ => panic!("expected miss")
    };
    // displacement at slot 0 is 1, probing wraps to the top of the table
    assert_eq!(s2,HSIZE - 1);
    tab.install(s2,32,1,259);
    assert!(matches!(tab.probe(0,0),Probe::Hit(258)));
    assert!(matches!(tab.probe(32,1),Probe::Hit(259)));
}

#[test]
fn clear_empties_every_slot() {
    let mut tab = HashTable::new();
    let slot = match tab.probe(65,66) {
        Probe::Miss(slot) => slot,
        _ => panic!("expected miss")
    };
    tab.install(slot,65,66,258);
    tab.clear();
    assert!(matches!(tab.probe(65,66),Probe::Miss(_)));
}
