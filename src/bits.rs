//! Random access to bit-packed words in byte buffers.
//!
//! Bit `i` of a buffer lives in byte `i >> 3` under mask `1 << (i & 7)`, so
//! multi-bit words run little-endian across byte boundaries.  This is the
//! packing used by TIFF strips whose samples are not byte aligned, e.g.
//! 1, 4, or 12 bits per sample.  Note the ordering is the opposite of the
//! LZW code stream, which packs codes MSB-first; the two never mix.

use crate::Error;

/// Get bit `index` of the buffer.
pub fn get_bit(buf: &[u8],index: usize) -> Result<bool,Error> {
    if index >= buf.len() * 8 {
        return Err(Error::OutOfRange);
    }
    Ok(buf[index >> 3] & (1 << (index & 7)) != 0)
}

/// Set bit `index` of the buffer.
pub fn set_bit(buf: &mut [u8],index: usize,bit: bool) -> Result<(),Error> {
    if index >= buf.len() * 8 {
        return Err(Error::OutOfRange);
    }
    if bit {
        buf[index >> 3] |= 1 << (index & 7);
    } else {
        buf[index >> 3] &= !(1 << (index & 7));
    }
    Ok(())
}

/// Get the word of `width` bits starting at bit `index`, where bit `index+k`
/// of the buffer becomes bit `k` of the word.  Returns the word along with
/// the next bit index.  Width can be 0 to 64.
pub fn get_word(buf: &[u8],index: usize,width: usize) -> Result<(u64,usize),Error> {
    if width > 64 {
        return Err(Error::BadWidth);
    }
    if index + width > buf.len() * 8 {
        return Err(Error::OutOfRange);
    }
    if width == 0 {
        return Ok((0,index));
    }
    // fast path: one unaligned 64-bit load, only when 8 bytes are in range
    if width <= 32 && (index >> 3) + 8 <= buf.len() {
        let start = index >> 3;
        let chunk = u64::from_le_bytes(buf[start..start+8].try_into().unwrap());
        let val = (chunk >> (index & 7)) & (u64::MAX >> (64 - width));
        return Ok((val,index + width));
    }
    let mut word: u64 = 0;
    for k in 0..width {
        let i = index + k;
        if buf[i >> 3] & (1 << (i & 7)) != 0 {
            word |= 1 << k;
        }
    }
    Ok((word,index + width))
}

/// Set buffer bits `index..index+width` to the low `width` bits of `value`,
/// with the same bit-order as `get_word`.  Returns the next bit index.
pub fn set_word(buf: &mut [u8],index: usize,width: usize,value: u64) -> Result<usize,Error> {
    if width > 64 {
        return Err(Error::BadWidth);
    }
    if index + width > buf.len() * 8 {
        return Err(Error::OutOfRange);
    }
    for k in 0..width {
        let i = index + k;
        if value >> k & 1 != 0 {
            buf[i >> 3] |= 1 << (i & 7);
        } else {
            buf[i >> 3] &= !(1 << (i & 7));
        }
    }
    Ok(index + width)
}

#[test]
fn bit_access() {
    let mut buf = [0u8;4];
    set_bit(&mut buf,0,true).unwrap();
    set_bit(&mut buf,9,true).unwrap();
    set_bit(&mut buf,31,true).unwrap();
    assert_eq!(buf,[0x01,0x02,0x00,0x80]);
    assert_eq!(get_bit(&buf,0).unwrap(),true);
    assert_eq!(get_bit(&buf,1).unwrap(),false);
    assert_eq!(get_bit(&buf,9).unwrap(),true);
    assert_eq!(get_bit(&buf,31).unwrap(),true);
    set_bit(&mut buf,9,false).unwrap();
    assert_eq!(get_bit(&buf,9).unwrap(),false);
    // neighbors are untouched
    assert_eq!(get_bit(&buf,8).unwrap(),false);
    assert_eq!(get_bit(&buf,10).unwrap(),false);
    assert_eq!(get_bit(&buf,0).unwrap(),true);
}

#[test]
fn bit_range() {
    let mut buf = [0u8;2];
    assert!(get_bit(&buf,16).is_err());
    assert!(set_bit(&mut buf,16,true).is_err());
    assert!(get_bit(&buf,15).is_ok());
}

#[test]
fn unaligned_word_read() {
    // 12 bits starting at bit 4 of ab cd ef
    let buf = [0xab,0xcd,0xef];
    let (val,next) = get_word(&buf,4,12).unwrap();
    assert_eq!(val,(0xcdabu64 >> 4) & 0xfff);
    assert_eq!(val,0xcda);
    assert_eq!(next,16);
}

#[test]
fn word_round_trip() {
    let mut buf = [0u8;16];
    let next = set_word(&mut buf,3,17,0x1abcd).unwrap();
    assert_eq!(next,20);
    assert_eq!(get_word(&buf,3,17).unwrap(),(0x1abcd,20));
    assert_eq!(get_bit(&buf,2).unwrap(),false);
    assert_eq!(get_bit(&buf,20).unwrap(),false);
}

#[test]
fn word_widths() {
    let mut buf = [0u8;24];
    let val: u64 = 0xdead_beef_cafe_f00d;
    for width in [0,1,5,8,13,31,32,33,63,64] {
        for index in [0,3,7,8,61] {
            buf.fill(0);
            set_word(&mut buf,index,width,val).unwrap();
            let msk = match width {
                0 => 0,
                64 => u64::MAX,
                w => (1u64 << w) - 1
            };
            assert_eq!(get_word(&buf,index,width).unwrap(),(val & msk,index + width));
        }
    }
}

#[test]
fn fast_path_matches_bitwise() {
    let mut buf = [0u8;12];
    for i in 0..buf.len() {
        buf[i] = (i as u8).wrapping_mul(37).wrapping_add(11);
    }
    let bitwise = |index: usize| -> u64 {
        let mut word = 0;
        for k in 0..32 {
            if get_bit(&buf,index + k).unwrap() {
                word |= 1 << k;
            }
        }
        word
    };
    // low offsets leave 8 bytes in range and take the 64-bit load
    for index in [0,1,7,8,13,31] {
        assert_eq!(get_word(&buf,index,32).unwrap(),(bitwise(index),index + 32));
    }
    // near the buffer end the same bits must come out of the generic loop
    for index in 60..=64 {
        assert_eq!(get_word(&buf,index,32).unwrap(),(bitwise(index),index + 32));
    }
}

#[test]
fn word_range() {
    let mut buf = [0u8;4];
    assert!(get_word(&buf,0,65).is_err());
    assert!(set_word(&mut buf,0,65,0).is_err());
    assert!(get_word(&buf,30,3).is_err());
    assert!(set_word(&mut buf,30,3,0).is_err());
    assert!(get_word(&buf,29,3).is_ok());
    // zero width succeeds anywhere in range, even at the very end
    assert_eq!(get_word(&buf,32,0).unwrap(),(0,32));
}
