//! Sequential MSB-first code packing for the LZW stream.
//!
//! Codes of 9 to 12 bits are packed back to back, most significant bit
//! first, through a shift accumulator.  The reader tracks the bits left in
//! the strip so that a missing end-of-information code cannot run it off
//! the end of the input.

/// Pulls variable-width codes off a compressed strip.  The cursor and
/// accumulator persist between calls, so one reader serves an entire strip
/// even when the caller decodes it in several pieces.
pub struct CodeReader {
    nextdata: u64,
    nextbits: usize,
    pos: usize,
    bitsleft: u64
}

impl CodeReader {
    pub fn new() -> Self {
        Self {
            nextdata: 0,
            nextbits: 0,
            pos: 0,
            bitsleft: 0
        }
    }
    /// reset for a strip of `len` compressed bytes
    pub fn begin(&mut self,len: usize) {
        self.nextdata = 0;
        self.nextbits = 0;
        self.pos = 0;
        self.bitsleft = 8 * len as u64;
    }
    /// Get the next `nbits` wide code, or `None` if fewer than `nbits`
    /// bits remain in the strip.
    pub fn next_code(&mut self,src: &[u8],nbits: usize) -> Option<u16> {
        if self.bitsleft < nbits as u64 {
            return None;
        }
        // at most two refills are ever needed for codes up to 16 bits
        self.nextdata = (self.nextdata << 8) | src[self.pos] as u64;
        self.pos += 1;
        self.nextbits += 8;
        if self.nextbits < nbits {
            self.nextdata = (self.nextdata << 8) | src[self.pos] as u64;
            self.pos += 1;
            self.nextbits += 8;
        }
        let code = (self.nextdata >> (self.nextbits - nbits)) & ((1 << nbits) - 1);
        self.nextbits -= nbits;
        self.bitsleft -= nbits as u64;
        Some(code as u16)
    }
}

/// Packs variable-width codes into a chunk buffer through a cursor.
/// The caller guarantees buffer space; each code spills at most 2 bytes.
pub struct CodeWriter {
    nextdata: u64,
    nextbits: usize
}

impl CodeWriter {
    pub fn new() -> Self {
        Self {
            nextdata: 0,
            nextbits: 0
        }
    }
    pub fn begin(&mut self) {
        self.nextdata = 0;
        self.nextbits = 0;
    }
    /// append the low `nbits` of `code`, advancing the cursor `op`
    pub fn put_code(&mut self,buf: &mut [u8],op: &mut usize,code: u16,nbits: usize) {
        self.nextdata = (self.nextdata << nbits) | code as u64;
        self.nextbits += nbits;
        buf[*op] = (self.nextdata >> (self.nextbits - 8)) as u8;
        *op += 1;
        self.nextbits -= 8;
        if self.nextbits >= 8 {
            buf[*op] = (self.nextdata >> (self.nextbits - 8)) as u8;
            *op += 1;
            self.nextbits -= 8;
        }
    }
    /// Spill any buffered bits as one final byte, with the residue shifted
    /// into the high bits and zero padding below.
    pub fn flush(&mut self,buf: &mut [u8],op: &mut usize) {
        if self.nextbits > 0 {
            buf[*op] = (self.nextdata << (8 - self.nextbits)) as u8;
            *op += 1;
            self.nextbits = 0;
        }
    }
}

#[test]
fn codes_round_trip() {
    let codes: [(u16,usize);7] = [(256,9),(65,9),(300,10),(511,10),(4095,12),(0,12),(257,12)];
    let mut buf = [0u8;32];
    let mut op = 0;
    let mut writer = CodeWriter::new();
    writer.begin();
    for (code,nbits) in codes {
        writer.put_code(&mut buf,&mut op,code,nbits);
    }
    writer.flush(&mut buf,&mut op);
    assert_eq!(op,(9+9+10+10+12+12+12+7)/8);
    let mut reader = CodeReader::new();
    reader.begin(op);
    for (code,nbits) in codes {
        assert_eq!(reader.next_code(&buf[0..op],nbits),Some(code));
    }
}

#[test]
fn reader_guards_end_of_strip() {
    // 2 bytes = 16 bits: one 9 bit code, then 7 bits left over
    let mut buf = [0u8;8];
    let mut op = 0;
    let mut writer = CodeWriter::new();
    writer.begin();
    writer.put_code(&mut buf,&mut op,256,9);
    writer.flush(&mut buf,&mut op);
    let mut reader = CodeReader::new();
    reader.begin(op);
    assert_eq!(reader.next_code(&buf[0..op],9),Some(256));
    assert_eq!(reader.next_code(&buf[0..op],9),None);
}

#[test]
fn writer_pads_msb_first() {
    use bit_vec::BitVec;
    // the flushed tail byte must equal BitVec's MSB-first packing
    let mut expected = BitVec::new();
    for k in (0..9).rev() {
        expected.push(300 >> k & 1 == 1);
    }
    let mut buf = [0u8;4];
    let mut op = 0;
    let mut writer = CodeWriter::new();
    writer.begin();
    writer.put_code(&mut buf,&mut op,300,9);
    writer.flush(&mut buf,&mut op);
    assert_eq!(&buf[0..op],expected.to_bytes().as_slice());
}
