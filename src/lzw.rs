//! TIFF Revision 5 LZW Compression
//!
//! Variable width codes from 9 to 12 bits, packed MSB first.  Every strip
//! begins with a clear code and ends with an end-of-information code.  The
//! width transitions happen one code earlier than textbook LZW, matching the
//! Aldus implementation the TIFF revision 5 ecosystem standardized on, and
//! the encoder clears its table adaptively: always when the code space
//! fills, and additionally whenever the running compression ratio stops
//! improving.
//!
//! The decoder fills caller-owned buffers of any size; a string that does
//! not fit is resumed on the next call.  The encoder hands compressed
//! chunks to a `Write` sink as its internal buffer fills.

use std::io::Write;
use crate::DYNERR;
use crate::Error;
use crate::tools::code_stream::{CodeReader,CodeWriter};
use crate::tools::code_table::{CodeTable,CodeEntry};
use crate::tools::hash_table::{HashTable,Probe};

/// narrowest code in the stream
pub const BITS_MIN: usize = 9;
/// widest code in the stream
pub const BITS_MAX: usize = 12;
/// clears the string table
pub const CODE_CLEAR: u16 = 256;
/// ends the strip
pub const CODE_EOI: u16 = 257;
/// first code available for strings
pub const CODE_FIRST: u16 = 258;
/// largest code that fits in `BITS_MAX`
pub const CODE_MAX: u16 = (1 << BITS_MAX) - 1;

pub(crate) const CSIZE: usize = CODE_MAX as usize + 1;
/// hash table size, leaves ~91% occupancy at a full code space
pub(crate) const HSIZE: usize = 9001;
pub(crate) const HSHIFT: usize = 13 - 8;
/// null value for code-valued state
pub(crate) const NO_CODE: u16 = u16::MAX;

/// input bytes between compression ratio checks
const CHECK_GAP: u64 = 10000;
/// encoder chunk buffer size
const CHUNK_SIZE: usize = 1 << 20;

const fn max_code(nbits: usize) -> usize {
    (1 << nbits) - 1
}

/// Decompresses one strip per `begin_strip`.  The string table is allocated
/// once and reused across strips.
pub struct Decoder {
    table: CodeTable,
    reader: CodeReader,
    nbits: usize,
    nbitsmask: usize,
    /// last table slot before the code width must grow; this sits one slot
    /// below the mask to mirror the encoder's early width transition
    maxcode_slot: u16,
    free_ent: u16,
    oldcode: u16,
    /// code whose expansion was cut off by the end of the output buffer
    pending: u16,
    /// bytes of `pending` already written by previous calls
    restart: usize
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            table: CodeTable::new(),
            reader: CodeReader::new(),
            nbits: BITS_MIN,
            nbitsmask: max_code(BITS_MIN),
            maxcode_slot: max_code(BITS_MIN) as u16 - 1,
            free_ent: CODE_FIRST,
            oldcode: NO_CODE,
            pending: 0,
            restart: 0
        }
    }
    /// Set up to decode one compressed strip.  Streams written by the
    /// pre-revision-5 encoders carry bit-reversed codes and are rejected.
    pub fn begin_strip(&mut self,src: &[u8]) -> Result<(),Error> {
        if src.len() >= 2 && src[0] == 0 && src[1] & 0x1 != 0 {
            log::error!("old-style LZW stream, convert the file");
            return Err(Error::OldStyle);
        }
        log::debug!("begin strip, {} compressed bytes",src.len());
        self.reader.begin(src.len());
        self.nbits = BITS_MIN;
        self.nbitsmask = max_code(BITS_MIN);
        self.maxcode_slot = self.nbitsmask as u16 - 1;
        self.free_ent = CODE_FIRST;
        self.table.reset();
        self.oldcode = NO_CODE;
        self.pending = 0;
        self.restart = 0;
        Ok(())
    }
    /// Decode into `out`, continuing where the previous call on this strip
    /// left off.  `src` must be the same slice given to `begin_strip`.
    /// Returns the residue: the count of trailing bytes of `out` that were
    /// left unfilled because the strip ended first.
    pub fn decode(&mut self,src: &[u8],out: &mut [u8]) -> Result<usize,Error> {
        let mut op: usize = 0;
        let mut occ = out.len();

        if self.restart > 0 {
            // finish the string cut off by the previous call
            let mut codep = self.pending;
            let residue = self.table.get(codep).length as usize - self.restart;
            if residue > occ {
                // still too long, emit the next piece and stay interrupted
                self.restart += occ;
                let mut skip = residue - occ;
                while skip > 0 && codep != NO_CODE {
                    codep = self.table.get(codep).prev;
                    skip -= 1;
                }
                let mut tp = occ;
                while tp > 0 && codep != NO_CODE {
                    tp -= 1;
                    out[tp] = self.table.get(codep).value;
                    codep = self.table.get(codep).prev;
                }
                return Ok(0);
            }
            // the rest of the string fits, emit it and rejoin the code loop
            let mut tp = residue;
            let mut rem = residue;
            while rem > 0 && codep != NO_CODE {
                rem -= 1;
                tp -= 1;
                out[tp] = self.table.get(codep).value;
                codep = self.table.get(codep).prev;
            }
            op = residue;
            occ -= residue;
            self.restart = 0;
        }

        while occ > 0 {
            let code = match self.reader.next_code(src,self.nbits) {
                Some(code) => code,
                None => CODE_EOI // strip was not terminated, stop anyway
            };
            if code == CODE_EOI {
                break;
            }
            if code == CODE_CLEAR {
                self.table.reset();
                self.free_ent = CODE_FIRST;
                self.nbits = BITS_MIN;
                self.nbitsmask = max_code(BITS_MIN);
                self.maxcode_slot = self.nbitsmask as u16 - 1;
                let code = match self.reader.next_code(src,self.nbits) {
                    Some(code) => code,
                    None => CODE_EOI
                };
                if code == CODE_EOI {
                    break;
                }
                if code >= CODE_CLEAR {
                    log::error!("unexpected code {} directly after clear",code);
                    return Err(Error::Corrupt);
                }
                out[op] = code as u8;
                op += 1;
                occ -= 1;
                self.oldcode = code;
                continue;
            }
            log::trace!("code {}",code);

            // grow the table: the new string is the old string plus the
            // first byte of the current one
            if self.free_ent as usize >= CSIZE {
                log::error!("no free slot for code {}",self.free_ent);
                return Err(Error::Corrupt);
            }
            if self.oldcode as usize >= CSIZE {
                log::error!("prefix link {} is outside the table",self.oldcode);
                return Err(Error::Corrupt);
            }
            let prev_ent = *self.table.get(self.oldcode);
            self.table.set(self.free_ent,CodeEntry {
                prev: self.oldcode,
                length: prev_ent.length + 1,
                // when the code is the one about to be defined, its string
                // is the old string plus its own first byte
                value: match code < self.free_ent {
                    true => self.table.get(code).firstchar,
                    false => prev_ent.firstchar
                },
                firstchar: prev_ent.firstchar
            });
            self.free_ent += 1;
            if self.free_ent > self.maxcode_slot {
                if self.nbits < BITS_MAX {
                    self.nbits += 1;
                }
                self.nbitsmask = max_code(self.nbits);
                self.maxcode_slot = self.nbitsmask as u16 - 1;
            }
            self.oldcode = code;

            if code >= 256 {
                // the code maps to a string, written in reverse along the
                // prefix chain
                let len = self.table.get(code).length as usize;
                if len == 0 {
                    log::error!("string for code {} has no length",code);
                    return Err(Error::Corrupt);
                }
                if len > occ {
                    // does not fit, emit the head that does and remember
                    // where to pick up on the next call
                    self.pending = code;
                    let mut codep = self.table.get(code).prev;
                    while codep != NO_CODE && self.table.get(codep).length as usize > occ {
                        codep = self.table.get(codep).prev;
                    }
                    if codep != NO_CODE {
                        self.restart = occ;
                        let mut tp = op + occ;
                        let mut rem = occ;
                        while rem > 0 {
                            rem -= 1;
                            tp -= 1;
                            out[tp] = self.table.get(codep).value;
                            codep = self.table.get(codep).prev;
                            if codep == NO_CODE {
                                break;
                            }
                        }
                        if rem == 0 && codep != NO_CODE {
                            log::error!("loop in the string table");
                            return Err(Error::Corrupt);
                        }
                    }
                    return Ok(0);
                }
                let mut tp = op + len;
                let mut codep = code;
                loop {
                    tp -= 1;
                    out[tp] = self.table.get(codep).value;
                    codep = self.table.get(codep).prev;
                    if codep == NO_CODE || tp == op {
                        break;
                    }
                }
                if codep != NO_CODE {
                    log::error!("loop in the string table");
                    return Err(Error::Corrupt);
                }
                op += len;
                occ -= len;
            } else {
                out[op] = code as u8;
                op += 1;
                occ -= 1;
            }
        }
        Ok(occ)
    }
}

/// Compresses one strip per `begin_strip`/`end_strip`.  The hash table and
/// chunk buffer are allocated once and reused across strips.
pub struct Encoder {
    hash: HashTable,
    writer: CodeWriter,
    nbits: usize,
    maxcode: u16,
    free_ent: u16,
    oldcode: u16,
    checkpoint: u64,
    ratio: u64,
    incount: u64,
    outcount: u64,
    chunk: Vec<u8>,
    op: usize,
    /// cursor bound leaving room for two max-width codes before a flush
    limit: usize
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            hash: HashTable::new(),
            writer: CodeWriter::new(),
            nbits: BITS_MIN,
            maxcode: max_code(BITS_MIN) as u16,
            free_ent: CODE_FIRST,
            oldcode: NO_CODE,
            checkpoint: CHECK_GAP,
            ratio: 0,
            incount: 0,
            outcount: 0,
            chunk: vec![0;CHUNK_SIZE],
            op: 0,
            limit: CHUNK_SIZE - 1 - 4
        }
    }
    /// set up to encode one strip
    pub fn begin_strip(&mut self) {
        self.writer.begin();
        self.nbits = BITS_MIN;
        self.maxcode = max_code(BITS_MIN) as u16;
        self.free_ent = CODE_FIRST;
        self.oldcode = NO_CODE;
        self.checkpoint = CHECK_GAP;
        self.ratio = 0;
        self.incount = 0;
        self.outcount = 0;
        self.op = 0;
        self.hash.clear();
    }
    fn put_code(&mut self,code: u16) {
        self.writer.put_code(&mut self.chunk,&mut self.op,code,self.nbits);
        self.outcount += self.nbits as u64;
    }
    /// empty the string table and start over at 9 bit codes
    fn reset_table(&mut self) {
        self.hash.clear();
        self.ratio = 0;
        self.incount = 0;
        self.outcount = 0;
        self.free_ent = CODE_FIRST;
        self.put_code(CODE_CLEAR);
        self.nbits = BITS_MIN;
        self.maxcode = max_code(BITS_MIN) as u16;
    }
    /// Encode a run of raw bytes, streaming full chunks to `sink`.  May be
    /// called any number of times per strip; finish with `end_strip`.
    pub fn encode<W: Write>(&mut self,bp: &[u8],sink: &mut W) -> Result<(),DYNERR> {
        let mut i: usize = 0;
        if self.oldcode == NO_CODE && !bp.is_empty() {
            // start of strip, the buffer always has room for the clear code
            self.put_code(CODE_CLEAR);
            self.oldcode = bp[0] as u16;
            i += 1;
            self.incount += 1;
        }
        while i < bp.len() {
            let c = bp[i];
            i += 1;
            self.incount += 1;
            let slot = match self.hash.probe(self.oldcode,c) {
                Probe::Hit(code) => {
                    self.oldcode = code;
                    continue;
                },
                Probe::Miss(slot) => slot
            };
            // New string: emit the code for the prefix and add the string
            // to the table.  Only this branch ever writes output, and the
            // limit leaves room for this code plus a possible clear code.
            if self.op > self.limit {
                sink.write_all(&self.chunk[0..self.op])?;
                self.op = 0;
            }
            let prefix = self.oldcode;
            self.put_code(prefix);
            self.oldcode = c as u16;
            self.hash.install(slot,prefix,c,self.free_ent);
            self.free_ent += 1;
            if self.free_ent == CODE_MAX - 1 {
                // code space is full
                log::debug!("table full after {} bytes, clearing",self.incount);
                self.reset_table();
            } else if self.free_ent > self.maxcode {
                // the next entry will not fit in the current code width
                self.nbits += 1;
                debug_assert!(self.nbits <= BITS_MAX);
                self.maxcode = max_code(self.nbits) as u16;
            } else if self.incount >= self.checkpoint {
                // Watch the compression ratio as a 24+8 bit fraction and
                // clear the table when it stops improving; a stale table
                // on shifting data is worse than relearning from scratch.
                self.checkpoint = self.incount + CHECK_GAP;
                let rat = match self.incount > 0x007f_ffff {
                    true => {
                        // the shift would overflow the fraction
                        match self.outcount >> 8 {
                            0 => 0x7fff_ffff,
                            r => self.incount / r
                        }
                    },
                    false => (self.incount << 8) / self.outcount
                };
                if rat <= self.ratio {
                    log::debug!("ratio slipped at {} bytes, clearing",self.incount);
                    self.reset_table();
                } else {
                    self.ratio = rat;
                }
            }
        }
        Ok(())
    }
    /// Finish the strip: flush the last string, append the
    /// end-of-information code, and pad out the final byte.
    pub fn end_strip<W: Write>(&mut self,sink: &mut W) -> Result<(),DYNERR> {
        if self.op > self.limit {
            sink.write_all(&self.chunk[0..self.op])?;
            self.op = 0;
        }
        if self.oldcode != NO_CODE {
            self.put_code(self.oldcode);
            self.oldcode = NO_CODE;
        } else {
            // an empty strip still gets its leading clear code
            self.put_code(CODE_CLEAR);
        }
        self.put_code(CODE_EOI);
        self.writer.flush(&mut self.chunk,&mut self.op);
        sink.write_all(&self.chunk[0..self.op])?;
        self.op = 0;
        Ok(())
    }
}

/// Compress one strip, streaming compressed chunks to `sink`.
pub fn compress<W: Write>(raw: &[u8],sink: &mut W) -> Result<(),DYNERR> {
    let mut enc = Encoder::new();
    enc.begin_strip();
    enc.encode(raw,sink)?;
    enc.end_strip(sink)
}

/// Convenience function, calls `compress` returning a Vec
pub fn compress_slice(raw: &[u8]) -> Result<Vec<u8>,DYNERR> {
    let mut ans: Vec<u8> = Vec::new();
    compress(raw,&mut ans)?;
    Ok(ans)
}

/// Expand one strip.  `expected` is an upper bound on the decoded size; the
/// result is shortened by whatever the strip did not fill.
pub fn expand_slice(src: &[u8],expected: usize) -> Result<Vec<u8>,Error> {
    let mut dec = Decoder::new();
    dec.begin_strip(src)?;
    let mut out = vec![0;expected];
    let residue = dec.decode(src,&mut out)?;
    out.truncate(expected - residue);
    Ok(out)
}

// *************** TESTS *****************

/// pack codes MSB-first the way the encoder would, for hand-built streams
#[cfg(test)]
fn pack_codes(codes: &[(u16,usize)]) -> Vec<u8> {
    use bit_vec::BitVec;
    let mut bits = BitVec::new();
    for &(code,width) in codes {
        for k in (0..width).rev() {
            bits.push(code >> k & 1 == 1);
        }
    }
    bits.to_bytes()
}

/// deterministic noise for large buffer tests
#[cfg(test)]
fn noise(len: usize) -> Vec<u8> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut ans = Vec::with_capacity(len);
    for _i in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ans.push((state >> 33) as u8);
    }
    ans
}

#[test]
fn empty_strip() {
    // just a clear code and an end-of-information code
    let compressed = compress_slice(&[]).expect("compression failed");
    assert_eq!(compressed,hex::decode("804040").unwrap());
    let expanded = expand_slice(&compressed,0).expect("expansion failed");
    assert_eq!(expanded,Vec::<u8>::new());
}

#[test]
fn single_byte() {
    let compressed = compress_slice(&[0x41]).expect("compression failed");
    assert_eq!(compressed,hex::decode("80106020").unwrap());
    let expanded = expand_slice(&compressed,1).expect("expansion failed");
    assert_eq!(expanded,vec![0x41]);
}

#[test]
fn zero_run() {
    // ten zeros give the classic expansion 0, "00", "000", "0000"
    let test_data = [0u8;10];
    let compressed = compress_slice(&test_data).expect("compression failed");
    assert_eq!(compressed,pack_codes(&[(256,9),(0,9),(258,9),(259,9),(260,9),(257,9)]));
    assert_eq!(compressed,hex::decode("80002050382404").unwrap());
    let expanded = expand_slice(&compressed,10).expect("expansion failed");
    assert_eq!(expanded,test_data.to_vec());
}

#[test]
fn strings_grow_one_code_early() {
    // pairs of repeated bytes push the table past code 511, crossing the
    // boundary where both sides must switch to 10 bit codes one code
    // earlier than textbook LZW
    let mut test_data = Vec::new();
    for i in 0..=255u8 {
        test_data.push(i);
        test_data.push(i);
    }
    let compressed = compress_slice(&test_data).expect("compression failed");
    let expanded = expand_slice(&compressed,test_data.len()).expect("expansion failed");
    assert_eq!(expanded,test_data);
}

#[test]
fn deferred_string_decode() {
    // CLEAR 'A' 258 EOI: code 258 arrives before it is defined, and its
    // string is the previous string plus that string's first byte
    let stream = pack_codes(&[(256,9),(65,9),(258,9),(257,9)]);
    let expanded = expand_slice(&stream,16).expect("expansion failed");
    assert_eq!(expanded,"AAA".as_bytes().to_vec());
}

#[test]
fn invertibility() {
    let test_data = "I am Sam. Sam I am. I do not like this Sam I am.\n".as_bytes();
    let compressed = compress_slice(test_data).expect("compression failed");
    let expanded = expand_slice(&compressed,test_data.len()).expect("expansion failed");
    assert_eq!(test_data.to_vec(),expanded);
}

#[test]
fn invertibility_noise() {
    // incompressible input forces steady table growth and the ratio check
    let test_data = noise(30000);
    let compressed = compress_slice(&test_data).expect("compression failed");
    // worst case stays under 12 bits per 8 bit byte plus bookkeeping
    assert!(compressed.len() <= test_data.len() * 2 + 8);
    let expanded = expand_slice(&compressed,test_data.len()).expect("expansion failed");
    assert_eq!(test_data,expanded);
}

#[test]
fn invertibility_through_table_resets() {
    // long enough that the code space fills several times over
    let test_data = noise(100000);
    let compressed = compress_slice(&test_data).expect("compression failed");
    let expanded = expand_slice(&compressed,test_data.len()).expect("expansion failed");
    assert_eq!(test_data,expanded);
}

#[test]
fn invertibility_across_chunk_flushes() {
    // enough incompressible input that the encoder hands the sink more
    // than one chunk before the strip ends
    let test_data = noise(1200000);
    let compressed = compress_slice(&test_data).expect("compression failed");
    assert!(compressed.len() > 1 << 20);
    let expanded = expand_slice(&compressed,test_data.len()).expect("expansion failed");
    assert_eq!(test_data,expanded);
}

#[test]
fn invertibility_shifting_regimes() {
    // zeros, then noise, then zeros again: the ratio watchdog clears the
    // stale table when the statistics turn over
    let mut test_data = vec![0u8;15000];
    test_data.extend(noise(15000));
    test_data.extend(vec![0u8;15000]);
    let compressed = compress_slice(&test_data).expect("compression failed");
    let expanded = expand_slice(&compressed,test_data.len()).expect("expansion failed");
    assert_eq!(test_data,expanded);
}

#[test]
fn strip_framing() {
    // first code of every strip is the clear code: 256 as 9 bits puts
    // 0x80 in the first byte
    for test_data in [vec![],vec![0x41],noise(5000)] {
        let compressed = compress_slice(&test_data).expect("compression failed");
        assert_eq!(compressed[0],0x80);
    }
}

#[test]
fn chunked_output_with_long_strings() {
    // highly repetitive data builds strings much longer than the output
    // window, so expansion must stop partway through a string and resume
    let mut test_data = Vec::new();
    for i in 0..10000 {
        test_data.push((i / 250) as u8);
    }
    let compressed = compress_slice(&test_data).expect("compression failed");
    let mut dec = Decoder::new();
    dec.begin_strip(&compressed).expect("bad strip");
    let mut front = vec![0;4999];
    let mut back = vec![0;5001];
    assert_eq!(dec.decode(&compressed,&mut front).expect("expansion failed"),0);
    assert_eq!(dec.decode(&compressed,&mut back).expect("expansion failed"),0);
    let mut expanded = front;
    expanded.extend(back);
    assert_eq!(test_data,expanded);
}

#[test]
fn tiny_output_windows() {
    let test_data = "the rain in spain falls mainly on the plain plain plain".as_bytes();
    let compressed = compress_slice(test_data).expect("compression failed");
    let mut dec = Decoder::new();
    dec.begin_strip(&compressed).expect("bad strip");
    let mut expanded = Vec::new();
    loop {
        let mut window = [0u8;3];
        let residue = dec.decode(&compressed,&mut window).expect("expansion failed");
        expanded.extend(&window[0..3-residue]);
        if residue > 0 {
            break;
        }
    }
    assert_eq!(test_data.to_vec(),expanded);
}

#[test]
fn truncated_strip_stops_clean() {
    let test_data = noise(2000);
    let compressed = compress_slice(&test_data).expect("compression failed");
    let cut = &compressed[0..compressed.len()/2];
    // missing the end-of-information code, the decoder stops at the last
    // whole code and returns a prefix
    let expanded = expand_slice(cut,test_data.len()).expect("expansion failed");
    assert!(expanded.len() < test_data.len());
    assert_eq!(expanded.as_slice(),&test_data[0..expanded.len()]);
}

#[test]
fn corrupt_code_after_clear() {
    let stream = pack_codes(&[(256,9),(300,9),(257,9)]);
    assert!(matches!(expand_slice(&stream,16),Err(Error::Corrupt)));
}

#[test]
fn corrupt_stream_without_clear() {
    // a strip that does not open with the clear code has no string to
    // extend, which the table bounds check catches
    let stream = pack_codes(&[(65,9),(66,9),(257,9)]);
    assert!(matches!(expand_slice(&stream,16),Err(Error::Corrupt)));
}

#[test]
fn corrupt_undefined_code() {
    // code 300 is far beyond the next free slot
    let stream = pack_codes(&[(256,9),(65,9),(300,9),(300,9),(257,9)]);
    assert!(matches!(expand_slice(&stream,16),Err(Error::Corrupt)));
}

#[test]
fn garbage_terminates() {
    let garbage = vec![0xff;1000];
    assert!(matches!(expand_slice(&garbage,4000),Err(Error::Corrupt)));
}

#[test]
fn old_style_stream_rejected() {
    let mut dec = Decoder::new();
    assert!(matches!(dec.begin_strip(&[0x00,0x01,0x55]),Err(Error::OldStyle)));
    assert!(matches!(expand_slice(&[0x00,0x01,0x55],16),Err(Error::OldStyle)));
}

#[test]
fn decoder_reuse_across_strips() {
    let mut dec = Decoder::new();
    for test_data in [noise(3000),vec![7u8;500],Vec::new()] {
        let compressed = compress_slice(&test_data).expect("compression failed");
        dec.begin_strip(&compressed).expect("bad strip");
        let mut out = vec![0;test_data.len()];
        assert_eq!(dec.decode(&compressed,&mut out).expect("expansion failed"),0);
        assert_eq!(out,test_data);
    }
}

#[test]
fn encoder_reuse_across_strips() {
    let mut enc = Encoder::new();
    for test_data in [vec![0x41],noise(2000),vec![0u8;100]] {
        let mut compressed = Vec::new();
        enc.begin_strip();
        enc.encode(&test_data,&mut compressed).expect("compression failed");
        enc.end_strip(&mut compressed).expect("compression failed");
        let expanded = expand_slice(&compressed,test_data.len()).expect("expansion failed");
        assert_eq!(expanded,test_data);
    }
}

#[test]
fn multi_call_encode() {
    // feeding the encoder in pieces must give the same stream as one call
    let test_data = noise(10000);
    let whole = compress_slice(&test_data).expect("compression failed");
    let mut enc = Encoder::new();
    let mut pieces = Vec::new();
    enc.begin_strip();
    enc.encode(&test_data[0..1],&mut pieces).expect("compression failed");
    enc.encode(&test_data[1..5000],&mut pieces).expect("compression failed");
    enc.encode(&[],&mut pieces).expect("compression failed");
    enc.encode(&test_data[5000..],&mut pieces).expect("compression failed");
    enc.end_strip(&mut pieces).expect("compression failed");
    assert_eq!(whole,pieces);
}
