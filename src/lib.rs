//! # Striplzw Library
//!
//! Compress or expand TIFF image strips, and access bit-packed samples
//! * `lzw` is the TIFF Revision 5 Lempel-Ziv-Welch codec, with variable 9 to 12
//!   bit codes, adaptive table resets, and strip-at-a-time operation
//! * `bits` reads and writes words of 1 to 64 bits at any bit offset of a
//!   byte buffer, as needed for strips with 1/4/12-bit samples
//!
//! The encoder streams compressed chunks to any `Write` object.  The decoder
//! fills caller-owned buffers of any size, picking up interrupted strings on
//! the next call.  There are convenience functions for working directly with
//! buffers.
//!
//! ## Buffer Example
//!
//! ```rs
//! use striplzw::lzw;
//! let test_data = "This is the chaunt of the priests.  The chaunt of the priests of Mung.".as_bytes();
//! let compressed = lzw::compress_slice(test_data).expect("compression failed");
//! let expanded = lzw::expand_slice(&compressed,test_data.len()).expect("expansion failed");
//! ```
//!
//! ## Word Example
//!
//! ```rs
//! use striplzw::bits;
//! let mut buf = [0u8;16];
//! bits::set_word(&mut buf,3,17,0x1abcd).expect("out of range");
//! let (val,next) = bits::get_word(&buf,3,17).expect("out of range");
//! ```

pub mod bits;
pub mod lzw;
mod tools;

type DYNERR = Box<dyn std::error::Error>;

/// Codec Errors
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("bit index out of range")]
    OutOfRange,
    #[error("word width cannot exceed 64 bits")]
    BadWidth,
    #[error("corrupt LZW stream")]
    Corrupt,
    #[error("old-style LZW codes not supported")]
    OldStyle
}
