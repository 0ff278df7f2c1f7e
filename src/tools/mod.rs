//! Internal components of the LZW codec.

pub mod code_stream;
pub mod code_table;
pub mod hash_table;
