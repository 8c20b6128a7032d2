//! # Stolas Core
//!
//! Core traits, types, and byte I/O interfaces for the Stolas Huffman codec.
//!
//! Stolas is named after the 36th demon of the Ars Goetia, a great prince
//! who teaches astronomy and the virtues of herbs and precious stones -
//! just as a prefix code teaches the shortest description of every symbol.
//!
//! ## Design Philosophy
//!
//! - **No ambient state**: every encode or decode run owns its tree, tables,
//!   and stream buffers; nothing lives at module level
//! - **Byte streams at the boundary**: the engine consumes [`ByteReader`]
//!   and produces [`ByteWriter`], nothing else
//! - **Errors surface, never recover**: every failure propagates to the
//!   caller with resources released along the way
//!
//! ## Core Traits
//!
//! - [`Compressor`] / [`Decompressor`] - one-shot operations over buffers
//! - [`Codec`] - combined capability with round-trip verification
//! - [`ByteReader`] / [`ByteWriter`] - the streaming boundary

pub mod error;
pub mod io;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use io::{ByteReader, ByteWriter, FileReader, FileWriter, SliceReader, VecWriter};
pub use traits::{Codec, Compressor, Decompressor};
pub use types::{
    CodingVariant, CompressionRatio, Count, Symbol, BYTE_SYMBOLS, EOF_SYMBOL, SYMBOL_COUNT,
};
