//! # Stolas Huffman
//!
//! Byte-oriented lossless Huffman compression with two on-disk code
//! representations.
//!
//! ## Variants
//!
//! - **Traditional**: the header carries per-symbol frequency counts; the
//!   decoder replays tree construction and walks the tree bit by bit until
//!   it reaches the in-band EOF symbol.
//! - **Canonical**: the header carries only per-symbol code lengths plus
//!   the input length; both sides derive identical codes from the length
//!   table alone, which keeps the header at a fixed 264 bytes.
//!
//! Both variants round-trip every byte sequence exactly.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     stolas-huffman                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  encode.rs          │  decode.rs                         │
//! │  (two-pass drivers) │  (tree walk / register matching)   │
//! ├──────────────────────────────────────────────────────────┤
//! │  frequency.rs │ tree.rs │ code.rs │ canonical.rs         │
//! ├──────────────────────────────────────────────────────────┤
//! │  header.rs    │ bitstream.rs      │ bitarray.rs          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use stolas_core::{Codec, Compressor, Decompressor};
//! use stolas_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::traditional();
//! let compressed = codec.compress(b"Hello, World!").unwrap();
//! let original = codec.decompress(&compressed).unwrap();
//! assert_eq!(original, b"Hello, World!");
//!
//! assert!(codec.verify_roundtrip(b"any bytes at all").unwrap());
//! ```
//!
//! Streaming runs go through the free functions with any
//! [`ByteReader`]/[`ByteWriter`] pair:
//!
//! ```rust
//! use stolas_core::{SliceReader, VecWriter};
//! use stolas_huffman::{decode_canonical, encode_canonical};
//!
//! let mut output = VecWriter::new();
//! encode_canonical(&mut SliceReader::new(b"stream me"), &mut output).unwrap();
//!
//! let encoded = output.into_inner();
//! let mut decoded = VecWriter::new();
//! decode_canonical(&mut SliceReader::new(&encoded), &mut decoded).unwrap();
//! assert_eq!(decoded.into_inner(), b"stream me");
//! ```

pub mod bitarray;
pub mod bitstream;
pub mod canonical;
pub mod code;
pub mod frequency;
pub mod header;
pub mod show;
pub mod tree;

mod decode;
mod encode;

pub use decode::{decode_canonical, decode_traditional};
pub use encode::{encode_canonical, encode_traditional};
pub use show::{show_tree_canonical, show_tree_traditional};

use stolas_core::{
    ByteReader, ByteWriter, Codec, CodingVariant, Compressor, Decompressor, Result, SliceReader,
    VecWriter,
};

/// Width in bits of a stored code: the theoretical maximum over the
/// 257-symbol alphabet.
pub const CODE_BITS: usize = 256;

/// Huffman codec over in-memory buffers, parameterized by variant.
///
/// Each call builds its own tree and tables and drops them with the call;
/// one codec value can serve any number of concurrent runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec {
    variant: CodingVariant,
}

impl HuffmanCodec {
    /// Create a codec using the default (traditional) variant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with an explicit variant.
    pub fn with_variant(variant: CodingVariant) -> Self {
        Self { variant }
    }

    /// Codec for the traditional count-header variant.
    pub fn traditional() -> Self {
        Self::with_variant(CodingVariant::Traditional)
    }

    /// Codec for the canonical length-header variant.
    pub fn canonical() -> Self {
        Self::with_variant(CodingVariant::Canonical)
    }

    /// Encode from any reader into any writer.
    pub fn encode<R: ByteReader, W: ByteWriter>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<()> {
        match self.variant {
            CodingVariant::Traditional => encode_traditional(reader, writer),
            CodingVariant::Canonical => encode_canonical(reader, writer),
        }
    }

    /// Decode from any reader into any writer.
    pub fn decode<R: ByteReader, W: ByteWriter>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<()> {
        match self.variant {
            CodingVariant::Traditional => decode_traditional(reader, writer),
            CodingVariant::Canonical => decode_canonical(reader, writer),
        }
    }
}

impl Compressor for HuffmanCodec {
    fn variant(&self) -> CodingVariant {
        self.variant
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut reader = SliceReader::new(input);
        let mut writer = VecWriter::new();
        self.encode(&mut reader, &mut writer)?;
        Ok(writer.into_inner())
    }
}

impl Decompressor for HuffmanCodec {
    fn variant(&self) -> CodingVariant {
        self.variant
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut reader = SliceReader::new(input);
        let mut writer = VecWriter::new();
        self.decode(&mut reader, &mut writer)?;
        Ok(writer.into_inner())
    }
}

impl Codec for HuffmanCodec {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::CodeTable;
    use crate::frequency::FrequencyTable;
    use crate::tree::HuffmanTree;
    use stolas_core::{Error, Symbol, EOF_SYMBOL};

    #[test]
    fn test_empty_input_traditional_stream_layout() {
        let codec = HuffmanCodec::traditional();
        let out = codec.compress(b"").unwrap();

        // bare terminator pair, then the one-bit EOF code padded to a byte
        assert_eq!(out, vec![0, 0, 0, 0, 0, 0x00]);
        assert_eq!(codec.decompress(&out).unwrap(), b"");
    }

    #[test]
    fn test_single_byte_traditional() {
        let codec = HuffmanCodec::traditional();
        let out = codec.compress(b"A").unwrap();
        assert_eq!(codec.decompress(&out).unwrap(), b"A");

        // both active symbols carry one-bit codes
        let mut freq = FrequencyTable::new();
        freq.set_count(b'A' as Symbol, 1);
        freq.mark_eof();
        let table = CodeTable::from_tree(&HuffmanTree::build(&freq)).unwrap();
        assert_eq!(table.len(b'A' as Symbol), 1);
        assert_eq!(table.len(EOF_SYMBOL), 1);
    }

    #[test]
    fn test_alternating_pair_canonical() {
        let codec = HuffmanCodec::canonical();
        let out = codec.compress(b"ABABAB").unwrap();
        assert_eq!(codec.decompress(&out).unwrap(), b"ABABAB");

        // equal frequencies give equal lengths
        let lengths = &out[..256];
        assert_eq!(lengths[b'A' as usize], lengths[b'B' as usize]);
    }

    #[test]
    fn test_frequency_skew_traditional() {
        let codec = HuffmanCodec::traditional();
        let input = b"ABBCCCDDDD";
        let out = codec.compress(input).unwrap();
        assert_eq!(codec.decompress(&out).unwrap(), input);
    }

    #[test]
    fn test_all_bytes_once_canonical() {
        let input: Vec<u8> = (0u8..=255).collect();
        let codec = HuffmanCodec::canonical();
        let out = codec.compress(&input).unwrap();

        // every symbol gets an 8-bit code, so the stream is the 256-byte
        // length table, the 8-byte length frame, and 256 payload bytes
        assert!(out[..256].iter().all(|&len| len == 8));
        assert_eq!(out.len(), 256 + 8 + 256);
        assert_eq!(codec.decompress(&out).unwrap(), input);
    }

    #[test]
    fn test_repeated_single_symbol_canonical() {
        let codec = HuffmanCodec::canonical();
        let input = vec![b'A'; 10];
        let out = codec.compress(&input).unwrap();

        assert_eq!(out[b'A' as usize], 1, "single-symbol rule gives length 1");
        // ten one-bit codes fit in two payload bytes
        assert_eq!(out.len(), 256 + 8 + 2);
        assert_eq!(codec.decompress(&out).unwrap(), input);
    }

    #[test]
    fn test_repeated_single_symbol_traditional() {
        let codec = HuffmanCodec::traditional();
        let input = vec![b'x'; 1000];
        let out = codec.compress(&input).unwrap();
        assert_eq!(codec.decompress(&out).unwrap(), input);
    }

    #[test]
    fn test_round_trip_text_both_variants() {
        let input = b"The quick brown fox jumps over the lazy dog. \
                      Pack my box with five dozen liquor jugs.";
        for codec in [HuffmanCodec::traditional(), HuffmanCodec::canonical()] {
            assert!(codec.verify_roundtrip(input).unwrap());
        }
    }

    #[test]
    fn test_round_trip_short_lengths_both_variants() {
        // every length from empty through a few dozen bytes
        for len in 0..48usize {
            let input: Vec<u8> = (0..len).map(|i| (i * 37 % 11) as u8).collect();
            for codec in [HuffmanCodec::traditional(), HuffmanCodec::canonical()] {
                assert!(
                    codec.verify_roundtrip(&input).unwrap(),
                    "length {} failed for {:?}",
                    len,
                    Compressor::variant(&codec)
                );
            }
        }
    }

    #[test]
    fn test_compression_shrinks_skewed_data() {
        let input: Vec<u8> = b"aaaaaaaabbbbccd".repeat(200);
        let codec = HuffmanCodec::traditional();
        let ratio = codec.measure_ratio(&input).unwrap();
        assert!(
            ratio.ratio() > 1.5,
            "expected real compression, got {:.2}x",
            ratio.ratio()
        );
    }

    #[test]
    fn test_truncated_payload_is_detected_traditional() {
        let codec = HuffmanCodec::traditional();
        let out = codec.compress(b"some payload to truncate").unwrap();

        // chop inside the payload, past the header
        let cut = out.len() - 2;
        let err = codec.decompress(&out[..cut]).unwrap_err();
        assert!(
            matches!(
                err,
                Error::TruncatedStream { .. } | Error::MalformedHeader { .. }
            ),
            "got {:?}",
            err
        );
    }

    #[test]
    fn test_truncated_payload_is_detected_canonical() {
        let codec = HuffmanCodec::canonical();
        let out = codec.compress(b"some payload to truncate").unwrap();

        let cut = out.len() - 1;
        let err = codec.decompress(&out[..cut]).unwrap_err();
        assert!(matches!(err, Error::TruncatedStream { .. }), "got {:?}", err);
    }

    #[test]
    fn test_binary_data_round_trips() {
        let input: Vec<u8> = (0..4096u32).map(|i| (i * i % 251) as u8).collect();
        for codec in [HuffmanCodec::traditional(), HuffmanCodec::canonical()] {
            assert!(codec.verify_roundtrip(&input).unwrap());
        }
    }

    #[test]
    fn test_codec_variant_accessors() {
        assert_eq!(
            Compressor::variant(&HuffmanCodec::traditional()),
            CodingVariant::Traditional
        );
        assert_eq!(
            Decompressor::variant(&HuffmanCodec::canonical()),
            CodingVariant::Canonical
        );
        assert_eq!(
            Compressor::variant(&HuffmanCodec::new()),
            CodingVariant::Traditional
        );
    }
}
