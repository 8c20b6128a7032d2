//! Core type definitions for the Huffman codec.

/// A code symbol: byte values `0..=255` plus the reserved end-of-stream
/// marker at index 256.
pub type Symbol = u16;

/// Frequency of a symbol in the input. Counts saturate rather than wrap;
/// an input pushing any count past `u32::MAX` is rejected.
pub type Count = u32;

/// Number of byte-valued symbols.
pub const BYTE_SYMBOLS: usize = 256;

/// Reserved symbol that terminates a traditional-variant stream.
pub const EOF_SYMBOL: Symbol = 256;

/// Total symbol space: 256 byte values plus the EOF marker.
pub const SYMBOL_COUNT: usize = 257;

/// Selects which on-disk code representation a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodingVariant {
    /// Persist per-symbol frequency counts; the decoder rebuilds the tree
    /// and stops on an in-band EOF symbol.
    #[default]
    Traditional,
    /// Persist per-symbol code lengths only; both sides derive the same
    /// canonical code from the length table.
    Canonical,
}

impl CodingVariant {
    /// Get variant name as string.
    pub fn name(self) -> &'static str {
        match self {
            CodingVariant::Traditional => "traditional",
            CodingVariant::Canonical => "canonical",
        }
    }
}

/// Compression ratio measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionRatio {
    /// Original (uncompressed) size in bytes.
    pub original: usize,
    /// Compressed size in bytes.
    pub compressed: usize,
}

impl CompressionRatio {
    /// Create a new ratio measurement.
    pub fn new(original: usize, compressed: usize) -> Self {
        Self {
            original,
            compressed,
        }
    }

    /// Ratio as original/compressed (higher is better).
    pub fn ratio(&self) -> f64 {
        if self.compressed == 0 {
            return 0.0;
        }
        self.original as f64 / self.compressed as f64
    }

    /// Fraction of space saved, in `0.0..=1.0` for shrinking inputs.
    pub fn space_saving(&self) -> f64 {
        if self.original == 0 {
            return 0.0;
        }
        1.0 - (self.compressed as f64 / self.original as f64)
    }
}
