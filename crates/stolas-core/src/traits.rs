//! One-shot codec traits.
//!
//! These operate over in-memory buffers; streaming runs go through the
//! [`crate::io`] interfaces directly.

use crate::error::Result;
use crate::types::{CodingVariant, CompressionRatio};

/// One-shot compression operations.
pub trait Compressor {
    /// Get the coding variant this compressor produces.
    fn variant(&self) -> CodingVariant;

    /// Compress data in one shot.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// One-shot decompression operations.
pub trait Decompressor {
    /// Get the coding variant this decompressor consumes.
    fn variant(&self) -> CodingVariant;

    /// Decompress data in one shot.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Combined codec for both compression and decompression.
pub trait Codec: Compressor + Decompressor {
    /// Round-trip test: compress then decompress.
    /// Returns true if data matches.
    fn verify_roundtrip(&self, data: &[u8]) -> Result<bool> {
        let compressed = self.compress(data)?;
        let decompressed = self.decompress(&compressed)?;
        Ok(data == decompressed.as_slice())
    }

    /// Get compression ratio for given data.
    fn measure_ratio(&self, data: &[u8]) -> Result<CompressionRatio> {
        let compressed = self.compress(data)?;
        Ok(CompressionRatio::new(data.len(), compressed.len()))
    }
}
