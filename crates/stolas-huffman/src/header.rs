//! On-disk header serialization for both variants.
//!
//! The traditional header stores enough to replay tree construction: one
//! `[symbol:1][count:4 LE]` pair per active symbol, ended by a
//! symbol-0/count-0 pair. The EOF leaf is never written; the decoder
//! re-inserts it with count 1, exactly as the encoder did. A symbol-0 pair
//! with a genuine zero count would collide with the terminator, but
//! count-zero symbols are inactive and never written, so the collision
//! cannot arise.
//!
//! The canonical header is one code-length byte per symbol (256 bytes)
//! followed by an 8-byte little-endian count of the original input bytes,
//! which is what tells the decoder where the payload ends; trailing pad
//! bits would otherwise be indistinguishable from one more short code.

use stolas_core::{ByteReader, ByteWriter, Error, Result, Symbol, BYTE_SYMBOLS, EOF_SYMBOL};

use crate::bitstream::{BitReader, BitWriter};
use crate::canonical::CanonicalCode;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;

/// Bytes per count field in the traditional header.
pub const COUNT_BYTES: usize = 4;

/// Bytes in the canonical header's input-length frame.
pub const LENGTH_FRAME_BYTES: usize = 8;

/// Write the traditional header: symbol/count pairs for every non-EOF leaf
/// in left-first walk order, then the terminator pair.
pub fn write_traditional<W: ByteWriter>(
    tree: &HuffmanTree,
    out: &mut BitWriter<W>,
) -> Result<()> {
    let mut leaves: Vec<(Symbol, u32)> = Vec::new();
    tree.for_each_leaf(|symbol, count, _| {
        if symbol != EOF_SYMBOL {
            leaves.push((symbol, count as u32));
        }
    });

    for (symbol, count) in leaves {
        out.put_byte(symbol as u8)?;
        for byte in count.to_le_bytes() {
            out.put_byte(byte)?;
        }
    }

    for _ in 0..1 + COUNT_BYTES {
        out.put_byte(0)?;
    }
    Ok(())
}

/// Read the traditional header back into a frequency table, re-inserting
/// the EOF symbol. Fails with [`Error::MalformedHeader`] when the stream
/// ends before the terminator pair.
pub fn read_traditional<R: ByteReader>(input: &mut BitReader<R>) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();

    loop {
        let symbol = input
            .get_byte()?
            .ok_or_else(|| Error::malformed("stream ended before the header terminator"))?;

        let mut raw = [0u8; COUNT_BYTES];
        for slot in raw.iter_mut() {
            *slot = input
                .get_byte()?
                .ok_or_else(|| Error::malformed("stream ended inside a header count"))?;
        }
        let count = u32::from_le_bytes(raw);

        if symbol == 0 && count == 0 {
            break;
        }
        table.set_count(symbol as Symbol, count);
    }

    table.mark_eof();
    Ok(table)
}

/// Write the canonical header: 256 code-length bytes, then the original
/// input length.
pub fn write_canonical<W: ByteWriter>(
    code: &CanonicalCode,
    total_bytes: u64,
    out: &mut BitWriter<W>,
) -> Result<()> {
    for len in code.lengths() {
        out.put_byte(len)?;
    }
    for byte in total_bytes.to_le_bytes() {
        out.put_byte(byte)?;
    }
    Ok(())
}

/// Read the canonical header: the length table and the original input
/// length.
pub fn read_canonical<R: ByteReader>(
    input: &mut BitReader<R>,
) -> Result<([u8; BYTE_SYMBOLS], u64)> {
    let mut lengths = [0u8; BYTE_SYMBOLS];
    for slot in lengths.iter_mut() {
        *slot = input
            .get_byte()?
            .ok_or_else(|| Error::malformed("canonical header shorter than 256 length bytes"))?;
    }

    let mut raw = [0u8; LENGTH_FRAME_BYTES];
    for slot in raw.iter_mut() {
        *slot = input
            .get_byte()?
            .ok_or_else(|| Error::malformed("canonical header missing the length frame"))?;
    }

    Ok((lengths, u64::from_le_bytes(raw)))
}
