//! Decode drivers for both variants.

use std::cmp::Ordering;

use stolas_core::{ByteReader, ByteWriter, Error, Result, BYTE_SYMBOLS, EOF_SYMBOL};
use tracing::debug;

use crate::bitarray::BitArray;
use crate::bitstream::BitReader;
use crate::canonical::CanonicalCode;
use crate::header;
use crate::tree::HuffmanTree;
use crate::CODE_BITS;

/// Decode a traditional-variant stream from `reader` into `writer`.
///
/// The header's counts replay the encoder's tree construction exactly, so
/// walking the rebuilt tree bit by bit reproduces the original bytes.
/// Decoding stops at the in-band EOF symbol; running out of bits first is
/// a [`Error::TruncatedStream`].
pub fn decode_traditional<R, W>(reader: &mut R, writer: &mut W) -> Result<()>
where
    R: ByteReader,
    W: ByteWriter,
{
    let mut bits = BitReader::new(&mut *reader);
    let freq = header::read_traditional(&mut bits)?;

    let tree = HuffmanTree::build(&freq);
    // the re-inserted EOF leaf guarantees at least one active symbol
    let root = tree
        .root()
        .ok_or_else(|| Error::malformed("header describes no active symbols"))?;
    debug!(
        "traditional decode: rebuilt tree over {} symbols",
        tree.leaf_count()
    );

    let mut written: u64 = 0;
    let mut node = root;

    loop {
        let Some(bit) = bits.get_bit()? else {
            return Err(Error::truncated(written));
        };

        // a lone root leaf has no children and consumes the bit as its
        // one-bit code
        if let Some(next) = tree.node(node).child(bit) {
            node = next;
        }

        if let Some(symbol) = tree.node(node).symbol() {
            if symbol == EOF_SYMBOL {
                break;
            }
            writer.write_byte(symbol as u8)?;
            written += 1;
            node = root;
        }
    }

    debug!("traditional decode: {} bytes out", written);
    writer.close()
}

/// Decode a canonical-variant stream from `reader` into `writer`.
///
/// Bits shift into a [`CODE_BITS`]-wide register MSB-first; after each bit
/// the contiguous window of codes with the register's length is scanned for
/// an exact match. The header's length frame says how many symbols to
/// decode; whatever follows is padding.
pub fn decode_canonical<R, W>(reader: &mut R, writer: &mut W) -> Result<()>
where
    R: ByteReader,
    W: ByteWriter,
{
    let mut bits = BitReader::new(&mut *reader);
    let (lengths, total) = header::read_canonical(&mut bits)?;

    let code = CanonicalCode::from_lengths(&lengths);
    let entries = code.sorted_entries();
    let len_index = code.len_index();
    debug!(
        "canonical decode: {} symbols expected, {} active codes",
        total,
        code.active_symbols()
    );

    let mut register = BitArray::new(CODE_BITS);
    let mut length = 0usize;
    let mut written: u64 = 0;

    while written < total {
        if length == CODE_BITS {
            return Err(Error::InvalidCode { bits: length });
        }

        let Some(bit) = bits.get_bit()? else {
            return Err(Error::truncated(written));
        };
        if bit {
            register.set(length)?;
        }
        length += 1;

        let first = len_index[length];
        if first == BYTE_SYMBOLS {
            continue;
        }

        for entry in &entries[first..] {
            if entry.len as usize != length {
                break;
            }
            if entry.code.compare(&register)? == Ordering::Equal {
                writer.write_byte(entry.symbol as u8)?;
                written += 1;
                register.clear_all();
                length = 0;
                break;
            }
        }
    }

    debug!("canonical decode: {} bytes out", written);
    writer.close()
}
