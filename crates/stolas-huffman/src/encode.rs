//! Encode drivers for both variants.
//!
//! Encoding is two-pass: one scan to count symbol frequencies, a rewind,
//! and a second scan to emit codes. All state lives in this call frame;
//! nothing survives the run.

use stolas_core::{ByteReader, ByteWriter, Result, Symbol, EOF_SYMBOL};
use tracing::debug;

use crate::bitstream::BitWriter;
use crate::canonical::CanonicalCode;
use crate::code::CodeTable;
use crate::frequency::FrequencyTable;
use crate::header;
use crate::tree::HuffmanTree;

/// Huffman-encode `reader` into `writer` using the traditional variant:
/// a count header, the payload codes, and an in-band EOF code.
pub fn encode_traditional<R, W>(reader: &mut R, writer: &mut W) -> Result<()>
where
    R: ByteReader,
    W: ByteWriter,
{
    let mut freq = FrequencyTable::scan(reader)?;
    freq.mark_eof();

    let tree = HuffmanTree::build(&freq);
    let table = CodeTable::from_tree(&tree)?;
    debug!(
        "traditional encode: {} active symbols over {} input bytes",
        freq.active_symbols(),
        freq.total()
    );

    let mut bits = BitWriter::new(&mut *writer);
    header::write_traditional(&tree, &mut bits)?;

    reader.rewind()?;
    while let Some(byte) = reader.read_byte()? {
        let entry = table.entry(byte as Symbol);
        bits.put_code(&entry.code, entry.len)?;
    }

    let eof = table.entry(EOF_SYMBOL);
    bits.put_code(&eof.code, eof.len)?;

    debug!("traditional encode: {} payload bits", bits.bits_written());
    bits.finish()?;
    writer.close()
}

/// Huffman-encode `reader` into `writer` using the canonical variant:
/// a length-table header with an input-length frame, then the payload
/// codes. No in-band EOF exists in this format.
pub fn encode_canonical<R, W>(reader: &mut R, writer: &mut W) -> Result<()>
where
    R: ByteReader,
    W: ByteWriter,
{
    let freq = FrequencyTable::scan(reader)?;
    let total = freq.total();

    let tree = HuffmanTree::build(&freq);
    let code = CanonicalCode::from_tree(&tree);
    debug!(
        "canonical encode: {} active symbols, max code length {}",
        code.active_symbols(),
        code.max_len()
    );

    let mut bits = BitWriter::new(&mut *writer);
    header::write_canonical(&code, total, &mut bits)?;

    reader.rewind()?;
    while let Some(byte) = reader.read_byte()? {
        let entry = code.entry(byte);
        bits.put_code(&entry.code, entry.len)?;
    }

    debug!("canonical encode: {} payload bits", bits.bits_written());
    bits.finish()?;
    writer.close()
}
