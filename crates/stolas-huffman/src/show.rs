//! Human-readable code listings.
//!
//! Mirrors the on-wire derivation of each variant without producing a
//! stream: scan the input, build the code, and print one line per active
//! symbol.

use stolas_core::{ByteReader, ByteWriter, Result, Symbol, EOF_SYMBOL, SYMBOL_COUNT};

use crate::bitarray::BitArray;
use crate::canonical::CanonicalCode;
use crate::code::CodeTable;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;

fn write_str<W: ByteWriter>(writer: &mut W, text: &str) -> Result<()> {
    for byte in text.bytes() {
        writer.write_byte(byte)?;
    }
    Ok(())
}

fn bits_of(code: &BitArray, len: u8) -> String {
    (0..len as usize)
        .map(|i| {
            if code.test(i).unwrap_or(false) {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

fn symbol_label(symbol: Symbol) -> String {
    if symbol == EOF_SYMBOL {
        "EOF  ".to_string()
    } else {
        format!("0x{:02X} ", symbol)
    }
}

/// List each active symbol with its count and traditional code.
pub fn show_tree_traditional<R, W>(reader: &mut R, writer: &mut W) -> Result<()>
where
    R: ByteReader,
    W: ByteWriter,
{
    let mut freq = FrequencyTable::scan(reader)?;
    freq.mark_eof();
    let tree = HuffmanTree::build(&freq);
    let table = CodeTable::from_tree(&tree)?;

    write_str(writer, "Char  Count      Encoding\n")?;
    write_str(writer, "----- ---------- ----------------\n")?;

    for symbol in 0..SYMBOL_COUNT as Symbol {
        let entry = table.entry(symbol);
        if entry.len == 0 {
            continue;
        }
        let line = format!(
            "{} {:10} {}\n",
            symbol_label(symbol),
            freq.count(symbol),
            bits_of(&entry.code, entry.len)
        );
        write_str(writer, &line)?;
    }

    writer.close()
}

/// List each active symbol with its code length and canonical code.
pub fn show_tree_canonical<R, W>(reader: &mut R, writer: &mut W) -> Result<()>
where
    R: ByteReader,
    W: ByteWriter,
{
    let freq = FrequencyTable::scan(reader)?;
    let tree = HuffmanTree::build(&freq);
    let code = CanonicalCode::from_tree(&tree);

    write_str(writer, "Char  CodeLen  Encoding\n")?;
    write_str(writer, "----- -------- ----------------\n")?;

    for symbol in 0u16..256 {
        let entry = code.entry(symbol as u8);
        if entry.len == 0 {
            continue;
        }
        let line = format!(
            "{} {:02}       {}\n",
            symbol_label(symbol),
            entry.len,
            bits_of(&entry.code, entry.len)
        );
        write_str(writer, &line)?;
    }

    writer.close()
}
