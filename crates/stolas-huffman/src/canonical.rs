//! Canonical code assignment.
//!
//! A canonical code is fully determined by its length table: both sides sort
//! the 256 byte symbols by `(code_len, symbol)` and replay the same
//! arithmetic, so the header only needs one length byte per symbol.
//!
//! Assignment walks the sorted list backwards from the longest code with a
//! 256-bit accumulator: equal-length neighbours differ by exactly one,
//! and crossing into a shorter length discards the low bits. The entry at
//! the very end of the list (longest length, largest symbol) gets code 0.

use stolas_core::{Symbol, BYTE_SYMBOLS};

use crate::bitarray::BitArray;
use crate::tree::HuffmanTree;
use crate::CODE_BITS;

/// One symbol's canonical code.
#[derive(Debug, Clone)]
pub struct CanonicalEntry {
    /// The byte symbol this entry encodes.
    pub symbol: Symbol,
    /// Code length in bits; 0 for unused symbols.
    pub len: u8,
    /// Code bits, left-justified.
    pub code: BitArray,
}

/// A complete canonical code over the 256 byte symbols.
///
/// Entries are held sorted by `(len, symbol)` with unused symbols first;
/// a per-symbol index serves encoder lookups and a per-length index serves
/// the decoder's window scan.
#[derive(Debug, Clone)]
pub struct CanonicalCode {
    /// All 256 entries, sorted by `(len, symbol)`.
    entries: Vec<CanonicalEntry>,
    /// Symbol -> index into `entries`.
    by_symbol: Vec<u16>,
    /// Length -> first index in `entries` with that code length, or
    /// `BYTE_SYMBOLS` when no code has it. Indexed `0..=256`.
    len_index: Vec<usize>,
    /// Longest assigned code length.
    max_len: u8,
}

impl CanonicalCode {
    /// Derive the canonical code for a tree built over byte symbols.
    ///
    /// Code lengths are leaf depths; a lone root leaf counts as depth 1 so
    /// a single-symbol input still gets a one-bit code.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut lengths = [0u8; BYTE_SYMBOLS];
        tree.for_each_leaf(|symbol, _, depth| {
            lengths[symbol as usize] = depth.max(1) as u8;
        });
        Self::from_lengths(&lengths)
    }

    /// Rebuild the canonical code from a header's length table.
    pub fn from_lengths(lengths: &[u8; BYTE_SYMBOLS]) -> Self {
        let mut entries: Vec<CanonicalEntry> = lengths
            .iter()
            .enumerate()
            .map(|(symbol, &len)| CanonicalEntry {
                symbol: symbol as Symbol,
                len,
                code: BitArray::new(CODE_BITS),
            })
            .collect();

        entries.sort_by_key(|e| (e.len, e.symbol));

        Self::assign(&mut entries);

        let mut by_symbol = vec![0u16; BYTE_SYMBOLS];
        for (index, entry) in entries.iter().enumerate() {
            by_symbol[entry.symbol as usize] = index as u16;
        }

        let mut len_index = vec![BYTE_SYMBOLS; CODE_BITS + 1];
        for (index, entry) in entries.iter().enumerate() {
            let slot = &mut len_index[entry.len as usize];
            if *slot == BYTE_SYMBOLS {
                *slot = index;
            }
        }

        let max_len = entries.last().map(|e| e.len).unwrap_or(0);

        Self {
            entries,
            by_symbol,
            len_index,
            max_len,
        }
    }

    /// Assign codes to a `(len, symbol)`-sorted list.
    fn assign(entries: &mut [CanonicalEntry]) {
        let mut accumulator = BitArray::new(CODE_BITS);
        let Some(last) = entries.last() else {
            return;
        };
        let mut current_len = last.len;

        for entry in entries.iter_mut().rev() {
            // the list is sorted, so the first zero length ends the walk
            if entry.len == 0 {
                break;
            }

            if entry.len < current_len {
                accumulator.shift_right((current_len - entry.len) as usize);
                current_len = entry.len;
            }

            let mut stored = accumulator.clone();
            stored.shift_left(CODE_BITS - current_len as usize);
            entry.code = stored;

            accumulator.increment();
        }
    }

    /// The entry for a byte symbol.
    #[inline]
    pub fn entry(&self, symbol: u8) -> &CanonicalEntry {
        &self.entries[self.by_symbol[symbol as usize] as usize]
    }

    /// All entries in `(len, symbol)` order.
    #[inline]
    pub fn sorted_entries(&self) -> &[CanonicalEntry] {
        &self.entries
    }

    /// First sorted-entry index holding each code length, `BYTE_SYMBOLS`
    /// when the length is unused.
    #[inline]
    pub fn len_index(&self) -> &[usize] {
        &self.len_index
    }

    /// Longest assigned code length; 0 when no symbol has a code.
    #[inline]
    pub fn max_len(&self) -> u8 {
        self.max_len
    }

    /// Per-symbol length table, as written to the canonical header.
    pub fn lengths(&self) -> [u8; BYTE_SYMBOLS] {
        let mut out = [0u8; BYTE_SYMBOLS];
        for entry in &self.entries {
            out[entry.symbol as usize] = entry.len;
        }
        out
    }

    /// Number of symbols with a code.
    pub fn active_symbols(&self) -> usize {
        self.entries.iter().filter(|e| e.len > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use stolas_core::SliceReader;

    fn canonical_for(input: &[u8]) -> CanonicalCode {
        let mut reader = SliceReader::new(input);
        let freq = FrequencyTable::scan(&mut reader).unwrap();
        let tree = HuffmanTree::build(&freq);
        CanonicalCode::from_tree(&tree)
    }

    fn code_bits(entry: &CanonicalEntry) -> String {
        (0..entry.len as usize)
            .map(|i| {
                if entry.code.test(i).unwrap() {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }

    #[test]
    fn test_three_symbol_assignment() {
        // lengths: a=1, b=2, c=2; the backwards walk gives the largest
        // symbol of the longest length code 0
        let mut lengths = [0u8; BYTE_SYMBOLS];
        lengths[b'a' as usize] = 1;
        lengths[b'b' as usize] = 2;
        lengths[b'c' as usize] = 2;

        let code = CanonicalCode::from_lengths(&lengths);
        assert_eq!(code_bits(code.entry(b'c')), "00");
        assert_eq!(code_bits(code.entry(b'b')), "01");
        assert_eq!(code_bits(code.entry(b'a')), "1");
        assert_eq!(code.max_len(), 2);
        assert_eq!(code.active_symbols(), 3);
    }

    #[test]
    fn test_codes_decrease_along_sorted_list() {
        // the accumulator grows as the walk moves toward shorter codes, so
        // left-justified codes are strictly decreasing in (len, symbol)
        // order over the active entries
        let code = canonical_for(b"an example with a realistic spread of letters");
        let active: Vec<_> = code
            .sorted_entries()
            .iter()
            .filter(|e| e.len > 0)
            .collect();
        for pair in active.windows(2) {
            assert_eq!(
                pair[0].code.compare(&pair[1].code).unwrap(),
                std::cmp::Ordering::Greater,
                "codes for {} and {} out of order",
                pair[0].symbol,
                pair[1].symbol
            );
        }
    }

    #[test]
    fn test_equal_length_neighbours_step_by_one() {
        let code = canonical_for(b"mississippi");
        let active: Vec<_> = code
            .sorted_entries()
            .iter()
            .filter(|e| e.len > 0)
            .collect();
        for pair in active.windows(2) {
            if pair[0].len != pair[1].len {
                continue;
            }
            // same length: the earlier symbol's code is the later plus one
            let mut bumped = pair[1].code.clone();
            bumped.shift_right(CODE_BITS - pair[1].len as usize);
            bumped.increment();
            bumped.shift_left(CODE_BITS - pair[1].len as usize);
            assert_eq!(bumped.compare(&pair[0].code).unwrap(), std::cmp::Ordering::Equal);
        }
    }

    #[test]
    fn test_determinism_from_lengths() {
        let code = canonical_for(b"determinism determinism determinism");
        let rebuilt = CanonicalCode::from_lengths(&code.lengths());

        for symbol in 0u8..=255 {
            let a = code.entry(symbol);
            let b = rebuilt.entry(symbol);
            assert_eq!(a.len, b.len);
            assert_eq!(a.code.compare(&b.code).unwrap(), std::cmp::Ordering::Equal);
        }
    }

    #[test]
    fn test_prefix_free() {
        let code = canonical_for(b"the quick brown fox jumps over the lazy dog");
        let active: Vec<_> = code
            .sorted_entries()
            .iter()
            .filter(|e| e.len > 0)
            .collect();
        for x in &active {
            for y in &active {
                if x.symbol == y.symbol {
                    continue;
                }
                let shared = (x.len.min(y.len)) as usize;
                let bx = code_bits(x);
                let by = code_bits(y);
                assert_ne!(&bx[..shared], &by[..shared]);
            }
        }
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let code = canonical_for(b"AAAAAAAAAA");
        assert_eq!(code.entry(b'A').len, 1);
        assert!(code.entry(b'A').code.is_zero());
        assert_eq!(code.active_symbols(), 1);
    }

    #[test]
    fn test_all_bytes_once_gives_uniform_eight() {
        let data: Vec<u8> = (0u8..=255).collect();
        let code = canonical_for(&data);
        for symbol in 0u8..=255 {
            assert_eq!(code.entry(symbol).len, 8, "symbol {}", symbol);
        }
    }

    #[test]
    fn test_kraft_equality_for_complete_code() {
        let code = canonical_for(b"kraft kraft kraft inequality");
        let sum: f64 = code
            .sorted_entries()
            .iter()
            .filter(|e| e.len > 0)
            .map(|e| 2f64.powi(-(e.len as i32)))
            .sum();
        assert!(sum <= 1.0 + 1e-12);
    }

    #[test]
    fn test_len_index_points_at_first_of_length() {
        let code = canonical_for(b"aaabbc");
        let len_index = code.len_index();
        let entries = code.sorted_entries();

        for len in 1..=code.max_len() as usize {
            let first = len_index[len];
            if first == BYTE_SYMBOLS {
                continue;
            }
            assert_eq!(entries[first].len as usize, len);
            assert!(first == 0 || (entries[first - 1].len as usize) < len);
        }
        // lengths past max_len are unused
        assert_eq!(len_index[code.max_len() as usize + 1], BYTE_SYMBOLS);
    }

    #[test]
    fn test_empty_input_has_no_codes() {
        let code = canonical_for(b"");
        assert_eq!(code.active_symbols(), 0);
        assert_eq!(code.max_len(), 0);
    }
}
