//! Symbol-to-code tables for the traditional variant.
//!
//! Instead of re-walking the tree for every input byte, the encoder runs one
//! traversal up front and records each leaf's root-to-leaf path: left edges
//! append a 0, right edges a 1. Codes are stored left-justified in a
//! [`CODE_BITS`]-wide array so the bit stream can emit them directly.

use stolas_core::{Result, Symbol, SYMBOL_COUNT};

use crate::bitarray::BitArray;
use crate::tree::{HuffmanTree, NodeKind};
use crate::CODE_BITS;

/// One symbol's code.
#[derive(Debug, Clone)]
pub struct CodeEntry {
    /// Code bits, left-justified: the most significant `len` bits.
    pub code: BitArray,
    /// Code length in bits; 0 for symbols absent from the tree.
    pub len: u8,
}

impl CodeEntry {
    fn unused() -> Self {
        Self {
            code: BitArray::new(CODE_BITS),
            len: 0,
        }
    }
}

/// Lookup table mapping every symbol to its code.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
}

impl CodeTable {
    /// Derive the code table from a tree via an iterative parent-link walk.
    ///
    /// A lone root leaf gets the one-bit zero code; the decoder applies the
    /// matching rule when the rebuilt tree is a single leaf.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        let mut entries: Vec<CodeEntry> = (0..SYMBOL_COUNT).map(|_| CodeEntry::unused()).collect();

        let Some(root) = tree.root() else {
            return Ok(Self { entries });
        };

        // working code, right-justified: the deepest bit is bit CODE_BITS-1
        let mut code = BitArray::new(CODE_BITS);
        let mut depth = 0usize;
        let mut id = root;

        loop {
            // follow this branch all the way left
            while let NodeKind::Internal { left, .. } = tree.node(id).kind() {
                code.shift_left(1);
                id = left;
                depth += 1;
            }

            if let Some(symbol) = tree.node(id).symbol() {
                if depth == 0 {
                    // single-leaf tree: depth-1 code, all zero
                    entries[symbol as usize].len = 1;
                } else {
                    let mut stored = code.clone();
                    stored.shift_left(CODE_BITS - depth);
                    entries[symbol as usize] = CodeEntry {
                        code: stored,
                        len: depth as u8,
                    };
                }
            }

            loop {
                match tree.node(id).parent() {
                    Some(parent) => {
                        let NodeKind::Internal { right, .. } = tree.node(parent).kind() else {
                            unreachable!("parent is always internal");
                        };
                        if id != right {
                            // step across: replace the trailing 0 with a 1
                            code.set(CODE_BITS - 1)?;
                            id = right;
                            break;
                        }
                        code.shift_right(1);
                        depth -= 1;
                        id = parent;
                    }
                    None => break,
                }
            }

            if tree.node(id).parent().is_none() {
                break;
            }
        }

        Ok(Self { entries })
    }

    /// The entry for a symbol.
    #[inline]
    pub fn entry(&self, symbol: Symbol) -> &CodeEntry {
        &self.entries[symbol as usize]
    }

    /// Code length for a symbol; 0 means the symbol has no code.
    #[inline]
    pub fn len(&self, symbol: Symbol) -> u8 {
        self.entries[symbol as usize].len
    }

    /// Number of symbols with a code.
    pub fn active_symbols(&self) -> usize {
        self.entries.iter().filter(|e| e.len > 0).count()
    }
}
