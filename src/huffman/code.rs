use std::fmt;

use super::tree::{HuffmanTree, Node, NodeKind};
use super::Symbol;

const ALPHABET_SIZE: usize = Symbol::MAX as usize + 1;
const FIXED_WIDTH_CODE_LENGTH: usize = Symbol::BITS as usize;

/// Path from the root to a leaf, `false` for left and `true` for right.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, bit: bool) -> Code {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Code { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeEntry {
    symbol: Symbol,
    frequency: usize,
    code: Code,
}

impl CodeEntry {
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn code(&self) -> &Code {
        &self.code
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBook {
    code_lookup_table: [Option<CodeEntry>; ALPHABET_SIZE],
}

impl CodeBook {
    pub fn new() -> Self {
        Self {
            code_lookup_table: [const { None }; ALPHABET_SIZE],
        }
    }

    fn insert_leaf(&mut self, symbol: Symbol, frequency: usize, code: Code) {
        // a lone leaf has no path but still needs one bit
        let code = if code.is_empty() { code.push(false) } else { code };
        self.code_lookup_table[symbol as usize] = Some(CodeEntry {
            symbol,
            frequency,
            code,
        });
    }

    pub fn get(&self, symbol: Symbol) -> Option<&CodeEntry> {
        self.code_lookup_table[symbol as usize].as_ref()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeEntry> {
        self.code_lookup_table.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn max_code_length(&self) -> usize {
        self.iter().map(|e| e.code.len()).max().unwrap_or(0)
    }

    /// Number of bits needed to encode the counted input with this code book.
    pub fn encoded_bit_count(&self) -> usize {
        self.iter().map(|e| e.frequency * e.code.len()).sum()
    }

    /// Number of bits needed to encode the counted input with one byte per symbol.
    pub fn fixed_width_bit_count(&self) -> usize {
        self.iter()
            .map(|e| e.frequency * FIXED_WIDTH_CODE_LENGTH)
            .sum()
    }

    pub fn is_prefix_free(&self) -> bool {
        self.iter().all(|entry| {
            self.iter()
                .filter(|other| other.symbol != entry.symbol)
                .all(|other| !entry.code.is_prefix_of(&other.code))
        })
    }
}

impl Default for CodeBook {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&HuffmanTree> for CodeBook {
    fn from(tree: &HuffmanTree) -> Self {
        let mut code_book = CodeBook::new();
        let mut node_stack: Vec<(Node, Code)> = vec![(tree.root(), Code::new())];
        while let Some((node, code)) = node_stack.pop() {
            match node.kind {
                NodeKind::Leaf { symbol } => code_book.insert_leaf(symbol, node.frequency, code),
                NodeKind::Inner { left, right } => {
                    node_stack.push((tree.node(right), code.push(true)));
                    node_stack.push((tree.node(left), code.push(false)));
                }
            }
        }
        code_book
    }
}
