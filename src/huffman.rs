use code::CodeBook;
use frequency::FrequencyTable;
use tree::{HuffmanTree, HuffmanTreeBuilder};

pub mod code;
pub mod frequency;
pub mod priority_queue;
pub mod tree;

pub type Symbol = u8;

/// Symbol reported for inner nodes in the pre-order dump of a tree.
pub const INNER_NODE_PLACEHOLDER: Symbol = b'*';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Result of running the whole frequency, tree and code book pipeline.
///
/// Empty input produces neither a tree nor any code.
pub struct Analysis {
    frequencies: FrequencyTable,
    tree: Option<HuffmanTree>,
    code_book: CodeBook,
}

impl Analysis {
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn code_book(&self) -> &CodeBook {
        &self.code_book
    }
}

impl From<FrequencyTable> for Analysis {
    fn from(frequencies: FrequencyTable) -> Self {
        let tree = match HuffmanTreeBuilder::from(&frequencies).build() {
            Ok(tree) => Some(tree),
            Err(e) => {
                log::warn!("{}, the input is empty", e);
                None
            }
        };
        let code_book = tree.as_ref().map(CodeBook::from).unwrap_or_default();
        Self {
            frequencies,
            tree,
            code_book,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{frequency::FrequencyTable, Analysis};

    #[test]
    fn test_empty_input_has_neither_tree_nor_codes() {
        let analysis = Analysis::from(FrequencyTable::new());
        assert!(analysis.tree().is_none());
        assert!(analysis.code_book().is_empty());
    }

    #[test]
    fn test_every_counted_symbol_gets_a_code() {
        let analysis = Analysis::from(FrequencyTable::from_iter(b"hello world".iter()));
        let frequencies = analysis.frequencies().to_symbol_frequencies();
        assert_eq!(analysis.code_book().len(), frequencies.len());
        for sf in frequencies {
            let entry = analysis
                .code_book()
                .get(sf.symbol)
                .expect("counted symbol has no code");
            assert_eq!(entry.frequency(), sf.frequency);
        }
    }
}
