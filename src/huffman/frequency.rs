use std::io::{self, ErrorKind, Read};

use super::{Symbol, SymbolFrequency};

const ALPHABET_SIZE: usize = Symbol::MAX as usize + 1;
const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Occurrence count of every byte value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    symbol_frequencies: [usize; ALPHABET_SIZE],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            symbol_frequencies: [usize::default(); ALPHABET_SIZE],
        }
    }

    /// Counts every byte of `reader` until end of stream.
    pub fn count<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut table = Self::new();
        let mut buffer = [0; READ_BUFFER_SIZE];
        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => buffer[..read]
                    .iter()
                    .for_each(|&symbol| table.increment_symbol(symbol)),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        log::info!(
            "Counted {} bytes with {} distinct symbols",
            table.total(),
            table.distinct_symbol_count()
        );
        Ok(table)
    }

    pub fn increment_symbol(&mut self, symbol: Symbol) {
        self.symbol_frequencies[symbol as usize] += 1;
    }

    pub fn frequency(&self, symbol: Symbol) -> usize {
        self.symbol_frequencies[symbol as usize]
    }

    pub fn total(&self) -> usize {
        self.symbol_frequencies.iter().sum()
    }

    pub fn distinct_symbol_count(&self) -> usize {
        self.symbol_frequencies.iter().filter(|&&f| f > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct_symbol_count() == 0
    }

    /// Symbols with a non-zero count, in ascending symbol order.
    pub fn to_symbol_frequencies(&self) -> Vec<SymbolFrequency> {
        (0..=Symbol::MAX)
            .zip(self.symbol_frequencies.iter().copied())
            .filter(|&(_, f)| f > 0)
            .map(SymbolFrequency::from)
            .collect()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FromIterator<&'a Symbol> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = &'a Symbol>>(symbols: T) -> Self {
        let mut table = Self::new();
        for &symbol in symbols {
            table.increment_symbol(symbol);
        }
        table
    }
}
