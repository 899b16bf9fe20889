//! Per-symbol record histories and the collection that owns them.

use crate::domain::analyser::Analyser;
use crate::domain::record::Record;
use std::collections::HashMap;

/// Records for one symbol, in the order they were read.
#[derive(Debug, Clone)]
pub struct SymbolHistory {
    symbol: String,
    records: Vec<Record>,
}

impl SymbolHistory {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            records: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Feed every record, oldest first, to `analyser`.
    ///
    /// Neither resets the analyser nor reads its result.
    pub fn analyse<A: Analyser + ?Sized>(&self, analyser: &mut A) {
        for record in &self.records {
            analyser.process(record);
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }
}

/// Symbol -> history map. Symbols are case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct StockCollection {
    histories: HashMap<String, SymbolHistory>,
}

impl StockCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the history for `symbol`, registering an empty one first if
    /// the symbol has not been seen.
    pub fn get_or_create(&mut self, symbol: &str) -> &mut SymbolHistory {
        self.histories
            .entry(symbol.to_string())
            .or_insert_with(|| SymbolHistory::new(symbol))
    }

    pub fn get(&self, symbol: &str) -> Option<&SymbolHistory> {
        self.histories.get(symbol)
    }

    /// Known symbols, sorted.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.histories.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn len(&self) -> usize {
        self.histories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.histories.values().map(SymbolHistory::len).sum()
    }
}
