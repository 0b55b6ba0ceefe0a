use std::collections::HashMap;

/// Names inserted during one parse, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    entries: Vec<String>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Inserts a name and returns its entry. Re-inserting returns the
    /// existing entry.
    pub fn insert(&mut self, name: &str) -> usize {
        if let Some(entry) = self.index.get(name) {
            return *entry;
        }

        let entry = self.entries.len();
        self.entries.push(String::from(name));
        self.index.insert(String::from(name), entry);
        entry
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn get(&self, entry: usize) -> Option<&str> {
        self.entries.get(entry).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
