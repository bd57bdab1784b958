use rustc_hash::FxHashMap;

/// Secondary index from category name to the ids of products in it.
///
/// The index holds only id strings, never product data; callers resolve ids
/// back through the product table. Ids are appended in ingestion order.
#[derive(Debug, Default)]
pub struct CategoryIndex {
    entries: FxHashMap<String, Vec<String>>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` under `category`, creating the category on first use.
    ///
    /// Appends are unconditional: a record's own category list is deduped
    /// upstream, but the index itself never deduplicates.
    pub fn register(&mut self, category: &str, id: &str) {
        self.entries
            .entry(category.to_string())
            .or_default()
            .push(id.to_string());
    }

    pub fn lookup(&self, category: &str) -> Option<&[String]> {
        self.entries.get(category).map(Vec::as_slice)
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
