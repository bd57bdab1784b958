use rustc_hash::FxHashMap;

/// Maps trimmed column names from the header record to zero-based positions.
///
/// Column order in the input is irrelevant to callers; a recognized column
/// that is absent simply resolves to no position, and [`HeaderMap::field`]
/// degrades that to an empty string.
#[derive(Debug)]
pub struct HeaderMap {
    columns: FxHashMap<String, usize>,
}

impl HeaderMap {
    /// Builds the map from the tokenized header record. Duplicate column
    /// names keep the last occurrence.
    pub fn new(header_row: &[String]) -> Self {
        let mut columns = FxHashMap::default();
        for (i, name) in header_row.iter().enumerate() {
            columns.insert(name.trim().to_string(), i);
        }
        Self { columns }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    /// Looks `name` up in `row`, returning `""` when the column is missing
    /// from the header or the row is too short.
    pub fn field<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.get(name)
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn maps_names_to_positions() {
        let h = HeaderMap::new(&row(&["Uniq Id", "Product Name", "Category"]));
        assert_eq!(h.get("Uniq Id"), Some(0));
        assert_eq!(h.get("Category"), Some(2));
        assert_eq!(h.get("Nope"), None);
    }

    #[test]
    fn names_are_trimmed() {
        let h = HeaderMap::new(&row(&["  Uniq Id ", "Brand Name"]));
        assert_eq!(h.get("Uniq Id"), Some(0));
        assert_eq!(h.get("Brand Name"), Some(1));
    }

    #[test]
    fn duplicate_column_last_wins() {
        let h = HeaderMap::new(&row(&["Id", "Name", "Id"]));
        assert_eq!(h.get("Id"), Some(2));
        // The duplicate collapses to one mapping.
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn empty_header() {
        let h = HeaderMap::new(&[]);
        assert!(h.is_empty());
        assert_eq!(h.field(&row(&["x"]), "Id"), "");
    }

    #[test]
    fn field_degrades_to_empty() {
        let h = HeaderMap::new(&row(&["Id", "Name"]));
        let r = row(&["x1", "Widget"]);
        assert_eq!(h.field(&r, "Name"), "Widget");
        assert_eq!(h.field(&r, "Missing"), "");
        // Row shorter than the header.
        let short = row(&["x1"]);
        assert_eq!(h.field(&short, "Name"), "");
    }
}
