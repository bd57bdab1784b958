use serde::Serialize;

/// One cleaned inventory record, immutable after construction.
///
/// Prices and quantities stay as text: the source data mixes currency
/// symbols, ranges, and blanks, and nothing downstream does arithmetic on
/// them. `category` is purely derived from `categories` and the two never
/// diverge.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub uniq_id: String,
    pub product_name: String,
    pub brand_name: String,
    /// Display join of `categories`, e.g. `"A | B | C"`.
    pub category: String,
    /// Individual categories for indexing; deduped, insertion-ordered,
    /// never empty (`["NA"]` when the source field cleans to nothing).
    pub categories: Vec<String>,
    pub list_price: String,
    pub selling_price: String,
    pub quantity: String,
    pub asin: String,
    pub model_number: String,
    pub product_description: String,
    pub stock: String,
}
