/// Initial bucket count for a freshly created product table
pub const DEFAULT_BUCKET_COUNT: usize = 1_003;

/// Load factor beyond which the hash table rehashes to `2n + 1` buckets
pub const MAX_LOAD_FACTOR: f64 = 0.9;

/// Separator used when joining a product's categories for display
pub const CATEGORY_SEPARATOR: &str = " | ";

/// Placeholder category for records whose category field cleans to nothing
pub const MISSING_CATEGORY: &str = "NA";

/// Progress update interval (tick every N records)
pub const PROGRESS_INTERVAL: u64 = 1000;

/// Recognized column names, matched exactly after trimming
pub const COL_UNIQ_ID: &str = "Uniq Id";
pub const COL_PRODUCT_NAME: &str = "Product Name";
pub const COL_BRAND_NAME: &str = "Brand Name";
pub const COL_CATEGORY: &str = "Category";
pub const COL_LIST_PRICE: &str = "List Price";
pub const COL_SELLING_PRICE: &str = "Selling Price";
pub const COL_QUANTITY: &str = "Quantity";
pub const COL_ASIN: &str = "Asin";
pub const COL_MODEL_NUMBER: &str = "Model Number";
pub const COL_PRODUCT_DESCRIPTION: &str = "Product Description";
pub const COL_ABOUT_PRODUCT: &str = "About Product";
pub const COL_STOCK: &str = "Stock";
