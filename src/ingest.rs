use crate::clean::{clean_price, extract_categories, join_categories, sanitize};
use crate::config::{
    COL_ABOUT_PRODUCT, COL_ASIN, COL_BRAND_NAME, COL_CATEGORY, COL_LIST_PRICE, COL_MODEL_NUMBER,
    COL_PRODUCT_DESCRIPTION, COL_PRODUCT_NAME, COL_QUANTITY, COL_SELLING_PRICE, COL_STOCK,
    COL_UNIQ_ID, PROGRESS_INTERVAL,
};
use crate::header::HeaderMap;
use crate::index::CategoryIndex;
use crate::models::Product;
use crate::record::{split_record, RecordReader};
use crate::table::HashTable;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Counters collected during a single ingestion pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestStats {
    /// Non-empty data records read (header excluded).
    pub records_read: u64,
    /// Products inserted under a fresh id.
    pub products_loaded: u64,
    /// Records dropped because the primary key sanitized to empty.
    pub skipped_missing_id: u64,
    /// Re-insertions that replaced an existing id.
    pub duplicate_ids: u64,
    /// Category memberships registered in the index.
    pub category_links: u64,
}

/// The loaded dataset: product table, category index, and pass statistics.
///
/// Owned, constructor-produced state; consumers receive it explicitly
/// instead of reading globals. Read-only after ingestion completes.
#[derive(Debug)]
pub struct Inventory {
    pub table: HashTable<Product>,
    pub categories: CategoryIndex,
    pub stats: IngestStats,
}

impl Inventory {
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.table.get(id)
    }

    /// Ids of the products in `category`, or `None` for an unknown one.
    pub fn lookup_category(&self, category: &str) -> Option<&[String]> {
        self.categories.lookup(category)
    }
}

/// Loads an inventory CSV from disk.
///
/// Failure to open or read the file is the only error surfaced; per-record
/// anomalies are absorbed as skips.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Inventory> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open inventory csv at: {}", path.display()))?;
    info!("Loading inventory from: {}", path.display());
    from_reader(BufReader::new(file))
}

/// One-shot ingestion pass over a line-oriented CSV stream.
///
/// The first record is the header; every following record is assembled,
/// tokenized, cleaned, and inserted into the table plus registered in the
/// category index. Records with no usable primary key are skipped.
pub fn from_reader(reader: impl BufRead) -> Result<Inventory> {
    let mut records = RecordReader::new(reader);
    let header_record = records
        .next_record()
        .context("Failed to read header record")?
        .context("Input is empty, expected a header record")?;
    let header = HeaderMap::new(&split_record(&header_record));

    let mut table = HashTable::new();
    let mut categories = CategoryIndex::new();
    let mut stats = IngestStats::default();
    let pb = ProgressBar::new_spinner();

    while let Some(record) = records.next_record()? {
        if record.is_empty() {
            continue;
        }
        let row = split_record(&record);
        stats.records_read += 1;

        let Some(product) = product_from_row(&header, &row) else {
            stats.skipped_missing_id += 1;
            continue;
        };
        for category in &product.categories {
            categories.register(category, &product.uniq_id);
            stats.category_links += 1;
        }
        if table.insert(product.uniq_id.clone(), product) {
            stats.products_loaded += 1;
        } else {
            stats.duplicate_ids += 1;
        }

        if stats.records_read % PROGRESS_INTERVAL == 0 {
            pb.tick();
        }
    }
    pb.finish_and_clear();

    info!(
        products = table.len(),
        categories = categories.len(),
        skipped = stats.skipped_missing_id,
        "Inventory loaded"
    );

    Ok(Inventory {
        table,
        categories,
        stats,
    })
}

/// Builds a cleaned product from one tokenized row, or `None` when the
/// primary key sanitizes to empty.
fn product_from_row(header: &HeaderMap, row: &[String]) -> Option<Product> {
    let uniq_id = sanitize(header.field(row, COL_UNIQ_ID));
    if uniq_id.is_empty() {
        return None;
    }

    let categories = extract_categories(&sanitize(header.field(row, COL_CATEGORY)));
    let category = join_categories(&categories);

    let mut product_description = sanitize(header.field(row, COL_PRODUCT_DESCRIPTION));
    if product_description.is_empty() {
        product_description = sanitize(header.field(row, COL_ABOUT_PRODUCT));
    }

    Some(Product {
        uniq_id,
        product_name: sanitize(header.field(row, COL_PRODUCT_NAME)),
        brand_name: sanitize(header.field(row, COL_BRAND_NAME)),
        category,
        categories,
        list_price: clean_price(header.field(row, COL_LIST_PRICE)),
        selling_price: clean_price(header.field(row, COL_SELLING_PRICE)),
        quantity: sanitize(header.field(row, COL_QUANTITY)),
        asin: sanitize(header.field(row, COL_ASIN)),
        model_number: sanitize(header.field(row, COL_MODEL_NUMBER)),
        product_description,
        stock: sanitize(header.field(row, COL_STOCK)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(input: &str) -> Inventory {
        from_reader(Cursor::new(input.to_string())).unwrap()
    }

    #[test]
    fn loads_products_and_categories() {
        let inv = load("Uniq Id,Product Name,Category\nid1,Widget,\"A | B\"\nid2,Gadget,\n");
        assert_eq!(inv.find("id1").unwrap().product_name, "Widget");
        assert_eq!(inv.find("id1").unwrap().categories, vec!["A", "B"]);
        assert_eq!(inv.find("id2").unwrap().categories, vec!["NA"]);
        assert_eq!(inv.lookup_category("A"), Some(&["id1".to_string()][..]));
        assert_eq!(inv.lookup_category("Z"), None);
        assert_eq!(inv.stats.products_loaded, 2);
    }

    #[test]
    fn missing_id_record_skipped_everywhere() {
        let inv = load("Uniq Id,Product Name,Category\n,NoId,A\nid1,Ok,A\n");
        assert_eq!(inv.table.len(), 1);
        assert_eq!(inv.lookup_category("A"), Some(&["id1".to_string()][..]));
        assert_eq!(inv.stats.skipped_missing_id, 1);
    }

    #[test]
    fn empty_input_fails() {
        assert!(from_reader(Cursor::new(String::new())).is_err());
    }

    #[test]
    fn description_falls_back_to_about_product() {
        let inv = load(
            "Uniq Id,Product Description,About Product\nid1, ,about text\nid2,real desc,about\n",
        );
        assert_eq!(inv.find("id1").unwrap().product_description, "about text");
        assert_eq!(inv.find("id2").unwrap().product_description, "real desc");
    }

    #[test]
    fn duplicate_id_replaces_value() {
        let inv = load("Uniq Id,Product Name,Category\nid1,First,A\nid1,Second,B\n");
        assert_eq!(inv.table.len(), 1);
        assert_eq!(inv.find("id1").unwrap().product_name, "Second");
        assert_eq!(inv.stats.products_loaded, 1);
        assert_eq!(inv.stats.duplicate_ids, 1);
        // Both memberships were registered; the index never compensates.
        assert_eq!(inv.lookup_category("A"), Some(&["id1".to_string()][..]));
        assert_eq!(inv.lookup_category("B"), Some(&["id1".to_string()][..]));
    }

    #[test]
    fn category_display_matches_list() {
        let inv = load("Uniq Id,Category\nid1,\"B | A | B\"\n");
        let p = inv.find("id1").unwrap();
        assert_eq!(p.categories, vec!["B", "A"]);
        assert_eq!(p.category, "B | A");
    }
}
