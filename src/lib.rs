//! Argus: product inventory ingestion and query engine
//!
//! This crate loads a flat product CSV into an in-memory associative store in
//! a single pass and answers lookups against it:
//!
//! 1. **Ingestion Pass** -- Assemble logical records (quoted fields may span
//!    physical lines), tokenize and clean each field, and populate a hash
//!    table keyed by product id plus a category-to-ids index
//! 2. **Query Phase** -- Serve read-only `find`-by-id and category listings
//!    from the loaded [`ingest::Inventory`]; nothing mutates after the pass
//!
//! # Architecture
//!
//! The parser and the store are hand-built rather than pulled off the shelf,
//! and carry the interesting behavior:
//!
//! - **Record assembly** -- A line with an unterminated quoted region is
//!   extended with the following lines until the quote closes, so embedded
//!   newlines survive tokenization
//! - **Chained hash table** -- `Vec` buckets of append-ordered chains with
//!   full-key comparison, rehashing to `2n + 1` buckets past a 0.9 load
//!   factor
//! - **Category index** -- Non-owning id back-references; lookups re-resolve
//!   through the table
//! - **Lenient ingestion** -- Records without a usable primary key are
//!   skipped, missing columns degrade to empty fields, and a quote left open
//!   at end of file keeps whatever text was accumulated
//!
//! # Key Modules
//!
//! - [`record`] -- Logical record assembly and field tokenization
//! - [`clean`] -- Field sanitization, price cleaning, category extraction
//! - [`header`] -- Column-name-to-position resolution
//! - [`table`] -- Generic string-keyed chained hash table
//! - [`index`] -- Category-to-ids secondary index
//! - [`ingest`] -- The one-shot CSV loading pass
//! - [`models`] -- The cleaned [`models::Product`] record
//! - [`config`] -- Constants for table sizing and recognized columns
//!
//! # Example Usage
//!
//! ```bash
//! # Interactive queries against a dataset
//! argus repl -i inventory.csv
//!
//! # One-shot lookup, JSON output
//! argus find -i inventory.csv B00XYZ --json
//!
//! # Everything in one category
//! argus list -i inventory.csv "Toys & Games"
//! ```

pub mod clean;
pub mod config;
pub mod header;
pub mod index;
pub mod ingest;
pub mod models;
pub mod record;
pub mod table;
