//! Record store and dataset ingestion.
//!
//! The store holds the whole dataset in memory; the loader is the only place
//! where raw cell values are parsed and sanitized.

pub mod loader;
pub mod record_store;

pub use loader::{load_csv, load_dataset, load_json, DatasetFormat};
pub use record_store::{KeyField, RecordStore};
