//! Game catalog data model types, JSON loading, and catalog discovery.
//!
//! This crate reads the two kinds of input the tracker works from: the
//! master reference dataset of dead consoles and the per-console
//! `<slug>_games.json` catalog files sitting next to it.

pub mod discover;
pub mod error;
pub mod json;
pub mod types;

pub use discover::{
    DEFAULT_CATALOG_SUFFIX, DEFAULT_REFERENCE_FILENAME, Discovery, DiscoveryOptions, SkippedCatalog,
    derive_console_name, discover_catalogs, title_case,
};
pub use error::CatalogError;
pub use json::{load_catalog_file, load_reference};
pub use types::*;
