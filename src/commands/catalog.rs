//! Catalog inspection

use crate::catalog::{Catalog, CatalogError, load_default, load_from_file};
use crate::output::print_catalog_summary;
use chrono::NaiveDate;
use std::path::Path;

/// Load a catalog (the embedded one when `path` is `None`)
///
/// # Errors
///
/// Returns `CatalogError` if the catalog cannot be read or fails validation.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => load_from_file(path),
        None => load_default(),
    }
}

/// Validate a catalog and print an overview
///
/// # Errors
///
/// Returns `CatalogError` if the catalog cannot be read or fails validation.
pub fn check_catalog(path: Option<&Path>, today: NaiveDate) -> Result<Catalog, CatalogError> {
    let catalog = load_catalog(path)?;
    print_catalog_summary(&catalog, today);
    Ok(catalog)
}
