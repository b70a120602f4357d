//! Standard operator catalog.
//!
//! Assembles every category group into one catalog. The quant group is
//! registered as a manifest extension; the thor group is registered but
//! contributes nothing to the manifest.

use std::sync::OnceLock;

use opreg_core::{Catalog, CatalogBuilder, CategoryGroup, Manifest, OpDescriptor, Result};

use crate::groups::{array, comm, control, debug, image, inner, math, nn, other, quant, random, thor};

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Returns the base category groups, in import order.
///
/// The quant extension is not included; see [`standard_catalog`].
pub fn standard_groups() -> Result<Vec<CategoryGroup>> {
    Ok(vec![
        image::group()?,
        array::group()?,
        comm::group()?,
        debug::group()?,
        control::group()?,
        inner::group()?,
        math::group()?,
        random::group()?,
        nn::group()?,
        other::group()?,
        thor::group()?,
    ])
}

/// Builds a fresh catalog from the standard groups plus the quant extension.
///
/// Most callers want [`catalog`], which builds once per process.
pub fn standard_catalog() -> Result<Catalog> {
    standard_groups()?
        .into_iter()
        .fold(CatalogBuilder::new(), CatalogBuilder::group)
        .extension(quant::group()?)
        .build()
}

/// Returns the process-wide catalog, assembling it on first use.
///
/// Assembly errors are returned to every caller until a build succeeds.
pub fn catalog() -> Result<&'static Catalog> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    tracing::debug!("assembling standard operator catalog");
    let built = standard_catalog()?;
    Ok(CATALOG.get_or_init(|| built))
}

/// Looks up a descriptor in the process-wide catalog.
pub fn lookup(name: &str) -> Result<&'static OpDescriptor> {
    catalog()?.lookup(name)
}

/// Returns the process-wide export manifest.
pub fn manifest() -> Result<&'static Manifest> {
    Ok(catalog()?.manifest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use opreg_core::{Category, Error};

    #[test]
    fn test_catalog_is_shared() {
        let first = catalog().unwrap();
        let second = catalog().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_standard_catalog_matches_shared() {
        let fresh = standard_catalog().unwrap();
        assert_eq!(fresh.manifest(), catalog().unwrap().manifest());
    }

    #[test]
    fn test_base_groups_exclude_quant() {
        let groups = standard_groups().unwrap();
        assert!(groups.iter().all(|g| g.category() != Category::Quant));
        let order: Vec<Category> = groups.iter().map(CategoryGroup::category).collect();
        let expected: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|&c| c != Category::Quant)
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(matches!(lookup("NoSuchOp"), Err(Error::NotFound(_))));
    }
}
