//! Catalog assembly: merging category groups into one registry and manifest.

use crate::attr::Attributes;
use crate::descriptor::OpDescriptor;
use crate::group::CategoryGroup;
use crate::manifest::{Manifest, ManifestBuilder};
use crate::operator::Operator;
use crate::registry::OperatorRegistry;
use crate::{Error, Result};

/// An assembled, immutable view of every registered operator plus the
/// export manifest.
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: OperatorRegistry,
    manifest: Manifest,
}

impl Catalog {
    /// Merge `groups` into one catalog.
    ///
    /// Every entry is registered; public entries form the manifest. A name
    /// defined by two groups fails with [`Error::DuplicateOperator`].
    pub fn assemble<I>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = CategoryGroup>,
    {
        groups
            .into_iter()
            .fold(CatalogBuilder::new(), CatalogBuilder::group)
            .build()
    }

    /// Add `extra` names to the manifest.
    ///
    /// Each name must resolve in the registry, otherwise this fails with
    /// [`Error::UnresolvedExport`]. Internal operators cannot be exported and
    /// fail with [`Error::InvalidName`].
    pub fn extend<I, S>(self, extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extra: Vec<String> = extra.into_iter().map(Into::into).collect();
        for name in &extra {
            self.check_exportable(name)?;
        }

        Ok(Self {
            manifest: self.manifest.extend(extra),
            registry: self.registry,
        })
    }

    /// Look up a descriptor by name, exported or not.
    pub fn lookup(&self, name: &str) -> Result<&OpDescriptor> {
        self.registry.lookup(name)
    }

    /// Construct an operator instance by name.
    pub fn instantiate(&self, name: &str, attrs: &Attributes) -> Result<Box<dyn Operator>> {
        self.registry.instantiate(name, attrs)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn is_exported(&self, name: &str) -> bool {
        self.manifest.contains(name)
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Check that every manifest name resolves to a public descriptor.
    pub fn verify(&self) -> Result<()> {
        self.manifest
            .iter()
            .try_for_each(|name| self.check_exportable(name))
    }

    fn check_exportable(&self, name: &str) -> Result<()> {
        let descriptor = self
            .registry
            .get(name)
            .ok_or_else(|| Error::UnresolvedExport(name.to_string()))?;
        if !descriptor.is_public() {
            return Err(Error::InvalidName(format!(
                "'{name}' is internal and cannot be exported"
            )));
        }
        Ok(())
    }
}

/// Collects base groups and extension groups, then builds a [`Catalog`].
///
/// Base groups contribute to the manifest's base list. Extension groups are
/// registered the same way but their public names are appended afterwards,
/// before the final sort.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    groups: Vec<CategoryGroup>,
    extensions: Vec<CategoryGroup>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a base group.
    pub fn group(mut self, group: CategoryGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Add a group whose public names extend the base manifest.
    pub fn extension(mut self, group: CategoryGroup) -> Self {
        self.extensions.push(group);
        self
    }

    #[tracing::instrument(
        skip_all,
        fields(groups = self.groups.len(), extensions = self.extensions.len())
    )]
    pub fn build(self) -> Result<Catalog> {
        let mut registry = OperatorRegistry::new();
        let mut manifest = ManifestBuilder::new();

        for group in self.groups {
            let public: Vec<&'static str> = group.public_names().collect();
            tracing::debug!(
                category = %group.category(),
                operators = group.len(),
                public = public.len(),
                "registering group"
            );
            manifest = manifest.base(public);
            for descriptor in group {
                registry.register(descriptor)?;
            }
        }

        for group in self.extensions {
            let public: Vec<&'static str> = group.public_names().collect();
            tracing::debug!(
                category = %group.category(),
                operators = group.len(),
                public = public.len(),
                "registering extension group"
            );
            manifest = manifest.extend(group.category().as_str(), public);
            for descriptor in group {
                registry.register(descriptor)?;
            }
        }

        let catalog = Catalog {
            registry,
            manifest: manifest.finish(),
        };
        catalog.verify()?;

        tracing::info!(
            operators = catalog.registry.len(),
            exported = catalog.manifest.len(),
            "operator catalog assembled"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::descriptor::OpSchema;

    static RESHAPE: OpSchema = OpSchema::new("Reshape", &["tensor", "shape"], &["output"]);
    static ABS: OpSchema = OpSchema::new("Abs", &["input_x"], &["output"]);
    static FAKE_QUANT: OpSchema = OpSchema::new("FakeQuant", &["x", "min", "max"], &["out"]);
    static VIRTUAL_DIV: OpSchema = OpSchema::new("_VirtualDiv", &["x"], &["output"]);

    #[derive(Debug)]
    struct MockOp {
        schema: &'static OpSchema,
        attrs: Attributes,
    }

    impl Operator for MockOp {
        fn schema(&self) -> &OpSchema {
            self.schema
        }

        fn attributes(&self) -> &Attributes {
            &self.attrs
        }
    }

    fn mock(schema: &'static OpSchema, attrs: &Attributes) -> Result<Box<dyn Operator>> {
        Ok(Box::new(MockOp {
            schema,
            attrs: attrs.clone(),
        }))
    }

    fn group(category: Category, schemas: &[&'static OpSchema]) -> CategoryGroup {
        let mut group = CategoryGroup::new(category);
        for &schema in schemas {
            group.public(schema, mock).unwrap();
        }
        group
    }

    #[test]
    fn test_assemble_then_extend() {
        let array = group(Category::Array, &[&RESHAPE]);
        let math = group(Category::Math, &[&ABS]);
        let quant = group(Category::Quant, &[&FAKE_QUANT]);

        let catalog = Catalog::assemble([array, math, quant]).unwrap();
        let catalog = catalog.extend(["FakeQuant"]).unwrap();

        assert_eq!(catalog.manifest().names(), &["Abs", "FakeQuant", "Reshape"]);
        assert_eq!(catalog.lookup("Abs").unwrap().schema(), &ABS);
        assert!(matches!(
            catalog.lookup("Missing"),
            Err(Error::NotFound(ref n)) if n == "Missing"
        ));
    }

    #[test]
    fn test_builder_extension_group() {
        let catalog = CatalogBuilder::new()
            .group(group(Category::Math, &[&ABS]))
            .group(group(Category::Array, &[&RESHAPE]))
            .extension(group(Category::Quant, &[&FAKE_QUANT]))
            .build()
            .unwrap();

        assert_eq!(catalog.manifest().names(), &["Abs", "FakeQuant", "Reshape"]);
        assert_eq!(
            catalog.lookup("FakeQuant").unwrap().category(),
            Category::Quant
        );
    }

    #[test]
    fn test_collision_across_groups_fails() {
        let err = Catalog::assemble([
            group(Category::Math, &[&ABS]),
            group(Category::Nn, &[&ABS]),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            Error::DuplicateOperator { ref name, first: Category::Math, second: Category::Nn }
                if name == "Abs"
        ));
    }

    #[test]
    fn test_internal_names_resolve_but_are_not_exported() {
        let mut comm = CategoryGroup::new(Category::Comm);
        comm.internal(&VIRTUAL_DIV, mock).unwrap();

        let catalog = Catalog::assemble([comm, group(Category::Math, &[&ABS])]).unwrap();

        assert!(catalog.contains("_VirtualDiv"));
        assert!(!catalog.is_exported("_VirtualDiv"));
        assert_eq!(catalog.manifest().names(), &["Abs"]);
    }

    #[test]
    fn test_extend_with_unknown_name_fails() {
        let catalog = Catalog::assemble([group(Category::Math, &[&ABS])]).unwrap();
        let err = catalog.extend(["Missing"]).unwrap_err();
        assert!(matches!(err, Error::UnresolvedExport(ref n) if n == "Missing"));
    }

    #[test]
    fn test_extend_with_internal_name_fails() {
        let mut comm = CategoryGroup::new(Category::Comm);
        comm.internal(&VIRTUAL_DIV, mock).unwrap();
        let catalog = Catalog::assemble([comm, group(Category::Math, &[&ABS])]).unwrap();

        let err = catalog.clone().extend(["_VirtualDiv"]).unwrap_err();
        assert!(matches!(err, Error::InvalidName(ref msg) if msg.contains("_VirtualDiv")));
        assert!(catalog.verify().is_ok());
    }

    #[test]
    fn test_verify_rejects_internal_export() {
        let mut comm = CategoryGroup::new(Category::Comm);
        comm.internal(&VIRTUAL_DIV, mock).unwrap();
        let mut catalog = Catalog::assemble([comm]).unwrap();
        catalog.manifest = catalog.manifest.extend(["_VirtualDiv"]);

        assert!(matches!(catalog.verify(), Err(Error::InvalidName(_))));
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let build = || {
            Catalog::assemble([
                group(Category::Array, &[&RESHAPE]),
                group(Category::Math, &[&ABS]),
            ])
            .unwrap()
        };

        let first = build();
        let second = build();
        assert_eq!(first.manifest(), second.manifest());

        let mut a: Vec<_> = first.registry().operator_names().collect();
        let mut b: Vec<_> = second.registry().operator_names().collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::assemble(Vec::<CategoryGroup>::new()).unwrap();
        assert!(catalog.manifest().is_empty());
        assert!(catalog.registry().is_empty());
        assert!(catalog.verify().is_ok());
    }
}
