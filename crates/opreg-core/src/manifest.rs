//! The export manifest: the sorted list of public operator names.

use serde::Serialize;

/// Deduplicated, lexicographically sorted list of exported names.
///
/// A manifest is immutable once built. [`Manifest::extend`] returns a new
/// manifest rather than mutating in place, so consumers never observe a
/// partially assembled list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    names: Vec<String>,
}

impl Manifest {
    /// Build a manifest from names in any order, dropping duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort_unstable();
        names.dedup();
        Self { names }
    }

    /// Union of this manifest and `extra`, sorted.
    pub fn extend<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_names(
            self.names
                .iter()
                .cloned()
                .chain(extra.into_iter().map(Into::into)),
        )
    }

    /// Check whether `name` is exported.
    pub fn contains(&self, name: &str) -> bool {
        self.names
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .is_ok()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Two-phase manifest assembly: a base list, then named extensions.
///
/// The intermediate lists stay private to the builder; only the finished,
/// sorted [`Manifest`] is handed out.
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    base: Vec<String>,
    extensions: Vec<(String, Vec<String>)>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names to the base list.
    pub fn base<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append a list contributed by `source` after the base list.
    pub fn extend<I, S>(mut self, source: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.push((
            source.to_string(),
            names.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Sort and deduplicate everything contributed so far.
    pub fn finish(self) -> Manifest {
        let mut manifest = Manifest::from_names(self.base);
        for (source, names) in self.extensions {
            let contributed = names.len();
            let before = manifest.len();
            manifest = manifest.extend(names);
            tracing::debug!(
                source = %source,
                contributed,
                added = manifest.len() - before,
                "manifest extended"
            );
        }
        manifest
    }
}
