use itertools::Itertools;
use once_cell::sync::Lazy;

use crate::{
    CURATED_NAMES,
    CustomIndex,
    Slug,
    normalize,
};

static CURATED: Lazy<Catalogue> = Lazy::new(|| Catalogue::new(CURATED_NAMES.iter().copied()));

/// An ordered list of display names together with its [`CustomIndex`].
///
/// A catalogue is built once and never mutated.
#[derive(Debug, Clone)]
pub struct Catalogue {
    names: Vec<String>,
    index: CustomIndex,
}

impl Catalogue {
    /// Creates a new catalogue over the given names, in order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(|name| name.into()).collect::<Vec<_>>();
        let index = CustomIndex::new(&names);
        Self { names, index }
    }

    /// The process-wide catalogue over [`CURATED_NAMES`].
    pub fn curated() -> &'static Catalogue {
        &CURATED
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn index(&self) -> &CustomIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Slugs for every name, in catalogue order.
    ///
    /// Names that normalize to the same slug appear once per name.
    pub fn slugs(&self) -> Vec<Slug> {
        self.names.iter().map(|name| normalize(name)).collect()
    }

    /// Number of distinct slugs, which is the most records a full load can produce.
    pub fn distinct_slug_count(&self) -> usize {
        self.names.iter().map(|name| normalize(name)).unique().count()
    }

    /// The catalogue number for a name, if the name is part of the catalogue.
    pub fn custom_id_for(&self, name: &str) -> Option<u32> {
        self.index.custom_id_for(name)
    }
}
