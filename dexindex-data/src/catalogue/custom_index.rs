use ahash::{
    HashMap,
    HashMapExt,
};

use crate::normalize;

/// Maps names to their 1-based position in an ordered name list.
///
/// Every entry is keyed both by its slug and by its raw lower-cased name. When two entries share a
/// key, the first one wins.
#[derive(Debug, Clone, Default)]
pub struct CustomIndex {
    ids: HashMap<String, u32>,
}

impl CustomIndex {
    /// Builds the index over the given names, in order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ids = HashMap::new();
        for (position, name) in names.into_iter().enumerate() {
            let name = name.as_ref();
            let custom_id = position as u32 + 1;
            ids.entry(normalize(name).as_str().to_owned())
                .or_insert(custom_id);
            ids.entry(name.to_lowercase()).or_insert(custom_id);
        }
        Self { ids }
    }

    /// The catalogue number for a name, trying its slug first and then its lower-cased form.
    pub fn custom_id_for(&self, name: &str) -> Option<u32> {
        self.ids
            .get(normalize(name).as_str())
            .or_else(|| self.ids.get(&name.to_lowercase()))
            .copied()
    }

    /// Number of distinct keys in the index.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod custom_index_test {
    use pretty_assertions::assert_eq;

    use crate::CustomIndex;

    #[test]
    fn assigns_one_based_positions() {
        let index = CustomIndex::new(["Bulbasaur", "Ivysaur", "Venusaur"]);
        assert_eq!(index.custom_id_for("Bulbasaur"), Some(1));
        assert_eq!(index.custom_id_for("venusaur"), Some(3));
        assert_eq!(index.custom_id_for("Mew"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let index = CustomIndex::new(["Bulbasaur", "Ivysaur", "BULBASAUR", "bulbasaur"]);
        assert_eq!(index.custom_id_for("Bulbasaur"), Some(1));
        assert_eq!(index.custom_id_for("bulbasaur"), Some(1));
        assert_eq!(index.custom_id_for("Ivysaur"), Some(2));
    }

    #[test]
    fn resolves_backend_names_of_overridden_species() {
        let index = CustomIndex::new(["Pikachu", "Giratina", "Mr. Mime", "Nidoran♀"]);
        assert_eq!(index.custom_id_for("giratina-altered"), Some(2));
        assert_eq!(index.custom_id_for("mr-mime"), Some(3));
        assert_eq!(index.custom_id_for("nidoran-f"), Some(4));
    }

    #[test]
    fn keys_entries_by_slug_and_raw_name() {
        let index = CustomIndex::new(["Giratina", "Type: Null"]);
        assert_eq!(index.len(), 4);
        assert_eq!(index.custom_id_for("Giratina"), Some(1));
        assert_eq!(index.custom_id_for("type: null"), Some(2));
        assert_eq!(index.custom_id_for("type-null"), Some(2));
    }
}
