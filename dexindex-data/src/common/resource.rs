use serde::{
    Deserialize,
    Serialize,
};

/// A named reference to another backend resource.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    /// Absolute URL of the resource, or empty if the backend shape did not carry one.
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn new<N, U>(name: N, url: U) -> Self
    where
        N: Into<String>,
        U: Into<String>,
    {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// An unnamed reference to another backend resource.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UrlResource {
    pub url: String,
}

/// Converts a backend slug like `thunder-stone` into a readable label like `Thunder Stone`.
pub fn title_case(slug: &str) -> String {
    slug.split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod title_case_test {
    use crate::common::title_case;

    #[test]
    fn capitalizes_each_hyphenated_word() {
        assert_eq!(title_case("thunder-stone"), "Thunder Stone");
        assert_eq!(title_case("level-up"), "Level Up");
        assert_eq!(title_case("trade"), "Trade");
        assert_eq!(title_case(""), "");
    }
}
