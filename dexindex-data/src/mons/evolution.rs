use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    NamedResource,
    title_case,
};

/// Details and conditions for one species to evolve into another.
///
/// Only the conditions shown in the detail view are read.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    /// Minimum level that must be reached for evolution.
    #[serde(default)]
    pub min_level: Option<u32>,
    /// What triggers the evolution, such as `level-up` or `trade`.
    #[serde(default)]
    pub trigger: Option<NamedResource>,
    /// Item that must be used on the Mon.
    #[serde(default)]
    pub item: Option<NamedResource>,
}

impl EvolutionDetail {
    /// A short label for the condition, such as "Level 16" or "Use Thunder Stone".
    pub fn describe(&self) -> Option<String> {
        if let Some(level) = self.min_level {
            return Some(format!("Level {level}"));
        }
        if let Some(item) = &self.item {
            return Some(format!("Use {}", title_case(&item.name)));
        }
        self.trigger
            .as_ref()
            .map(|trigger| title_case(&trigger.name))
    }
}

/// One node of an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
    #[serde(default)]
    pub is_baby: bool,
    /// How this node's species is reached from its parent. Empty for the root.
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
}

impl ChainLink {
    /// Species names in pre-order: each species comes before everything it evolves into.
    pub fn walk(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.walk_into(&mut names);
        names
    }

    fn walk_into<'s>(&'s self, names: &mut Vec<&'s str>) {
        names.push(self.species.name.as_str());
        for child in &self.evolves_to {
            child.walk_into(names);
        }
    }

    /// Number of stages along the longest branch.
    pub fn depth(&self) -> usize {
        1 + self
            .evolves_to
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Finds the node for a species.
    pub fn find(&self, name: &str) -> Option<&ChainLink> {
        if self.species.name == name {
            return Some(self);
        }
        self.evolves_to.iter().find_map(|child| child.find(name))
    }
}

/// Response shape of an evolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

#[cfg(test)]
mod evolution_test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{
        EvolutionChain,
        EvolutionDetail,
        NamedResource,
    };

    fn eevee_chain() -> EvolutionChain {
        serde_json::from_value(json!({
            "id": 67,
            "chain": {
                "species": { "name": "eevee", "url": "" },
                "is_baby": false,
                "evolution_details": [],
                "evolves_to": [
                    {
                        "species": { "name": "vaporeon", "url": "" },
                        "evolution_details": [{ "item": { "name": "water-stone", "url": "" }, "trigger": { "name": "use-item", "url": "" } }],
                        "evolves_to": []
                    },
                    {
                        "species": { "name": "umbreon", "url": "" },
                        "evolution_details": [{ "min_level": null, "trigger": { "name": "level-up", "url": "" } }],
                        "evolves_to": []
                    }
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn walks_in_pre_order() {
        let chain = eevee_chain();
        assert_eq!(chain.chain.walk(), vec!["eevee", "vaporeon", "umbreon"]);
        assert_eq!(chain.chain.depth(), 2);
    }

    #[test]
    fn finds_nested_species() {
        let chain = eevee_chain();
        let umbreon = chain.chain.find("umbreon").unwrap();
        assert_eq!(umbreon.evolution_details[0].describe().as_deref(), Some("Level Up"));
        assert!(chain.chain.find("jolteon").is_none());
    }

    #[test]
    fn describes_conditions_by_priority() {
        let detail = EvolutionDetail {
            min_level: Some(16),
            trigger: Some(NamedResource::new("level-up", "")),
            item: None,
        };
        assert_eq!(detail.describe().as_deref(), Some("Level 16"));

        let chain = eevee_chain();
        assert_eq!(
            chain.chain.evolves_to[0].evolution_details[0]
                .describe()
                .as_deref(),
            Some("Use Water Stone")
        );

        assert_eq!(EvolutionDetail::default().describe(), None);
    }
}
