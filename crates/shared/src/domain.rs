use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Stable identifier for an onboarding topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(pub String);

impl TopicId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in the fixed onboarding topic catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub emoji: &'static str,
}

impl TopicInfo {
    pub fn topic_id(&self) -> TopicId {
        TopicId::new(self.id)
    }
}

/// The catalog shown on the onboarding screen. Fixed for the session.
pub const TOPIC_CATALOG: [TopicInfo; 10] = [
    TopicInfo {
        id: "science",
        title: "Science & Technology",
        emoji: "\u{1F52C}",
    },
    TopicInfo {
        id: "history",
        title: "History & Culture",
        emoji: "\u{1F3DB}\u{FE0F}",
    },
    TopicInfo {
        id: "nature",
        title: "Nature & Environment",
        emoji: "\u{1F33F}",
    },
    TopicInfo {
        id: "space",
        title: "Space & Astronomy",
        emoji: "\u{1F680}",
    },
    TopicInfo {
        id: "health",
        title: "Health & Medicine",
        emoji: "\u{1F3E5}",
    },
    TopicInfo {
        id: "arts",
        title: "Arts & Literature",
        emoji: "\u{1F3A8}",
    },
    TopicInfo {
        id: "politics",
        title: "Politics & Current Events",
        emoji: "\u{1F4F0}",
    },
    TopicInfo {
        id: "sports",
        title: "Sports & Athletics",
        emoji: "\u{26BD}",
    },
    TopicInfo {
        id: "food",
        title: "Food & Cuisine",
        emoji: "\u{1F37D}\u{FE0F}",
    },
    TopicInfo {
        id: "travel",
        title: "Travel & Geography",
        emoji: "\u{2708}\u{FE0F}",
    },
];

/// Ordered, non-empty, immutable sequence of facts browsed on the home
/// screen. Indices cycle past the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactDeck {
    facts: Vec<String>,
}

impl FactDeck {
    pub fn new(facts: Vec<String>) -> Result<Self, DeckError> {
        if facts.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self { facts })
    }

    /// The facts bundled with the app.
    pub fn builtin() -> Self {
        Self {
            facts: vec![
                "Honey never spoils. Archaeologists have found pots of honey in ancient \
                 Egyptian tombs that are over 3,000 years old and still perfectly edible."
                    .to_string(),
                "Bananas are berries, but strawberries are not. In botanical terms, a berry \
                 is a fruit produced from the ovary of a single flower with seeds embedded \
                 in the flesh."
                    .to_string(),
                "Octopuses have three hearts and blue blood. Two hearts pump blood to the \
                 gills, while a third pumps it to the rest of the body."
                    .to_string(),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction rejects empty decks.
        false
    }

    pub fn fact(&self, index: usize) -> &str {
        &self.facts[index % self.facts.len()]
    }

    /// Next index in cyclic order.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.facts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(FactDeck::new(Vec::new()), Err(DeckError::EmptyDeck));
    }

    #[test]
    fn deck_indices_cycle_past_the_end() {
        let deck = FactDeck::new(vec!["A".into(), "B".into(), "C".into()]).expect("deck");
        assert_eq!(deck.fact(0), "A");
        assert_eq!(deck.fact(3), "A");
        assert_eq!(deck.next_index(2), 0);
    }

    #[test]
    fn builtin_deck_has_three_facts() {
        assert_eq!(FactDeck::builtin().len(), 3);
    }

    #[test]
    fn topic_catalog_ids_are_unique() {
        let ids: HashSet<&str> = TOPIC_CATALOG.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TOPIC_CATALOG.len());
    }
}
