use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::text::{clean_label, to_display, to_token};

/// One entry of the synonym table. `from` is matched against the cleaned,
/// lower-cased label; `to` is the canonical token it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Synonym {
    pub from: String,
    pub to: String,
}

impl Synonym {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Ordered label normalization rules.
///
/// Applied in this order: synonym lookup, then prefix/suffix stripping
/// followed by a second synonym lookup, then verbatim tokenization.
/// Deployments can replace the built-in table by loading this structure from
/// JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LabelRules {
    #[serde(default)]
    pub synonyms: Vec<Synonym>,
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

impl Default for LabelRules {
    fn default() -> Self {
        let synonyms = [
            ("red pepper", "bell_pepper"),
            ("green pepper", "bell_pepper"),
            ("yellow pepper", "bell_pepper"),
            ("orange pepper", "bell_pepper"),
            ("sweet pepper", "bell_pepper"),
            ("capsicum", "bell_pepper"),
            ("bell peppers", "bell_pepper"),
            ("scallion", "green_onion"),
            ("scallions", "green_onion"),
            ("spring onion", "green_onion"),
            ("spring onions", "green_onion"),
            ("eggs", "egg"),
            ("tomatoes", "tomato"),
            ("cherry tomatoes", "tomato"),
            ("carrots", "carrot"),
            ("baby carrots", "carrot"),
            ("apples", "apple"),
            ("bananas", "banana"),
            ("oranges", "orange"),
            ("lemons", "lemon"),
            ("limes", "lime"),
            ("onions", "onion"),
            ("red onion", "onion"),
            ("yellow onion", "onion"),
            ("white onion", "onion"),
            ("potatoes", "potato"),
            ("cucumbers", "cucumber"),
            ("mushrooms", "mushroom"),
            ("chicken breast", "chicken"),
            ("chicken breasts", "chicken"),
            ("chicken thighs", "chicken"),
            ("ground beef", "beef"),
            ("beef mince", "beef"),
            ("steak", "beef"),
            ("cheddar", "cheese"),
            ("cheddar cheese", "cheese"),
            ("mozzarella", "cheese"),
            ("parmesan", "cheese"),
            ("feta", "cheese"),
            ("greek yogurt", "yogurt"),
            ("yoghurt", "yogurt"),
            ("skim milk", "milk"),
            ("half and half", "half_and_half"),
            ("romaine", "lettuce"),
            ("garlic cloves", "garlic"),
            ("coriander", "cilantro"),
            ("courgette", "zucchini"),
            ("aubergine", "eggplant"),
        ]
        .into_iter()
        .map(|(from, to)| Synonym::new(from, to))
        .collect();

        let prefixes = [
            "fresh", "whole", "sliced", "chopped", "diced", "raw", "organic", "frozen",
            "pack of", "bag of", "box of", "carton of", "jar of", "bottle of", "container of",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let suffixes = [
            "container", "bottle", "carton", "jar", "pack", "package", "bag", "box", "can",
            "tub", "slices",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            synonyms,
            prefixes,
            suffixes,
        }
    }
}

/// Compiled form of [`LabelRules`].
#[derive(Debug, Clone)]
pub struct LabelNormalizer {
    synonyms: HashMap<String, String>,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

impl LabelNormalizer {
    pub fn new(rules: &LabelRules) -> Self {
        let mut synonyms = HashMap::new();
        for synonym in &rules.synonyms {
            let from = clean_label(&synonym.from.replace('_', " "));
            let to = to_token(&synonym.to);
            if from.is_empty() || to.is_empty() {
                continue;
            }
            // first rule for a key wins
            synonyms.entry(from).or_insert(to);
        }

        // Chained rules ("scallion" -> "green onion" -> "onion") collapse to
        // their final target.
        let mut synonyms: HashMap<String, String> = synonyms
            .iter()
            .map(|(from, to)| (from.clone(), resolve_target(&synonyms, to)))
            .collect();

        // Every canonical target resolves to itself, so re-normalizing a
        // token never strips it any further.
        let targets: Vec<String> = synonyms.values().cloned().collect();
        for target in targets {
            synonyms.entry(to_display(&target)).or_insert(target);
        }

        let clean_all = |items: &[String]| {
            items
                .iter()
                .map(|item| clean_label(item))
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
        };

        Self {
            synonyms,
            prefixes: clean_all(&rules.prefixes),
            suffixes: clean_all(&rules.suffixes),
        }
    }

    /// Maps a free-form label to its canonical token. Returns `None` for a
    /// blank label.
    pub fn canonicalize(&self, label: &str) -> Option<String> {
        let cleaned = clean_label(&label.replace('_', " "));
        if cleaned.is_empty() {
            return None;
        }

        if let Some(token) = self.synonyms.get(&cleaned) {
            return Some(token.clone());
        }

        let stripped = self.strip_affixes(&cleaned);
        if let Some(token) = self.synonyms.get(&stripped) {
            return Some(token.clone());
        }

        Some(stripped.replace(' ', "_"))
    }

    /// Removes descriptive prefixes and suffixes until none apply. Never
    /// strips a label down to nothing.
    fn strip_affixes(&self, label: &str) -> String {
        let mut current = label.to_string();

        loop {
            let mut changed = false;

            for prefix in &self.prefixes {
                if let Some(rest) = current.strip_prefix(prefix.as_str())
                    && let Some(rest) = rest.strip_prefix(' ')
                    && !rest.is_empty()
                {
                    current = rest.to_string();
                    changed = true;
                }
            }

            for suffix in &self.suffixes {
                if let Some(rest) = current.strip_suffix(suffix.as_str())
                    && let Some(rest) = rest.strip_suffix(' ')
                    && !rest.is_empty()
                {
                    current = rest.to_string();
                    changed = true;
                }
            }

            if !changed {
                return current;
            }
        }
    }
}

/// Follows `token` through the synonym table until it stops changing. A cycle
/// settles on its smallest member so every label in it agrees.
fn resolve_target(synonyms: &HashMap<String, String>, token: &str) -> String {
    let mut chain = vec![token.to_string()];

    loop {
        let current = &chain[chain.len() - 1];
        match synonyms.get(&to_display(current)) {
            Some(next) if next != current => {
                if let Some(start) = chain.iter().position(|seen| seen == next) {
                    return chain[start..]
                        .iter()
                        .min()
                        .cloned()
                        .unwrap_or_else(|| next.clone());
                }
                chain.push(next.clone());
            }
            _ => return current.clone(),
        }
    }
}

impl Default for LabelNormalizer {
    fn default() -> Self {
        Self::new(&LabelRules::default())
    }
}
