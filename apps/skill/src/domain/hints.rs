//! Hint kinds, the per-game hint set, and the spoken templates.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::animal::AnimalRecord;

/// Spoken when every eligible hint has already been given.
pub const OUT_OF_HINTS: &str = "I'm out of hints, try to guess";

/// The categories of information a hint can reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    Length,
    Letter,
    Category,
    Synonyms,
    Definition,
}

impl HintKind {
    pub const ALL: [HintKind; 5] = [
        HintKind::Length,
        HintKind::Letter,
        HintKind::Category,
        HintKind::Synonyms,
        HintKind::Definition,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            HintKind::Length => "length",
            HintKind::Letter => "letter",
            HintKind::Category => "category",
            HintKind::Synonyms => "synonyms",
            HintKind::Definition => "definition",
        }
    }
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hints derived once per game from the secret record.
///
/// Serializes as a map keyed by kind name; absent kinds are left out of the
/// map entirely rather than written as nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSet {
    pub length: usize,
    pub letter: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl HintSet {
    /// Build the hint set for `record`, keeping at most `max_synonyms`
    /// synonyms. Returns `None` only if the record has an empty name.
    pub fn for_record(record: &AnimalRecord, max_synonyms: usize) -> Option<Self> {
        let letter = record.name.chars().next()?;

        let synonyms = record
            .synonyms
            .as_ref()
            .map(|list| {
                list.iter()
                    .map(|s| s.replace('_', " ").trim().to_owned())
                    .filter(|s| !s.is_empty())
                    .take(max_synonyms)
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty());

        Some(Self {
            length: record.name.chars().count(),
            letter,
            category: non_blank(record.category.as_deref()),
            synonyms,
            definition: non_blank(record.definition.as_deref()),
        })
    }

    /// Kinds that carry a usable value, in canonical order.
    pub fn kinds(&self) -> Vec<HintKind> {
        HintKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    pub fn has(&self, kind: HintKind) -> bool {
        match kind {
            HintKind::Length | HintKind::Letter => true,
            HintKind::Category => is_present(self.category.as_deref()),
            HintKind::Synonyms => self.spoken_synonyms().next().is_some(),
            HintKind::Definition => is_present(self.definition.as_deref()),
        }
    }

    /// Spoken text for `kind`, or `None` when the kind has no value.
    pub fn render(&self, kind: HintKind) -> Option<String> {
        if !self.has(kind) {
            return None;
        }
        let text = match kind {
            HintKind::Length => format!("The animal's name has {} letters", self.length),
            HintKind::Letter => format!("The first letter is {}", self.letter),
            HintKind::Category => {
                format!("The animal is a {}", self.category.as_deref()?)
            }
            HintKind::Synonyms => format!(
                "Another way to call this animal is {}",
                self.spoken_synonyms().collect::<Vec<_>>().join(", ")
            ),
            HintKind::Definition => format!(
                "This is how I would describe the animal: {}",
                self.definition.as_deref()?
            ),
        };
        Some(text)
    }

    // A reloaded save may carry entries written before they were cleaned.
    fn spoken_synonyms(&self) -> impl Iterator<Item = &str> {
        self.synonyms
            .iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
