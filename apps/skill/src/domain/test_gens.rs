// Proptest generators for domain types.
// Names are never empty; optional fields are sometimes absent and sometimes blank.

use proptest::prelude::*;

use crate::domain::AnimalRecord;

/// A non-empty animal name, optionally with an underscore-joined second word.
pub fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,12}",
        "[a-z]{2,8}_[a-z]{2,8}",
        "[A-Z][a-zé]{1,10}",
    ]
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("   ".to_string())),
        "[a-z]{1,10}( [a-z]{1,10}){0,4}".prop_map(Some),
    ]
}

fn optional_synonyms() -> impl Strategy<Value = Option<Vec<String>>> {
    prop_oneof![
        Just(None),
        Just(Some(Vec::new())),
        prop::collection::vec("[a-z]{1,8}(_[a-z]{1,8})?", 1..6).prop_map(Some),
    ]
}

/// A record with any combination of present, absent and blank fields.
pub fn animal_record() -> impl Strategy<Value = AnimalRecord> {
    (name(), optional_text(), optional_synonyms(), optional_text()).prop_map(
        |(name, category, synonyms, definition)| AnimalRecord {
            name,
            category,
            synonyms,
            definition,
        },
    )
}
