//! Property tests for hint derivation (pure domain, no I/O).
//!
//! - `length` and `letter` are always present and exact.
//! - A kind whose source field is absent or blank is never offered.
//! - Synonym hints never exceed the cap and never carry underscores.

use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::{GameState, HintKind, HintSet, MAX_SYNONYMS};

fn present(value: &Option<String>) -> bool {
    value.as_ref().is_some_and(|v| !v.trim().is_empty())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_length_and_letter_always_exact(record in test_gens::animal_record()) {
        let hints = HintSet::for_record(&record, MAX_SYNONYMS).unwrap();
        prop_assert_eq!(hints.length, record.name.chars().count());
        prop_assert_eq!(Some(hints.letter), record.name.chars().next());
        prop_assert!(hints.has(HintKind::Length));
        prop_assert!(hints.has(HintKind::Letter));
    }

    #[test]
    fn prop_absent_kinds_never_offered(record in test_gens::animal_record()) {
        let hints = HintSet::for_record(&record, MAX_SYNONYMS).unwrap();
        let kinds = hints.kinds();

        prop_assert_eq!(kinds.contains(&HintKind::Category), present(&record.category));
        prop_assert_eq!(kinds.contains(&HintKind::Definition), present(&record.definition));
        let has_synonyms = record.synonyms.as_ref().is_some_and(|s| !s.is_empty());
        prop_assert_eq!(kinds.contains(&HintKind::Synonyms), has_synonyms);

        let state = GameState::new(record.name.clone(), hints.clone());
        for kind in state.available_hints() {
            prop_assert!(hints.render(kind).is_some(), "{kind} offered without a value");
        }
    }

    #[test]
    fn prop_synonyms_capped_and_spaced(
        record in test_gens::animal_record(),
        cap in 1usize..=5,
    ) {
        let hints = HintSet::for_record(&record, cap).unwrap();
        if let Some(list) = hints.synonyms {
            prop_assert!(!list.is_empty());
            prop_assert!(list.len() <= cap);
            prop_assert!(list.iter().all(|s| !s.contains('_')));
        }
    }
}
