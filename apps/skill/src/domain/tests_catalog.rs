use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{AnimalRecord, GameCatalog, HintKind};
use crate::error::GameError;
use crate::errors::ErrorCode;

const DATASET: &str = "\
word,category,synonyms,definition
elephant,mammal,pachyderm,a large grey mammal
polar_bear,mammal,white_bear ice_bear sea_bear nanook,a bear of the arctic
gecko,,,
";

fn load(csv: &str) -> Result<GameCatalog, GameError> {
    GameCatalog::from_reader(csv.as_bytes(), "animals.csv")
}

#[test]
fn parses_rows_and_optional_fields() {
    let catalog = load(DATASET).unwrap();
    assert_eq!(catalog.len(), 3);

    let elephant = catalog.find("elephant").unwrap();
    assert_eq!(elephant.category.as_deref(), Some("mammal"));
    assert_eq!(elephant.synonyms, Some(vec!["pachyderm".to_string()]));
    assert_eq!(elephant.definition.as_deref(), Some("a large grey mammal"));

    let gecko = catalog.find("gecko").unwrap();
    assert_eq!(gecko, &AnimalRecord::new("gecko"));
    assert_eq!(catalog.source(), std::path::Path::new("animals.csv"));
}

#[test]
fn synonyms_split_on_whitespace() {
    let catalog = load(DATASET).unwrap();
    let bear = catalog.find("polar_bear").unwrap();
    assert_eq!(bear.synonyms.as_ref().map(Vec::len), Some(4));

    let hints = catalog.build_hints(bear).unwrap();
    assert_eq!(
        hints.synonyms.unwrap(),
        vec!["white bear", "ice bear", "sea bear"]
    );
}

#[test]
fn underscore_only_synonym_cell_is_not_spoken() {
    let catalog = load("word,category,synonyms,definition\nlion,cat,_ big_cat,x\n").unwrap();
    let hints = catalog.build_hints(catalog.find("lion").unwrap()).unwrap();
    assert_eq!(
        hints.render(HintKind::Synonyms).unwrap(),
        "Another way to call this animal is big cat"
    );
}

#[test]
fn find_is_case_insensitive() {
    let catalog = load(DATASET).unwrap();
    assert!(catalog.find("ELEPHANT").is_some());
    assert!(catalog.find("polar bear").is_some());
    assert!(catalog.find("zebra").is_none());
}

#[test]
fn elephant_builds_all_five_kinds() {
    let catalog = load(DATASET).unwrap();
    let hints = catalog
        .build_hints(catalog.find("elephant").unwrap())
        .unwrap();
    assert_eq!(hints.length, 8);
    assert_eq!(hints.letter, 'e');
    assert_eq!(hints.kinds(), HintKind::ALL.to_vec());
}

#[test]
fn missing_word_column_is_data_load_error() {
    let err = load("name,category\nelephant,mammal\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::DataLoadError);
    assert!(err.to_string().contains("`word`"), "got: {err}");
}

#[test]
fn blank_word_is_data_load_error() {
    let err = load("word,category\nelephant,mammal\n  ,bird\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::DataLoadError);
    assert!(err.to_string().contains("line 3"), "got: {err}");
}

#[test]
fn ragged_row_is_data_load_error() {
    let err = load("word,category\nelephant,mammal,extra\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::DataLoadError);
}

#[test]
fn header_only_is_empty_catalog() {
    let err = load("word,category,synonyms,definition\n").unwrap_err();
    assert_eq!(err.code(), ErrorCode::EmptyCatalog);
}

#[test]
fn sampling_empty_in_memory_catalog_fails() {
    let catalog = GameCatalog::from_records(Vec::new()).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let err = catalog.sample_record(&mut rng).unwrap_err();
    assert_eq!(err.code(), ErrorCode::EmptyCatalog);
}

#[test]
fn in_memory_blank_name_rejected() {
    let err = GameCatalog::from_records(vec![AnimalRecord::new(" ")]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DataLoadError);
}

#[test]
fn sampling_reaches_every_row() {
    let catalog = load(DATASET).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(catalog.sample_record(&mut rng).unwrap().name.clone());
    }
    assert_eq!(seen.len(), catalog.len());
}

#[test]
fn synonym_cap_is_configurable() {
    let catalog = load(DATASET).unwrap().with_max_synonyms(1);
    let hints = catalog
        .build_hints(catalog.find("polar_bear").unwrap())
        .unwrap();
    assert_eq!(hints.synonyms.unwrap(), vec!["white bear"]);
}
