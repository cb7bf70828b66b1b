//! Dataset loading and secret selection.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rand::prelude::*;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::animal::AnimalRecord;
use crate::domain::hints::HintSet;
use crate::domain::rules::{normalize_guess, MAX_SYNONYMS};
use crate::error::GameError;

const WORD_COLUMN: &str = "word";

/// Raw dataset row. `synonyms` is a space-separated token list.
#[derive(Debug, Deserialize)]
struct DatasetRow {
    word: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    synonyms: Option<String>,
    #[serde(default)]
    definition: Option<String>,
}

impl DatasetRow {
    fn into_record(self) -> AnimalRecord {
        let synonyms = self
            .synonyms
            .map(|raw| {
                raw.split_whitespace()
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty());

        AnimalRecord {
            name: self.word.trim().to_owned(),
            category: self.category.filter(|c| !c.trim().is_empty()),
            synonyms,
            definition: self.definition.filter(|d| !d.trim().is_empty()),
        }
    }
}

/// The loaded dataset. Immutable after construction.
#[derive(Debug, Clone)]
pub struct GameCatalog {
    source: PathBuf,
    records: Vec<AnimalRecord>,
    by_name: HashMap<String, usize>,
    max_synonyms: usize,
}

impl GameCatalog {
    /// Read and parse the dataset at `path`.
    ///
    /// Fails with `DataLoad` if the file is missing or malformed and with
    /// `EmptyCatalog` if it holds no rows.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GameError::data_load(path, e.to_string()))?;
        let catalog = Self::from_reader(file, path)?;
        info!(
            path = %path.display(),
            animals = catalog.len(),
            "Loaded animal catalog"
        );
        Ok(catalog)
    }

    /// Parse CSV from any reader. `source` labels errors and is kept as
    /// [`GameCatalog::source`].
    pub fn from_reader<R: Read>(reader: R, source: impl AsRef<Path>) -> Result<Self, GameError> {
        let source = source.as_ref();
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| GameError::data_load(source, e.to_string()))?;
        if !headers.iter().any(|h| h == WORD_COLUMN) {
            return Err(GameError::data_load(
                source,
                format!("missing required `{WORD_COLUMN}` column"),
            ));
        }

        let mut records = Vec::new();
        for (idx, row) in rdr.deserialize::<DatasetRow>().enumerate() {
            // Header is line 1.
            let line = idx + 2;
            let row = row.map_err(|e| GameError::data_load(source, format!("line {line}: {e}")))?;
            let record = row.into_record();
            if record.name.is_empty() {
                return Err(GameError::data_load(
                    source,
                    format!("line {line}: `{WORD_COLUMN}` is blank"),
                ));
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(GameError::empty_catalog(source));
        }
        Ok(Self::index(source.to_path_buf(), records))
    }

    /// Build a catalog from records already in memory. Blank names are rejected.
    pub fn from_records(records: Vec<AnimalRecord>) -> Result<Self, GameError> {
        let source = PathBuf::from("<memory>");
        if let Some(pos) = records.iter().position(|r| r.name.trim().is_empty()) {
            return Err(GameError::data_load(
                &source,
                format!("record {pos} has a blank name"),
            ));
        }
        Ok(Self::index(source, records))
    }

    fn index(source: PathBuf, records: Vec<AnimalRecord>) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            by_name.entry(normalize_guess(&record.name)).or_insert(i);
        }
        Self {
            source,
            records,
            by_name,
            max_synonyms: MAX_SYNONYMS,
        }
    }

    pub fn with_max_synonyms(mut self, max_synonyms: usize) -> Self {
        self.max_synonyms = max_synonyms;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AnimalRecord] {
        &self.records
    }

    /// Case-insensitive lookup by name; the first row wins on duplicates.
    pub fn find(&self, word: &str) -> Option<&AnimalRecord> {
        self.by_name
            .get(&normalize_guess(word))
            .and_then(|&i| self.records.get(i))
    }

    /// Pick one record uniformly at random. Independent across calls.
    pub fn sample_record<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&AnimalRecord, GameError> {
        let record = self
            .records
            .choose(rng)
            .ok_or_else(|| GameError::empty_catalog(&self.source))?;
        debug!(answer_len = record.name.chars().count(), "Sampled secret animal");
        Ok(record)
    }

    /// Derive the hint set for `record`. Kinds without a value are omitted.
    pub fn build_hints(&self, record: &AnimalRecord) -> Result<HintSet, GameError> {
        HintSet::for_record(record, self.max_synonyms)
            .ok_or_else(|| GameError::data_load(&self.source, "record has a blank name"))
    }
}
