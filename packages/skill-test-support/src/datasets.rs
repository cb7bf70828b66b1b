//! Dataset fixtures written to disk for catalog and session tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "word,category,synonyms,definition";

/// The single-row elephant dataset used by the example scenarios.
pub const ELEPHANT_ONLY: &str = "\
word,category,synonyms,definition
elephant,mammal,pachyderm,a large grey mammal
";

/// A few rows exercising every optional-field combination.
pub const MIXED: &str = "\
word,category,synonyms,definition
elephant,mammal,pachyderm,a large grey mammal
polar_bear,mammal,white_bear ice_bear sea_bear nanook,a bear of the arctic
gecko,,,
owl,bird,,a nocturnal bird of prey
";

/// Write `contents` to `dir/name` and return the path.
pub fn write_dataset(dir: &Path, name: &str, contents: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Build CSV text from `(word, category, synonyms, definition)` tuples.
/// Empty strings become empty cells.
pub fn csv_from_rows(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (word, category, synonyms, definition) in rows {
        out.push_str(&format!("{word},{category},{synonyms},{definition}\n"));
    }
    out
}
