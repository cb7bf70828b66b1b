#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use skill::{FileSaveStore, GameCatalog, GameRules, GameSession};
use skill_test_support::datasets;

// Logging is auto-installed for every integration test binary
#[ctor::ctor]
fn init_logging() {
    skill_test_support::logging::init();
}

pub fn catalog_from(dir: &Path, csv: &str) -> Arc<GameCatalog> {
    let path = datasets::write_dataset(dir, "animals.csv", csv).expect("write dataset");
    Arc::new(GameCatalog::load(&path).expect("load dataset"))
}

pub fn open_file_session(
    catalog: &Arc<GameCatalog>,
    save_dir: &Path,
    seed: u64,
) -> GameSession<FileSaveStore> {
    GameSession::open_with_rng(
        Arc::clone(catalog),
        FileSaveStore::in_dir(save_dir),
        GameRules::default(),
        StdRng::seed_from_u64(seed),
    )
    .expect("open session")
}
