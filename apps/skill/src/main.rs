//! Text adapter for the animal guessing game.
//!
//! Stands in for the voice platform: each stdin line is one utterance and
//! each stdout line is what would be spoken.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use skill::{AnimalSkill, FileSaveStore, GameCatalog, GameError, GameSession, SessionRegistry, SkillConfig};
use tracing::info;

mod telemetry;

#[derive(Parser)]
#[command(name = "animal-game")]
#[command(about = "Guess the secret animal from progressively revealed hints")]
struct Args {
    /// Dataset CSV (columns: word, category, synonyms, definition)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Directory holding save slots
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Wrong guesses allowed before the game is lost
    #[arg(long)]
    max_guesses: Option<u32>,

    /// Play in a per-user save slot instead of the shared one
    #[arg(long)]
    user: Option<String>,

    /// Human-readable logs instead of JSON
    #[arg(long)]
    pretty: bool,
}

enum Utterance<'a> {
    NewGame,
    Hint,
    GiveUp,
    Quit,
    Guess(&'a str),
}

fn parse_utterance(line: &str) -> Utterance<'_> {
    match line.trim().to_lowercase().as_str() {
        "new" | "new game" => Utterance::NewGame,
        "hint" => Utterance::Hint,
        "give up" => Utterance::GiveUp,
        "quit" | "exit" => Utterance::Quit,
        _ => Utterance::Guess(line.trim()),
    }
}

/// Run one utterance. `None` means the player asked to quit.
fn respond(
    skill: &mut AnimalSkill<FileSaveStore>,
    utterance: &Utterance<'_>,
) -> Result<Option<String>, GameError> {
    let spoken = match utterance {
        Utterance::NewGame => skill.on_new_game_requested()?,
        Utterance::Hint => skill.on_hint_requested()?,
        Utterance::GiveUp => skill.on_give_up(),
        Utterance::Guess(text) => skill.on_guess(text)?.spoken,
        Utterance::Quit => return Ok(None),
    };
    Ok(Some(spoken))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    telemetry::init_tracing(args.pretty);

    let mut config = SkillConfig::from_env()?;
    if let Some(dataset) = args.dataset {
        config.dataset_path = dataset;
    }
    if let Some(save_dir) = args.save_dir {
        config.save_dir = save_dir;
    }
    if let Some(max_guesses) = args.max_guesses {
        config = config.with_max_guesses(max_guesses)?;
    }
    info!(
        dataset = %config.dataset_path.display(),
        save_dir = %config.save_dir.display(),
        max_guesses = config.max_guesses,
        "Starting animal game"
    );

    let catalog = Arc::new(GameCatalog::load(&config.dataset_path)?);
    info!(
        source = %catalog.source().display(),
        animals = catalog.len(),
        "Catalog ready"
    );
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match args.user {
        Some(user) => {
            let registry = SessionRegistry::new(catalog, &config.save_dir, config.rules());
            writeln!(stdout, "Guess the animal! Say \"hint\", \"give up\" or \"new\".")?;
            for line in stdin.lock().lines() {
                let line = line?;
                let utterance = parse_utterance(&line);
                match registry.with_skill(&user, |skill| respond(skill, &utterance))? {
                    Some(spoken) => writeln!(stdout, "{spoken}")?,
                    None => break,
                }
            }
        }
        None => {
            let store = FileSaveStore::in_dir(&config.save_dir);
            let mut skill = AnimalSkill::new(GameSession::open(catalog, store, config.rules())?);
            writeln!(stdout, "Guess the animal! Say \"hint\", \"give up\" or \"new\".")?;
            for line in stdin.lock().lines() {
                let line = line?;
                match respond(&mut skill, &parse_utterance(&line))? {
                    Some(spoken) => writeln!(stdout, "{spoken}")?,
                    None => break,
                }
            }
        }
    }

    Ok(())
}
