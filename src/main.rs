use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordquiz::quiz::{QuizController, QuizSession, Selector};
use wordquiz::translate::{Fetch, TranslationFetcher};
use wordquiz::words::parse_word;
use wordquiz::{App, Config, IterationMode, JsonWordStore, WordStore};

#[derive(Parser)]
#[command(name = "wordquiz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the word list (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a word to the list
    Add {
        word: String,
    },
    /// Remove every occurrence of a word
    Remove {
        word: String,
    },
    /// Print the word list
    List,
    /// Show or set the iteration mode
    Mode {
        #[arg(value_enum)]
        mode: Option<IterationMode>,
    },
    /// Look up the accepted translations of a word
    Lookup {
        word: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => Config::data_dir()?,
    };
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

    init_logging(&data_dir, cli.command.is_none())?;

    let config = Config::load()?;
    let mut store = JsonWordStore::in_dir(&data_dir);

    match cli.command {
        Some(Commands::Add { word }) => {
            let word = parse_word(&word)?;
            let mut words = store.load()?;
            words.push(word.clone());
            store.save(&words)?;
            println!("The word \"{}\" has been added to the list.", word);
        }
        Some(Commands::Remove { word }) => {
            let mut words = store.load()?;
            let before = words.len();
            words.retain(|w| w != &word);
            if words.len() == before {
                bail!("\"{}\" is not in the list", word);
            }
            store.save(&words)?;
            println!("Removed \"{}\" ({} left)", word, words.len());
        }
        Some(Commands::List) => {
            let words = store.load()?;
            if words.is_empty() {
                println!("No words yet. Add one with: wordquiz add <word>");
            }
            for word in words {
                println!("{}", word);
            }
        }
        Some(Commands::Mode { mode: None }) => {
            println!("{}", store.load_mode()?);
        }
        Some(Commands::Mode { mode: Some(mode) }) => {
            store.save_mode(mode)?;
            println!("Mode set to {}", mode);
        }
        Some(Commands::Lookup { word }) => {
            let word = parse_word(&word)?;
            let fetcher = TranslationFetcher::from_config(&config)?;
            let translations = fetcher.fetch(&word).await?;
            println!("{} -> {}", word, translations.authoritative);
            for (synonym, translation) in
                translations.synonyms.iter().zip(&translations.synonym_translations)
            {
                println!("  {} -> {}", synonym, translation);
            }
        }
        None => {
            // Launch TUI
            let session = QuizSession::open(
                Box::new(store),
                Selector::new(config.alphabetical_sorts_in_place),
            )?;
            let fetcher = TranslationFetcher::shared(&config)?;
            let quiz = QuizController::new(session, fetcher, config.advance_delay());
            let mut app = App::new(config, quiz)?;
            app.run().await?;
        }
    }

    Ok(())
}

/// Log to a file while the TUI owns the terminal, to stderr otherwise
fn init_logging(data_dir: &std::path::Path, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "wordquiz=info".into());

    if tui {
        let path = data_dir.join("wordquiz.log");
        let file = File::options()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
