use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use wordsolve_cli::commands::{config_ops, suggest_ops, word_list_ops};
use wordsolve_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "wordtool", about = "Word list suggestions and editing")]
struct Cli {
    /// Custom settings TOML (defaults are embedded)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print ranked suggestions for a partial word
    Suggest {
        /// Word list file, one word per line
        word_list: PathBuf,
        /// Partially typed word
        query: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also show the prefix, suffix and containing tiers
        #[arg(long)]
        tiers: bool,
    },
    /// Read partial words from stdin and print suggestions for each
    Repl {
        /// Word list file, one word per line
        word_list: PathBuf,
    },
    /// Count accepted and rejected lines in a word list
    Check {
        /// Word list file, one word per line
        word_list: PathBuf,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Edit a custom word list
    Words {
        #[command(subcommand)]
        action: WordsAction,
    },
    /// Load the word lists configured in settings and summarize them
    Lists,
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Subcommand)]
enum WordsAction {
    /// List words in the file
    List { word_list: PathBuf },
    /// Add a word
    Add { word_list: PathBuf, word: String },
    /// Replace a word with another
    Edit {
        word_list: PathBuf,
        old: String,
        new: String,
    },
    /// Remove a word
    Remove { word_list: PathBuf, word: String },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Some(path) = &cli.settings {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        });
        if let Err(e) = wordsolve_core::settings::init_custom(content) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Suggest {
            word_list,
            query,
            json,
            tiers,
        } => suggest_ops::suggest(&word_list, &query, json, tiers),
        Command::Repl { word_list } => suggest_ops::repl(&word_list),
        Command::Check { word_list, json } => suggest_ops::check(&word_list, json),
        Command::Words { action } => match action {
            WordsAction::List { word_list } => word_list_ops::words_list(&word_list),
            WordsAction::Add { word_list, word } => word_list_ops::words_add(&word_list, &word),
            WordsAction::Edit {
                word_list,
                old,
                new,
            } => word_list_ops::words_edit(&word_list, &old, &new),
            WordsAction::Remove { word_list, word } => {
                word_list_ops::words_remove(&word_list, &word)
            }
        },
        Command::Lists => {
            let base_dir = cli
                .settings
                .as_deref()
                .and_then(Path::parent)
                .unwrap_or(Path::new("."));
            config_ops::lists(base_dir)
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
