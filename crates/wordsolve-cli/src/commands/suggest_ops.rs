use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::Serialize;

use wordsolve_core::dict::WordListFile;
use wordsolve_core::engine::SuggestionTiers;
use wordsolve_session::{KeyEvent, TypingSession};

use super::open_manager;

#[derive(Debug, Serialize)]
struct SuggestOutput<'a> {
    dictionary: &'a str,
    query: &'a str,
    suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tiers: Option<TierOutput>,
}

#[derive(Debug, Serialize)]
struct TierOutput {
    prefix: Vec<String>,
    suffix: Vec<String>,
    containing: Vec<String>,
}

impl From<SuggestionTiers> for TierOutput {
    fn from(t: SuggestionTiers) -> Self {
        Self {
            prefix: t.prefix,
            suffix: t.suffix,
            containing: t.containing,
        }
    }
}

#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    file: &'a str,
    accepted: usize,
    distinct: usize,
    rejected: usize,
}

pub fn suggest(word_list: &Path, query: &str, json: bool, show_tiers: bool) {
    let (mut manager, name) = open_manager(word_list);
    let query = query.trim().to_lowercase();
    let suggestions = manager.suggest(&query);
    let tiers = show_tiers.then(|| manager.explain(&query));

    if json {
        let out = SuggestOutput {
            dictionary: &name,
            query: &query,
            suggestions,
            tiers: tiers.map(TierOutput::from),
        };
        println!("{}", die!(serde_json::to_string_pretty(&out), "Error: {}"));
        return;
    }

    if let Some(t) = &tiers {
        println!("prefix:     {}", t.prefix.join(", "));
        println!("suffix:     {}", t.suffix.join(", "));
        println!("containing: {}", t.containing.join(", "));
        println!("---");
    }
    if suggestions.is_empty() {
        println!("(no suggestions)");
    } else {
        for (i, word) in suggestions.iter().enumerate() {
            println!("{:>2}. {word}", i + 1);
        }
    }
}

/// Feed each stdin line through a typing session as keystrokes, printing the
/// suggestions and what the autocomplete key would insert.
pub fn repl(word_list: &Path) {
    let (manager, name) = open_manager(word_list);
    let mut session = TypingSession::new(manager);
    eprintln!("{name}: type a word per line, Ctrl-D to quit");

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        session.dismiss();
        for c in word.chars() {
            session.handle_key(KeyEvent::Char(c));
        }

        let suggestions = session.suggestions().join(", ");
        let completion = session
            .handle_key(KeyEvent::Tab)
            .replacement
            .map(|r| r.insert.trim_end().to_string());
        let written = match completion {
            Some(c) => writeln!(out, "{word}: [{suggestions}] -> {c}"),
            None if suggestions.is_empty() => writeln!(out, "{word}: (no suggestions)"),
            None => writeln!(out, "{word}: [{suggestions}]"),
        };
        die!(written, "Error writing output: {}");
    }

    let stats = session.manager().cache_stats();
    eprintln!(
        "cache: {} entries, {} hits, {} misses",
        stats.len, stats.hits, stats.misses
    );
}

pub fn check(word_list: &Path, json: bool) {
    let file = WordListFile::new(word_list);
    let report = die!(
        file.read_with_report(),
        "Error reading {}: {}",
        word_list.display()
    );
    let mut distinct = report.words.clone();
    distinct.sort_unstable();
    distinct.dedup();

    let display = word_list.display().to_string();
    let out = CheckOutput {
        file: &display,
        accepted: report.words.len(),
        distinct: distinct.len(),
        rejected: report.rejected,
    };
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&out), "Error: {}"));
    } else {
        println!(
            "OK: {} words ({} distinct), {} rejected",
            out.accepted, out.distinct, out.rejected
        );
    }
}
