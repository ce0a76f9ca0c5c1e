use std::fs;
use std::path::Path;

use wordsolve_core::manager::DictionaryManager;
use wordsolve_core::settings::settings;

pub fn settings_export() {
    print!("{}", wordsolve_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        wordsolve_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: suggest={}/{}/{}, cache.capacity={}, autocomplete_key={}, word_lists={}",
        s.suggest.prefix_limit,
        s.suggest.suffix_limit,
        s.suggest.containing_limit,
        s.cache.capacity,
        s.input.autocomplete_key,
        s.word_lists.len()
    );
}

/// Load every configured word list and print a summary, marking the current
/// one. Word list paths resolve against `base_dir`.
pub fn lists(base_dir: &Path) {
    let manager = DictionaryManager::from_settings(settings(), base_dir);
    let names = manager.names();
    if names.is_empty() {
        println!("(no word lists loaded)");
        return;
    }
    for name in names {
        let marker = if manager.current_name() == Some(name) { "*" } else { " " };
        let count = manager.get(name).map_or(0, |d| d.len());
        println!("{marker} {name}\t{count} words");
    }
}
