use std::io;
use std::path::Path;

use wordsolve_core::dict::{DictError, WordEdit, WordListFile, WordSource};
use wordsolve_core::manager::DictionaryManager;

use super::list_name;

/// Open a custom word list for editing. A missing file is an empty list.
fn open_for_edit(path: &Path) -> (DictionaryManager, String) {
    let name = list_name(path);
    let words = match WordListFile::new(path).read_words() {
        Ok(words) => words,
        Err(DictError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            eprintln!("Error opening {}: {e}", path.display());
            std::process::exit(1);
        }
    };
    let mut manager = DictionaryManager::new();
    manager.register_dictionary(name.as_str(), words);
    die!(manager.set_current(&name), "Error: {}");
    (manager, name)
}

/// Apply `edit` and write the list back. Returns false when the list was
/// already in the requested state.
fn apply_and_save(path: &Path, edit: WordEdit) -> bool {
    let (mut manager, name) = open_for_edit(path);
    let before = manager.get(&name).map(|d| d.generation());
    die!(manager.mutate_current(edit), "Error: {}");

    let Some(dict) = manager.get(&name) else {
        return false;
    };
    if Some(dict.generation()) == before {
        return false;
    }
    die!(
        WordListFile::new(path).save(dict.words()),
        "Error saving {}: {}",
        path.display()
    );
    true
}

pub fn words_list(path: &Path) {
    let (manager, name) = open_for_edit(path);
    let words = manager.get(&name).map(|d| d.words()).unwrap_or_default();
    if words.is_empty() {
        println!("(empty)");
    } else {
        for word in words {
            println!("{word}");
        }
        println!("---");
        println!("{} words", words.len());
    }
}

pub fn words_add(path: &Path, word: &str) {
    if apply_and_save(path, WordEdit::Add(word.to_string())) {
        println!("Added: {word}");
    } else {
        println!("Already exists: {word}");
    }
}

pub fn words_edit(path: &Path, old: &str, new: &str) {
    let edit = WordEdit::Edit {
        old: old.to_string(),
        new: new.to_string(),
    };
    if apply_and_save(path, edit) {
        println!("Replaced: {old} → {new}");
    } else {
        println!("Unchanged: {old}");
    }
}

pub fn words_remove(path: &Path, word: &str) {
    if apply_and_save(path, WordEdit::Delete(word.to_string())) {
        println!("Removed: {word}");
    } else {
        println!("Not found: {word}");
    }
}
