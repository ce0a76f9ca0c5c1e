macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod suggest_ops;
pub mod word_list_ops;

use std::path::Path;

use wordsolve_core::dict::WordListFile;
use wordsolve_core::manager::DictionaryManager;

/// Dictionary name for a word list file: its stem, or the whole path.
pub fn list_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load `path` into a fresh manager and make it current.
pub fn open_manager(path: &Path) -> (DictionaryManager, String) {
    let name = list_name(path);
    let mut manager = DictionaryManager::new();
    die!(
        manager.load(name.as_str(), &WordListFile::new(path)),
        "Error loading {}: {}",
        path.display()
    );
    die!(manager.set_current(&name), "Error: {}");
    (manager, name)
}
