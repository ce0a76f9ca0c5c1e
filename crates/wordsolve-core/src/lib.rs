pub mod cache;
pub mod dict;
pub mod engine;
pub mod manager;
pub mod settings;
pub mod text;
pub mod trie;
