// This file is the module declaration file for the `core` module.
// It declares the submodules that make up the cleaning pipeline and exposes
// them to the rest of the crate.

// `config` module:
// Defines the configuration model (`CleanerConfig`), the built-in discovery
// pattern, and the `ConfigManager` that loads an optional configuration file
// or falls back to the built-in defaults.
pub mod config;

// `discovery` module:
// Provides the `FileSource` trait and its `GlobFileSource` implementation,
// which finds candidate `.sql` files and performs the actual reads and writes.
pub mod discovery;

// `engine` module:
// Holds the `CleanerEngine`, which cleans single files and runs a whole pass
// over every discovered file, plus the pure `clean_content` function.
pub mod engine;
