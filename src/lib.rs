//! Removes code-generation directive comments from SQL view files.
//!
//! A directive comment is a trailing `-- ` comment whose text contains one of
//! the keywords in [`builders::patterns::DIRECTIVE_PATTERNS`], such as `PK;`
//! or `widget:`. Ordinary comments are left alone.
pub mod builders;
pub mod core;
pub mod utils;
