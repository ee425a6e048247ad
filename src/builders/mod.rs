// This file is the module declaration file for the `builders` module.
// It declares and makes public the building blocks the engine is made of.

// `patterns` module:
// Defines the directive keyword list (`DIRECTIVE_PATTERNS`), the
// `DirectivePatternSet` and `DirectiveMatcher` trait, and the line-level
// logic that splits a line at its comment delimiter and decides whether
// the comment is a directive.
pub mod patterns;

// `reporter` module:
// Defines the `RunReport` counters and the `StatusReporter` trait with its
// `ConsoleReporter` implementation, which prints progress and the summary.
pub mod reporter;

// `validator` module:
// Checks a configuration before a run: the directive list must be usable
// and the discovery pattern must be a valid glob.
pub mod validator;
