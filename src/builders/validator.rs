use anyhow::Result;
use std::collections::HashSet;
use std::fmt;

use crate::builders::patterns::DirectivePatternSet;
use crate::core::config::CleanerConfig;

/// How serious a configuration problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The run cannot start.
    Error,
    /// The run can start but the configuration is probably not what was meant.
    Warning,
}

/// A single problem found in a `CleanerConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "error: {}", self.message),
            Severity::Warning => write!(f, "warning: {}", self.message),
        }
    }
}

/// The `ConfigValidator` trait defines the interface for checking a
/// configuration before any file is touched.
pub trait ConfigValidator {
    /// Performs a full validation of the `CleanerConfig` and returns every
    /// issue found, errors and warnings alike.
    fn validate_config(&self, config: &CleanerConfig) -> Result<Vec<ValidationIssue>>;

    /// Validates the directive keyword list on its own.
    ///
    /// An empty list and a blank keyword are errors, because the first
    /// would never match and the second would match every comment. A
    /// keyword listed twice is only a warning.
    ///
    /// # Arguments
    /// * `directives`: The keyword set the engine will match against.
    ///
    /// # Returns
    /// A `Vec<ValidationIssue>`, empty when the set is usable as is.
    fn validate_directives(&self, directives: &DirectivePatternSet) -> Vec<ValidationIssue>;
}

/// The `StandardValidator` is the validator used by the `CleanerEngine`.
pub struct StandardValidator;

impl StandardValidator {
    /// Creates a new instance of `StandardValidator`.
    pub fn new() -> Self {
        Self
    }

    fn validate_discovery_pattern(&self, pattern: &str) -> Vec<ValidationIssue> {
        if pattern.trim().is_empty() {
            return vec![ValidationIssue::error("Discovery pattern cannot be empty")];
        }
        match glob::Pattern::new(pattern) {
            Ok(_) => Vec::new(),
            Err(e) => vec![ValidationIssue::error(format!(
                "Invalid discovery pattern '{pattern}': {e}"
            ))],
        }
    }
}

impl Default for StandardValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator for StandardValidator {
    fn validate_config(&self, config: &CleanerConfig) -> Result<Vec<ValidationIssue>> {
        let mut issues = self.validate_discovery_pattern(&config.discovery_pattern);
        issues.extend(self.validate_directives(&config.directives));
        Ok(issues)
    }

    fn validate_directives(&self, directives: &DirectivePatternSet) -> Vec<ValidationIssue> {
        if directives.is_empty() {
            return vec![ValidationIssue::error(
                "At least one directive pattern is required",
            )];
        }

        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for (index, pattern) in directives.patterns().iter().enumerate() {
            // An empty keyword is contained in every comment.
            if pattern.trim().is_empty() {
                issues.push(ValidationIssue::error(format!(
                    "Directive pattern #{} is empty and would match every comment",
                    index + 1
                )));
            } else if !seen.insert(pattern.as_str()) {
                issues.push(ValidationIssue::warning(format!(
                    "Directive pattern '{pattern}' is listed more than once"
                )));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let issues = StandardValidator::new()
            .validate_config(&CleanerConfig::default())
            .unwrap();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_empty_directive_set_is_an_error() {
        let issues =
            StandardValidator::new().validate_directives(&DirectivePatternSet::new(Vec::<String>::new()));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_blank_and_duplicate_directives() {
        let set = DirectivePatternSet::new(["PK;", "  ", "PK;"]);
        let issues = StandardValidator::new().validate_directives(&set);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].is_error());
        assert_eq!(issues[1].severity, Severity::Warning);
    }

    #[test]
    fn test_invalid_glob_is_an_error() {
        let config = CleanerConfig {
            discovery_pattern: "sql/views/[*.sql".to_string(),
            ..CleanerConfig::default()
        };
        let issues = StandardValidator::new().validate_config(&config).unwrap();
        assert!(issues.iter().any(|issue| issue.is_error()));
    }
}
