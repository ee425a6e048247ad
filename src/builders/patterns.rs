use serde::{Deserialize, Serialize};

/// The directive keywords recognized inside a trailing SQL comment.
///
/// Any comment whose text contains one of these substrings is treated as
/// code-generation metadata and stripped from the line. Matching is plain,
/// case-sensitive substring containment.
pub const DIRECTIVE_PATTERNS: &[&str] = &[
    "PK;",
    "sys;",
    "type:",
    "entity:",
    "widget:",
    "req;",
    "grp:",
    "width:",
    "label:",
    "tableHide",
    "formHide",
    "parentKey",
    "valField",
    "dispField",
    "multiLine",
    "searchable",
];

/// Separates the code part of a line from its trailing comment.
pub const COMMENT_DELIMITER: &str = " -- ";

/// How many characters of a removed comment are echoed to the console.
pub const PREVIEW_CHARS: usize = 50;

/// The `DirectiveMatcher` trait decides whether a comment carries a directive.
///
/// The line-cleaning logic only depends on this trait, so it can be exercised
/// with any keyword list, not just [`DIRECTIVE_PATTERNS`].
pub trait DirectiveMatcher {
    /// Returns the first directive keyword found in `comment`, if any.
    fn find_directive(&self, comment: &str) -> Option<&str>;

    /// Checks whether `comment` contains at least one directive keyword.
    fn matches_comment(&self, comment: &str) -> bool {
        self.find_directive(comment).is_some()
    }
}

/// An ordered set of directive keywords.
///
/// Serialized as a plain list of strings so it can be written to and read
/// from a configuration file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct DirectivePatternSet {
    patterns: Vec<String>,
}

impl DirectivePatternSet {
    /// Creates a set from an explicit keyword list, keeping its order.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for DirectivePatternSet {
    fn default() -> Self {
        Self::new(DIRECTIVE_PATTERNS.iter().copied())
    }
}

impl DirectiveMatcher for DirectivePatternSet {
    fn find_directive(&self, comment: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|pattern| comment.contains(pattern.as_str()))
            .map(String::as_str)
    }
}

/// A line split at the first [`COMMENT_DELIMITER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParts<'a> {
    /// Everything before the first delimiter.
    pub code: &'a str,
    /// Everything after the first delimiter, further delimiters included.
    pub comment: &'a str,
}

/// Splits `line` into code and comment at the first `" -- "`.
///
/// Returns `None` when the line has no trailing comment.
pub fn split_line(line: &str) -> Option<LineParts<'_>> {
    line.split_once(COMMENT_DELIMITER)
        .map(|(code, comment)| LineParts { code, comment })
}

/// What happened to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    /// The line is retained byte for byte.
    Kept(&'a str),
    /// The directive comment was dropped and only `code`, without its
    /// trailing whitespace, is retained.
    Stripped {
        code: &'a str,
        comment: &'a str,
        directive: &'a str,
    },
}

impl<'a> LineOutcome<'a> {
    /// The text that ends up in the rewritten file.
    pub fn output(&self) -> &'a str {
        match *self {
            LineOutcome::Kept(line) => line,
            LineOutcome::Stripped { code, .. } => code,
        }
    }

    pub fn is_stripped(&self) -> bool {
        matches!(self, LineOutcome::Stripped { .. })
    }
}

/// Decides whether `line` keeps its trailing comment.
///
/// Only the text after the first delimiter is inspected, and on a match only
/// the text before the first delimiter is retained, with trailing whitespace
/// removed. A string literal that itself contains `" -- "` is therefore
/// treated as the start of a comment.
pub fn clean_line<'a, M>(line: &'a str, matcher: &'a M) -> LineOutcome<'a>
where
    M: DirectiveMatcher + ?Sized,
{
    let Some(parts) = split_line(line) else {
        return LineOutcome::Kept(line);
    };

    match matcher.find_directive(parts.comment) {
        Some(directive) => LineOutcome::Stripped {
            code: parts.code.trim_end(),
            comment: parts.comment,
            directive,
        },
        None => LineOutcome::Kept(line),
    }
}

/// The first [`PREVIEW_CHARS`] characters of a comment, for console output.
pub fn preview(comment: &str) -> String {
    comment.chars().take(PREVIEW_CHARS).collect()
}
