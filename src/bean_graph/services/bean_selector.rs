use crate::bean_graph::domain::Bean;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of selection patterns to prevent DoS attacks
const MAX_SELECT_PATTERNS: usize = 64;

/// Maximum length of a single selection pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// BeanSelector - Builds the graph extraction predicate from name patterns
///
/// Supports wildcard patterns using '*' to match zero or more characters.
/// A pattern without '*' is an exact, case-sensitive name match. A bean is
/// selected when any pattern matches; a selector without patterns selects
/// every bean.
#[derive(Debug)]
pub struct BeanSelector {
    patterns: Vec<SelectPattern>,
}

impl BeanSelector {
    /// Creates a new BeanSelector from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_SELECT_PATTERNS)
    /// - Invalid pattern format (empty, length, control characters, only wildcards)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_SELECT_PATTERNS {
            anyhow::bail!(
                "Too many bean patterns: {} (maximum: {})",
                patterns.len(),
                MAX_SELECT_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(SelectPattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Selector matching every bean
    pub fn select_all() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn is_select_all(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The predicate handed to the graph extractor
    pub fn matches(&self, bean: &Bean) -> bool {
        if self.is_select_all() {
            return true;
        }
        // Every pattern is evaluated so unmatched ones can be reported afterwards
        self.patterns
            .iter()
            .fold(false, |any, pattern| pattern.matches(bean.name()) || any)
    }

    /// Patterns that have not matched any bean so far
    ///
    /// Call after extraction to warn about patterns that had no effect.
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single selection pattern with its compiled matcher
#[derive(Debug)]
struct SelectPattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl SelectPattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = compile_pattern(&pattern);

        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, name: &str) -> bool {
        let is_match = self.matcher.matches(name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// No wildcard: "dataSource"
    Exact(String),
    /// Literal segments separated by '*'
    Wildcard {
        segments: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            PatternMatcher::Exact(expected) => name == expected,
            PatternMatcher::Wildcard {
                segments,
                anchored_start,
                anchored_end,
            } => matches_segments(name, segments, *anchored_start, *anchored_end),
        }
    }
}

/// Matches literal segments in order; anchored ends must touch the name boundaries
fn matches_segments(
    name: &str,
    segments: &[String],
    anchored_start: bool,
    anchored_end: bool,
) -> bool {
    let mut rest = name;
    let mut segments = segments;

    if anchored_start {
        if let Some((first, tail)) = segments.split_first() {
            match rest.strip_prefix(first.as_str()) {
                Some(remaining) => rest = remaining,
                None => return false,
            }
            segments = tail;
        }
    }

    let mut last = None;
    if anchored_end {
        if let Some((final_segment, init)) = segments.split_last() {
            last = Some(final_segment);
            segments = init;
        }
    }

    for segment in segments {
        match rest.find(segment.as_str()) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }

    match last {
        Some(last) => rest.ends_with(last.as_str()),
        None => true,
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Bean pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Bean pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| c.is_control()) {
        anyhow::bail!(
            "Bean pattern contains invalid character {:?} in pattern {:?}",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Bean pattern cannot contain only wildcards: '{}'. Omit --bean to select every bean.",
            pattern
        );
    }

    Ok(())
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    if !pattern.contains('*') {
        return PatternMatcher::Exact(pattern.to_string());
    }

    PatternMatcher::Wildcard {
        segments: pattern
            .split('*')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        anchored_start: !pattern.starts_with('*'),
        anchored_end: !pattern.ends_with('*'),
    }
}
