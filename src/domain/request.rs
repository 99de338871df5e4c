#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters for `number/search`.
///
/// The provider only receives the filters when both `pattern` and `search_pattern`
/// are non-empty; a lone value is dropped.
pub struct NumberSearchOptions {
    pub pattern: Option<String>,
    /// How `pattern` is matched: `0` starts with, `1` anywhere, `2` ends with.
    pub search_pattern: Option<String>,
}

impl NumberSearchOptions {
    /// Query parameter name for the pattern (`pattern`).
    pub const PATTERN_FIELD: &'static str = "pattern";
    /// Query parameter name for the match mode (`search_pattern`).
    pub const SEARCH_PATTERN_FIELD: &'static str = "search_pattern";

    pub fn new(pattern: impl Into<String>, search_pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            search_pattern: Some(search_pattern.into()),
        }
    }

    /// Both filters, when both are present and non-empty.
    pub fn filters(&self) -> Option<(&str, &str)> {
        match (self.pattern.as_deref(), self.search_pattern.as_deref()) {
            (Some(pattern), Some(search_pattern))
                if !pattern.is_empty() && !search_pattern.is_empty() =>
            {
                Some((pattern, search_pattern))
            }
            _ => None,
        }
    }
}
