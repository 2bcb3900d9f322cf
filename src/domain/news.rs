//! Research link domain type.

/// A research result relevant to a market question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// Headline or topic text.
    pub title: String,
    /// Link to the source.
    pub url: String,
    /// Publisher or source host.
    pub source: String,
}

impl NewsItem {
    /// Create a news item.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            source: source.into(),
        }
    }
}
