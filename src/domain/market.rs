//! Market metadata domain types.
//!
//! - [`TokenInfo`] - one tradeable outcome and its CLOB token
//! - [`MarketInfo`] - a market's research-relevant metadata

use rust_decimal::Decimal;

use super::ids::{MarketId, TokenId};

/// A single outcome within a market, keyed by its CLOB token.
///
/// Outcome labels are stored lower-cased ("yes"/"no" for binary markets)
/// so lookups do not depend on the API's capitalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    token_id: TokenId,
    outcome: String,
}

impl TokenInfo {
    /// Create a new outcome token; the label is lower-cased on entry.
    pub fn new(token_id: TokenId, outcome: impl Into<String>) -> Self {
        Self {
            token_id,
            outcome: outcome.into().to_lowercase(),
        }
    }

    /// Get the CLOB token ID for this outcome.
    #[must_use]
    pub const fn token_id(&self) -> &TokenId {
        &self.token_id
    }

    /// Get the lower-cased outcome label.
    #[must_use]
    pub fn outcome(&self) -> &str {
        &self.outcome
    }
}

/// Research-relevant metadata for one market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketInfo {
    id: MarketId,
    question: String,
    slug: String,
    volume: Decimal,
    tokens: Vec<TokenInfo>,
}

impl MarketInfo {
    /// Create market metadata.
    pub fn new(
        id: MarketId,
        question: impl Into<String>,
        slug: impl Into<String>,
        volume: Decimal,
        tokens: Vec<TokenInfo>,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            slug: slug.into(),
            volume,
            tokens,
        }
    }

    /// Get the market ID.
    #[must_use]
    pub const fn id(&self) -> &MarketId {
        &self.id
    }

    /// Get the human-readable market question.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Get the URL-friendly slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Get the total traded volume in dollars.
    #[must_use]
    pub const fn volume(&self) -> Decimal {
        self.volume
    }

    /// Get all outcome tokens.
    #[must_use]
    pub fn tokens(&self) -> &[TokenInfo] {
        &self.tokens
    }

    /// Find the token for an outcome label (case-insensitive).
    #[must_use]
    pub fn token_for_outcome(&self, outcome: &str) -> Option<&TokenInfo> {
        let wanted = outcome.to_lowercase();
        self.tokens.iter().find(|t| t.outcome() == wanted)
    }

    /// The token a directional "yes" trade targets.
    ///
    /// Falls back to the first listed outcome for markets without a
    /// literal "yes" label, mirroring how the terminal picks a default.
    #[must_use]
    pub fn yes_token(&self) -> Option<&TokenInfo> {
        self.token_for_outcome("yes").or_else(|| self.tokens.first())
    }

    /// True when `query` matches this market's ID or slug exactly.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.id.as_str() == query || self.slug == query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn binary_market() -> MarketInfo {
        MarketInfo::new(
            MarketId::from("m-1"),
            "Will it happen?",
            "will-it-happen",
            dec!(125000),
            vec![
                TokenInfo::new(TokenId::from("tok-yes"), "Yes"),
                TokenInfo::new(TokenId::from("tok-no"), "No"),
            ],
        )
    }

    #[test]
    fn outcome_lookup_is_case_insensitive() {
        let market = binary_market();

        let token = market.token_for_outcome("YES").unwrap();
        assert_eq!(token.token_id().as_str(), "tok-yes");
    }

    #[test]
    fn yes_token_falls_back_to_first_outcome() {
        let market = MarketInfo::new(
            MarketId::from("m-2"),
            "Which team wins?",
            "which-team-wins",
            dec!(500),
            vec![
                TokenInfo::new(TokenId::from("tok-a"), "Team A"),
                TokenInfo::new(TokenId::from("tok-b"), "Team B"),
            ],
        );

        assert_eq!(market.yes_token().unwrap().token_id().as_str(), "tok-a");
    }

    #[test]
    fn matches_on_id_or_slug() {
        let market = binary_market();

        assert!(market.matches("m-1"));
        assert!(market.matches("will-it-happen"));
        assert!(!market.matches("will it happen"));
    }
}
