//! Polymarket API response types and their domain mappings.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{MarketId, MarketInfo, OrderBook, PriceLevel, TokenId, TokenInfo};

/// One event from the Gamma `/events` listing; markets are embedded.
#[derive(Debug, Deserialize)]
pub struct GammaEvent {
    #[serde(default)]
    pub markets: Vec<GammaMarket>,
}

/// A market as embedded in a Gamma event.
#[derive(Debug, Deserialize)]
pub struct GammaMarket {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub volume: Option<Decimal>,
    #[serde(default)]
    pub tokens: Vec<GammaToken>,
}

/// An outcome token as listed by the Gamma API.
#[derive(Debug, Deserialize)]
pub struct GammaToken {
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
}

impl GammaMarket {
    /// Map into domain metadata, or `None` when the market carries no
    /// usable outcome tokens and cannot be analyzed.
    pub fn into_market_info(self) -> Option<MarketInfo> {
        let tokens: Vec<TokenInfo> = self
            .tokens
            .into_iter()
            .filter_map(|t| match (t.token_id, t.outcome) {
                (Some(id), Some(outcome)) if !id.is_empty() && !outcome.is_empty() => {
                    Some(TokenInfo::new(TokenId::new(id), outcome))
                }
                _ => None,
            })
            .collect();

        if tokens.is_empty() {
            return None;
        }

        Some(MarketInfo::new(
            MarketId::new(self.id.unwrap_or_default()),
            self.question.unwrap_or_default(),
            self.slug.unwrap_or_default(),
            self.volume.unwrap_or_default(),
            tokens,
        ))
    }
}

/// Order book snapshot as served by the CLOB `/book` endpoint.
#[derive(Debug, Deserialize)]
pub struct BookResponse {
    #[serde(default)]
    pub bids: Vec<RawLevel>,
    #[serde(default)]
    pub asks: Vec<RawLevel>,
}

/// A `[price, size]` pair; the API quotes both as decimal strings.
#[derive(Debug, Deserialize)]
pub struct RawLevel(pub Decimal, pub Decimal);

impl BookResponse {
    /// Map into the domain order book, preserving server-side ordering.
    pub fn into_order_book(self) -> OrderBook {
        let to_levels = |raw: Vec<RawLevel>| {
            raw.into_iter()
                .map(|RawLevel(price, size)| PriceLevel::new(price, size))
                .collect()
        };
        OrderBook::new(to_levels(self.bids), to_levels(self.asks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn gamma_event_markets_map_to_domain() {
        let payload = r#"
        [
          {
            "markets": [
              {
                "id": "514527",
                "question": "Will it happen?",
                "slug": "will-it-happen",
                "volume": 125000.5,
                "tokens": [
                  {"token_id": "111", "outcome": "Yes"},
                  {"token_id": "222", "outcome": "No"}
                ]
              },
              {
                "id": "514528",
                "question": "Tokenless market",
                "slug": "tokenless",
                "volume": 10,
                "tokens": []
              }
            ]
          }
        ]
        "#;

        let events: Vec<GammaEvent> = serde_json::from_str(payload).unwrap();
        let markets: Vec<MarketInfo> = events
            .into_iter()
            .flat_map(|e| e.markets)
            .filter_map(GammaMarket::into_market_info)
            .collect();

        assert_eq!(markets.len(), 1);
        assert_eq!(markets[0].id().as_str(), "514527");
        assert_eq!(markets[0].volume(), dec!(125000.5));
        assert_eq!(
            markets[0].yes_token().unwrap().token_id().as_str(),
            "111"
        );
    }

    #[test]
    fn missing_token_fields_are_dropped_not_fatal() {
        let payload = r#"
        {
          "id": "1",
          "question": "q",
          "slug": "s",
          "tokens": [
            {"token_id": "tok", "outcome": "Yes"},
            {"token_id": "", "outcome": "No"},
            {"outcome": "Maybe"}
          ]
        }
        "#;

        let market: GammaMarket = serde_json::from_str(payload).unwrap();
        let info = market.into_market_info().unwrap();

        assert_eq!(info.tokens().len(), 1);
        assert_eq!(info.volume(), Decimal::ZERO);
    }

    #[test]
    fn book_levels_decode_strings_and_preserve_order() {
        let payload = r#"
        {
          "bids": [["0.48", "120"], ["0.45", "300"]],
          "asks": [["0.52", "80"], ["0.55", "40"]]
        }
        "#;

        let book = serde_json::from_str::<BookResponse>(payload)
            .unwrap()
            .into_order_book();

        assert_eq!(book.bids()[0].price(), dec!(0.48));
        assert_eq!(book.bids()[1].price(), dec!(0.45));
        assert_eq!(book.asks()[0].price(), dec!(0.52));
        assert_eq!(book.asks()[1].size(), dec!(40));
    }

    #[test]
    fn empty_book_payload_yields_empty_book() {
        let book = serde_json::from_str::<BookResponse>("{}")
            .unwrap()
            .into_order_book();

        assert!(book.is_empty());
    }
}
