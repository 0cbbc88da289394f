//! Asset identity: chain-qualified asset ids, tokens, and currencies
//!
//! An [`AssetId`] is the canonical `chainId-moduleIndex-assetIndex` triple
//! exchanged with external token registries. A [`Token`] binds an asset id to
//! display metadata and a decimal count; a [`Currency`] is either a token or a
//! native/placeholder currency with no on-chain identity.

use crate::errors::TokenError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static ASSET_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+-\d+-\d+$").expect("asset id pattern is valid"));

/// Chain-qualified asset identifier
///
/// Canonical wire form is `"chainId-moduleIndex-assetIndex"`, e.g. `"200-2-10"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId {
    pub chain_id: u64,
    pub module_index: u64,
    pub asset_index: u64,
}

impl AssetId {
    pub fn new(chain_id: u64, module_index: u64, asset_index: u64) -> Self {
        Self {
            chain_id,
            module_index,
            asset_index,
        }
    }

    /// Canonical string form used for equality and ordering
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.chain_id, self.module_index, self.asset_index)
    }
}

impl FromStr for AssetId {
    type Err = TokenError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if !ASSET_ID_PATTERN.is_match(input) {
            return Err(TokenError::InvalidAssetId {
                input: input.to_string(),
            });
        }

        let mut parts = input.split('-').map(|part| {
            part.parse::<u64>().map_err(|_| TokenError::InvalidAssetId {
                input: input.to_string(),
            })
        });

        // the pattern guarantees exactly three numeric segments
        Ok(AssetId {
            chain_id: parts.next().expect("pattern has three segments")?,
            module_index: parts.next().expect("pattern has three segments")?,
            asset_index: parts.next().expect("pattern has three segments")?,
        })
    }
}

/// A fungible asset with a chain-qualified identity
///
/// Token equality is defined by asset id alone; symbol, name, and decimals
/// are display metadata and do not participate in identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    asset_id: AssetId,
    decimals: u32,
    symbol: Option<String>,
    name: Option<String>,
}

impl Token {
    pub fn new(
        asset_id: AssetId,
        decimals: u32,
        symbol: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            asset_id,
            decimals,
            symbol,
            name,
        }
    }

    /// Parse the canonical asset-id string and build a token from it
    pub fn from_canonical(
        asset_id: &str,
        decimals: u32,
        symbol: Option<String>,
        name: Option<String>,
    ) -> Result<Self, TokenError> {
        Ok(Self::new(asset_id.parse()?, decimals, symbol, name))
    }

    pub fn asset_id(&self) -> &AssetId {
        &self.asset_id
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn equals(&self, other: &Token) -> bool {
        self.asset_id == other.asset_id
    }

    /// Canonical ordering on the lower-cased asset-id string
    ///
    /// Ordering a token against an equal asset id is undefined and fails with
    /// [`TokenError::EqualAssetIds`].
    pub fn sorts_before(&self, other: &Token) -> Result<bool, TokenError> {
        if self.asset_id == other.asset_id {
            return Err(TokenError::EqualAssetIds {
                asset_id: self.asset_id.canonical(),
            });
        }

        Ok(self.asset_id.canonical().to_lowercase() < other.asset_id.canonical().to_lowercase())
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Token {}

impl std::hash::Hash for Token {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.asset_id.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{} ({})", symbol, self.asset_id),
            None => write!(f, "{}", self.asset_id),
        }
    }
}

/// Abstract currency: a token, or a native/placeholder currency without
/// further on-chain identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Native {
        decimals: u32,
        symbol: Option<String>,
        name: Option<String>,
    },
    Token(Token),
}

impl Currency {
    pub fn native(decimals: u32, symbol: Option<String>, name: Option<String>) -> Self {
        Currency::Native {
            decimals,
            symbol,
            name,
        }
    }

    pub fn decimals(&self) -> u32 {
        match self {
            Currency::Native { decimals, .. } => *decimals,
            Currency::Token(token) => token.decimals(),
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Native { symbol, .. } => symbol.as_deref(),
            Currency::Token(token) => token.symbol(),
        }
    }

    /// Currency equality: tokens compare by asset id, a token never equals a
    /// native currency, native currencies compare by their fields
    pub fn equals(&self, other: &Currency) -> bool {
        match (self, other) {
            (Currency::Token(a), Currency::Token(b)) => a.equals(b),
            (Currency::Token(_), _) | (_, Currency::Token(_)) => false,
            (a, b) => a == b,
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Native { symbol, .. } => {
                write!(f, "{}", symbol.as_deref().unwrap_or("native"))
            }
            Currency::Token(token) => write!(f, "{token}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(asset_id: &str) -> Token {
        Token::from_canonical(asset_id, 12, Some("TKN".to_string()), None).unwrap()
    }

    #[test]
    fn test_asset_id_roundtrip() {
        let id: AssetId = "200-2-10".parse().unwrap();
        assert_eq!(id, AssetId::new(200, 2, 10));
        assert_eq!(id.to_string(), "200-2-10");
    }

    #[test]
    fn test_asset_id_rejects_malformed_input() {
        for input in ["", "200", "200-2", "200-2-10-4", "a-b-c", "200-2-x", "-1-2-3"] {
            assert!(
                input.parse::<AssetId>().is_err(),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn test_token_serde_roundtrip() {
        let original = Token::from_canonical("200-2-10", 12, Some("ZLK".to_string()), None).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let restored: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
        assert_eq!(restored.decimals(), 12);
        assert_eq!(restored.symbol(), Some("ZLK"));
    }

    #[test]
    fn test_token_equality_is_by_asset_id() {
        let a = Token::from_canonical("200-2-10", 12, Some("A".to_string()), None).unwrap();
        let b = Token::from_canonical("200-2-10", 8, Some("B".to_string()), None).unwrap();
        let c = token("200-2-11");

        assert_eq!(a, a.clone());
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sorts_before_is_strict() {
        let a = token("100-2-10");
        let b = token("200-2-10");

        assert!(a.sorts_before(&b).unwrap());
        assert!(!b.sorts_before(&a).unwrap());
    }

    #[test]
    fn test_sorts_before_equal_ids_fails() {
        let a = token("200-2-10");
        let b = token("200-2-10");

        assert_eq!(
            a.sorts_before(&b),
            Err(TokenError::EqualAssetIds {
                asset_id: "200-2-10".to_string()
            })
        );
    }

    #[test]
    fn test_currency_equality_rules() {
        let token_currency: Currency = token("200-2-10").into();
        let same_token: Currency = token("200-2-10").into();
        let native = Currency::native(12, Some("NAT".to_string()), None);

        assert!(token_currency.equals(&same_token));
        assert!(!token_currency.equals(&native));
        assert!(native.equals(&native.clone()));
    }
}
