//! Pool records as served by the pools API.

use serde::Deserialize;
use serde::Serialize;

use crate::address::same_address;

/// Classification of a pool's swap math and token composition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum PoolType {
    Weighted,
    Investment,
    LiquidityBootstrapping,
    Stable,
    MetaStable,
    StablePhantom,
}

impl PoolType {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// One constituent token of a pool, as needed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolToken {
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
}

/// A liquidity pool record.
///
/// `tokens_list` is the pool's full token list in registration order. A
/// phantom-stable pool mints its own token into that list, so the subset a
/// transfer form should operate on lives in `main_tokens` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: String,
    pub address: String,
    pub pool_type: PoolType,
    pub name: String,
    #[serde(default)]
    pub tokens: Vec<PoolToken>,
    #[serde(default)]
    pub main_tokens: Option<Vec<String>>,
    #[serde(default)]
    pub tokens_list: Option<Vec<String>>,
}

impl Pool {
    /// The token addresses a transfer form should operate on.
    ///
    /// Phantom-stable pools expose their main-token subset; every other pool
    /// type exposes the full token list. Absent data yields an empty list
    /// rather than an error.
    pub fn transfer_token_addresses(&self) -> Vec<String> {
        if self.pool_type.is_stable_phantom() {
            self.main_tokens.clone().unwrap_or_default()
        } else {
            self.tokens_list.clone().unwrap_or_default()
        }
    }

    /// Display symbol for one of the pool's tokens. Address casing is ignored.
    pub fn symbol_of(&self, address: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| same_address(&t.address, address))
            .map(|t| t.symbol.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(pool_type: PoolType) -> Pool {
        Pool {
            id: "0xpool".to_string(),
            address: "0xpooladdr".to_string(),
            pool_type,
            name: "Test Pool".to_string(),
            tokens: vec![PoolToken {
                address: "0xC".to_string(),
                symbol: "TKC".to_string(),
                decimals: 18,
            }],
            main_tokens: None,
            tokens_list: None,
        }
    }

    #[test]
    fn phantom_pool_uses_main_tokens_and_ignores_tokens_list() {
        let mut p = pool(PoolType::StablePhantom);
        p.main_tokens = Some(vec!["0xA".to_string(), "0xB".to_string()]);
        p.tokens_list = Some(vec!["0xC".to_string()]);
        assert_eq!(
            p.transfer_token_addresses(),
            vec!["0xA".to_string(), "0xB".to_string()]
        );
    }

    #[test]
    fn phantom_pool_without_main_tokens_yields_empty() {
        let mut p = pool(PoolType::StablePhantom);
        p.tokens_list = Some(vec!["0xC".to_string()]);
        assert!(p.transfer_token_addresses().is_empty());
    }

    #[test]
    fn non_phantom_pool_uses_full_token_list() {
        let mut p = pool(PoolType::Weighted);
        p.tokens_list = Some(vec!["0xC".to_string()]);
        assert_eq!(p.transfer_token_addresses(), vec!["0xC".to_string()]);
    }

    #[test]
    fn non_phantom_pool_without_token_list_yields_empty() {
        assert!(pool(PoolType::Stable).transfer_token_addresses().is_empty());
    }

    #[test]
    fn symbol_lookup_ignores_address_case() {
        let p = pool(PoolType::Weighted);
        assert_eq!(p.symbol_of("0xc"), Some("TKC"));
        assert_eq!(p.symbol_of("0xd"), None);
    }

    #[test]
    fn pool_type_round_trips_through_its_wire_name() {
        use std::str::FromStr;
        for ty in [
            PoolType::Weighted,
            PoolType::Investment,
            PoolType::LiquidityBootstrapping,
            PoolType::Stable,
            PoolType::MetaStable,
            PoolType::StablePhantom,
        ] {
            assert_eq!(PoolType::from_str(ty.name()).unwrap(), ty);
        }
    }
}
