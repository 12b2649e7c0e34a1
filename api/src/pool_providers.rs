//! The server-side gateway to the pools API.

use dioxus::prelude::ServerFnError;
use serde_json::json;
use serde_json::Value;
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::address::same_address;
use crate::network::Network;
use crate::pool::Pool;
use crate::pool::PoolToken;
use crate::pool::PoolType;

/// An error decoding a pool record out of a subgraph response.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodePoolError {
    #[error("response carries no pool object")]
    MissingPool,
    #[error("pool field `{0}` is missing or malformed")]
    MalformedField(&'static str),
    #[error("unknown pool type `{0}`")]
    UnknownPoolType(String),
}

/// A trait for any service that can resolve pool records.
pub trait PoolProvider {
    /// Fetches a single pool by id.
    async fn pool(&self, id: &str) -> Result<Pool, ServerFnError>;

    /// Fetches the top pools by total liquidity.
    async fn pools(&self, first: usize) -> Result<Vec<Pool>, ServerFnError>;
}

/// The Balancer-style subgraph implementation of `PoolProvider`.
pub mod subgraph {
    use super::*;

    const POOL_FIELDS: &str =
        "id address poolType name tokensList tokens { address symbol decimals }";

    pub struct Subgraph {
        endpoint: String,
    }

    impl Subgraph {
        /// Builds the gateway for the configured network. `POOL_API_URL`
        /// overrides the per-network default endpoint.
        pub fn from_env() -> Self {
            let endpoint = env::var("POOL_API_URL")
                .unwrap_or_else(|_| default_endpoint(Network::from_env()).to_string());
            Self { endpoint }
        }

        async fn query(&self, query: String) -> Result<Value, ServerFnError> {
            let client = reqwest::Client::new();
            let resp = client
                .post(&self.endpoint)
                .json(&json!({ "query": query }))
                .send()
                .await
                .map_err(ServerFnError::new)?
                .json::<Value>()
                .await
                .map_err(ServerFnError::new)?;
            Ok(resp)
        }
    }

    fn default_endpoint(network: Network) -> &'static str {
        match network {
            Network::Ethereum => {
                "https://api.thegraph.com/subgraphs/name/balancer-labs/balancer-v2"
            }
            Network::Polygon => {
                "https://api.thegraph.com/subgraphs/name/balancer-labs/balancer-polygon-v2"
            }
            Network::Arbitrum => {
                "https://api.thegraph.com/subgraphs/name/balancer-labs/balancer-arbitrum-v2"
            }
        }
    }

    /// Decodes one pool object out of a subgraph response.
    ///
    /// The subgraph has no notion of main tokens, so they are derived here:
    /// a phantom-stable pool mints its own token into `tokensList`, and the
    /// main-token subset is that list with the pool's own token dropped.
    /// Non-phantom pools carry no main-token subset at all.
    pub(crate) fn decode_pool(value: &Value) -> Result<Pool, DecodePoolError> {
        let obj = value.as_object().ok_or(DecodePoolError::MissingPool)?;

        let str_field = |name: &'static str| -> Result<String, DecodePoolError> {
            obj.get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(DecodePoolError::MalformedField(name))
        };

        let id = str_field("id")?;
        let address = str_field("address")?;
        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let type_str = obj
            .get("poolType")
            .and_then(Value::as_str)
            .ok_or(DecodePoolError::MalformedField("poolType"))?;
        let pool_type = PoolType::from_str(type_str)
            .map_err(|_| DecodePoolError::UnknownPoolType(type_str.to_string()))?;

        let tokens_list: Option<Vec<String>> =
            obj.get("tokensList").and_then(Value::as_array).map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            });

        let tokens: Vec<PoolToken> = obj
            .get("tokens")
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default();

        let main_tokens = pool_type.is_stable_phantom().then(|| {
            tokens_list
                .clone()
                .unwrap_or_default()
                .into_iter()
                .filter(|token| !same_address(token, &address))
                .collect::<Vec<_>>()
        });

        Ok(Pool {
            id,
            address,
            pool_type,
            name,
            tokens,
            main_tokens,
            tokens_list,
        })
    }

    impl PoolProvider for Subgraph {
        async fn pool(&self, id: &str) -> Result<Pool, ServerFnError> {
            let query = format!("{{ pool(id: \"{id}\") {{ {POOL_FIELDS} }} }}");
            let resp = self.query(query).await?;

            let value = resp
                .pointer("/data/pool")
                .filter(|value| !value.is_null())
                .ok_or_else(|| ServerFnError::new(format!("pool {id} not found")))?;

            decode_pool(value).map_err(|e| ServerFnError::new(e.to_string()))
        }

        async fn pools(&self, first: usize) -> Result<Vec<Pool>, ServerFnError> {
            let query = format!(
                "{{ pools(first: {first}, orderBy: totalLiquidity, orderDirection: desc) {{ {POOL_FIELDS} }} }}"
            );
            let resp = self.query(query).await?;

            let list = resp
                .pointer("/data/pools")
                .and_then(Value::as_array)
                .ok_or_else(|| ServerFnError::new("malformed pools response"))?;

            // Skip records we cannot decode rather than failing the listing.
            let mut pools = Vec::with_capacity(list.len());
            for value in list {
                match decode_pool(value) {
                    Ok(pool) => pools.push(pool),
                    Err(e) => dioxus_logger::tracing::warn!("skipping pool record: {e}"),
                }
            }
            Ok(pools)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn decodes_a_weighted_pool_without_main_tokens() {
            let value = json!({
                "id": "0xdead-pool-id",
                "address": "0xDeAD",
                "poolType": "Weighted",
                "name": "BAL/WETH 80/20",
                "tokensList": ["0xBA1", "0xWEth"],
                "tokens": [
                    { "address": "0xBA1", "symbol": "BAL", "decimals": 18 },
                    { "address": "0xWEth", "symbol": "WETH", "decimals": 18 }
                ]
            });

            let pool = decode_pool(&value).unwrap();
            assert_eq!(pool.pool_type, PoolType::Weighted);
            assert_eq!(pool.main_tokens, None);
            assert_eq!(
                pool.tokens_list,
                Some(vec!["0xBA1".to_string(), "0xWEth".to_string()])
            );
            assert_eq!(pool.symbol_of("0xba1"), Some("BAL"));
        }

        #[test]
        fn phantom_pool_main_tokens_drop_the_pools_own_token() {
            let value = json!({
                "id": "0xphantom-pool-id",
                "address": "0xPooL",
                "poolType": "StablePhantom",
                "name": "bb-a-USD",
                "tokensList": ["0xAaa", "0xpool", "0xBbb"],
                "tokens": []
            });

            let pool = decode_pool(&value).unwrap();
            assert_eq!(
                pool.main_tokens,
                Some(vec!["0xAaa".to_string(), "0xBbb".to_string()])
            );
        }

        #[test]
        fn unknown_pool_types_are_rejected() {
            let value = json!({
                "id": "0x1",
                "address": "0x2",
                "poolType": "Gyroscope",
                "tokensList": []
            });

            assert_eq!(
                decode_pool(&value),
                Err(DecodePoolError::UnknownPoolType("Gyroscope".to_string()))
            );
        }

        #[test]
        fn missing_fields_are_reported_by_name() {
            assert_eq!(
                decode_pool(&json!({ "id": "0x1" })),
                Err(DecodePoolError::MalformedField("address"))
            );
            assert_eq!(
                decode_pool(&json!("not an object")),
                Err(DecodePoolError::MissingPool)
            );
        }
    }
}
