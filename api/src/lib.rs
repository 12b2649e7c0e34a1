//! Shared domain types and fullstack server functions for the Poolport app.

pub mod address;
pub mod fiat_amount;
pub mod fiat_currency;
pub mod network;
pub mod pool;
#[cfg(not(target_arch = "wasm32"))]
mod pool_caching;
#[cfg(not(target_arch = "wasm32"))]
mod pool_providers;
pub mod prefs;
#[cfg(not(target_arch = "wasm32"))]
mod price_caching;
pub mod price_map;
pub mod price_providers;

use dioxus::prelude::*;

use network::Network;
use pool::Pool;
use prefs::user_prefs::UserPrefs;
use price_map::TokenPriceMap;

pub type ApiError = anyhow::Error;

/// The network the server is pointed at, from the `NETWORK` env var.
#[post("/api/network")]
pub async fn network() -> Result<Network, ApiError> {
    Ok(Network::from_env())
}

/// Retrieves the server-side presentation settings.
///
/// These are snapshotted from env vars once per call; the client fetches
/// them together with the network before rendering anything.
#[post("/api/user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// Resolves one pool record by its id.
#[post("/api/pool")]
pub async fn pool(id: String) -> Result<Pool, ApiError> {
    let pool = pool_caching::get_cached_pool(&id).await?;
    dioxus_logger::tracing::info!(
        "pool {}: type {}, {} tokens",
        pool.id,
        pool.pool_type.name(),
        pool.tokens.len()
    );
    Ok(pool)
}

/// Lists the highest-liquidity pools for the pool index screen.
#[post("/api/pools")]
pub async fn pools() -> Result<Vec<Pool>, ApiError> {
    use pool_providers::PoolProvider;

    let pools = pool_providers::subgraph::Subgraph::from_env().pools(20).await?;
    dioxus_logger::tracing::info!("listed {} pools", pools.len());
    Ok(pools)
}

/// Current prices for the tracked token contracts, keyed by address.
#[post("/api/token_prices")]
pub async fn token_prices() -> Result<TokenPriceMap, ApiError> {
    Ok(price_caching::get_cached_token_prices().await?)
}
