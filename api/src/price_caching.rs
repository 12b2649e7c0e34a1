//! Server-side caching for token price lookups.

use dioxus::prelude::ServerFnError;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

use crate::network::Network;
use crate::prefs::user_prefs::UserPrefs;
use crate::price_map::TokenPriceMap;
use crate::price_providers::coin_gecko::CoinGecko;
use crate::price_providers::defi_llama::DefiLlama;
use crate::price_providers::PriceProvider;
use crate::price_providers::PriceProviderKind;

#[derive(Clone, Debug)]
struct CachedPrices {
    prices: TokenPriceMap,
    last_fetched: Instant,
}

/// Retrieves token prices, using a lazy, time-based cache.
///
/// This function acts as a gatekeeper to the configured price provider. It
/// only calls the provider when the cache is empty or older than
/// `CACHE_DURATION`; concurrent callers coalesce on the write lock.
pub async fn get_cached_token_prices() -> Result<TokenPriceMap, ServerFnError> {
    static CACHE: OnceCell<Arc<RwLock<Option<CachedPrices>>>> = OnceCell::const_new();
    const CACHE_DURATION: Duration = Duration::from_secs(60);

    let cache_lock = CACHE
        .get_or_init(|| async { Arc::new(RwLock::new(None)) })
        .await;

    // Check for a valid, non-stale cache entry first with a read lock.
    let read_lock = cache_lock.read().await;
    if let Some(cache) = &*read_lock {
        if cache.last_fetched.elapsed() < CACHE_DURATION {
            return Ok(cache.prices.clone());
        }
    }
    drop(read_lock); // Release before attempting to acquire the write lock.

    let mut write_lock = cache_lock.write().await;

    // Another task might have refreshed while we waited for the write lock.
    if let Some(cache) = &*write_lock {
        if cache.last_fetched.elapsed() < CACHE_DURATION {
            return Ok(cache.prices.clone());
        }
    }

    // The cache is confirmed stale. Fetch fresh data.
    let prefs = UserPrefs::default();
    let network = Network::from_env();
    let addresses = network.tracked_tokens();
    let prices = match prefs.price_provider() {
        PriceProviderKind::CoinGecko => {
            CoinGecko
                .token_prices(network, addresses, prefs.quote_currency())
                .await?
        }
        PriceProviderKind::DefiLlama => {
            DefiLlama
                .token_prices(network, addresses, prefs.quote_currency())
                .await?
        }
    };
    dioxus_logger::tracing::info!(
        "refreshed {} token prices on {} from {:?}",
        prices.len(),
        network.name(),
        prefs.price_provider(),
    );

    *write_lock = Some(CachedPrices {
        prices: prices.clone(),
        last_fetched: Instant::now(),
    });

    Ok(prices)
}
