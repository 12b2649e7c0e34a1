//! Server-side caching for pool lookups.

use dioxus::prelude::ServerFnError;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

use crate::pool::Pool;
use crate::pool_providers::subgraph::Subgraph;
use crate::pool_providers::PoolProvider;

#[derive(Clone, Debug)]
struct CachedPool {
    pool: Pool,
    last_fetched: Instant,
}

const CACHE_DURATION: Duration = Duration::from_secs(30);

async fn cache() -> &'static Arc<RwLock<HashMap<String, CachedPool>>> {
    static CACHE: OnceCell<Arc<RwLock<HashMap<String, CachedPool>>>> = OnceCell::const_new();
    CACHE
        .get_or_init(|| async { Arc::new(RwLock::new(HashMap::new())) })
        .await
}

/// Resolves a pool by id, consulting a short-lived per-id cache first.
///
/// Same double-checked locking discipline as the price cache: a read lock
/// for the fast path, then a write lock with a staleness re-check so
/// concurrent misses collapse into one upstream fetch.
pub async fn get_cached_pool(id: &str) -> Result<Pool, ServerFnError> {
    let cache_lock = cache().await;

    let read_lock = cache_lock.read().await;
    if let Some(cached) = read_lock.get(id) {
        if cached.last_fetched.elapsed() < CACHE_DURATION {
            return Ok(cached.pool.clone());
        }
    }
    drop(read_lock);

    let mut write_lock = cache_lock.write().await;

    if let Some(cached) = write_lock.get(id) {
        if cached.last_fetched.elapsed() < CACHE_DURATION {
            return Ok(cached.pool.clone());
        }
    }

    let pool = Subgraph::from_env().pool(id).await?;

    write_lock.insert(
        id.to_string(),
        CachedPool {
            pool: pool.clone(),
            last_fetched: Instant::now(),
        },
    );

    Ok(pool)
}
