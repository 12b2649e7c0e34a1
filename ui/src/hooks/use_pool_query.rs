use api::pool::Pool;
use api::ApiError;
use dioxus::prelude::*;

/// Where a pool query currently stands.
///
/// `Idle` means the query was constructed without a pool id and will never
/// run; the other three follow the fetch lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum PoolQueryStatus {
    Idle,
    Loading,
    Errored,
    Ready,
}

/// Classifies a raw resource slot: `None` while the future is in flight,
/// `Some(None)` for a query that never started, then the fetch result.
fn classify<T, E>(slot: Option<&Option<Result<T, E>>>) -> PoolQueryStatus {
    match slot {
        None => PoolQueryStatus::Loading,
        Some(None) => PoolQueryStatus::Idle,
        Some(Some(Err(_))) => PoolQueryStatus::Errored,
        Some(Some(Ok(_))) => PoolQueryStatus::Ready,
    }
}

/// A reactive handle to one pool fetch.
#[derive(Clone, Copy)]
pub struct PoolQuery {
    resource: Resource<Option<Result<Pool, ApiError>>>,
}

impl PoolQuery {
    /// The fetched pool, if the query has succeeded.
    pub fn data(&self) -> Option<Pool> {
        self.resource
            .read()
            .as_ref()
            .and_then(|slot| slot.as_ref())
            .and_then(|result| result.as_ref().ok())
            .cloned()
    }

    pub fn status(&self) -> PoolQueryStatus {
        classify(self.resource.read().as_ref())
    }
}

/// Starts a query for one pool record. Without an id the query idles
/// forever instead of erroring, so callers can treat "no pool routed" and
/// "pool still loading" uniformly.
pub fn use_pool_query(id: Option<String>) -> PoolQuery {
    let resource = use_resource(move || {
        let id = id.clone();
        async move {
            let id = id?;
            let result = api::pool(id.clone()).await;
            if let Err(e) = &result {
                dioxus_logger::tracing::warn!("pool query for {id} failed: {e}");
            }
            Some(result)
        }
    });

    PoolQuery { resource }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_slot_is_loading() {
        assert!(classify::<(), String>(None).is_loading());
    }

    #[test]
    fn disabled_query_is_idle() {
        assert!(classify::<(), String>(Some(&None)).is_idle());
    }

    #[test]
    fn failed_fetch_is_errored() {
        let slot = Some(Err("boom".to_string()));
        assert!(classify::<(), String>(Some(&slot)).is_errored());
    }

    #[test]
    fn resolved_fetch_is_ready() {
        let slot = Some(Ok(()));
        assert!(classify::<_, String>(Some(&slot)).is_ready());
    }
}
