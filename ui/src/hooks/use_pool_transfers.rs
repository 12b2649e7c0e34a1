//! Reactive state for the pool transfer screens.

use api::address::includes_address;
use api::pool::Pool;
use dioxus::prelude::*;

use crate::hooks::use_pool_query::use_pool_query;
use crate::hooks::use_tokens::use_tokens;
use crate::Route;

/// UI toggles shared by every transfer form in the app.
///
/// Provided exactly once at the application root, so each
/// `use_pool_transfers` caller receives the same two signals and a write
/// from one form is seen by all of them. Writes are plain last-write-wins
/// assignments; the pair is not updated atomically.
#[derive(Clone, Copy)]
pub struct TransferToggles {
    /// Treat the chain's native asset specially in transfer forms.
    pub use_native_asset: Signal<bool>,
    /// Whether transfer actions are currently permitted.
    pub transfers_allowed: Signal<bool>,
}

impl TransferToggles {
    /// Installs the shared toggles into the context tree. Call once, at the
    /// app root, before any screen renders.
    pub fn provide() -> Self {
        let use_native_asset = use_signal(|| false);
        let transfers_allowed = use_signal(|| true);
        use_context_provider(|| TransferToggles {
            use_native_asset,
            transfers_allowed,
        })
    }
}

/// The reactive bundle backing a pool transfer screen.
pub struct PoolTransfers {
    /// The routed pool, or `None` while it has not loaded (or failed to).
    pub pool: Memo<Option<Pool>>,
    /// Never false while `pool` is still `None`.
    pub loading_pool: Memo<bool>,
    /// True if any of the pool's transfer tokens lacks a known price.
    pub missing_prices: Memo<bool>,
    pub use_native_asset: Signal<bool>,
    pub transfers_allowed: Signal<bool>,
}

/// True while the query has not produced a usable pool.
fn pool_is_loading(query_loading: bool, have_pool: bool) -> bool {
    query_loading || !have_pool
}

/// Token addresses the transfer form operates on; empty until a pool loads.
fn transfer_token_addresses(pool: Option<&Pool>) -> Vec<String> {
    pool.map(Pool::transfer_token_addresses).unwrap_or_default()
}

/// True if any of `addresses` is missing from the priced set. The priced
/// set is lower-cased up front and membership is checked case-insensitively,
/// so mixed-case addresses on either side still match.
fn any_price_missing(addresses: &[String], priced: &[String]) -> bool {
    !addresses
        .iter()
        .all(|address| includes_address(priced, address))
}

/// Derived state for the pool named by the active route.
///
/// The `id` path parameter is captured at first render and never re-read;
/// navigating to another pool mounts a fresh screen rather than retargeting
/// an existing one.
pub fn use_pool_transfers() -> PoolTransfers {
    let route = use_route::<Route>();
    let id = use_hook(|| route.pool_id());

    let tokens = use_tokens();
    let query = use_pool_query(id);

    let pool = use_memo(move || query.data());

    // Idle, loading and failed queries all read as "still loading" here;
    // callers cannot tell a pending fetch from a failed one.
    let pool_query_loading = use_memo(move || !query.status().is_ready());

    let loading_pool =
        use_memo(move || pool_is_loading(pool_query_loading(), pool.read().is_some()));

    let token_addresses = use_memo(move || transfer_token_addresses(pool.read().as_ref()));

    let missing_prices = use_memo(move || {
        let priced = tokens.priced_addresses();
        any_price_missing(&token_addresses.read(), &priced)
    });

    let toggles = use_context::<TransferToggles>();

    PoolTransfers {
        pool,
        loading_pool,
        missing_prices,
        use_native_asset: toggles.use_native_asset,
        transfers_allowed: toggles.transfers_allowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_pool_query::PoolQueryStatus;
    use api::pool::PoolType;

    fn phantom_pool() -> Pool {
        Pool {
            id: "0xphantom".to_string(),
            address: "0xphantom-addr".to_string(),
            pool_type: PoolType::StablePhantom,
            name: "bb-a-USD".to_string(),
            tokens: vec![],
            main_tokens: Some(vec!["0xA".to_string(), "0xB".to_string()]),
            tokens_list: Some(vec!["0xC".to_string()]),
        }
    }

    #[test]
    fn no_pool_means_no_token_addresses() {
        assert!(transfer_token_addresses(None).is_empty());
    }

    #[test]
    fn loaded_pool_delegates_to_its_selection_policy() {
        let pool = phantom_pool();
        assert_eq!(
            transfer_token_addresses(Some(&pool)),
            vec!["0xA".to_string(), "0xB".to_string()]
        );
    }

    #[test]
    fn prices_match_case_insensitively() {
        let addresses = vec!["0xAAA".to_string()];
        let priced = vec!["0xaaa".to_string()];
        assert!(!any_price_missing(&addresses, &priced));
    }

    #[test]
    fn one_unpriced_token_flags_missing_prices() {
        let addresses = vec!["0xAAA".to_string(), "0xBBB".to_string()];
        let priced = vec!["0xaaa".to_string()];
        assert!(any_price_missing(&addresses, &priced));
    }

    #[test]
    fn no_token_addresses_means_no_missing_prices() {
        assert!(!any_price_missing(&[], &[]));
    }

    #[test]
    fn every_unsettled_query_state_reads_as_loading() {
        for status in [
            PoolQueryStatus::Idle,
            PoolQueryStatus::Loading,
            PoolQueryStatus::Errored,
        ] {
            assert!(pool_is_loading(!status.is_ready(), false));
        }
    }

    #[test]
    fn absent_pool_keeps_loading_even_when_the_query_settled() {
        assert!(pool_is_loading(false, false));
    }

    #[test]
    fn loading_clears_only_with_a_settled_query_and_a_pool() {
        assert!(pool_is_loading(true, true));
        assert!(!pool_is_loading(false, true));
    }
}
