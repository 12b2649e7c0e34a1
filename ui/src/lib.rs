// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use hooks::use_pool_transfers::TransferToggles;
use screens::home::HomeScreen;
use screens::pool_transfer::PoolTransferScreen;

/// The internal routes of the portal. `:id` is the pool id path parameter.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        HomeScreen {},
        #[route("/pool/:id")]
        PoolTransferScreen { id: String },
}

impl Route {
    /// The pool id carried by the active route, if any.
    pub(crate) fn pool_id(&self) -> Option<String> {
        match self {
            Route::PoolTransferScreen { id } => Some(id.clone()),
            _ => None,
        }
    }
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Resolved on the server before the initial page is delivered.
    let initial_data_future = use_server_future(move || async move {
        // Call the server apis concurrently.
        let (network_result, prefs_result) = tokio::join!(api::network(), api::get_user_prefs());

        match (network_result, prefs_result) {
            (Ok(network), Ok(prefs)) => Ok((network, prefs)),
            (Err(e), _) | (_, Err(e)) => Err(e.to_string()),
        }
    })?;

    // Read from the single future to ensure it's polled during SSR.
    let body = match &*initial_data_future.read() {
        Some(Ok((network, prefs))) => {
            rsx! {
                LoadedApp {
                    app_state: AppState::new(*network, *prefs),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// Holds the main app logic; only runs once the initial data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Create signals for mutable state at the top level of the component,
    // then provide the mutable state by passing the already created signals.
    let prices_signal = use_signal(|| None);
    use_context_provider(|| AppStateMut {
        prices: prices_signal,
    });
    let mut app_state_mut = use_context::<AppStateMut>();

    // The transfer-form toggles are shared app-wide: one instance, here.
    TransferToggles::provide();

    let prices_resource = use_resource(move || async move { api::token_prices().await });

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut res = prices_resource;
        async move {
            loop {
                compat::sleep(std::time::Duration::from_secs(60)).await;
                res.restart();
            }
        }
    });

    use_effect(move || match &*prices_resource.read() {
        Some(Ok(price_map)) => {
            // This check prevents redundant writes when a refresh returns
            // the same data.
            if app_state_mut.prices.peek().as_ref() != Some(price_map) {
                app_state_mut.prices.set(Some(price_map.clone()));
            }
        }
        Some(Err(e)) => {
            // Keep showing the last good prices; the next tick retries.
            dioxus_logger::tracing::warn!("token price refresh failed: {e}");
        }
        None => {}
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Top navigation and content shell for all routes.
#[component]
fn AppShell() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        main {
            class: "container",
            header {
                nav {
                    ul {
                        li {
                            strong {
                                Link {
                                    to: Route::HomeScreen {},
                                    "Poolport"
                                }
                            }
                        }
                    }
                    ul {
                        li {
                            small {
                                "{state.network.name()}"
                            }
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
