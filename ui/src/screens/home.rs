//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use crate::components::pico::Card;
use crate::Route;
use api::address::abbreviate_address;
use dioxus::prelude::*;

#[component]
pub fn HomeScreen() -> Element {
    // `use_resource` runs the fetch in the background and re-renders the
    // screen as the result arrives.
    let mut pools = use_resource(move || async move { api::pools().await });

    rsx! {
        match &*pools.read() {
            // The resource is still loading or has not been run yet.
            None => {
                rsx! {
                    Card {
                        h3 { "Pools" }
                        p { "Loading pools..." }
                        progress {} // An indeterminate progress bar
                    }
                }
            }
            Some(Ok(list)) => {
                rsx! {
                    Card {
                        h3 { "Pools" }
                        table {
                            role: "grid",
                            thead {
                                tr {
                                    th { "Pool" }
                                    th { "Type" }
                                    th { "Address" }
                                }
                            }
                            tbody {
                                for pool in list.clone() {
                                    tr {
                                        td {
                                            Link {
                                                to: Route::PoolTransferScreen { id: pool.id.clone() },
                                                "{pool.name}"
                                            }
                                        }
                                        td { "{pool.pool_type.name()}" }
                                        td { code { "{abbreviate_address(&pool.address)}" } }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => {
                rsx! {
                    Card {
                        h3 { "Error" }
                        p { "Failed to load pools: {e}" }
                        button {
                            onclick: move |_| pools.restart(),
                            "Retry"
                        }
                    }
                }
            }
        }
    }
}
