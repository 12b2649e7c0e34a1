//=============================================================================
// File: src/screens/pool_transfer.rs
//=============================================================================
use crate::app_state::AppState;
use crate::components::pico::{Button, ButtonType, Card, Input, Modal, Switch};
use crate::hooks::use_pool_transfers::use_pool_transfers;
use crate::hooks::use_tokens::{use_tokens, Tokens};
use api::address::{abbreviate_address, same_address};
use api::fiat_amount::FiatAmount;
use api::network::Network;
use api::pool::Pool;
use dioxus::prelude::*;
use num_traits::CheckedAdd;
use std::collections::HashMap;

/// Parses a form amount. Empty strings are "nothing entered", not zero.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Row label for a token, honoring the native-asset toggle for the
/// wrapped-native token.
fn row_symbol(pool: &Pool, address: &str, native: bool, network: Network) -> String {
    if native && same_address(address, network.wrapped_native_address()) {
        return network.native_asset_symbol().to_string();
    }
    match pool.symbol_of(address) {
        Some(symbol) => symbol.to_string(),
        None => abbreviate_address(address),
    }
}

fn price_label(tokens: &Tokens, address: &str) -> String {
    match tokens.price_of(address) {
        Some(price) => price.to_string_with_symbol(),
        None => "price unavailable".to_string(),
    }
}

/// One editable amount row of the transfer form.
#[component]
fn TokenAmountRow(
    address: String,
    symbol: String,
    price_label: String,
    amounts: Signal<HashMap<String, String>>,
    disabled: bool,
) -> Element {
    let key = address.to_lowercase();
    let value = amounts.read().get(&key).cloned().unwrap_or_default();
    let error =
        (!value.trim().is_empty() && parse_amount(&value).is_none()).then_some("Invalid amount");

    let mut amounts = amounts;
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: baseline;",
            label { "{symbol}" }
            small { "{price_label}" }
        }
        Input {
            label: "".to_string(),
            name: "amount_{symbol}",
            input_type: "number".to_string(),
            placeholder: "0.0".to_string(),
            value,
            disabled,
            on_input: move |event: FormEvent| {
                amounts.write().insert(key.clone(), event.value());
            },
        }
        if let Some(err) = error {
            small { style: "color: var(--pico-color-red-500);", "{err}" }
        }
    }
}

#[component]
pub fn PoolTransferScreen(id: String) -> Element {
    let network = use_context::<AppState>().network;
    let transfers = use_pool_transfers();
    let tokens = use_tokens();

    let pool = transfers.pool;
    let loading_pool = transfers.loading_pool;
    let missing_prices = transfers.missing_prices;
    let use_native_asset = transfers.use_native_asset;
    let transfers_allowed = transfers.transfers_allowed;

    // --- Form State ---
    let amounts = use_signal(HashMap::<String, String>::new);
    let mut confirm_open = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    // --- Derived State ---
    // Fiat value of everything typed in so far, where prices allow it.
    let subtotal = use_memo(move || {
        let pool = pool.read();
        let pool = pool.as_ref()?;
        let amounts = amounts.read();
        let mut total: Option<FiatAmount> = None;
        for address in pool.transfer_token_addresses() {
            let Some(raw) = amounts.get(&address.to_lowercase()) else {
                continue;
            };
            let Some(amount) = parse_amount(raw) else {
                continue;
            };
            let Some(price) = tokens.price_of(&address) else {
                continue;
            };
            let value = price.scaled_by(amount);
            total = Some(match total {
                Some(t) => t.checked_add(&value).unwrap_or(t),
                None => value,
            });
        }
        total
    });
    let has_valid_amounts = use_memo(move || {
        let amounts = amounts.read();
        let mut any = false;
        for raw in amounts.values() {
            if raw.trim().is_empty() {
                continue;
            }
            match parse_amount(raw) {
                Some(v) if v > 0.0 => any = true,
                Some(_) => {}
                // A malformed entry blocks the preview entirely.
                None => return false,
            }
        }
        any
    });

    let body = match (loading_pool(), pool()) {
        (true, _) | (_, None) => rsx! {
            Card {
                h3 { "Pool transfers" }
                p { "Loading pool..." }
                progress {}
            }
        },
        (false, Some(pool)) => {
            let addresses = pool.transfer_token_addresses();
            let has_wrapped_native = addresses
                .iter()
                .any(|address| same_address(address, network.wrapped_native_address()));

            // Rows for the confirm modal; reading `amounts` here keeps the
            // summary in step with the form.
            let summary: Vec<(String, String)> = {
                let amounts = amounts.read();
                addresses
                    .iter()
                    .filter_map(|address| {
                        let raw = amounts.get(&address.to_lowercase())?;
                        if raw.trim().is_empty() {
                            return None;
                        }
                        let symbol = row_symbol(&pool, address, use_native_asset(), network);
                        Some((symbol, raw.clone()))
                    })
                    .collect()
            };

            rsx! {
                Card {
                    hgroup {
                        h3 { "{pool.name}" }
                        p {
                            "{pool.pool_type.name()} · "
                            code { "{abbreviate_address(&pool.address)}" }
                        }
                    }
                }
                if missing_prices() {
                    Card {
                        p {
                            mark { "Some pool tokens have no price yet; totals may be incomplete." }
                        }
                    }
                }
                if !transfers_allowed() {
                    Card {
                        p { "Transfers are currently paused." }
                    }
                }
                Card {
                    h4 { "Add liquidity" }
                    if has_wrapped_native {
                        Switch {
                            label: format!(
                                "Use {} instead of {}",
                                network.native_asset_symbol(),
                                network.wrapped_native_symbol(),
                            ),
                            checked: use_native_asset,
                        }
                    }
                    for address in addresses.clone() {
                        TokenAmountRow {
                            key: "{address}",
                            address: address.clone(),
                            symbol: row_symbol(&pool, &address, use_native_asset(), network),
                            price_label: price_label(&tokens, &address),
                            amounts,
                            disabled: !transfers_allowed(),
                        }
                    }
                    footer {
                        style: "display: flex; justify-content: space-between; align-items: center; margin-top: 1rem;",
                        if let Some(total) = subtotal() {
                            h5 { "Total value: {total.to_string_with_symbol()}" }
                        } else {
                            span {}
                        }
                        Button {
                            disabled: !transfers_allowed() || !has_valid_amounts(),
                            on_click: move |_| confirm_open.set(true),
                            "Preview"
                        }
                    }
                }
                Modal {
                    is_open: confirm_open,
                    title: "Confirm transfer".to_string(),
                    p { "Join {pool.name} with the amounts below." }
                    ul {
                        for (symbol, raw) in summary.clone() {
                            li { "{symbol}: {raw}" }
                        }
                    }
                    if let Some(total) = subtotal() {
                        p {
                            strong { "Total value: " }
                            "{total.to_string_with_symbol()}"
                        }
                    }
                    footer {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| confirm_open.set(false),
                            "Cancel"
                        }
                        Button {
                            disabled: !transfers_allowed(),
                            on_click: move |_| {
                                // TODO: hand the join off to the wallet bridge once it lands.
                                confirm_open.set(false);
                                submitted.set(true);
                            },
                            "Confirm"
                        }
                    }
                }
                if submitted() {
                    Card {
                        p { "Transfer prepared. Track it from your wallet." }
                    }
                }
            }
        }
    };

    rsx! {
        document::Title { "Poolport · pool {id}" }
        {body}
    }
}
