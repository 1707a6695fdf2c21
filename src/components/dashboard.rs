//! Dashboard Component
//!
//! Headline counts plus the soonest-expiring and already-expired items.
//! Everything here is derived from the latest `/items` fetch; nothing is
//! cached between visits.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shelflife_core::{overdue, upcoming, StatusCounts};

use crate::api;
use crate::app::Route;
use crate::context::AppContext;
use crate::models::Item;

/// How many rows each dashboard table shows
const PREVIEW_LIMIT: usize = 5;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (items, set_items) = signal(Vec::<Item>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let client = ctx.api();
        spawn_local(async move {
            match api::list_items(&client).await {
                Ok(loaded) => set_items.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to fetch items: {err}").into());
                    ctx.expire_if_unauthorized(&err);
                }
            }
            set_loading.set(false);
        });
    });

    let counts = move || StatusCounts::tally(&items.get(), Local::now().date_naive());
    let expiring_soon = move || {
        let all = items.get();
        upcoming(&all, Local::now().date_naive(), PREVIEW_LIMIT)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };
    let already_expired = move || {
        let all = items.get();
        overdue(&all, Local::now().date_naive(), PREVIEW_LIMIT)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="container">
            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <Show when=move || !loading.get()>
                <h1>"Dashboard"</h1>

                <div class="stat-cards">
                    <div class="card stat-card">
                        <h3>"Tracked items"</h3>
                        <div class="stat-number">{move || counts().total}</div>
                    </div>
                    <div class="card stat-card">
                        <h3>"Expiring soon"</h3>
                        <div class="stat-number stat-warning">{move || counts().expiring}</div>
                    </div>
                    <div class="card stat-card">
                        <h3>"Expired"</h3>
                        <div class="stat-number stat-expired">{move || counts().expired}</div>
                    </div>
                </div>

                <div class="dashboard-tables">
                    <div class="card">
                        <h3>"Expiring soon"</h3>
                        {move || if expiring_soon().is_empty() {
                            view! { <p>"Nothing is about to expire"</p> }.into_any()
                        } else {
                            view! {
                                <table class="table">
                                    <thead>
                                        <tr><th>"Item"</th><th>"Expiry date"</th></tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || expiring_soon()
                                            key=|item| item.item_id
                                            children=move |item| {
                                                view! {
                                                    <tr>
                                                        <td>{item.item_name.clone()}</td>
                                                        <td class="status-warning">
                                                            {item.expiry_date.format("%Y/%m/%d").to_string()}
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            }.into_any()
                        }}
                        <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::Items)>
                            "Manage items"
                        </button>
                    </div>

                    <div class="card">
                        <h3>"Expired"</h3>
                        {move || if already_expired().is_empty() {
                            view! { <p>"Nothing has expired"</p> }.into_any()
                        } else {
                            view! {
                                <table class="table">
                                    <thead>
                                        <tr><th>"Item"</th><th>"Expiry date"</th></tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || already_expired()
                                            key=|item| item.item_id
                                            children=move |item| {
                                                view! {
                                                    <tr>
                                                        <td>{item.item_name.clone()}</td>
                                                        <td class="status-expired">
                                                            {item.expiry_date.format("%Y/%m/%d").to_string()}
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            }.into_any()
                        }}
                        <button class="btn btn-danger" on:click=move |_| ctx.navigate(Route::Items)>
                            "Review"
                        </button>
                    </div>
                </div>

                <div class="card quick-actions">
                    <h3>"Quick actions"</h3>
                    <button class="btn btn-success" on:click=move |_| ctx.navigate(Route::NewItem)>
                        "Add an item"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::Purchases)>
                        "Open the purchase list"
                    </button>
                    <button class="btn btn-warning" on:click=move |_| ctx.navigate(Route::Categories)>
                        "Manage categories"
                    </button>
                </div>
            </Show>
        </div>
    }
}
