//! Purchase List Component
//!
//! The to-buy list: add entries, mark them purchased. Mutations trigger a
//! refetch rather than patching the local copy.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::context::AppContext;
use crate::models::{Category, PurchaseEntry};

#[component]
pub fn PurchaseList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (entries, set_entries) = signal(Vec::<PurchaseEntry>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);
    let (name, set_name) = signal(String::new());
    let (category_id, set_category_id) = signal(String::new());
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let client = ctx.api();
        spawn_local(async move {
            match api::list_purchases(&client).await {
                Ok(loaded) => set_entries.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch purchase list: {err}").into(),
                    );
                    ctx.expire_if_unauthorized(&err);
                }
            }
            match api::list_categories(&client).await {
                Ok(loaded) => set_categories.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch categories: {err}").into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item_name = name.get();
        if item_name.trim().is_empty() {
            return;
        }
        let Ok(cat) = category_id.get().parse::<u32>() else {
            set_error.set("Choose a category".to_string());
            return;
        };

        set_error.set(String::new());
        spawn_local(async move {
            let client = ctx.api();
            match api::add_purchase(&client, item_name.trim(), cat).await {
                Ok(_) => {
                    set_name.set(String::new());
                    set_category_id.set(String::new());
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to add entry: {err}").into());
                    ctx.expire_if_unauthorized(&err);
                    set_error.set(match err {
                        ApiError::Validation(msg) => msg,
                        _ => "Could not add the entry".to_string(),
                    });
                }
            }
        });
    };

    let mark = move |id: u32| {
        let client = ctx.api();
        spawn_local(async move {
            match api::mark_purchased(&client, id).await {
                Ok(()) => ctx.reload(),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to mark entry purchased: {err}").into(),
                    );
                    ctx.expire_if_unauthorized(&err);
                }
            }
        });
    };

    let category_name = move |id: u32| {
        categories
            .get()
            .iter()
            .find(|c| c.category_id == id)
            .map(|c| c.category_name.clone())
            .unwrap_or_else(|| "Uncategorized".to_string())
    };

    view! {
        <div class="container">
            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <Show when=move || !loading.get()>
                <h1>"Purchase list"</h1>

                <div class="card">
                    <h3>"Add an entry"</h3>

                    <Show when=move || !error.get().is_empty()>
                        <div class="alert alert-danger">{move || error.get()}</div>
                    </Show>

                    <form class="purchase-add-form" on:submit=on_add>
                        <div class="form-group">
                            <label>"Item name *"</label>
                            <input
                                type="text"
                                class="form-control"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label>"Category *"</label>
                            <select
                                class="form-control"
                                prop:value=move || category_id.get()
                                on:change=move |ev| set_category_id.set(event_target_value(&ev))
                            >
                                <option value="">"Select a category"</option>
                                <For
                                    each=move || categories.get()
                                    key=|c| c.category_id
                                    children=move |c| {
                                        view! {
                                            <option value=c.category_id.to_string()>
                                                {c.category_name.clone()}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </div>

                        <button type="submit" class="btn btn-success">"Add"</button>
                    </form>
                </div>

                <div class="card">
                    <h3>"To buy"</h3>
                    {move || if entries.get().is_empty() {
                        view! { <p>"Nothing on the purchase list"</p> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Item"</th>
                                        <th>"Category"</th>
                                        <th>"Added"</th>
                                        <th>"Status"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || entries.get()
                                        key=|entry| entry.purchase_id
                                        children=move |entry| {
                                            let id = entry.purchase_id;
                                            let purchased = entry.is_purchased;
                                            let row_class = if purchased { "purchased" } else { "" };
                                            view! {
                                                <tr class=row_class>
                                                    <td>{entry.item_name.clone()}</td>
                                                    <td>{category_name(entry.category_id)}</td>
                                                    <td>{entry.added_at.format("%Y/%m/%d").to_string()}</td>
                                                    <td>
                                                        {if purchased {
                                                            view! { <span class="status-fresh">"Purchased"</span> }
                                                        } else {
                                                            view! { <span class="status-warning">"To buy"</span> }
                                                        }}
                                                    </td>
                                                    <td>
                                                        <Show when=move || !purchased>
                                                            <button
                                                                class="btn btn-success"
                                                                on:click=move |_| mark(id)
                                                            >
                                                                "Mark purchased"
                                                            </button>
                                                        </Show>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        }.into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
