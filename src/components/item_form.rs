//! Item Form Component
//!
//! Create and edit share one form; edit mode is selected by the route.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::app::Route;
use crate::context::AppContext;
use crate::models::{Category, ItemPayload};

#[component]
pub fn ItemForm(editing: Option<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (category_id, set_category_id) = signal(String::new());
    let (expiry, set_expiry) = signal(String::new());
    let (purchase, set_purchase) = signal(String::new());
    let (auto_repurchase, set_auto_repurchase) = signal(false);
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (error, set_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let client = ctx.api();
        spawn_local(async move {
            match api::list_categories(&client).await {
                Ok(loaded) => set_categories.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch categories: {err}").into(),
                    );
                    ctx.expire_if_unauthorized(&err);
                }
            }
        });
    });

    // In edit mode, resolve the item from the list; the API has no
    // single-item GET.
    Effect::new(move |_| {
        let Some(id) = editing else { return };
        let client = ctx.api();
        spawn_local(async move {
            match api::list_items(&client).await {
                Ok(all) => {
                    if let Some(item) = all.into_iter().find(|i| i.item_id == id) {
                        set_name.set(item.item_name);
                        set_category_id.set(item.category_id.to_string());
                        set_expiry.set(item.expiry_date.to_string());
                        set_purchase.set(
                            item.purchase_date.map(|d| d.to_string()).unwrap_or_default(),
                        );
                        set_auto_repurchase.set(item.auto_repurchase);
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to fetch item: {err}").into());
                    ctx.expire_if_unauthorized(&err);
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let item_name = name.get();
        if item_name.trim().is_empty() {
            set_error.set("Enter an item name".to_string());
            return;
        }
        let Ok(cat) = category_id.get().parse::<u32>() else {
            set_error.set("Choose a category".to_string());
            return;
        };
        let Ok(expiry_date) = NaiveDate::parse_from_str(&expiry.get(), "%Y-%m-%d") else {
            set_error.set("Enter a valid expiry date".to_string());
            return;
        };
        let purchase_date = {
            let raw = purchase.get();
            if raw.is_empty() {
                None
            } else {
                match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                    Ok(d) => Some(d),
                    Err(_) => {
                        set_error.set("Enter a valid purchase date".to_string());
                        return;
                    }
                }
            }
        };
        let auto = auto_repurchase.get();

        set_saving.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            let client = ctx.api();
            let payload = ItemPayload {
                category_id: cat,
                item_name: &item_name,
                expiry_date,
                purchase_date,
                auto_repurchase: auto,
            };
            let result = match editing {
                Some(id) => api::update_item(&client, id, &payload).await.map(|_| ()),
                None => api::create_item(&client, &payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => ctx.navigate(Route::Items),
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to save item: {err}").into());
                    ctx.expire_if_unauthorized(&err);
                    set_error.set(match err {
                        ApiError::Validation(msg) => msg,
                        _ if editing.is_some() => "Could not update the item".to_string(),
                        _ => "Could not create the item".to_string(),
                    });
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="container form-container">
            <h1>{if editing.is_some() { "Edit item" } else { "Add an item" }}</h1>

            <div class="card">
                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert-danger">{move || error.get()}</div>
                </Show>

                <form on:submit=on_submit>
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

                    <div class="form-group">
                        <label>"Expiry date *"</label>
                        <input
                            type="date"
                            class="form-control"
                            prop:value=move || expiry.get()
                            on:input=move |ev| set_expiry.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Purchase date"</label>
                        <input
                            type="date"
                            class="form-control"
                            prop:value=move || purchase.get()
                            on:input=move |ev| set_purchase.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                prop:checked=move || auto_repurchase.get()
                                on:change=move |ev| {
                                    set_auto_repurchase.set(event_target_checked(&ev))
                                }
                            />
                            "Enable auto repurchase"
                        </label>
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="btn btn-success" disabled=move || saving.get()>
                            {move || if saving.get() {
                                "Saving..."
                            } else if editing.is_some() {
                                "Update"
                            } else {
                                "Create"
                            }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| ctx.navigate(Route::Items)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
