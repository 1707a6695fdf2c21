//! Item List Component
//!
//! Item table with a status filter and name search. Status is classified
//! per render; the table never trusts a stored status.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shelflife_core::{classify, ItemStatus};

use crate::api;
use crate::app::Route;
use crate::components::{ConfirmButton, StatusBadge};
use crate::context::AppContext;
use crate::models::{Category, Item};

/// Status filter options shown in the select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum StatusFilter {
    #[default]
    All,
    Fresh,
    Warning,
    Expired,
}

const FILTERS: &[StatusFilter] = &[
    StatusFilter::All,
    StatusFilter::Fresh,
    StatusFilter::Warning,
    StatusFilter::Expired,
];

impl StatusFilter {
    fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Fresh => "fresh",
            StatusFilter::Warning => "warning",
            StatusFilter::Expired => "expired",
        }
    }

    fn from_str(s: &str) -> Self {
        match s {
            "fresh" => StatusFilter::Fresh,
            "warning" => StatusFilter::Warning,
            "expired" => StatusFilter::Expired,
            _ => StatusFilter::All,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Fresh => "Fresh",
            StatusFilter::Warning => "Expiring soon",
            StatusFilter::Expired => "Expired",
        }
    }

    fn admits(&self, status: ItemStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Fresh => status == ItemStatus::Fresh,
            StatusFilter::Warning => status == ItemStatus::Warning,
            StatusFilter::Expired => status == ItemStatus::Expired,
        }
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (items, set_items) = signal(Vec::<Item>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(StatusFilter::All);
    let (search, set_search) = signal(String::new());

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

    let visible = move || {
        let today = Local::now().date_naive();
        let term = search.get().to_lowercase();
        let wanted = filter.get();
        items
            .get()
            .into_iter()
            .filter(|item| {
                let status = classify(item.expiry_date, today);
                wanted.admits(status) && item.item_name.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let category_name = move |id: u32| {
        categories
            .get()
            .iter()
            .find(|c| c.category_id == id)
            .map(|c| c.category_name.clone())
            .unwrap_or_else(|| "Uncategorized".to_string())
    };

    let delete = move |id: u32| {
        let client = ctx.api();
        spawn_local(async move {
            match api::delete_item(&client, id).await {
                Ok(()) => ctx.reload(),
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to delete item: {err}").into());
                    ctx.expire_if_unauthorized(&err);
                }
            }
        });
    };

    view! {
        <div class="container">
            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <Show when=move || !loading.get()>
                <div class="page-header">
                    <h1>"Items"</h1>
                    <button class="btn btn-success" on:click=move |_| ctx.navigate(Route::NewItem)>
                        "Add an item"
                    </button>
                </div>

                <div class="card filter-bar">
                    <label>"Status:"</label>
                    <select
                        class="form-control"
                        prop:value=move || filter.get().as_str()
                        on:change=move |ev| {
                            set_filter.set(StatusFilter::from_str(&event_target_value(&ev)))
                        }
                    >
                        {FILTERS.iter().map(|f| view! {
                            <option value=f.as_str()>{f.label()}</option>
                        }).collect_view()}
                    </select>

                    <label>"Search:"</label>
                    <input
                        type="text"
                        class="form-control"
                        placeholder="Item name..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>

                <div class="card">
                    {move || if visible().is_empty() {
                        view! { <p>"No items found"</p> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Item"</th>
                                        <th>"Category"</th>
                                        <th>"Expiry date"</th>
                                        <th>"Status"</th>
                                        <th>"Auto repurchase"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || visible()
                                        key=|item| item.item_id
                                        children=move |item| {
                                            let id = item.item_id;
                                            let status = classify(
                                                item.expiry_date,
                                                Local::now().date_naive(),
                                            );
                                            view! {
                                                <tr>
                                                    <td>{item.item_name.clone()}</td>
                                                    <td>{category_name(item.category_id)}</td>
                                                    <td>{item.expiry_date.format("%Y/%m/%d").to_string()}</td>
                                                    <td><StatusBadge status=status /></td>
                                                    <td>{if item.auto_repurchase { "On" } else { "Off" }}</td>
                                                    <td>
                                                        <button
                                                            class="btn btn-warning"
                                                            on:click=move |_| ctx.navigate(Route::EditItem(id))
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <ConfirmButton
                                                            label="Delete"
                                                            prompt="Delete this item?"
                                                            button_class="btn btn-danger"
                                                            on_confirm=Callback::new(move |_| delete(id))
                                                        />
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
