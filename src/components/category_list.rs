//! Category List Component
//!
//! Listing plus a create form. The API exposes no category update endpoint,
//! so there is no edit action here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::context::AppContext;
use crate::models::Category;

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
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
            set_loading.set(false);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let cat_name = name.get();
        if cat_name.trim().is_empty() {
            return;
        }
        let desc = description.get();

        set_error.set(String::new());
        spawn_local(async move {
            let client = ctx.api();
            let desc_opt = match desc.trim() {
                "" => None,
                trimmed => Some(trimmed),
            };
            match api::create_category(&client, cat_name.trim(), desc_opt).await {
                Ok(_) => {
                    set_name.set(String::new());
                    set_description.set(String::new());
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to create category: {err}").into(),
                    );
                    ctx.expire_if_unauthorized(&err);
                    set_error.set(match err {
                        ApiError::Validation(msg) => msg,
                        _ => "Could not create the category".to_string(),
                    });
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
                <h1>"Categories"</h1>

                <div class="card">
                    <h3>"Create a category"</h3>

                    <Show when=move || !error.get().is_empty()>
                        <div class="alert alert-danger">{move || error.get()}</div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label>"Name *"</label>
                            <input
                                type="text"
                                class="form-control"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label>"Description"</label>
                            <textarea
                                class="form-control"
                                rows="3"
                                placeholder="What belongs in this category"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <button type="submit" class="btn btn-success">"Create"</button>
                    </form>
                </div>

                <div class="card">
                    <h3>"All categories"</h3>
                    {move || if categories.get().is_empty() {
                        view! { <p>"No categories yet"</p> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr><th>"ID"</th><th>"Name"</th><th>"Description"</th></tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || categories.get()
                                        key=|c| c.category_id
                                        children=move |c| {
                                            view! {
                                                <tr>
                                                    <td>{c.category_id}</td>
                                                    <td>{c.category_name.clone()}</td>
                                                    <td>{c.description.clone().unwrap_or_else(|| "-".to_string())}</td>
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
