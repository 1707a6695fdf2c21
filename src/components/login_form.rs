//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::app::Route;
use crate::context::AppContext;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            return;
        }

        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            let client = ctx.api();
            match api::login(&client, &user, &pass).await {
                Ok(token) => {
                    // ctx.login only fails on a token the server mis-issued
                    if !ctx.login(&token) {
                        set_error.set("Login failed. Please try again later.".to_string());
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Login failed: {err}").into());
                    set_error.set(match err {
                        ApiError::Unauthorized => {
                            "Username or password is incorrect".to_string()
                        }
                        ApiError::Validation(msg) => msg,
                        _ => "Login failed. Please try again later.".to_string(),
                    });
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="container auth-container">
            <div class="card">
                <h2>"ShelfLife"</h2>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert-danger">{move || error.get()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Username"</label>
                        <input
                            type="text"
                            class="form-control"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Password"</label>
                        <input
                            type="password"
                            class="form-control"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>

                <button class="link-btn" on:click=move |_| ctx.navigate(Route::Register)>
                    "Need an account? Register here"
                </button>
            </div>
        </div>
    }
}
