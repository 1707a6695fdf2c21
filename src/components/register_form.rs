//! Registration Form Component
//!
//! Client-side validation runs first so the user gets instant feedback;
//! the server re-validates and its message wins when it rejects.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shelflife_core::validate_signup;

use crate::api::{self, ApiError};
use crate::app::Route;
use crate::context::AppContext;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let user = username.get();
        let mail = email.get();
        let pass = password.get();
        let conf = confirm.get();

        if let Err(err) = validate_signup(&user, &mail, &pass, &conf) {
            set_error.set(err.to_string());
            return;
        }

        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            let client = ctx.api();
            match api::signup(&client, user.trim(), mail.trim(), &pass).await {
                Ok(()) => ctx.navigate(Route::Login),
                Err(err) => {
                    web_sys::console::error_1(&format!("Signup failed: {err}").into());
                    set_error.set(match err {
                        ApiError::Validation(msg) => msg,
                        _ => "Could not create the account".to_string(),
                    });
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="container auth-container">
            <div class="card">
                <h2>"Create an account"</h2>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert-danger">{move || error.get()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Username"</label>
                        <input
                            type="text"
                            class="form-control"
                            placeholder="1-50 characters"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Email"</label>
                        <input
                            type="email"
                            class="form-control"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Password"</label>
                        <input
                            type="password"
                            class="form-control"
                            placeholder="At least 8 characters, letters and digits"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Confirm password"</label>
                        <input
                            type="password"
                            class="form-control"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn btn-success" disabled=move || loading.get()>
                        {move || if loading.get() { "Registering..." } else { "Create account" }}
                    </button>
                </form>

                <button class="link-btn" on:click=move |_| ctx.navigate(Route::Login)>
                    "Already have an account? Log in"
                </button>
            </div>
        </div>
    }
}
