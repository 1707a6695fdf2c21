//! Settings Component
//!
//! Account screen. Password change and preference persistence have no
//! server endpoints yet; both surface the placeholder message instead of
//! pretending to work.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::AppContext;

#[component]
pub fn Settings() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (current, set_current) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_change_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if new_password.get() != confirm.get() {
            set_error.set("New passwords do not match".to_string());
            return;
        }
        set_error.set("Password change is not yet implemented".to_string());
    };

    view! {
        <div class="container form-container">
            <h1>"Settings"</h1>

            <div class="card">
                <h3>"Account"</h3>
                <p>
                    <strong>"Signed in as user #"</strong>
                    {move || ctx.session.get().map(|s| s.user_id).unwrap_or_default()}
                </p>
            </div>

            <div class="card">
                <h3>"Change password"</h3>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert-danger">{move || error.get()}</div>
                </Show>

                <form on:submit=on_change_password>
                    <div class="form-group">
                        <label>"Current password"</label>
                        <input
                            type="password"
                            class="form-control"
                            prop:value=move || current.get()
                            on:input=move |ev| set_current.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"New password"</label>
                        <input
                            type="password"
                            class="form-control"
                            prop:value=move || new_password.get()
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Confirm new password"</label>
                        <input
                            type="password"
                            class="form-control"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn btn-primary">"Change password"</button>
                </form>
            </div>

            <div class="card">
                <h3>"Notification preferences"</h3>
                <div class="form-group">
                    <label class="checkbox-label">
                        <input type="checkbox" checked=true />
                        "Notify about expired items"
                    </label>
                </div>
                <div class="form-group">
                    <label class="checkbox-label">
                        <input type="checkbox" checked=true />
                        "Notify about auto repurchases"
                    </label>
                </div>
                <p><small>"Saving preferences is not yet implemented"</small></p>
            </div>

            <div class="card">
                <h3>"Session"</h3>
                <ConfirmButton
                    label="Log out"
                    prompt="Log out?"
                    button_class="btn btn-danger"
                    on_confirm=Callback::new(move |_| ctx.logout())
                />
            </div>
        </div>
    }
}
