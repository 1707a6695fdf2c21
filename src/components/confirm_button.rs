//! Confirm Button Component
//!
//! Reusable inline confirmation: the initial button swaps for a prompt with
//! confirm/cancel actions instead of a blocking browser dialog.

use leptos::prelude::*;

/// Inline two-step button
///
/// # Arguments
/// * `label` - text of the initial button
/// * `prompt` - question shown once armed (e.g. "Delete this item?")
/// * `button_class` - CSS class for the initial button
/// * `on_confirm` - callback to execute when the user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        <Show when=move || !armed.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_armed.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || armed.get()>
            <span class="confirm-inline">
                <span class="confirm-prompt">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "\u{2713}"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "\u{2717}"
                </button>
            </span>
        </Show>
    }
}
