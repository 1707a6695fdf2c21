//! Notification List Component
//!
//! Read-only view of server-generated alerts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::Notification;

#[component]
pub fn NotificationList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (notifications, set_notifications) = signal(Vec::<Notification>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let client = ctx.api();
        spawn_local(async move {
            match api::list_notifications(&client).await {
                Ok(loaded) => set_notifications.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch notifications: {err}").into(),
                    );
                    ctx.expire_if_unauthorized(&err);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="container">
            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <Show when=move || !loading.get()>
                <h1>"Notifications"</h1>

                <div class="card">
                    {move || if notifications.get().is_empty() {
                        view! {
                            <div class="alert alert-success">
                                <span class="alert-icon">"\u{2705}"</span>
                                "No notifications right now"
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <For
                                each=move || notifications.get()
                                key=|n| n.notification_id
                                children=move |n| {
                                    let kind = n.notification_type;
                                    let classes = format!(
                                        "alert {}{}",
                                        kind.css_class(),
                                        if n.is_read { " read" } else { "" },
                                    );
                                    view! {
                                        <div class=classes>
                                            <span class="alert-icon">{kind.icon()}</span>
                                            <div class="alert-body">
                                                <strong>{kind.message()}</strong>
                                                <br />
                                                <small>
                                                    {format!(
                                                        "Notified: {}{}",
                                                        n.notification_date.format("%Y/%m/%d"),
                                                        if n.is_read { " (read)" } else { "" },
                                                    )}
                                                </small>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        }.into_any()
                    }}
                </div>

                <div class="card">
                    <h3>"How notifications work"</h3>
                    <p>"Notifications are generated automatically:"</p>
                    <ul>
                        <li><strong>"Warning"</strong>": an item expires within 7 days"</li>
                        <li><strong>"Expired"</strong>": an item is past its expiry date"</li>
                    </ul>
                </div>
            </Show>
        </div>
    }
}
