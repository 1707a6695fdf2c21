//! Navbar Component
//!
//! Top navigation, rendered only while a session is live.

use leptos::prelude::*;

use crate::app::Route;
use crate::context::AppContext;

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Dashboard, "Dashboard"),
    (Route::Items, "Items"),
    (Route::Purchases, "Purchase list"),
    (Route::Categories, "Categories"),
    (Route::Notifications, "Notifications"),
    (Route::Settings, "Settings"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="navbar">
            <button class="navbar-brand" on:click=move |_| ctx.navigate(Route::Dashboard)>
                "ShelfLife"
            </button>
            <ul class="navbar-nav">
                {NAV_LINKS.iter().map(|(target, label)| {
                    let target = *target;
                    let is_active = move || ctx.route.get() == target;
                    view! {
                        <li>
                            <button
                                class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                on:click=move |_| ctx.navigate(target)
                            >
                                {*label}
                            </button>
                        </li>
                    }
                }).collect_view()}
                <li>
                    <button class="nav-link" on:click=move |_| ctx.logout()>
                        "Log out"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
