//! ShelfLife Frontend App
//!
//! Top-level component: session restore, the route signal, and the auth
//! gate deciding which screen renders.

use leptos::prelude::*;

use crate::components::{
    CategoryList, Dashboard, ItemForm, ItemList, LoginForm, Navbar, NotificationList,
    PurchaseList, RegisterForm, Settings,
};
use crate::context::AppContext;
use crate::session::Session;

/// Every screen the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Items,
    NewItem,
    EditItem(u32),
    Categories,
    Purchases,
    Notifications,
    Settings,
}

#[component]
pub fn App() -> impl IntoView {
    // Restore a live session from storage; stale tokens are cleared there.
    let (session, set_session) = signal(Session::load());
    let initial = if session.get_untracked().is_some() {
        Route::Dashboard
    } else {
        Route::Login
    };
    let (route, set_route) = signal(initial);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(
        (session, set_session),
        (route, set_route),
        (reload_trigger, set_reload_trigger),
    ));

    view! {
        <div class="app">
            <Show when=move || session.get().is_some()>
                <Navbar />
            </Show>
            <main>
                {move || {
                    // Auth gate: without a session only the auth screens
                    // render; with one, the auth screens bounce to the
                    // dashboard.
                    let screen = match (session.get().is_some(), route.get()) {
                        (false, Route::Register) => Route::Register,
                        (false, _) => Route::Login,
                        (true, Route::Login) | (true, Route::Register) => Route::Dashboard,
                        (true, r) => r,
                    };
                    match screen {
                        Route::Login => view! { <LoginForm /> }.into_any(),
                        Route::Register => view! { <RegisterForm /> }.into_any(),
                        Route::Dashboard => view! { <Dashboard /> }.into_any(),
                        Route::Items => view! { <ItemList /> }.into_any(),
                        Route::NewItem => view! { <ItemForm editing=None /> }.into_any(),
                        Route::EditItem(id) => view! { <ItemForm editing=Some(id) /> }.into_any(),
                        Route::Categories => view! { <CategoryList /> }.into_any(),
                        Route::Purchases => view! { <PurchaseList /> }.into_any(),
                        Route::Notifications => view! { <NotificationList /> }.into_any(),
                        Route::Settings => view! { <Settings /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
