//! Application Context
//!
//! Session, navigation, and reload signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::app::Route;
use crate::session::Session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current session, if logged in - read
    pub session: ReadSignal<Option<Session>>,
    /// Current session - write
    set_session: WriteSignal<Option<Session>>,
    /// Current screen - read
    pub route: ReadSignal<Route>,
    /// Current screen - write
    set_route: WriteSignal<Route>,
    /// Trigger to refetch the current screen's data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
        route: (ReadSignal<Route>, WriteSignal<Route>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            route: route.0,
            set_route: route.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Install the session for a freshly issued token and land on the
    /// dashboard. Returns false if the token doesn't decode.
    pub fn login(&self, token: &str) -> bool {
        match Session::from_token(token) {
            Some(session) => {
                session.persist();
                self.set_session.set(Some(session));
                self.set_route.set(Route::Dashboard);
                true
            }
            None => false,
        }
    }

    /// Drop the session and return to the login screen.
    pub fn logout(&self) {
        Session::clear();
        self.set_session.set(None);
        self.set_route.set(Route::Login);
    }

    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Trigger a refetch of the current screen's data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Build an API client bound to the current session, if any.
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.session.get_untracked().as_ref())
    }

    /// A 401 means the server no longer honors our token; the session is
    /// dead no matter what the expiry claim says.
    pub fn expire_if_unauthorized(&self, err: &ApiError) {
        if err.is_unauthorized() {
            self.logout();
        }
    }
}
