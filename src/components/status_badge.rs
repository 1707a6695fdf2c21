//! Status Badge Component

use leptos::prelude::*;
use shelflife_core::ItemStatus;

/// Colored label for an item's freshness
#[component]
pub fn StatusBadge(status: ItemStatus) -> impl IntoView {
    view! {
        <span class=status.css_class()>{status.label()}</span>
    }
}
