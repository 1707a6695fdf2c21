//! UI Components
//!
//! One Leptos component per screen, plus small reusable pieces.

mod category_list;
mod confirm_button;
mod dashboard;
mod item_form;
mod item_list;
mod login_form;
mod navbar;
mod notification_list;
mod purchase_list;
mod register_form;
mod settings;
mod status_badge;

pub use category_list::CategoryList;
pub use confirm_button::ConfirmButton;
pub use dashboard::Dashboard;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use login_form::LoginForm;
pub use navbar::Navbar;
pub use notification_list::NotificationList;
pub use purchase_list::PurchaseList;
pub use register_form::RegisterForm;
pub use settings::Settings;
pub use status_badge::StatusBadge;
