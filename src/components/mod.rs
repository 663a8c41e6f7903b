//! UI Components
//!
//! Leptos components for the public listing, login and admin dashboard.

mod add_edit_dialog;
mod admin_dashboard;
mod confirmation_dialog;
mod empty_state;
mod header;
mod home_page;
mod login_page;
mod stock_card;
mod stock_list;
mod toast_host;

pub use admin_dashboard::AdminDashboard;
pub use home_page::HomePage;
pub use login_page::LoginPage;
