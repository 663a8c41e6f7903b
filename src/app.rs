//! StockDesk Frontend App
//!
//! Top-level route switch. Navigation goes through [`AppContext`], which
//! consults the route guard before changing routes.

use leptos::prelude::*;

use crate::components::{AdminDashboard, HomePage, LoginPage};
use crate::context::AppContext;
use crate::guard::Route;

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::Home);
    let ctx = AppContext::new((route, set_route));
    provide_context(ctx);

    view! {
        {move || match ctx.route.get() {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::AdminLogin => view! { <LoginPage /> }.into_any(),
            Route::Admin => view! { <AdminDashboard /> }.into_any(),
        }}
    }
}
