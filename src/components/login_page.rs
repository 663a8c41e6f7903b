//! Admin Login Component
//!
//! Password form; on success the backend opens the session and a marker
//! lands in localStorage so the route guard lets `/admin` through.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::use_app_context;
use crate::guard::{self, Route};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let entered = password.get();
        if entered.is_empty() {
            set_error.set(Some("Password is required".to_string()));
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = commands::login_admin(&entered).await;
            set_submitting.set(false);
            if result.success {
                guard::remember_credential("active");
                ctx.navigate(Route::Admin);
            } else {
                set_error.set(result.error.or_else(|| Some("Login failed".to_string())));
            }
        });
    };

    view! {
        <div class="login-layout">
            <form class="login-form" on:submit=submit>
                <h1>"Admin Login"</h1>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                        }
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="login-error">{message}</p> })}
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <button
                    type="button"
                    class="btn-link"
                    on:click=move |_| ctx.navigate(Route::Home)
                >
                    "Back to home"
                </button>
            </form>
        </div>
    }
}
