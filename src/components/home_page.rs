//! Public Home Component
//!
//! Read-only inventory listing, no session required.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::guard::Route;
use crate::models::StockItem;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let (items, set_items) = signal(Vec::<StockItem>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(loaded) = commands::list_stock().await {
                set_items.set(loaded);
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="home-layout">
            <header class="home-header">
                <h1>"Our Inventory"</h1>
                <button class="btn-secondary" on:click=move |_| ctx.navigate(Route::Admin)>
                    "Admin"
                </button>
            </header>
            <Show when=move || loading.get()>
                <p class="loading">"Loading inventory..."</p>
            </Show>
            <Show when=move || !loading.get()>
                <Show
                    when=move || !items.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No items available right now."</p> }
                >
                    <div class="stock-grid">
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="stock-card">
                                            <div class="stock-card-header">
                                                <h3>{item.brand.clone()}</h3>
                                                <span class="stock-price">
                                                    {format!("${:.2}", item.price)}
                                                </span>
                                            </div>
                                            <p class="stock-quantity">
                                                "In stock: " <strong>{item.quantity}</strong>
                                            </p>
                                            {item
                                                .description
                                                .clone()
                                                .map(|text| {
                                                    view! { <p class="stock-description">{text}</p> }
                                                })}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
