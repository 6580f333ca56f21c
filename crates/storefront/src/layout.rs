use leptos::prelude::*;

use bratstvo::store::{Page, Store, StoreAction};

use crate::dispatch;

/// Classes for a header nav button.
pub(crate) fn nav_class(active: bool) -> &'static str {
    if active {
        "flex items-center rounded-full bg-blue-600 px-4 py-2 text-white transition-colors"
    } else {
        "flex items-center rounded-full px-4 py-2 text-gray-200 transition-colors hover:bg-[#5C6A48]"
    }
}

/// Cart nav label with the number of distinct products.
pub(crate) fn cart_label(count: usize) -> String {
    format!("Troli ({count})")
}

#[component]
fn NavButton(
    page: Page,
    label: Signal<String>,
    store: RwSignal<Store<'static>>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <li>
            <button
                type="button"
                class=move || nav_class(store.with(Store::page) == page)
                on:click=move |_| dispatch(store, notice, StoreAction::Navigate(page))
            >
                {move || label.get()}
            </button>
        </li>
    }
}

/// Sticky header with the store name and page navigation.
#[component]
pub fn Header(
    /// Store name shown on the left.
    store_name: String,
    /// Storefront state.
    store: RwSignal<Store<'static>>,
    /// Notice shown when an action is rejected.
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let home_label = Signal::derive(|| "Laman Utama".to_string());
    let cart_nav_label = Signal::derive(move || cart_label(store.with(Store::cart_count)));

    view! {
        <header class="sticky top-0 z-10 flex items-center justify-between rounded-b-lg bg-[#3D452B] p-4 shadow-md">
            <h1 class="text-2xl font-bold text-white">{store_name}</h1>
            <nav>
                <ul class="flex space-x-4">
                    <NavButton page=Page::Home label=home_label store=store notice=notice />
                    <NavButton page=Page::Cart label=cart_nav_label store=store notice=notice />
                </ul>
            </nav>
        </header>
    }
}

/// Page footer.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-8 rounded-t-lg bg-[#3D452B] p-4 text-center text-gray-300">
            <p>"© 2025 Bratstvo Store. Hak Cipta Terpelihara."</p>
        </footer>
    }
}
