use leptos::prelude::*;

use bratstvo::{
    money::format_money,
    products::{IMAGE_FALLBACK_URL, Product},
    store::{Page, Store, StoreAction},
};

use crate::dispatch;

/// Image source, swapped for the fallback once loading has failed.
pub(crate) fn image_src(failed: bool, url: &str, fallback: &str) -> String {
    if failed {
        fallback.to_string()
    } else {
        url.to_string()
    }
}

#[component]
fn ProductCard(
    product: Product<'static>,
    store: RwSignal<Store<'static>>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let image_failed = RwSignal::new(false);
    let id = product.id;
    let image = product.image.clone();
    let name = product.name.clone();
    let price = format_money(&product.price);

    view! {
        <div class="overflow-hidden rounded-lg bg-white shadow-lg transition-transform hover:scale-105">
            <img
                src=move || image_src(image_failed.get(), &image, IMAGE_FALLBACK_URL)
                alt=product.name
                class="h-48 w-full object-cover object-center"
                on:error=move |_| image_failed.set(true)
            />
            <div class="flex flex-col items-center p-4">
                <h3 class="mb-2 text-xl font-semibold text-gray-700">{name}</h3>
                <p class="mb-4 text-lg font-bold text-gray-900">{price}</p>
                <button
                    type="button"
                    class="rounded-full bg-blue-600 px-6 py-2 font-semibold text-white shadow-md transition-colors duration-300 hover:bg-blue-700"
                    on:click=move |_| dispatch(store, notice, StoreAction::AddToCart(id))
                >
                    "Tambah ke Troli"
                </button>
            </div>
        </div>
    }
}

/// Home page: the product grid.
#[component]
pub fn ProductGrid(
    /// Storefront state.
    store: RwSignal<Store<'static>>,
    /// Notice shown when an action is rejected.
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let products = store.with_untracked(|state| state.catalog().products().to_vec());

    view! {
        <div class="p-4 sm:p-6 lg:p-8">
            <h2 class="mb-6 text-center text-2xl font-bold text-gray-100 sm:text-3xl">
                "Menu Kami"
            </h2>
            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                {products
                    .into_iter()
                    .map(|product| {
                        view! { <ProductCard product=product store=store notice=notice /> }
                    })
                    .collect_view()}
            </div>
            <div class="mt-8 text-center">
                <button
                    type="button"
                    class="mx-auto rounded-full bg-green-600 px-8 py-3 font-semibold text-white shadow-lg transition-colors duration-300 hover:bg-green-700"
                    on:click=move |_| dispatch(store, notice, StoreAction::Navigate(Page::Cart))
                >
                    {move || format!("Lihat Troli ({})", store.with(Store::cart_count))}
                </button>
            </div>
        </div>
    }
}
