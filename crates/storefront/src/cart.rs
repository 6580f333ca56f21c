use leptos::prelude::*;

use bratstvo::{
    cart::CartLine,
    money::format_money,
    products::THUMBNAIL_FALLBACK_URL,
    store::{Page, Store, StoreAction},
};

use crate::{dispatch, products::image_src};

/// Quantity after pressing − or +.
pub(crate) fn stepped_quantity(quantity: u32, step: i64) -> i64 {
    i64::from(quantity).saturating_add(step)
}

#[component]
fn CartLineRow(
    line: CartLine<'static>,
    store: RwSignal<Store<'static>>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let image_failed = RwSignal::new(false);
    let id = line.id();
    let quantity = line.quantity();
    let image = line.product().image.clone();
    let name = line.name().to_string();
    let alt = name.clone();
    let unit_price = format_money(line.unit_price());

    view! {
        <div class="flex items-center justify-between border-b border-gray-200 py-3 last:border-b-0">
            <div class="flex flex-grow items-center">
                <img
                    src=move || image_src(image_failed.get(), &image, THUMBNAIL_FALLBACK_URL)
                    alt=alt
                    class="mr-4 h-16 w-16 rounded-md object-cover"
                    on:error=move |_| image_failed.set(true)
                />
                <div>
                    <h3 class="text-lg font-medium text-gray-800">{name}</h3>
                    <p class="text-gray-600">{unit_price}</p>
                </div>
            </div>
            <div class="flex items-center">
                <button
                    type="button"
                    aria-label="Kurangkan kuantiti"
                    class="rounded-full bg-gray-200 px-3 py-1 font-bold text-gray-700 transition-colors hover:bg-gray-300"
                    on:click=move |_| {
                        dispatch(
                            store,
                            notice,
                            StoreAction::SetQuantity(id, stepped_quantity(quantity, -1)),
                        );
                    }
                >
                    "-"
                </button>
                <span class="mx-3 text-lg font-semibold text-gray-800">{quantity}</span>
                <button
                    type="button"
                    aria-label="Tambah kuantiti"
                    class="rounded-full bg-gray-200 px-3 py-1 font-bold text-gray-700 transition-colors hover:bg-gray-300"
                    on:click=move |_| {
                        dispatch(
                            store,
                            notice,
                            StoreAction::SetQuantity(id, stepped_quantity(quantity, 1)),
                        );
                    }
                >
                    "+"
                </button>
                <button
                    type="button"
                    class="ml-4 rounded-full bg-red-500 px-3 py-1 text-white transition-colors hover:bg-red-600"
                    on:click=move |_| dispatch(store, notice, StoreAction::RemoveFromCart(id))
                >
                    "Buang"
                </button>
            </div>
        </div>
    }
}

/// Cart page.
#[component]
pub fn CartPage(
    /// Storefront state.
    store: RwSignal<Store<'static>>,
    /// Notice shown when an action is rejected.
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="p-4 sm:p-6 lg:p-8">
            <div class="mb-6 flex items-center">
                <button
                    type="button"
                    class="mr-4 flex items-center text-blue-200 hover:text-white"
                    on:click=move |_| dispatch(store, notice, StoreAction::Navigate(Page::Home))
                >
                    "← Kembali ke Menu"
                </button>
                <h2 class="flex-grow text-center text-2xl font-bold text-gray-100 sm:text-3xl">
                    "Troli Beli-belah Anda"
                </h2>
            </div>
            {move || {
                let lines = store.with(|state| state.cart().lines().to_vec());

                if lines.is_empty() {
                    return view! {
                        <p class="text-center text-lg text-gray-200">"Troli anda kosong."</p>
                    }
                        .into_any();
                }

                let subtotal = store.with(|state| format_money(&state.subtotal_or_zero()));

                view! {
                    <div class="rounded-lg bg-white p-4 shadow-lg sm:p-6">
                        {lines
                            .into_iter()
                            .map(|line| view! { <CartLineRow line=line store=store notice=notice /> })
                            .collect_view()}
                        <div class="mt-6 border-t border-gray-200 pt-4 text-right">
                            <p class="text-xl font-bold text-gray-800">
                                {format!("Jumlah Kecil: {subtotal}")}
                            </p>
                            <button
                                type="button"
                                class="mt-6 rounded-full bg-blue-600 px-8 py-3 font-semibold text-white shadow-lg transition-colors duration-300 hover:bg-blue-700"
                                on:click=move |_| {
                                    dispatch(store, notice, StoreAction::Navigate(Page::Checkout));
                                }
                            >
                                "Daftar Keluar"
                            </button>
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
