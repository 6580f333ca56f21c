use leptos::prelude::*;

use bratstvo::{
    orders::Order,
    store::{Page, Store, StoreAction},
};

use crate::{
    dispatch,
    summary::{SummaryLines, SummaryTotals, TotalsText},
};

#[component]
fn Detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <p>
            <span class="font-semibold">{label}</span>
            " "
            {value}
        </p>
    }
}

#[component]
fn OrderDetails(order: Order<'static>) -> impl IntoView {
    let customer = order.customer().clone();

    view! {
        <div class="w-full max-w-2xl rounded-lg bg-white p-6 shadow-lg sm:p-8">
            <h3 class="mb-4 text-xl font-semibold text-gray-800">
                {format!("Butiran Pesanan #{}", order.id())}
            </h3>
            <div class="mb-6 grid grid-cols-1 gap-4 text-gray-700 sm:grid-cols-2">
                <div>
                    <Detail label="Nama:" value=customer.name />
                    <Detail label="E-mel:" value=customer.email />
                    <Detail label="Telefon:" value=customer.phone />
                </div>
                <div>
                    <Detail label="Alamat:" value=customer.address />
                    <Detail label="Tarikh Pesanan:" value=order.placed_at_display() />
                </div>
            </div>
            <h4 class="mb-3 text-lg font-semibold text-gray-800">"Item Dipesan:"</h4>
            <div class="mb-6 space-y-1 text-gray-700">
                <SummaryLines lines=order.lines().to_vec() />
            </div>
            <SummaryTotals totals=TotalsText::from(order.receipt()) />
        </div>
    }
}

/// Order confirmation page.
#[component]
pub fn ConfirmationPage(
    /// Storefront state.
    store: RwSignal<Store<'static>>,
    /// Notice shown when an action is rejected.
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let order = store.with_untracked(|state| state.current_order().cloned());

    view! {
        <div class="flex min-h-[70vh] flex-col items-center justify-center p-4 sm:p-6 lg:p-8">
            <h2 class="mb-6 text-center text-3xl font-bold text-green-300 sm:text-4xl">
                "Pesanan Berjaya!"
            </h2>
            <p class="mb-8 text-center text-lg text-gray-100">
                "Terima kasih atas pesanan anda. Butiran pesanan anda adalah seperti berikut:"
            </p>
            {order.map(|order| view! { <OrderDetails order=order /> })}
            <button
                type="button"
                class="mt-10 flex items-center rounded-full bg-blue-600 px-8 py-3 font-semibold text-white shadow-lg transition-colors duration-300 hover:bg-blue-700"
                on:click=move |_| dispatch(store, notice, StoreAction::Navigate(Page::Home))
            >
                "Kembali ke Laman Utama"
            </button>
        </div>
    }
}
