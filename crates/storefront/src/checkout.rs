use leptos::{ev, prelude::*};

use bratstvo::{
    customer::CustomerField,
    orders::PaymentMethod,
    store::{Page, Store, StoreAction},
};

use crate::{
    dispatch,
    summary::{SummaryLines, SummaryTotals, TotalsText},
};

/// Placeholder text for a customer form field.
pub(crate) fn placeholder(field: CustomerField) -> &'static str {
    match field {
        CustomerField::Name => "Nama anda",
        CustomerField::Email => "email@contoh.com",
        CustomerField::Phone => "012-3456789",
        CustomerField::Address => "Alamat penuh anda",
    }
}

/// Input type for a customer form field.
pub(crate) fn input_type(field: CustomerField) -> &'static str {
    match field {
        CustomerField::Email => "email",
        CustomerField::Phone => "tel",
        CustomerField::Name | CustomerField::Address => "text",
    }
}

const INPUT_CLASS: &str = "w-full rounded-md border border-gray-300 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
fn CustomerInput(
    field: CustomerField,
    store: RwSignal<Store<'static>>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let value = move || store.with(|state| state.customer().get(field).to_string());
    let on_input = move |event: ev::Event| {
        dispatch(
            store,
            notice,
            StoreAction::SetCustomerField(field, event_target_value(&event)),
        );
    };

    let control = if field == CustomerField::Address {
        view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows="3"
                class=INPUT_CLASS
                placeholder=placeholder(field)
                required
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type(field)
                class=INPUT_CLASS
                placeholder=placeholder(field)
                required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div>
            <label for=field.as_str() class="mb-1 block text-sm font-medium text-gray-700">
                {field.label()}
            </label>
            {control}
        </div>
    }
}

#[component]
fn DiscountInput(
    store: RwSignal<Store<'static>>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="mt-6">
            <h3 class="mb-4 text-xl font-semibold text-gray-800">"Kod Diskaun"</h3>
            <div class="flex">
                <input
                    type="text"
                    class="flex-grow rounded-l-md border border-gray-300 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="Masukkan kod diskaun"
                    prop:value=move || store.with(|state| state.discount_code().to_string())
                    on:input=move |event| {
                        dispatch(
                            store,
                            notice,
                            StoreAction::SetDiscountCode(event_target_value(&event)),
                        );
                    }
                />
                <button
                    type="button"
                    class="rounded-r-md bg-gray-200 px-4 py-2 font-semibold text-gray-700 transition-colors hover:bg-gray-300"
                    on:click=move |_| {
                        let code = store.with_untracked(|state| state.discount_code().to_string());

                        dispatch(store, notice, StoreAction::SetDiscountCode(code));
                    }
                >
                    "Guna"
                </button>
            </div>
            {move || {
                store
                    .with(|state| state.discount_status().is_invalid())
                    .then(|| view! { <p class="mt-2 text-sm text-red-500">"Kod diskaun tidak sah."</p> })
            }}
        </div>
    }
}

/// Checkout page: customer form, order summary and submit.
#[component]
pub fn CheckoutPage(
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
                    on:click=move |_| dispatch(store, notice, StoreAction::Navigate(Page::Cart))
                >
                    "← Kembali ke Troli"
                </button>
                <h2 class="flex-grow text-center text-2xl font-bold text-gray-100 sm:text-3xl">
                    "Daftar Keluar"
                </h2>
            </div>
            <div class="grid grid-cols-1 gap-8 rounded-lg bg-white p-4 shadow-lg sm:p-6 lg:grid-cols-2">
                <div>
                    <h3 class="mb-4 text-xl font-semibold text-gray-800">"Maklumat Pelanggan"</h3>
                    <form class="space-y-4" on:submit=|event| event.prevent_default()>
                        {CustomerField::ALL
                            .into_iter()
                            .map(|field| {
                                view! { <CustomerInput field=field store=store notice=notice /> }
                            })
                            .collect_view()}
                    </form>
                </div>
                <div>
                    <h3 class="mb-4 text-xl font-semibold text-gray-800">"Ringkasan Pesanan"</h3>
                    <div class="space-y-2 text-gray-700">
                        {move || {
                            let lines = store.with(|state| state.cart().lines().to_vec());

                            view! { <SummaryLines lines=lines /> }
                        }}
                        {move || {
                            store
                                .with(|state| state.receipt().ok())
                                .map(|receipt| TotalsText::from(&receipt))
                                .map(|totals| view! { <SummaryTotals totals=totals /> })
                        }}
                    </div>
                    <DiscountInput store=store notice=notice />
                    <div class="mt-6">
                        <h3 class="mb-4 text-xl font-semibold text-gray-800">"Kaedah Pembayaran"</h3>
                        <div class="rounded-md border border-blue-200 bg-blue-50 p-3 text-sm text-blue-800">
                            {PaymentMethod::CashOnDelivery.label()}
                        </div>
                    </div>
                    <button
                        type="button"
                        class="mt-8 flex w-full items-center justify-center rounded-full bg-green-600 py-3 font-semibold text-white shadow-lg transition-colors duration-300 hover:bg-green-700"
                        on:click=move |_| dispatch(store, notice, StoreAction::PlaceOrder)
                    >
                        "Sahkan Pesanan"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_field_attributes() {
        assert_eq!(placeholder(CustomerField::Email), "email@contoh.com");
        assert_eq!(input_type(CustomerField::Phone), "tel");
        assert_eq!(input_type(CustomerField::Name), "text");
    }
}
