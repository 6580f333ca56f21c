//! Leptos Bratstvo Storefront

use leptos::prelude::*;

use bratstvo::{
    config::StoreConfig,
    store::{Page, Store, StoreAction},
};

mod cart;
mod checkout;
mod confirmation;
mod layout;
mod products;
mod summary;

/// Apply an action to the store and surface any rejection as a notice.
pub(crate) fn dispatch(
    store: RwSignal<Store<'static>>,
    notice: RwSignal<Option<String>>,
    action: StoreAction,
) {
    let changes_page = matches!(action, StoreAction::Navigate(_) | StoreAction::PlaceOrder);

    match store.try_update(|state| state.dispatch(action)) {
        Some(Ok(())) => {
            notice.set(None);

            if changes_page {
                scroll_to_top();
            }
        }
        Some(Err(error)) => notice.set(Some(error.user_message().to_string())),
        None => {}
    }
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_top() {}

#[component]
fn Notice(notice: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        notice.get().map(|message| {
            view! {
                <div
                    class="mx-4 mb-6 flex items-start justify-between rounded-lg border border-red-200 bg-red-50 p-4"
                    role="alert"
                >
                    <p class="text-sm text-red-700">{message}</p>
                    <button
                        type="button"
                        aria-label="Tutup"
                        class="ml-4 text-red-700 hover:text-red-900"
                        on:click=move |_| notice.set(None)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}

/// Storefront app shell.
#[component]
fn App() -> impl IntoView {
    match StoreConfig::bratstvo() {
        Ok(config) => {
            let store_name = config.name.clone();
            let store = RwSignal::new(config.into_store());
            let notice = RwSignal::new(None::<String>);
            let page = Memo::new(move |_| store.with(Store::page));

            view! {
                <div class="min-h-screen bg-[#4C5633] font-sans antialiased">
                    <layout::Header store_name=store_name store=store notice=notice />
                    <main class="container mx-auto py-8">
                        <Notice notice=notice />
                        {move || match page.get() {
                            Page::Home => {
                                view! { <products::ProductGrid store=store notice=notice /> }
                                    .into_any()
                            }
                            Page::Cart => {
                                view! { <cart::CartPage store=store notice=notice /> }.into_any()
                            }
                            Page::Checkout => {
                                view! { <checkout::CheckoutPage store=store notice=notice /> }
                                    .into_any()
                            }
                            Page::OrderConfirmation => {
                                view! {
                                    <confirmation::ConfirmationPage store=store notice=notice />
                                }
                                    .into_any()
                            }
                        }}
                    </main>
                    <layout::Footer />
                </div>
            }
            .into_any()
        }
        Err(error) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"Bratstvo Store"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error.to_string()}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Main client entry point
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use bratstvo::{customer::CustomerField, fixtures::FixtureError, products::ProductId};
    use testresult::TestResult;

    use super::*;

    type Signals = (RwSignal<Store<'static>>, RwSignal<Option<String>>);

    fn signals() -> Result<Signals, FixtureError> {
        let store = StoreConfig::bratstvo()?.into_store();

        Ok((RwSignal::new(store), RwSignal::new(None)))
    }

    #[test]
    fn rejected_action_sets_notice() -> TestResult {
        let (store, notice) = signals()?;

        dispatch(store, notice, StoreAction::Navigate(Page::Checkout));
        dispatch(store, notice, StoreAction::PlaceOrder);

        assert_eq!(
            notice.get_untracked().as_deref(),
            Some("Sila isi semua maklumat pelanggan yang diperlukan.")
        );
        assert!(store.with_untracked(|state| state.current_order().is_none()));

        Ok(())
    }

    #[test]
    fn accepted_action_clears_notice() -> TestResult {
        let (store, notice) = signals()?;

        notice.set(Some("lama".to_string()));

        dispatch(store, notice, StoreAction::AddToCart(ProductId::new(3)));

        assert_eq!(notice.get_untracked(), None);
        assert_eq!(store.with_untracked(Store::cart_count), 1);

        Ok(())
    }

    #[test]
    fn full_checkout_through_signals() -> TestResult {
        let (store, notice) = signals()?;

        dispatch(store, notice, StoreAction::AddToCart(ProductId::new(5)));
        dispatch(store, notice, StoreAction::Navigate(Page::Checkout));

        for field in CustomerField::ALL {
            dispatch(
                store,
                notice,
                StoreAction::SetCustomerField(field, format!("{field} ujian")),
            );
        }

        dispatch(store, notice, StoreAction::PlaceOrder);

        assert_eq!(notice.get_untracked(), None);
        assert_eq!(store.with_untracked(Store::page), Page::OrderConfirmation);
        assert!(store.with_untracked(|state| state.current_order().is_some()));

        Ok(())
    }
}
