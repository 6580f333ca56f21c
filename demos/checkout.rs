//! Checkout Example
//!
//! Fills a cart from the catalog, applies a discount code and places a
//! cash-on-delivery order, then prints the confirmation.
//!
//! Use `--add` (repeatable) to add a product by id
//! Use `--code` to enter a discount code
//! Use `--fixtures` and `--set` to load a fixture set from disk instead of the bundled store

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bratstvo::{
    config::StoreConfig,
    customer::CustomerField,
    products::ProductId,
    store::{Page, StoreAction},
    utils::{ExampleCheckoutArgs, LogFormat},
};

fn init_logging(args: &ExampleCheckoutArgs) -> Result<()> {
    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match args.log_format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleCheckoutArgs::parse();

    init_logging(&args)?;

    let config = match &args.fixtures {
        Some(path) => StoreConfig::load(path, &args.set)?,
        None => StoreConfig::bratstvo()?,
    };

    let name = config.name.clone();
    let mut store = config.into_store();

    let add = if args.add.is_empty() {
        vec![1, 1, 2]
    } else {
        args.add.clone()
    };

    for id in add {
        store.dispatch(StoreAction::AddToCart(ProductId::new(id)))?;
    }

    store.dispatch(StoreAction::Navigate(Page::Checkout))?;

    if let Some(code) = &args.code {
        store.dispatch(StoreAction::SetDiscountCode(code.clone()))?;

        if store.discount_status().is_invalid() {
            println!("Kod diskaun tidak sah: {code}");
        }
    }

    for (field, value) in [
        (CustomerField::Name, &args.name),
        (CustomerField::Email, &args.email),
        (CustomerField::Phone, &args.phone),
        (CustomerField::Address, &args.address),
    ] {
        store.dispatch(StoreAction::SetCustomerField(field, value.clone()))?;
    }

    if let Err(err) = store.dispatch(StoreAction::PlaceOrder) {
        println!("{}", err.user_message());

        return Err(err.into());
    }

    println!("{name}\n");

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if let Some(order) = store.current_order() {
        order.write_to(&mut handle)?;
    }

    Ok(())
}
