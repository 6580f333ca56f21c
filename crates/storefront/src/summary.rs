use leptos::prelude::*;

use bratstvo::{cart::CartLine, money::format_money, receipt::Receipt};

/// `Name x quantity` label for a summary row.
pub(crate) fn line_label(line: &CartLine<'_>) -> String {
    format!("{} x {}", line.name(), line.quantity())
}

/// Formatted line total, or a dash if it cannot be calculated.
pub(crate) fn line_total_text(line: &CartLine<'_>) -> String {
    line.total()
        .map_or_else(|_err| "-".to_string(), |total| format_money(&total))
}

/// Formatted subtotal, discount and total of a priced cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsText {
    subtotal: String,
    discount_label: String,
    discount: String,
    total: String,
}

impl From<&Receipt<'_>> for TotalsText {
    fn from(receipt: &Receipt<'_>) -> Self {
        Self {
            subtotal: format_money(&receipt.subtotal()),
            discount_label: format!("Diskaun ({}):", receipt.discount_label()),
            discount: format!("- {}", format_money(&receipt.discount())),
            total: format_money(&receipt.total()),
        }
    }
}

/// Per-line totals.
#[component]
pub fn SummaryLines(
    /// Lines to list.
    lines: Vec<CartLine<'static>>,
) -> impl IntoView {
    lines
        .into_iter()
        .map(|line| {
            view! {
                <div class="flex justify-between">
                    <span>{line_label(&line)}</span>
                    <span>{line_total_text(&line)}</span>
                </div>
            }
        })
        .collect_view()
}

/// Subtotal, discount and total rows.
#[component]
pub fn SummaryTotals(
    /// Formatted totals of the priced cart.
    totals: TotalsText,
) -> impl IntoView {
    let TotalsText {
        subtotal,
        discount_label,
        discount,
        total,
    } = totals;

    view! {
        <div class="mt-2 border-t border-gray-200 pt-2">
            <div class="flex justify-between font-semibold">
                <span>"Jumlah Kecil:"</span>
                <span>{subtotal}</span>
            </div>
            <div class="flex justify-between text-red-600">
                <span>{discount_label}</span>
                <span>{discount}</span>
            </div>
            <div class="mt-2 flex justify-between text-lg font-bold text-gray-900">
                <span>"Jumlah Keseluruhan:"</span>
                <span>{total}</span>
            </div>
        </div>
    }
}
