//! Payment display formatting

use crate::services::{PaymentSummary, PaymentWithStatus};

/// Format a month's payments with due-date status and totals
pub fn format_payment_list(
    items: &[PaymentWithStatus],
    summary: &PaymentSummary,
    currency: &str,
) -> String {
    if items.is_empty() {
        return "No payments tracked for this month.\n".to_string();
    }

    let name_width = items
        .iter()
        .map(|p| p.item.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<name_width$}  {:>12}  {:<10}  {}\n",
        "Due",
        "Name",
        "Amount",
        "Status",
        "Notes",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<name_width$}  {:->12}  {:-<10}  {:-<5}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for entry in items {
        output.push_str(&format!(
            "{:<10}  {:<name_width$}  {:>12}  {:<10}  {}\n",
            entry.item.due_date.to_string(),
            entry.item.name,
            entry.item.amount.to_string(),
            entry.status.to_string(),
            entry.item.notes,
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "\n  Paid {} of {} payments ({:.0}% done)\n",
        summary.paid_count, summary.total_count, summary.completion_percentage
    ));
    output.push_str(&format!(
        "  Paid:      {:>12} {}\n",
        summary.paid_amount.to_string(),
        currency
    ));
    output.push_str(&format!(
        "  Remaining: {:>12} {}\n",
        summary.remaining_amount.to_string(),
        currency
    ));

    output
}

/// Format the short "what needs attention" view
pub fn format_due_list(items: &[PaymentWithStatus], currency: &str) -> String {
    if items.is_empty() {
        return "Nothing due. All caught up.\n".to_string();
    }

    let mut output = String::new();
    for entry in items {
        output.push_str(&format!(
            "  [{}] {} - {} {} due {}\n",
            entry.status,
            entry.item.name,
            entry.item.amount,
            currency,
            entry.item.due_date
        ));
    }
    output
}
