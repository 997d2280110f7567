//! Field handles of the new-bill form and the coercion of its text values.

/// Stable handles (`data-testid`) of the form's addressable elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Form,
    ExpenseType,
    ExpenseName,
    Amount,
    Date,
    Vat,
    Pct,
    Commentary,
    File,
}

impl FormField {
    pub fn test_id(&self) -> &'static str {
        match self {
            FormField::Form => "form-new-bill",
            FormField::ExpenseType => "expense-type",
            FormField::ExpenseName => "expense-name",
            FormField::Amount => "amount",
            FormField::Date => "datepicker",
            FormField::Vat => "vat",
            FormField::Pct => "pct",
            FormField::Commentary => "commentary",
            FormField::File => "file",
        }
    }
}

/// Expense categories offered by the form's select
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Percentage from the field's text, truncated to its integer part.
///
/// Empty or unparsable text, and numbers below 1, yield `default`.
pub fn parse_pct(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(pct) if pct.is_finite() && pct >= 1.0 => pct.trunc() as u32,
        _ => default,
    }
}

/// Amount from the field's text. `None` unless it is a finite, non-negative number.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}
