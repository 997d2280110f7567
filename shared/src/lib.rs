use serde::{Deserialize, Serialize};
use std::fmt;

/// An expense bill as persisted by the store.
///
/// Field names on the wire follow the store's JSON schema (`type`, `fileUrl`,
/// `fileName`), so this struct is serialized as-is into the `data` payload of
/// an update call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    /// Identity of the employee who filed the bill
    pub email: String,
    /// Expense category ("Transports", "Restaurants et bars", ...)
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    /// ISO-like date, kept exactly as entered (YYYY-MM-DD)
    pub date: String,
    /// VAT amount, kept as raw text
    pub vat: String,
    /// VAT percentage
    pub pct: u32,
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub status: BillStatus,
}

/// Review status of a bill. Newly created bills are always `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillStatus::Pending => write!(f, "pending"),
            BillStatus::Accepted => write!(f, "accepted"),
            BillStatus::Refused => write!(f, "refused"),
        }
    }
}

/// Response of the store's attachment `create` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedBill {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    /// Identifier of the bill created alongside the attachment
    pub key: String,
}

/// Payload of the store's `update` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBillRequest {
    /// JSON text of a `BillRecord`
    pub data: String,
    /// Bill identifier returned by `create`
    pub selector: String,
}

/// The user object kept in session storage under the `"user"` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Raw text values of the new-bill form, read at submit time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBillFormValues {
    pub expense_type: String,
    pub expense_name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// Configuration for the bill-creation workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBillConfig {
    /// Lower-case file extensions accepted as receipts
    pub accepted_extensions: Vec<String>,
    /// Percentage used when the form's field is empty or unusable
    pub default_pct: u32,
    /// Alert text shown when a file of another type is selected
    pub rejection_message: String,
    /// Session storage key holding the JSON-encoded `SessionUser`
    pub session_key: String,
}

impl Default for NewBillConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            default_pct: 20,
            rejection_message: "Seuls les fichiers jpg, jpeg ou png sont acceptés.".to_string(),
            session_key: "user".to_string(),
        }
    }
}
