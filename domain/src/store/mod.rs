//! # Bill Store
//!
//! Contract of the remote store holding bills. Only the two per-bill
//! operations used while creating a bill are modeled here.

pub mod memory;

use async_trait::async_trait;
use shared::{CreatedBill, UpdateBillRequest};
use thiserror::Error;

pub use memory::InMemoryBillStore;

/// Transfer payload of an attachment upload
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentUpload<F> {
    pub file: F,
    pub file_name: String,
    pub mime_type: String,
    /// Identity of the uploading user
    pub email: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("store responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode store response: {0}")]
    Decode(String),

    #[error("no bill with key '{0}'")]
    NotFound(String),
}

/// Per-bill operations of the remote store.
///
/// Implementations run on the UI thread, so their futures are not `Send`.
#[async_trait(?Send)]
pub trait BillStore {
    /// Host-specific handle of an uploaded file's content
    type File: 'static;

    /// Upload a receipt; the store creates a bill for it and returns its key
    async fn create(&self, upload: AttachmentUpload<Self::File>) -> Result<CreatedBill, StoreError>;

    /// Replace the data of the bill addressed by `request.selector`
    async fn update(&self, request: UpdateBillRequest) -> Result<(), StoreError>;
}
