use thiserror::Error;

use crate::session::SessionError;
use crate::store::StoreError;

/// Errors surfaced by the new-bill container.
///
/// An attachment of the wrong type is not an error: it is reported to the
/// user and to the caller as `AttachmentOutcome::Rejected`. An empty file
/// input is `AttachmentOutcome::NoFile`.
#[derive(Debug, Error)]
pub enum NewBillError {
    #[error("an attachment upload is still in progress")]
    UploadInProgress,

    #[error("the bill cannot be submitted before its attachment is uploaded")]
    AttachmentNotReady,

    #[error("this bill has already been submitted")]
    AlreadySubmitted,

    #[error("invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to serialize bill: {0}")]
    Serialize(#[from] serde_json::Error),
}
