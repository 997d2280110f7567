//! # New Bill Container
//!
//! Coordinates the two asynchronous steps of creating a bill:
//!
//! 1. **Attachment**: a selected receipt is validated, then uploaded with
//!    `BillStore::create`. The store answers with the file URL and the key of
//!    the bill it created.
//! 2. **Submission**: the form values are merged with the uploaded attachment
//!    into a `BillRecord`, sent with `BillStore::update`, and the user is sent
//!    back to the bill list.
//!
//! One `NewBill` is one bill-creation session. Its `AttachmentState` is only
//! written by the upload completion and by submission, and a submission is
//! refused until the upload has resolved.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use shared::{BillRecord, BillStatus, NewBillConfig, NewBillFormValues, UpdateBillRequest};

use crate::attachment::{AttachmentValidator, AttachmentVerdict};
use crate::error::NewBillError;
use crate::form::{parse_amount, parse_pct};
use crate::navigation::{Navigator, Route};
use crate::session::{current_user, SessionStorage};
use crate::store::{AttachmentUpload, BillStore};
use crate::ui::{Alerter, FileInput};

/// A receipt accepted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_url: String,
    pub file_name: String,
    /// Key returned by `create`, used as the update selector
    pub bill_id: String,
}

/// Progress of one bill-creation session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttachmentState {
    #[default]
    NoAttachment,
    Uploading {
        file_name: String,
    },
    Ready(Attachment),
    Submitting(Attachment),
    Submitted(Attachment),
}

impl AttachmentState {
    pub fn attachment(&self) -> Option<&Attachment> {
        match self {
            AttachmentState::Ready(attachment)
            | AttachmentState::Submitting(attachment)
            | AttachmentState::Submitted(attachment) => Some(attachment),
            AttachmentState::NoAttachment | AttachmentState::Uploading { .. } => None,
        }
    }
}

/// Result of handling a file selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentOutcome {
    Uploaded(Attachment),
    /// The input holds no file, e.g. the picker was cancelled
    NoFile,
    /// Wrong file type: the user was alerted and the input cleared
    Rejected,
}

pub struct NewBill<S: BillStore> {
    store: Rc<S>,
    session: Rc<dyn SessionStorage>,
    navigator: Rc<dyn Navigator>,
    alerter: Rc<dyn Alerter>,
    validator: AttachmentValidator,
    config: NewBillConfig,
    state: RefCell<AttachmentState>,
}

impl<S: BillStore> NewBill<S> {
    pub fn new(
        store: Rc<S>,
        session: Rc<dyn SessionStorage>,
        navigator: Rc<dyn Navigator>,
        alerter: Rc<dyn Alerter>,
    ) -> Self {
        Self::with_config(store, session, navigator, alerter, NewBillConfig::default())
    }

    pub fn with_config(
        store: Rc<S>,
        session: Rc<dyn SessionStorage>,
        navigator: Rc<dyn Navigator>,
        alerter: Rc<dyn Alerter>,
        config: NewBillConfig,
    ) -> Self {
        Self {
            store,
            session,
            navigator,
            alerter,
            validator: AttachmentValidator::from_config(&config),
            config,
            state: RefCell::new(AttachmentState::NoAttachment),
        }
    }

    pub fn config(&self) -> &NewBillConfig {
        &self.config
    }

    pub fn state(&self) -> AttachmentState {
        self.state.borrow().clone()
    }

    pub fn attachment(&self) -> Option<Attachment> {
        self.state.borrow().attachment().cloned()
    }

    /// React to a file being picked in the form's file input.
    ///
    /// An empty input does nothing. A file of the wrong type is rejected
    /// without suspending: the user is alerted, the input is cleared and the
    /// state is left as it was.
    /// Otherwise the file is uploaded once; a failed upload is returned as
    /// an error and restores the previous state.
    pub async fn handle_change_file<I>(&self, input: &I) -> Result<AttachmentOutcome, NewBillError>
    where
        I: FileInput<File = S::File> + ?Sized,
    {
        let Some(file) = input.first_file() else {
            debug!("File input changed without a file");
            return Ok(AttachmentOutcome::NoFile);
        };

        if self.validator.validate(&file.name) == AttachmentVerdict::Rejected {
            warn!("Rejected attachment '{}' (input value '{}')", file.name, input.value());
            self.alerter.alert(&self.config.rejection_message);
            input.clear();
            return Ok(AttachmentOutcome::Rejected);
        }

        let user = current_user(self.session.as_ref(), &self.config.session_key)?;
        let previous = self.begin_upload(&file.name)?;

        let file_name = file.name.clone();
        let upload = AttachmentUpload {
            file: file.content,
            file_name: file.name,
            mime_type: file.mime_type,
            email: user.email,
        };

        info!("Uploading attachment '{}'", file_name);
        match self.store.create(upload).await {
            Ok(created) => {
                let attachment = Attachment {
                    file_url: created.file_url,
                    file_name,
                    bill_id: created.key,
                };
                info!("Attachment '{}' stored for bill {}", attachment.file_name, attachment.bill_id);
                *self.state.borrow_mut() = AttachmentState::Ready(attachment.clone());
                Ok(AttachmentOutcome::Uploaded(attachment))
            }
            Err(e) => {
                warn!("Upload of '{}' failed: {}", file_name, e);
                *self.state.borrow_mut() = previous;
                Err(e.into())
            }
        }
    }

    /// Move to `Uploading`, returning the state to restore if the upload fails
    fn begin_upload(&self, file_name: &str) -> Result<AttachmentState, NewBillError> {
        let mut state = self.state.borrow_mut();
        match *state {
            AttachmentState::Uploading { .. } => Err(NewBillError::UploadInProgress),
            AttachmentState::Submitting(_) | AttachmentState::Submitted(_) => {
                Err(NewBillError::AlreadySubmitted)
            }
            AttachmentState::NoAttachment | AttachmentState::Ready(_) => Ok(std::mem::replace(
                &mut *state,
                AttachmentState::Uploading {
                    file_name: file_name.to_string(),
                },
            )),
        }
    }

    /// React to the form being submitted.
    ///
    /// Builds the bill from the form values and the uploaded attachment, then
    /// persists it with [`NewBill::update_bill`]. Returns the record sent.
    pub async fn handle_submit(&self, form: &NewBillFormValues) -> Result<BillRecord, NewBillError> {
        let attachment = self.ready_attachment()?;

        let user = current_user(self.session.as_ref(), &self.config.session_key)?;
        let bill = self.build_bill(user.email, form, &attachment)?;

        self.update_bill(&bill).await?;
        Ok(bill)
    }

    /// The uploaded attachment, if the session can still be submitted
    fn ready_attachment(&self) -> Result<Attachment, NewBillError> {
        match &*self.state.borrow() {
            AttachmentState::Ready(attachment) => Ok(attachment.clone()),
            AttachmentState::Submitting(_) | AttachmentState::Submitted(_) => {
                Err(NewBillError::AlreadySubmitted)
            }
            AttachmentState::NoAttachment | AttachmentState::Uploading { .. } => {
                Err(NewBillError::AttachmentNotReady)
            }
        }
    }

    /// Assemble the record persisted for this session's attachment
    pub fn build_bill(
        &self,
        email: String,
        form: &NewBillFormValues,
        attachment: &Attachment,
    ) -> Result<BillRecord, NewBillError> {
        let amount =
            parse_amount(&form.amount).ok_or_else(|| NewBillError::InvalidAmount(form.amount.clone()))?;

        Ok(BillRecord {
            email,
            expense_type: form.expense_type.clone(),
            name: form.expense_name.clone(),
            amount,
            date: form.date.clone(),
            vat: form.vat.clone(),
            pct: parse_pct(&form.pct, self.config.default_pct),
            commentary: form.commentary.clone(),
            file_url: attachment.file_url.clone(),
            file_name: attachment.file_name.clone(),
            status: BillStatus::Pending,
        })
    }

    /// Send `bill` to the store under this session's bill key, then navigate
    /// to the employee's bill list.
    ///
    /// The session is `Submitting` while the store call is pending and
    /// `Submitted` once it succeeds. A store failure is returned, puts the
    /// session back to `Ready` and does not navigate.
    pub async fn update_bill(&self, bill: &BillRecord) -> Result<(), NewBillError> {
        let attachment = self.ready_attachment()?;
        let request = UpdateBillRequest {
            data: serde_json::to_string(bill)?,
            selector: attachment.bill_id.clone(),
        };

        *self.state.borrow_mut() = AttachmentState::Submitting(attachment.clone());
        debug!("Updating bill {}", request.selector);
        if let Err(e) = self.store.update(request).await {
            warn!("Update of bill {} failed: {}", attachment.bill_id, e);
            *self.state.borrow_mut() = AttachmentState::Ready(attachment);
            return Err(e.into());
        }
        *self.state.borrow_mut() = AttachmentState::Submitted(attachment);

        info!("Bill '{}' submitted, navigating to {}", bill.name, Route::EmployeeBills);
        self.navigator.navigate(Route::EmployeeBills);
        Ok(())
    }
}
