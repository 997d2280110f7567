//! # Bill Creation Domain
//!
//! Client-side logic for the "new bill" view: an employee attaches a receipt,
//! fills the expense form and submits it to the remote store.
//!
//! ## Module Organization
//!
//! - **attachment**: accept/reject predicate for receipt files
//! - **store**: contract of the remote bill store, plus an in-memory store
//! - **session**: reads the authenticated user from session storage
//! - **navigation**: hash routes and the navigation callback
//! - **ui**: alert and file-input seams of the host page
//! - **form**: form field handles and numeric coercion rules
//! - **new_bill**: the container coordinating upload and submission
//!
//! ## Flow
//!
//! ```text
//! file selected -> validate -> (reject: alert + clear input)
//!                           -> (accept: store.create -> Ready)
//! form submitted -> build BillRecord -> store.update -> navigate
//! ```
//!
//! The container is single-threaded: its futures are `!Send` and are meant
//! to be spawned on the UI thread.

pub mod attachment;
pub mod error;
pub mod form;
pub mod navigation;
pub mod new_bill;
pub mod session;
pub mod store;
pub mod ui;

pub use attachment::*;
pub use error::*;
pub use navigation::*;
pub use new_bill::*;
pub use session::*;
pub use store::*;
pub use ui::*;
