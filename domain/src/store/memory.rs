use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use shared::{BillRecord, CreatedBill, UpdateBillRequest};
use uuid::Uuid;

use super::{AttachmentUpload, BillStore, StoreError};

/// An uploaded receipt and the bill data attached to it so far
#[derive(Debug, Clone, PartialEq)]
pub struct StoredBill {
    pub key: String,
    pub email: String,
    pub file_name: String,
    pub file_url: String,
    pub content: Vec<u8>,
    pub record: Option<BillRecord>,
}

/// Bill store kept in process memory.
///
/// Every call is recorded, so callers can inspect what reached the store.
#[derive(Debug, Default)]
pub struct InMemoryBillStore {
    bills: RefCell<HashMap<String, StoredBill>>,
    updates: RefCell<Vec<UpdateBillRequest>>,
    created_count: RefCell<usize>,
}

impl InMemoryBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_count(&self) -> usize {
        *self.created_count.borrow()
    }

    /// Every update request received, in order
    pub fn updates(&self) -> Vec<UpdateBillRequest> {
        self.updates.borrow().clone()
    }

    pub fn bill(&self, key: &str) -> Option<StoredBill> {
        self.bills.borrow().get(key).cloned()
    }
}

#[async_trait(?Send)]
impl BillStore for InMemoryBillStore {
    type File = Vec<u8>;

    async fn create(&self, upload: AttachmentUpload<Vec<u8>>) -> Result<CreatedBill, StoreError> {
        let key = Uuid::new_v4().to_string();
        let file_url = format!("memory://bills/{}/{}", key, upload.file_name);
        debug!("Storing attachment '{}' under key {}", upload.file_name, key);

        let bill = StoredBill {
            key: key.clone(),
            email: upload.email,
            file_name: upload.file_name,
            file_url: file_url.clone(),
            content: upload.file,
            record: None,
        };
        self.bills.borrow_mut().insert(key.clone(), bill);
        *self.created_count.borrow_mut() += 1;

        Ok(CreatedBill { file_url, key })
    }

    async fn update(&self, request: UpdateBillRequest) -> Result<(), StoreError> {
        self.updates.borrow_mut().push(request.clone());

        let record: BillRecord =
            serde_json::from_str(&request.data).map_err(|e| StoreError::Decode(e.to_string()))?;

        let mut bills = self.bills.borrow_mut();
        let bill = bills
            .get_mut(&request.selector)
            .ok_or_else(|| StoreError::NotFound(request.selector.clone()))?;
        bill.record = Some(record);
        Ok(())
    }
}
