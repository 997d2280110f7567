use async_trait::async_trait;
use billed_domain::{AttachmentUpload, BillStore, StoreError};
use gloo::net::http::{Request, RequestBuilder, Response};
use gloo::storage::{LocalStorage, Storage};
use shared::{CreatedBill, UpdateBillRequest};
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// API client for the bills backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:5678".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Attach the session's bearer token, when there is one
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match LocalStorage::raw().get_item("jwt") {
            Ok(Some(jwt)) => builder.header("Authorization", &format!("Bearer {}", jwt)),
            _ => builder,
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Network(format!("{:?}", value))
}

async fn ensure_ok(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(StoreError::Status { status, message })
}

#[async_trait(?Send)]
impl BillStore for ApiClient {
    type File = web_sys::File;

    async fn create(&self, upload: AttachmentUpload<web_sys::File>) -> Result<CreatedBill, StoreError> {
        let url = format!("{}/bills", self.base_url);

        let form_data = FormData::new().map_err(js_error)?;
        form_data
            .append_with_blob_and_filename("file", &upload.file, &upload.file_name)
            .map_err(js_error)?;
        form_data.append_with_str("email", &upload.email).map_err(js_error)?;

        let response = self
            .authorized(Request::post(&url))
            .body(form_data)
            .map_err(|e| StoreError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        ensure_ok(response)
            .await?
            .json::<CreatedBill>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn update(&self, request: UpdateBillRequest) -> Result<(), StoreError> {
        let url = format!("{}/bills/{}", self.base_url, request.selector);

        let response = self
            .authorized(Request::patch(&url))
            .header("Content-Type", "application/json")
            .body(request.data)
            .map_err(|e| StoreError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        ensure_ok(response).await?;
        Ok(())
    }
}
