use std::rc::Rc;

use anyhow::anyhow;
use billed_domain::form::FormField;
use billed_domain::{AttachmentOutcome, NewBill, Route};
use shared::NewBillFormValues;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::browser::{alert, BrowserFileInput, LocalStorageSession};

pub struct UseNewBillResult {
    pub uploading: bool,
    pub submitting: bool,
    pub error: Option<String>,
    pub on_file_change: Callback<Event>,
    pub on_submit: Callback<SubmitEvent>,
}

/// Read the form's fields by name
fn read_form_values(form: &HtmlFormElement) -> anyhow::Result<NewBillFormValues> {
    let data = FormData::new_with_form(form).map_err(|e| anyhow!("Failed to read form: {:?}", e))?;
    let field = |field: FormField| data.get(field.test_id()).as_string().unwrap_or_default();

    Ok(NewBillFormValues {
        expense_type: field(FormField::ExpenseType),
        expense_name: field(FormField::ExpenseName),
        amount: field(FormField::Amount),
        date: field(FormField::Date),
        vat: field(FormField::Vat),
        pct: field(FormField::Pct),
        commentary: field(FormField::Commentary),
    })
}

#[hook]
pub fn use_new_bill(api_client: &ApiClient, on_navigate: Callback<Route>) -> UseNewBillResult {
    let uploading = use_state(|| false);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    // One container per mounted page, i.e. per bill-creation session
    let new_bill = {
        let api_client = api_client.clone();
        use_memo((), move |_| {
            NewBill::new(
                Rc::new(api_client),
                Rc::new(LocalStorageSession),
                Rc::new(move |route: Route| on_navigate.emit(route)),
                Rc::new(|message: &str| alert(message)),
            )
        })
    };

    let on_file_change = {
        let new_bill = new_bill.clone();
        let uploading = uploading.clone();
        let error = error.clone();

        Callback::from(move |e: Event| {
            e.prevent_default();
            let input = BrowserFileInput::new(e.target_unchecked_into::<HtmlInputElement>());
            let new_bill = new_bill.clone();
            let uploading = uploading.clone();
            let error = error.clone();

            spawn_local(async move {
                uploading.set(true);
                match new_bill.handle_change_file(&input).await {
                    Ok(AttachmentOutcome::Uploaded(attachment)) => {
                        log::info!("Receipt '{}' attached", attachment.file_name);
                        error.set(None);
                    }
                    Ok(AttachmentOutcome::Rejected) | Ok(AttachmentOutcome::NoFile) => {}
                    Err(e) => {
                        gloo::console::error!("Failed to upload receipt:", e.to_string());
                        error.set(Some(e.to_string()));
                    }
                }
                uploading.set(false);
            });
        })
    };

    let on_submit = {
        let new_bill = new_bill.clone();
        let submitting = submitting.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();
            let values = match read_form_values(&form) {
                Ok(values) => values,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let new_bill = new_bill.clone();
            let submitting = submitting.clone();
            let error = error.clone();

            spawn_local(async move {
                submitting.set(true);
                if let Err(e) = new_bill.handle_submit(&values).await {
                    gloo::console::error!("Failed to submit bill:", e.to_string());
                    error.set(Some(e.to_string()));
                }
                submitting.set(false);
            });
        })
    };

    UseNewBillResult {
        uploading: *uploading,
        submitting: *submitting,
        error: (*error).clone(),
        on_file_change,
        on_submit,
    }
}
