use billed_domain::form::{FormField, EXPENSE_TYPES};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NewBillFormProps {
    pub uploading: bool,
    pub submitting: bool,
    pub error: Option<String>,

    pub on_file_change: Callback<Event>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(NewBillForm)]
pub fn new_bill_form(props: &NewBillFormProps) -> Html {
    html! {
        <section class="content">
            <h2 class="content-title">{"Envoyer une note de frais"}</h2>

            {if let Some(error) = props.error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form data-testid={FormField::Form.test_id()} class="form-newbill-container" onsubmit={props.on_submit.clone()}>
                <div class="col-md-6">
                    <label for="expense-type">{"Type de dépense"}</label>
                    <select required=true id="expense-type" name={FormField::ExpenseType.test_id()} data-testid={FormField::ExpenseType.test_id()}>
                        {for EXPENSE_TYPES.iter().map(|expense_type| html! {
                            <option value={*expense_type}>{*expense_type}</option>
                        })}
                    </select>

                    <label for="expense-name">{"Nom de la dépense"}</label>
                    <input type="text" id="expense-name" placeholder="Vol Paris Londres"
                        name={FormField::ExpenseName.test_id()} data-testid={FormField::ExpenseName.test_id()} />

                    <label for="datepicker">{"Date"}</label>
                    <input required=true type="date" id="datepicker"
                        name={FormField::Date.test_id()} data-testid={FormField::Date.test_id()} />

                    <label for="amount">{"Montant TTC"}</label>
                    <input required=true type="number" id="amount" placeholder="348"
                        name={FormField::Amount.test_id()} data-testid={FormField::Amount.test_id()} />

                    <label for="vat">{"TVA"}</label>
                    <div class="flex-input">
                        <input type="number" id="vat" placeholder="70"
                            name={FormField::Vat.test_id()} data-testid={FormField::Vat.test_id()} />
                        <input type="number" id="pct" placeholder="20"
                            name={FormField::Pct.test_id()} data-testid={FormField::Pct.test_id()} />
                        <span>{"%"}</span>
                    </div>
                </div>

                <div class="col-md-6">
                    <label for="commentary">{"Commentaire"}</label>
                    <textarea id="commentary" rows="3"
                        name={FormField::Commentary.test_id()} data-testid={FormField::Commentary.test_id()} />

                    <label for="file">{"Justificatif"}</label>
                    <input required=true type="file" id="file" accept=".jpg,.jpeg,.png"
                        data-testid={FormField::File.test_id()}
                        onchange={props.on_file_change.clone()}
                        disabled={props.submitting} />
                    {if props.uploading {
                        html! { <span class="upload-status">{"Envoi du justificatif..."}</span> }
                    } else { html! {} }}
                </div>

                <button type="submit" id="btn-send-bill" class="btn btn-primary"
                    disabled={props.uploading || props.submitting}>
                    {if props.submitting { "Envoi..." } else { "Envoyer" }}
                </button>
            </form>
        </section>
    }
}
