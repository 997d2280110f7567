mod components;
mod hooks;
mod services;

use billed_domain::Route;
use yew::prelude::*;

use crate::components::new_bill_form::NewBillForm;
use crate::hooks::use_new_bill::use_new_bill;
use crate::services::api::ApiClient;
use crate::services::browser::{current_route, set_hash};

#[derive(Properties, PartialEq)]
struct NewBillPageProps {
    api_client: ApiClient,
    on_navigate: Callback<Route>,
}

#[function_component(NewBillPage)]
fn new_bill_page(props: &NewBillPageProps) -> Html {
    let new_bill = use_new_bill(&props.api_client, props.on_navigate.clone());

    html! {
        <NewBillForm
            uploading={new_bill.uploading}
            submitting={new_bill.submitting}
            error={new_bill.error}
            on_file_change={new_bill.on_file_change}
            on_submit={new_bill.on_submit}
        />
    }
}

#[derive(Properties, PartialEq)]
struct BillsPageProps {
    on_navigate: Callback<Route>,
}

#[function_component(BillsPage)]
fn bills_page(props: &BillsPageProps) -> Html {
    let on_new_bill = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::NewBill))
    };

    html! {
        <section class="content">
            <h2 class="content-title">{"Mes notes de frais"}</h2>
            <button type="button" data-testid="btn-new-bill" class="btn btn-primary" onclick={on_new_bill}>
                {"Nouvelle note de frais"}
            </button>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let route = use_state(|| match current_route() {
        Some(Route::EmployeeBills) => Route::EmployeeBills,
        _ => Route::NewBill,
    });

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            set_hash(next);
            route.set(next);
        })
    };

    match *route {
        Route::EmployeeBills => html! { <BillsPage {on_navigate} /> },
        _ => html! { <NewBillPage api_client={(*api_client).clone()} {on_navigate} /> },
    }
}

fn main() {
    if let Err(e) = services::logging::init() {
        gloo::console::error!("Failed to install logger:", e.to_string());
    }
    yew::Renderer::<App>::new().render();
}
