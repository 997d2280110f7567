pub mod new_bill_form;
