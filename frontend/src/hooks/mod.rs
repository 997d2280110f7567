pub mod use_new_bill;
