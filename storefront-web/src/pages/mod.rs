pub mod cart;
pub mod checkout;
pub mod confirmation;
pub mod not_found;
pub mod shop;
