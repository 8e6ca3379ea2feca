pub mod layout;
pub mod merchant_form;
pub mod modal;
pub mod pagination;
pub mod search;
pub mod table;
