pub mod dashboard;
pub mod login;
pub mod members;
pub mod merchants;
pub mod statistics;
pub mod status;
pub mod transactions;
