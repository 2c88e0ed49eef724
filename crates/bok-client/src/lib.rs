pub mod client;
pub mod form;
pub mod notify;
