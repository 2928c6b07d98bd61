pub mod bank_contract;
pub mod convert;
pub mod error;
pub mod handlers;
pub mod utils;
