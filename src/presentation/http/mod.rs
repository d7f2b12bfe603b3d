pub mod contacts;
pub mod error;
pub mod health;
pub mod openapi;
pub mod request_log;
