pub mod access;
pub mod auth;
pub mod cors;
pub mod request_id;
