pub mod auth;
pub mod categories;
pub mod error;
pub mod extractors;
pub mod message_response;
pub mod recipes;
