pub mod chat;
pub mod config_store;
pub mod confirmation_store;
pub mod files;
pub mod ticket;
