pub mod character;
pub mod config;
pub mod definitions;
pub mod long_term_storage_service;
pub mod web_service;
