pub mod catalog_client;
pub mod client;
pub mod dto;
