pub mod client;
pub mod dto;
pub mod gateway;

pub use client::ApiClient;
