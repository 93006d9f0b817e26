pub mod client;
pub mod types;
pub mod worker;

pub use client::CompanyClient;
