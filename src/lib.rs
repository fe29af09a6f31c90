// Library exports for integration tests and reusable components

pub mod config;
pub mod models;
pub mod search_api;

#[doc(hidden)]
pub mod ui;
