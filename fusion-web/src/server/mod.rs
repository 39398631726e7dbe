//! Server-side glue behind the Leptos server functions

pub mod config;
pub mod generate;
