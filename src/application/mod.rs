/// Login, session restore and logout
pub mod auth;
/// Client the role services are implemented on
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits, one per backend script
pub mod interfaces;
/// Service implementations on [`client::Client`]
pub mod services;
