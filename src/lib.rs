pub mod client;
pub mod config;
pub mod helpers;
pub mod models;
pub mod stub;
pub mod suite;
