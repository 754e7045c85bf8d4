#![doc = "The `tasknest` library crate."]
#![doc = ""]
#![doc = "Domain models, authentication, store backends, route handlers, and the"]
#![doc = "client-side session layer for the tasknest application. The binary"]
#![doc = "(`main.rs`) assembles these into a running HTTP server."]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
