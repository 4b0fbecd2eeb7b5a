pub mod app;
pub mod config;
pub mod domain;
pub mod service;
pub mod store;
pub mod telemetry;
