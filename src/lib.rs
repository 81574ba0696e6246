pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod interfaces;
pub mod validation;
