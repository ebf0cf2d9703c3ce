pub mod args;
pub mod cache;
pub mod constants;
pub mod database;
pub mod error;
pub mod model;
pub mod service;
pub mod utils;
