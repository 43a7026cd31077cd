pub mod config;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;
pub mod utils;
