pub mod config;
pub mod contact;
pub mod gateway;
pub mod intent;
pub mod memory;
pub mod profile;
pub mod prompt;
pub mod provider;
pub mod types;
