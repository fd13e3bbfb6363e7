pub mod check;
pub mod config;
pub mod env;
pub mod handler;
pub mod metadata;
pub mod notifier;
