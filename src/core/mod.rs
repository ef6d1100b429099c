//! Core logic: profile storage, client config, and the process invoker.

pub mod config;
pub mod invoker;
pub mod network;
pub mod store;
pub mod validation;
