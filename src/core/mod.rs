//! Document session, file access, markdown naming rules and configuration

pub mod config;
pub mod error;
pub mod file_ref;
pub mod markdown;
pub mod session;
