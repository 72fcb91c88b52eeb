//! UI components for mdpad

pub mod editor;
pub mod notification;
pub mod preview;
