//! Shared constants for tema.

pub mod app;
pub mod theme;
