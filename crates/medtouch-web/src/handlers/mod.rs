//! HTTP handlers for all web routes.

pub mod predict;
pub mod system;
