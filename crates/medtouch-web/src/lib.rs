//! medtouch-web — HTTP surface for the MedTouch risk scorer.
//! Exposes:
//!   - Health check
//!   - Patient risk prediction
//!   - Vocabulary and rule table for the intake form

pub mod router;
pub mod handlers;
pub mod state;
