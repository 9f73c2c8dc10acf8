//! Headless client for a single-product checkout funnel.
//!
//! The payment backend (checkout sessions, status, downloads, stats) is an
//! external service; this crate covers everything the buyer-facing flow does
//! that is not rendering: initiating checkout, polling payment status after
//! the redirect back, and materializing the download bundle.

pub mod backend;
pub mod config;
pub mod downloads;
pub mod error;
pub mod funnel;
pub mod models;
pub mod poller;
pub mod ticker;
