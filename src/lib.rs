//! Choice Explorer - Interactive weighted decision widget
//!
//! This crate models linked range control and number field pairs whose
//! values feed a weighted aggregation of one or more targets. It is
//! headless: a host adapter draws the rendered view and forwards user
//! interactions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
