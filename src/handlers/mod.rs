//! HTTP handlers: the form page, health probes, and the generation endpoint.

pub mod app;
pub mod generate;
