//! Farm Advisor - Advisory engine for smallholder farmers
//!
//! Resolves the farmer's location, gates which advisory module is visible,
//! answers crop-knowledge queries with a built-in fallback dataset, and runs
//! the simulated disease-diagnosis and voice-assistant pipelines alongside a
//! background weather/alert scheduler.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
