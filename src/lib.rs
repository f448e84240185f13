//! Library root for the `cropcast` crate
//!
//! A small HTTP service: seven soil/climate measurements in, a crop
//! recommendation and image reference out. Three serialized artifacts (two
//! fitted scalers, one linear classifier) are loaded once at startup and
//! shared read-only across requests.

// Core error handling
pub mod errors;

// Artifacts & inference
pub mod artifacts;
pub mod pipeline;

// Request parsing & result mapping
pub mod catalog;
pub mod features;

// Configuration & CLI
pub mod cli;
pub mod config;

// Web server interface
pub mod app_state;
pub mod web;
