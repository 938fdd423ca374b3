// crates/catchless-config/src/lib.rs
// ============================================================================
// Module: Catchless Config Library
// Description: Handler config model, validation, and handler construction.
// Purpose: Single source of truth for catchless.toml semantics.
// Dependencies: catchless-handler, serde, toml
// ============================================================================

//! ## Overview
//! `catchless-config` selects an exception handler from a TOML file. Loading is
//! strict and fail-closed: unknown keys, oversize files, and inconsistent
//! sections are rejected before any handler is built.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
