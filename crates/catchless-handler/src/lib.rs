// crates/catchless-handler/src/lib.rs
// ============================================================================
// Module: Catchless Handler Root
// Description: Public API surface for exception handlers.
// Purpose: Wire together the handler contract, stock policies, and sinks.
// Dependencies: crate::{handler, policy, sink}
// ============================================================================

//! ## Overview
//! Exception handlers bridge throwing shapes into optional shapes. A handler
//! observes each failure through [`ExceptionHandler::handle`] and the converted
//! shape reports the failure as absence. Chain the result with `or_else` or
//! `or_else_get` to reach a total shape:
//!
//! ```
//! use catchless_core::prelude::*;
//! use catchless_handler::ExceptionHandlerExt;
//! use catchless_handler::Silence;
//!
//! let handler = Silence;
//! let parse = handler.function(|text: &str| text.parse::<u16>());
//! let port = parse.or_else(8080);
//!
//! assert_eq!(port("9000"), 9000);
//! assert_eq!(port("ninety"), 8080);
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod handler;
pub mod policy;
pub mod sink;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use handler::ExceptionHandler;
pub use handler::ExceptionHandlerExt;
pub use handler::Failure;
pub use policy::DEFAULT_LABEL;
pub use policy::Log;
pub use policy::Silence;
pub use sink::FAILURE_EVENT;
pub use sink::FailureEvent;
pub use sink::FailureSink;
pub use sink::FileFailureSink;
pub use sink::NoopFailureSink;
pub use sink::StderrFailureSink;
