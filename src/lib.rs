//! api-hygiene - ambient vs. injected dependencies, side by side
//!
//! Two handler modules serve the same three endpoints. The bad-practice
//! module reaches for ambient capabilities (wall clock, stdout, blocking
//! file I/O); the good-practice module receives the same capabilities as
//! injected collaborators. This library exposes modules for integration
//! testing.

pub mod api;
pub mod error;
pub mod server;
pub mod services;
