//! Output sinks.
//!
//! Sinks take a finished composite; they never see intermediate buffers.

/// Lossless PNG output.
pub mod png;
/// Sink trait and the in-memory sink.
pub mod sink;
