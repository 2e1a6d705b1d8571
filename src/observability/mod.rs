//! File-based OpenTelemetry tracing.
//!
//! This module provides the observability pipeline for the application:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OTLP serializer → rotating file
//! ```
//!
//! Spans are written as OTLP JSON documents, one batch per line, to
//! `~/.local/share/ticklist/ticklist-otlp.json` with size-based rotation.
//! The trace level comes from the `trace_level` config option (default
//! `info`). Tracing failures never affect the application; export errors are
//! absorbed inside the SDK.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Custom file-backed span exporter and provider
//! - `otlp`: OTLP JSON span serialization
//! - `rotate`: Rotating file writer

mod init;
mod otlp;
mod rotate;
mod tracer;

pub use init::init_tracing;
