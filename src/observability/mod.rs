//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → FileSpanExporter → JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/reelscout/reelscout-otlp.json`,
//! rotated at 10 MB with three numbered backups. The level is taken from the
//! `trace_level` plugin option (default `"info"`).
//!
//! A span context travels with every web request inside its context map, so
//! the response handler continues the trace that issued the request.
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider and file span exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
