//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → opentelemetry_sdk → JsonLinesExporter → zcovid-spans.jsonl
//! ```
//!
//! Spans land in `~/.local/share/zellij/zcovid/zcovid-spans.jsonl`, one JSON
//! object per line. The file rotates at 5 MB into `.1`, `.2` and `.3`
//! backups. Verbosity follows the `trace_level` plugin option, which takes
//! any `EnvFilter` directive (default `info`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider and span exporter
//! - [`span_record`]: JSON shape of one exported span
//! - [`file_writer`]: Rotating line writer

mod file_writer;
mod init;
mod span_record;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, SPAN_FILE};
