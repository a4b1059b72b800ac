//! Export pipeline
//!
//! CSV serialization, photo-archive construction, and the orchestrator
//! tying them to the injected store and download sink.

pub mod archive;
pub mod artifact;
pub mod csv;
pub mod orchestrator;
pub mod state;
pub mod summary;

pub use artifact::ExportResult;
pub use orchestrator::{ExportOrchestrator, SUCCESS_MESSAGE};
pub use state::{ExportPhase, Notice, NoticeKind, NOTICE_DISMISS_INTERVAL};
pub use summary::{ExportOutcome, ExportSummary};
