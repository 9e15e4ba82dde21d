// src/io/mod.rs

// Dateiformate: Diagramm-Records (P/E) und Test-Batches
pub mod batch;
pub mod diagnostic;
pub mod error;
pub mod files;
pub mod record;

pub use self::batch::{BatchBlock, BatchParse, BatchReader};
pub use self::diagnostic::{Diagnostic, DiagnosticKind};
pub use self::error::{DiagramIoError, IoResult};
pub use self::record::{DiagramRecord, ParsedRecord, RecordEdge, RecordPoint};
