//! Source text management: files, byte-offset spans, and location resolution.
//!
//! This crate owns all source text loaded into an analysis session. [`Span`]s
//! reference byte ranges within a [`SourceFile`], and the [`SourceDb`] resolves
//! them back to text snippets and line/column coordinates for diagnostics.

#![warn(missing_docs)]

pub mod file_id;
pub mod identifier;
pub mod resolved_span;
pub mod source_db;
pub mod source_file;
pub mod span;

pub use file_id::FileId;
pub use identifier::Identifier;
pub use resolved_span::ResolvedSpan;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
pub use span::Span;
