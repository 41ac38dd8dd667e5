//! Schema model for tabula.
//!
//! The model is produced once per run by a [`SchemaProvider`] and shared
//! read-only by every generator.
//!
//! # Architecture
//!
//! ```text
//! database / snapshot → SchemaProvider → InspectResult → Generator (codegen)
//! ```

mod error;
mod inspect;
mod model;
mod provider;

pub use error::SchemaError;
pub use inspect::InspectResult;
pub use model::{CheckConstraint, Column, ConstraintKind, EnumType, ForeignReference, Table};
pub use provider::{SchemaProvider, SnapshotProvider, StaticProvider};
