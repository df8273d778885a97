//! Diagnostics for the Aster pipeline.
//!
//! Every user-facing problem is a [`Diagnostic`]: an [`ErrorCode`], a
//! message, and labeled source spans. Phases collect them in a
//! [`DiagnosticBag`] through its fixed `report_*` templates and never abort
//! on user error. [`emitter`] renders them with a source excerpt.

mod bag;
mod diagnostic;
pub mod emitter;
mod error_code;

pub use bag::DiagnosticBag;
pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
