//! Step-by-step instrumentation for the AES core.
//!
//! Records every intermediate state the cipher driver reports and formats
//! states the way the walkthrough display renders them: spaced hex byte
//! pairs, 4x4 matrices, and base64.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod format;
mod record;

pub use crate::format::{matrix_rows, to_base64, to_hex};
pub use crate::record::{trace_block, trace_encrypt, BlockTrace, StepRecord, StepRecorder};
