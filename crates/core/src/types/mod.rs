//! Core types for try-on submissions.
//!
//! This module provides the data carried through a single submission call.

pub mod image;
pub mod submission;

pub use image::ImageFile;
pub use submission::{SubmissionResponse, TryOnSubmission};
