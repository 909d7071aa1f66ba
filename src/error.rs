// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error type shared by all demos.
//!
//! The demos themselves cannot fail: inputs are compiled in and every
//! algorithm terminates on them. The only fallible operation is writing
//! the transcript to the output sink.

use thiserror::Error;

/// Errors that can occur while running a demo.
#[derive(Error, Debug)]
pub enum DemoError {
    /// Writing to the output sink failed (closed pipe, full disk, ...).
    #[error("failed to write demo output: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type DemoResult<T> = Result<T, DemoError>;
