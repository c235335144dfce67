// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test doubles for the console primitives.
//!
//! Shipped as a public module so unit tests, doctests, and downstream
//! embeddings can all script a console without a Windows host:
//! [`MockConsole`] stands in for the device seam, and the `*_record`
//! builders produce byte-exact raw records for the decoder.

// Attach.
mod mock_console;
mod raw_record_builders;

// Re-export.
pub use mock_console::*;
pub use raw_record_builders::*;
