// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error taxonomy for the console input core.
//!
//! | Type                      | Cause                                            | Mode restored?            |
//! | :------------------------ | :----------------------------------------------- | :------------------------ |
//! | [`AcquireHandleError`]    | Cannot obtain the console input handle           | Nothing was changed       |
//! | [`ModeError::Get`]        | Capturing the current mode failed                | Nothing was changed       |
//! | [`ModeError::SetForward`] | Applying the target mode failed                  | Best-effort restore ran   |
//! | [`ModeError::SetRestore`] | Restoring the captured mode failed               | **No** — reported to user |
//! | [`DecodeError`]           | Record tag matches none of the five known kinds  | Yes (loop tears down)     |
//! | [`ReadError`]             | Raw read failed, or a record in a batch was bad  | Yes (loop tears down)     |
//!
//! A restore failure is the one case where the "console left exactly as it
//! was" guarantee is known to have failed, so [`ModeError::SetRestore`]
//! carries help text for manual recovery and is always surfaced — as the
//! primary error when nothing else went wrong, or as secondary context
//! attached to an already-propagating error, never replacing it.

use crate::InputModeFlags;
use std::io;

/// The console input handle could not be obtained. Fatal: no mode was ever
/// changed, so nothing is owed on the way out.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("Failed to acquire the console input handle")]
#[diagnostic(
    code(coninput::acquire_handle),
    help(
        "Ensure the process is attached to a console \
         (stdin must not be redirected to a file or pipe)."
    )
)]
pub struct AcquireHandleError(#[source] pub io::Error);

/// Failures of the get/set-mode primitives, split by which transition of the
/// mode guard they break. See the module docs for the restoration guarantee
/// attached to each variant.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ModeError {
    /// Capturing the pre-change mode failed. No mode change was applied and
    /// no restoration is owed.
    #[error("Failed to read the current console input mode")]
    #[diagnostic(code(coninput::mode::get))]
    Get(#[source] io::Error),

    /// Applying the target mode failed. The captured snapshot was restored
    /// best-effort before this error was returned.
    #[error("Failed to apply console input mode [{requested}]")]
    #[diagnostic(code(coninput::mode::set_forward))]
    SetForward {
        requested: InputModeFlags,
        #[source]
        source: io::Error,
    },

    /// Restoring the captured mode failed. The console is left with the
    /// modified mode still active, which is user-visible.
    #[error("Failed to restore original console input mode [{original}]")]
    #[diagnostic(
        code(coninput::mode::set_restore),
        help(
            "The console input mode was left in its modified state. \
             Start a new console session, or reset the mode manually."
        )
    )]
    SetRestore {
        original: InputModeFlags,
        #[source]
        source: io::Error,
    },
}

/// A raw record could not be decoded.
///
/// The only decode failure is an unrecognized tag; every known tag decodes
/// totally. An unknown tag usually means the console host is newer than this
/// library's pinned record contract, so it is surfaced, never swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum DecodeError {
    #[error("Unrecognized input record tag {tag:#06x}")]
    #[diagnostic(
        code(coninput::decode::unknown_tag),
        help(
            "The host delivered an event kind this library does not know; \
             this usually indicates a console API version mismatch."
        )
    )]
    UnknownTag { tag: u16 },
}

/// A batched read failed as a whole.
///
/// Batches are all-or-nothing: if any record in a batch fails to decode the
/// entire batch is discarded, since delivering a truncated batch would
/// corrupt the caller's view of input ordering.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReadError {
    /// The raw read primitive itself reported failure (invalid handle,
    /// console detached).
    #[error("Console raw read failed")]
    #[diagnostic(code(coninput::read::io))]
    Io(#[source] io::Error),

    /// A record in the batch failed to decode; the batch was discarded.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),
}
