// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The collaborator seam: raw console primitives the core calls into.
//!
//! The core never talks to the OS directly. Everything it needs from the
//! host — handle acquisition, the get/set-mode accessors, and the blocking
//! batched read — goes through this trait, so the mode guard, reader, and
//! event loop are exercisable on any platform against
//! [`MockConsole`](crate::test_fixtures::MockConsole). The real adapter is
//! `WindowsConsole` (`cfg(windows)`).

use crate::{InputModeFlags, RawInputRecord};
use std::io;

/// Raw console primitives. Implementations marshal to the host; they do not
/// interpret records or modes.
///
/// All methods take `&self`: the primitives are stateless calls against a
/// host-owned resource, and the mode guard and reader both borrow the same
/// device for the duration of a read loop.
pub trait ConsoleDevice {
    /// Opaque handle to the console's input side.
    type Handle: Copy;

    /// Obtain the input-side handle.
    ///
    /// # Errors
    ///
    /// Fails when the process has no attached console.
    fn acquire_input_handle(&self) -> io::Result<Self::Handle>;

    /// Read the current input mode, unknown bits included.
    ///
    /// # Errors
    ///
    /// Fails when the handle is invalid or the console is detached.
    fn input_mode(&self, handle: Self::Handle) -> io::Result<InputModeFlags>;

    /// Apply an input mode, replacing the previous one wholesale.
    ///
    /// # Errors
    ///
    /// Fails when the handle is invalid or the console rejects the mode.
    fn set_input_mode(
        &self,
        handle: Self::Handle,
        mode: InputModeFlags,
    ) -> io::Result<()>;

    /// Blocking batched read: waits until at least one record is pending,
    /// then returns up to `max_records` records in host delivery order.
    /// Never returns an empty sequence on success.
    ///
    /// This is the read loop's sole suspension point; see the crate docs for
    /// the cancellation latency this implies.
    ///
    /// # Errors
    ///
    /// Fails when the handle is invalid or the console is detached.
    fn read_records(
        &self,
        handle: Self::Handle,
        max_records: usize,
    ) -> io::Result<Vec<RawInputRecord>>;
}
