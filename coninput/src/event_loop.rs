// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The cancellable, mode-scoped read loop.
//!
//! Single-threaded and cooperative: one blocking batched read per iteration,
//! cancellation observed only between reads, and the console mode change
//! scoped by a [`ModeGuard`] so every exit path — clean cancellation, read
//! failure, decode failure — flows through mode restoration before the error
//! (if any) is reported.

use crate::{AcquireHandleError, CancellationSignal, ConsoleDevice, ConsoleReader,
            InputEvent, InputModeFlags, ModeError, ModeGuard};
use miette::Context;

/// Records drained per blocking read when the caller has no preference.
/// Matches the interactive demo's batch size.
pub const DEFAULT_BATCH_SIZE: usize = 16;

/// Run the polling loop: apply `target_mode` for the loop's duration, read
/// batches of decoded events, and hand each batch to `sink` in arrival
/// order, until `cancellation` is signaled or a read fails.
///
/// The pre-change and restored modes are reported through `tracing`
/// (diagnostic only). Termination: the loop is finite only when cancellation
/// is signaled or a read fails; otherwise it runs indefinitely, one batch
/// per iteration.
///
/// Caller obligation: one loop per console handle at a time (the mode guard
/// must be the handle's only mode writer). A multi-threaded embedding must
/// serialize calls into this function externally.
///
/// # Errors
///
/// - [`AcquireHandleError`] / [`ModeError::Get`]: nothing was changed,
///   nothing to restore.
/// - [`ModeError::SetForward`]: the original mode was re-applied
///   best-effort.
/// - [`crate::ReadError`]: the loop stopped; the original mode was restored
///   first.
/// - [`ModeError::SetRestore`]: restoration itself failed. Returned as the
///   primary error when the loop was otherwise clean; attached as secondary
///   context when another error is already propagating, so the restore
///   failure never masks the error that caused the teardown.
pub fn run_event_loop<D: ConsoleDevice>(
    device: &D,
    target_mode: InputModeFlags,
    batch_size: usize,
    cancellation: &CancellationSignal,
    sink: &mut dyn FnMut(&[InputEvent]),
) -> miette::Result<()> {
    let handle = device
        .acquire_input_handle()
        .map_err(AcquireHandleError)?;

    let pre_change_mode = device.input_mode(handle).map_err(ModeError::Get)?;
    // % is Display, ? is Debug.
    tracing::info!(message = "Console input mode", mode = %pre_change_mode);

    let guard = ModeGuard::apply(device, handle, target_mode)?;
    tracing::info!(message = "Console input mode set", mode = %target_mode);

    let reader = ConsoleReader::new(device, handle);
    let loop_result = read_until_cancelled(&reader, batch_size, cancellation, sink);

    let restore_result = guard.release();
    match (loop_result, restore_result) {
        (Ok(()), Ok(snapshot)) => {
            tracing::info!(
                message = "Console input mode restored",
                mode = %snapshot.mode(),
            );
            Ok(())
        }
        (Ok(()), Err(restore_error)) => Err(restore_error.into()),
        (Err(primary), Ok(snapshot)) => {
            tracing::info!(
                message = "Console input mode restored",
                mode = %snapshot.mode(),
            );
            Err(primary)
        }
        (Err(primary), Err(restore_error)) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Console input mode was NOT restored",
                error = %restore_error,
            );
            Err(primary).wrap_err(format!(
                "console input mode was not restored: {restore_error}"
            ))
        }
    }
}

/// The loop body. Cancellation is checked strictly before each read: a
/// request that arrives while a read is blocked takes effect only after that
/// read returns, and a request set between two reads means zero further
/// reads.
fn read_until_cancelled<D: ConsoleDevice>(
    reader: &ConsoleReader<'_, D>,
    batch_size: usize,
    cancellation: &CancellationSignal,
    sink: &mut dyn FnMut(&[InputEvent]),
) -> miette::Result<()> {
    loop {
        if cancellation.signaled() {
            tracing::debug!(message = "Cancellation observed, leaving read loop");
            return Ok(());
        }

        let events = reader.read_batch(batch_size)?;
        tracing::debug!(message = "Read batch", event_count = events.len());
        sink(&events);
    }
}
