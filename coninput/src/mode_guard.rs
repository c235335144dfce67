// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scoped console-mode change with guaranteed restoration.
//!
//! A wrong input mode outlives the process: it corrupts terminal behavior
//! for the user's entire shell session. So the mode change is expressed as a
//! guard value whose restore runs exactly once on every exit path:
//!
//! ```text
//! Inactive ──apply()──▶ Active ──release() / Drop──▶ Restored (terminal)
//! ```
//!
//! Prefer [`ModeGuard::release`] on the normal path — it returns the restore
//! outcome, so a failure is observable. [`Drop`] is the backstop for early
//! returns, propagated errors, and cancellation; a restore failure there can
//! only be logged, never returned.
//!
//! Caller obligation (not enforced): at most one guard per console handle at
//! a time. The guard is the one component allowed to change the mode, and
//! two guards over the same handle would race each other's snapshots.

use crate::{ConsoleDevice, InputModeFlags, ModeError};

/// The input mode captured at the moment a guard was created. Immutable;
/// used solely to restore state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeSnapshot {
    mode: InputModeFlags,
}

impl ModeSnapshot {
    #[must_use]
    pub fn mode(&self) -> InputModeFlags { self.mode }
}

/// Captures the current mode, applies a target mode, and restores the
/// capture exactly once when the owning scope ends.
pub struct ModeGuard<'a, D: ConsoleDevice> {
    device: &'a D,
    handle: D::Handle,
    snapshot: ModeSnapshot,
    restored: bool,
}

impl<'a, D: ConsoleDevice> ModeGuard<'a, D> {
    /// Capture the current mode, then apply `target`.
    ///
    /// # Errors
    ///
    /// - [`ModeError::Get`] when the capture fails; no mode change was
    ///   applied and no restoration is owed.
    /// - [`ModeError::SetForward`] when applying `target` fails; since the
    ///   capture already succeeded, the captured mode is re-applied
    ///   best-effort before returning (a failure of that attempt is logged,
    ///   so it cannot mask this error).
    pub fn apply(
        device: &'a D,
        handle: D::Handle,
        target: InputModeFlags,
    ) -> Result<Self, ModeError> {
        let original = device.input_mode(handle).map_err(ModeError::Get)?;
        let snapshot = ModeSnapshot { mode: original };

        if let Err(source) = device.set_input_mode(handle, target) {
            if let Err(restore_error) = device.set_input_mode(handle, original) {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "Best-effort restore after failed mode apply also failed",
                    original_mode = %original,
                    ?restore_error,
                );
            }
            return Err(ModeError::SetForward {
                requested: target,
                source,
            });
        }

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Console input mode changed",
            from = %original,
            to = %target,
        );

        Ok(ModeGuard {
            device,
            handle,
            snapshot,
            restored: false,
        })
    }

    /// The mode captured when this guard was created.
    #[must_use]
    pub fn snapshot(&self) -> ModeSnapshot { self.snapshot }

    /// Restore the captured mode and consume the guard, making the restore
    /// outcome observable. After this returns, [`Drop`] is a no-op.
    ///
    /// # Errors
    ///
    /// [`ModeError::SetRestore`] when re-applying the captured mode fails;
    /// the console is left with the target mode still active.
    pub fn release(mut self) -> Result<ModeSnapshot, ModeError> {
        self.restore()?;
        Ok(self.snapshot)
    }

    /// The one place the `Active -> Restored` transition happens. The flag
    /// flips before the set call so the transition runs at most once even
    /// when the call fails and the guard is subsequently dropped.
    fn restore(&mut self) -> Result<(), ModeError> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        self.device
            .set_input_mode(self.handle, self.snapshot.mode)
            .map_err(|source| ModeError::SetRestore {
                original: self.snapshot.mode,
                source,
            })
    }
}

impl<D: ConsoleDevice> Drop for ModeGuard<'_, D> {
    fn drop(&mut self) {
        if let Err(error) = self.restore() {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Console input mode was NOT restored",
                %error,
            );
        }
    }
}

impl<D: ConsoleDevice> core::fmt::Debug for ModeGuard<'_, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModeGuard")
            .field("snapshot", &self.snapshot)
            .field("restored", &self.restored)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod mode_guard_tests {
    use super::*;
    use crate::test_fixtures::{MOCK_HANDLE, MockConsole};
    use pretty_assertions::assert_eq;
    use std::io;

    fn original_mode() -> InputModeFlags {
        InputModeFlags::ENABLE_PROCESSED_INPUT
            | InputModeFlags::ENABLE_LINE_INPUT
            | InputModeFlags::ENABLE_ECHO_INPUT
    }

    fn target_mode() -> InputModeFlags {
        InputModeFlags::ENABLE_MOUSE_INPUT | InputModeFlags::ENABLE_EXTENDED_FLAGS
    }

    #[test]
    fn test_release_restores_original_mode_exactly_once() {
        let console = MockConsole::new(original_mode());

        let guard = ModeGuard::apply(&console, MOCK_HANDLE, target_mode()).unwrap();
        assert_eq!(console.mode(), target_mode());

        let snapshot = guard.release().unwrap();

        assert_eq!(snapshot.mode(), original_mode());
        assert_eq!(console.mode(), original_mode());
        assert_eq!(console.set_mode_log(), vec![target_mode(), original_mode()]);
    }

    #[test]
    fn test_drop_restores_original_mode() {
        let console = MockConsole::new(original_mode());

        {
            let _guard =
                ModeGuard::apply(&console, MOCK_HANDLE, target_mode()).unwrap();
            assert_eq!(console.mode(), target_mode());
        }

        assert_eq!(console.mode(), original_mode());
    }

    #[test]
    fn test_failed_capture_changes_nothing_and_owes_nothing() {
        let console = MockConsole::new(original_mode());
        console.fail_get_mode();

        let result = ModeGuard::apply(&console, MOCK_HANDLE, target_mode());

        assert!(matches!(result, Err(ModeError::Get(_))));
        assert_eq!(console.set_mode_log(), vec![]);
        assert_eq!(console.mode(), original_mode());
    }

    #[test]
    fn test_failed_apply_still_attempts_restore() {
        let console = MockConsole::new(original_mode());
        console.plan_set_mode_failure(io::ErrorKind::InvalidInput);

        let result = ModeGuard::apply(&console, MOCK_HANDLE, target_mode());

        assert!(matches!(
            result,
            Err(ModeError::SetForward { requested, .. }) if requested == target_mode()
        ));
        // Forward attempt, then the best-effort restore attempt.
        assert_eq!(console.set_mode_log(), vec![target_mode(), original_mode()]);
        assert_eq!(console.mode(), original_mode());
    }

    #[test]
    fn test_failed_restore_is_surfaced_and_leaves_target_mode_active() {
        let console = MockConsole::new(original_mode());
        console.plan_set_mode_success();
        console.plan_set_mode_failure(io::ErrorKind::PermissionDenied);

        let guard = ModeGuard::apply(&console, MOCK_HANDLE, target_mode()).unwrap();
        let result = guard.release();

        assert!(matches!(
            result,
            Err(ModeError::SetRestore { original, .. }) if original == original_mode()
        ));
        // The known failure case of the restoration guarantee: the target
        // mode is still active and the caller was told so.
        assert_eq!(console.mode(), target_mode());
    }

    #[test]
    fn test_drop_after_failed_release_does_not_retry_restore() {
        let console = MockConsole::new(original_mode());
        console.plan_set_mode_success();
        console.plan_set_mode_failure(io::ErrorKind::PermissionDenied);

        let guard = ModeGuard::apply(&console, MOCK_HANDLE, target_mode()).unwrap();
        drop(guard.release());

        // One forward set, one failed restore; Drop must not add a third.
        assert_eq!(console.set_mode_log().len(), 2);
    }
}
