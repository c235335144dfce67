// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words coninput bitflags miette ctrlc

//! # coninput
//!
//! Structured access to a Windows console's raw input stream: keyboard,
//! mouse, window-resize, focus, and menu events as the host delivers them,
//! plus the mode plumbing required to observe them safely.
//!
//! # Architecture
//!
//! ```text
//! run_event_loop (cooperative, single-threaded)
//!     │  owns for the loop's duration:
//!     ├── ModeGuard ──── capture mode ─▶ apply target ─▶ restore on EVERY exit
//!     ├── CancellationSignal ─ polled strictly between reads
//!     │
//!     └── each iteration:
//!         ConsoleReader::read_batch
//!             └─▶ ConsoleDevice::read_records (blocking, batched)
//!                     └─▶ RawInputRecord ─ InputEvent::try_from ─▶ InputEvent
//!                                               │
//!                                               └─▶ caller's sink, in order
//! ```
//!
//! Three ideas carry the crate:
//!
//! 1. **Bit-level fidelity.** [`InputModeFlags`] (and the payload masks
//!    [`ControlKeyState`], [`ButtonState`]) preserve bits they do not know
//!    about — a silently cleared mode bit corrupts terminal behavior for the
//!    user's whole shell session.
//! 2. **Exact decode.** [`InputEvent::try_from`] maps each tagged raw record
//!    to exactly one variant, identity-mapping the per-kind fields at their
//!    fixed offsets; an unrecognized tag is a [`DecodeError`], never a
//!    silent drop, and a batch is decoded all-or-nothing.
//! 3. **Mode restoration on every exit path.** [`ModeGuard`] re-applies the
//!    captured mode exactly once — on clean cancellation, on read failure,
//!    on decode failure, on drop — and a failed restore is reported, never
//!    swallowed and never allowed to mask the error that caused the
//!    teardown.
//!
//! The OS primitives live behind the [`ConsoleDevice`] trait; the shipped
//! adapter is `WindowsConsole` (Windows only), and
//! [`test_fixtures::MockConsole`] scripts the seam everywhere else, so the
//! whole core runs under test on any platform.
//!
//! # Example
//!
//! ```
//! use coninput::{CancellationSignal, InputModeFlags, run_event_loop,
//!                test_fixtures::{MockConsole, key_record}};
//!
//! let console = MockConsole::new(InputModeFlags::ENABLE_PROCESSED_INPUT);
//! console.enqueue_batch(vec![key_record(true, 1, 0x41, 0x1e, 0x0041, 0)]);
//!
//! let cancellation = CancellationSignal::new();
//! let mut count = 0;
//! let result = run_event_loop(
//!     &console,
//!     InputModeFlags::ENABLE_MOUSE_INPUT | InputModeFlags::ENABLE_WINDOW_INPUT,
//!     16,
//!     &cancellation,
//!     &mut |events| {
//!         count += events.len();
//!         cancellation.signal();
//!     },
//! );
//!
//! assert!(result.is_ok());
//! assert_eq!(count, 1);
//! // The guard restored the pre-loop mode on the way out.
//! assert_eq!(console.mode(), InputModeFlags::ENABLE_PROCESSED_INPUT);
//! ```

// Attach.
pub mod cancellation;
pub mod console_device;
#[cfg(windows)]
pub mod console_device_windows;
pub mod error;
pub mod event_loop;
pub mod event_masks;
pub mod input_event;
pub mod input_mode;
pub mod input_record;
pub mod mode_guard;
pub mod record_reader;
pub mod test_fixtures;

// Re-export.
pub use cancellation::*;
pub use console_device::*;
#[cfg(windows)]
pub use console_device_windows::*;
pub use error::*;
pub use event_loop::*;
pub use event_masks::*;
pub use input_event::*;
pub use input_mode::*;
pub use input_record::*;
pub use mode_guard::*;
pub use record_reader::*;
