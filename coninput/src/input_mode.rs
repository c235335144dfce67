// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Typed bitmask over the console input-mode flags.
//!
//! The console input buffer is configured through a single `u32` bitmask
//! (`GetConsoleMode()` / `SetConsoleMode()`). [`InputModeFlags`] wraps that
//! raw value so modes can be combined, tested, and rendered without losing
//! bit-level fidelity: bits that match no known flag are preserved verbatim
//! on round-trip, since the host may assign meaning to them in a newer
//! console version.
//!
//! Rendering ([`InputModeFlags::describe`] and the [`Display`] impl) is for
//! diagnostics only. Callers must not parse the output.
//!
//! [`Display`]: core::fmt::Display

use bitflags::bitflags;

bitflags! {
    /// Set of named console input-mode flags plus any unrecognized bits.
    ///
    /// Construct with [`InputModeFlags::from_bits_retain`] when wrapping a
    /// value read from the console, or by `|`-ing named flags together when
    /// building a target mode:
    ///
    /// ```
    /// use coninput::InputModeFlags;
    ///
    /// let target = InputModeFlags::ENABLE_MOUSE_INPUT
    ///     | InputModeFlags::ENABLE_WINDOW_INPUT
    ///     | InputModeFlags::ENABLE_EXTENDED_FLAGS;
    /// assert!(target.contains(InputModeFlags::ENABLE_MOUSE_INPUT));
    /// ```
    ///
    /// Equality is bitwise equality of the underlying value, unknown bits
    /// included.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InputModeFlags: u32 {
        /// Control characters (Ctrl+C) are processed by the system.
        const ENABLE_PROCESSED_INPUT        = 0x0001;
        /// Reads return only when a carriage return is read.
        const ENABLE_LINE_INPUT             = 0x0002;
        /// Typed characters are echoed to the screen buffer.
        const ENABLE_ECHO_INPUT             = 0x0004;
        /// Buffer-size changes are reported as input records.
        const ENABLE_WINDOW_INPUT           = 0x0008;
        /// Mouse activity is reported as input records.
        const ENABLE_MOUSE_INPUT            = 0x0010;
        /// Typed characters insert rather than overwrite.
        const ENABLE_INSERT_MODE            = 0x0020;
        /// Mouse text selection is handled by the console host.
        const ENABLE_QUICK_EDIT_MODE        = 0x0040;
        /// Insert/quick-edit bits are honored by `SetConsoleMode()`.
        const ENABLE_EXTENDED_FLAGS         = 0x0080;
        /// Restore last window position on console start.
        const ENABLE_AUTO_POSITION          = 0x0100;
        /// User input is converted to VT100 sequences.
        const ENABLE_VIRTUAL_TERMINAL_INPUT = 0x0200;
    }
}

/// Implements the diagnostic rendering shared by every mask type in this
/// crate: [`describe()`] returning the set flag names in declaration order
/// (with a trailing hex token for unrecognized bits), and a [`Display`] that
/// joins them with `" | "`, rendering the empty set as `"(none)"`.
///
/// [`describe()`]: InputModeFlags::describe
/// [`Display`]: core::fmt::Display
macro_rules! impl_mask_describe {
    ($mask_type:ty) => {
        impl $mask_type {
            /// Names of the known flags that are set, in canonical
            /// (declaration) order, followed by one hex token if bits remain
            /// that match no known flag.
            ///
            /// Total and deterministic. Diagnostics only — not a parse
            /// format.
            #[must_use]
            pub fn describe(&self) -> Vec<String> {
                let mut parts: Vec<String> = self
                    .iter_names()
                    .map(|(name, _)| name.to_string())
                    .collect();
                let residual = self.bits() & !Self::all().bits();
                if residual != 0 {
                    parts.push(format!("{residual:#06x}"));
                }
                parts
            }
        }

        impl core::fmt::Display for $mask_type {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let parts = self.describe();
                if parts.is_empty() {
                    write!(f, "(none)")
                } else {
                    write!(f, "{}", parts.join(" | "))
                }
            }
        }
    };
}

// Make the macro available to the payload mask types in `event_masks`.
pub(crate) use impl_mask_describe;

impl_mask_describe!(InputModeFlags);
