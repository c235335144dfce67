// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named bitmasks carried inside decoded events.
//!
//! Key and mouse records carry opaque `u32` masks (modifier state, button
//! state). The decoder passes them through untouched; these wrappers give
//! them the same bit-retaining, name-rendering treatment as
//! [`InputModeFlags`](crate::InputModeFlags) so diagnostics can name the set
//! bits without the core ever interpreting them.

use crate::input_mode::impl_mask_describe;
use bitflags::bitflags;

bitflags! {
    /// Modifier and lock-key state attached to a key record.
    ///
    /// Passed through from the record verbatim; unknown bits are preserved.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlKeyState: u32 {
        const RIGHT_ALT_PRESSED  = 0x0001;
        const LEFT_ALT_PRESSED   = 0x0002;
        const RIGHT_CTRL_PRESSED = 0x0004;
        const LEFT_CTRL_PRESSED  = 0x0008;
        const SHIFT_PRESSED      = 0x0010;
        const NUMLOCK_ON         = 0x0020;
        const SCROLLLOCK_ON      = 0x0040;
        const CAPSLOCK_ON        = 0x0080;
        /// The key is an extended key (arrow, function, navigation cluster).
        const ENHANCED_KEY       = 0x0100;
    }
}

bitflags! {
    /// Mouse button state attached to a mouse record.
    ///
    /// For wheel kinds the high word of the raw value encodes the signed
    /// wheel delta; it surfaces here as preserved unknown bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ButtonState: u32 {
        const FROM_LEFT_1ST_BUTTON_PRESSED = 0x0001;
        const RIGHTMOST_BUTTON_PRESSED     = 0x0002;
        const FROM_LEFT_2ND_BUTTON_PRESSED = 0x0004;
        const FROM_LEFT_3RD_BUTTON_PRESSED = 0x0008;
        const FROM_LEFT_4TH_BUTTON_PRESSED = 0x0010;
    }
}

impl_mask_describe!(ControlKeyState);
impl_mask_describe!(ButtonState);
