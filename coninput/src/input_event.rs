// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decoded input events and the raw-record decoder.
//!
//! # Architecture: from raw record to typed event
//!
//! ```text
//! RawInputRecord (tag + 16 payload bytes)
//!     ├─→ KEY_EVENT                → KeyEvent    → InputEvent::Key
//!     ├─→ MOUSE_EVENT              → MouseEvent  → InputEvent::Mouse
//!     ├─→ WINDOW_BUFFER_SIZE_EVENT → ResizeEvent → InputEvent::Resize
//!     ├─→ MENU_EVENT               → MenuEvent   → InputEvent::Menu
//!     ├─→ FOCUS_EVENT              → FocusEvent  → InputEvent::Focus
//!     └─→ anything else            → DecodeError::UnknownTag
//! ```
//!
//! Decoding is an identity mapping of the per-kind fields at their fixed
//! payload offsets: no scaling, no clamping, signed/unsigned exactly as the
//! host layout specifies. Each kind reads only its own fields; the trailing
//! bytes the fixed-size union leaves unused for that kind are ignored.
//! Modifier and button masks pass through as opaque bit-retaining values
//! (see [`ControlKeyState`] and [`ButtonState`]).
//!
//! The [`Display`] impls are a diagnostic rendering (the demo prints every
//! event), not a parse format.
//!
//! [`Display`]: core::fmt::Display

use crate::{ButtonState, ControlKeyState, DecodeError,
            input_record::{RAW_PAYLOAD_SIZE, RawInputRecord, event_tag}};
use core::fmt;

/// A keyboard key was pressed or released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// `true` on press, `false` on release.
    pub key_down: bool,
    /// How many times this key stroke is repeated (held key).
    pub repeat_count: u16,
    /// The virtual-key code identifying the key, layout independent.
    pub virtual_key_code: u16,
    /// Modifier and lock-key state at the time of the event.
    pub control_key_state: ControlKeyState,
}

/// The mouse moved, a button changed, or a wheel turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    /// Cursor column, in screen-buffer character cells.
    pub x: i16,
    /// Cursor row, in screen-buffer character cells.
    pub y: i16,
    /// Which buttons are down. For wheel kinds the preserved high bits carry
    /// the wheel delta.
    pub button_state: ButtonState,
    pub kind: MouseEventKind,
}

/// What a mouse record reports, derived from its event-flags word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    /// A button was pressed or released; [`MouseEvent::button_state`] tells
    /// which buttons are down after the change.
    Click,
    /// The cursor changed position.
    Move,
    /// The second click of a double-click.
    DoubleClick,
    /// The vertical wheel turned.
    Wheel,
    /// The horizontal wheel turned.
    HorizontalWheel,
}

/// The screen buffer was resized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeEvent {
    /// New buffer width, in character cells.
    pub width: i16,
    /// New buffer height, in character cells.
    pub height: i16,
}

/// The console window gained or lost focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusEvent {
    pub gained: bool,
}

/// A command was chosen from the console menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEvent {
    pub command_id: u32,
}

/// One decoded input record. Closed set: every valid tag maps to exactly one
/// variant, and an unrecognized tag is a [`DecodeError`], never a silent
/// drop.
///
/// ```
/// use coninput::{InputEvent, test_fixtures::key_record};
///
/// let record = key_record(true, 1, 0x41, 0x1e, 0x0041, 0);
/// let event = InputEvent::try_from(record)?;
/// assert!(matches!(event, InputEvent::Key(key) if key.virtual_key_code == 0x41));
/// # Ok::<(), coninput::DecodeError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(ResizeEvent),
    Focus(FocusEvent),
    Menu(MenuEvent),
}

/// Bits of the mouse record's event-flags word.
pub mod mouse_event_flag {
    pub const MOUSE_MOVED: u32 = 0x0001;
    pub const DOUBLE_CLICK: u32 = 0x0002;
    pub const MOUSE_WHEELED: u32 = 0x0004;
    pub const MOUSE_HWHEELED: u32 = 0x0008;
}

pub(crate) mod converters {
    use super::{ButtonState, ControlKeyState, DecodeError, FocusEvent, InputEvent,
                KeyEvent, MenuEvent, MouseEvent, MouseEventKind, RAW_PAYLOAD_SIZE,
                RawInputRecord, ResizeEvent, event_tag, mouse_event_flag};

    impl TryFrom<RawInputRecord> for InputEvent {
        type Error = DecodeError;

        /// Decode one raw record. Dispatches on the tag; each arm reads only
        /// the payload fields relevant to its kind.
        fn try_from(record: RawInputRecord) -> Result<Self, Self::Error> {
            let payload = &record.payload;
            match record.event_type {
                event_tag::KEY_EVENT => Ok(InputEvent::Key(decode_key(payload))),
                event_tag::MOUSE_EVENT => Ok(InputEvent::Mouse(decode_mouse(payload))),
                event_tag::WINDOW_BUFFER_SIZE_EVENT => {
                    Ok(InputEvent::Resize(decode_resize(payload)))
                }
                event_tag::MENU_EVENT => Ok(InputEvent::Menu(decode_menu(payload))),
                event_tag::FOCUS_EVENT => Ok(InputEvent::Focus(decode_focus(payload))),
                tag => Err(DecodeError::UnknownTag { tag }),
            }
        }
    }

    // Payload layout: key_down u32 @ 0, repeat_count u16 @ 4, virtual_key_code
    // u16 @ 6, virtual_scan_code u16 @ 8 (unused), unicode_char u16 @ 10
    // (unused), control_key_state u32 @ 12.
    fn decode_key(payload: &[u8; RAW_PAYLOAD_SIZE]) -> KeyEvent {
        KeyEvent {
            key_down: read_u32(payload, 0) != 0,
            repeat_count: read_u16(payload, 4),
            virtual_key_code: read_u16(payload, 6),
            control_key_state: ControlKeyState::from_bits_retain(read_u32(payload, 12)),
        }
    }

    // Payload layout: x i16 @ 0, y i16 @ 2, button_state u32 @ 4,
    // control_key_state u32 @ 8 (unused), event_flags u32 @ 12.
    fn decode_mouse(payload: &[u8; RAW_PAYLOAD_SIZE]) -> MouseEvent {
        MouseEvent {
            x: read_i16(payload, 0),
            y: read_i16(payload, 2),
            button_state: ButtonState::from_bits_retain(read_u32(payload, 4)),
            kind: mouse_kind(read_u32(payload, 12)),
        }
    }

    // Payload layout: width i16 @ 0, height i16 @ 2.
    fn decode_resize(payload: &[u8; RAW_PAYLOAD_SIZE]) -> ResizeEvent {
        ResizeEvent {
            width: read_i16(payload, 0),
            height: read_i16(payload, 2),
        }
    }

    // Payload layout: command_id u32 @ 0.
    fn decode_menu(payload: &[u8; RAW_PAYLOAD_SIZE]) -> MenuEvent {
        MenuEvent {
            command_id: read_u32(payload, 0),
        }
    }

    // Payload layout: set_focus u32 @ 0.
    fn decode_focus(payload: &[u8; RAW_PAYLOAD_SIZE]) -> FocusEvent {
        FocusEvent {
            gained: read_u32(payload, 0) != 0,
        }
    }

    fn mouse_kind(event_flags: u32) -> MouseEventKind {
        if event_flags & mouse_event_flag::MOUSE_MOVED != 0 {
            MouseEventKind::Move
        } else if event_flags & mouse_event_flag::DOUBLE_CLICK != 0 {
            MouseEventKind::DoubleClick
        } else if event_flags & mouse_event_flag::MOUSE_WHEELED != 0 {
            MouseEventKind::Wheel
        } else if event_flags & mouse_event_flag::MOUSE_HWHEELED != 0 {
            MouseEventKind::HorizontalWheel
        } else {
            MouseEventKind::Click
        }
    }

    fn read_u16(payload: &[u8; RAW_PAYLOAD_SIZE], offset: usize) -> u16 {
        u16::from_ne_bytes([payload[offset], payload[offset + 1]])
    }

    fn read_i16(payload: &[u8; RAW_PAYLOAD_SIZE], offset: usize) -> i16 {
        i16::from_ne_bytes([payload[offset], payload[offset + 1]])
    }

    fn read_u32(payload: &[u8; RAW_PAYLOAD_SIZE], offset: usize) -> u32 {
        u32::from_ne_bytes([
            payload[offset],
            payload[offset + 1],
            payload[offset + 2],
            payload[offset + 3],
        ])
    }
}

mod display {
    use super::{FocusEvent, InputEvent, KeyEvent, MenuEvent, MouseEvent,
                MouseEventKind, ResizeEvent, fmt};

    impl fmt::Display for KeyEvent {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "KeyEvent: key_down={} repeat={} vk={:#06x} ctrl=[{}]",
                self.key_down, self.repeat_count, self.virtual_key_code,
                self.control_key_state
            )
        }
    }

    impl fmt::Display for MouseEventKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let name = match self {
                MouseEventKind::Click => "click",
                MouseEventKind::Move => "move",
                MouseEventKind::DoubleClick => "double-click",
                MouseEventKind::Wheel => "wheel",
                MouseEventKind::HorizontalWheel => "horizontal-wheel",
            };
            write!(f, "{name}")
        }
    }

    impl fmt::Display for MouseEvent {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "MouseEvent: kind={} pos=({}, {}) buttons=[{}]",
                self.kind, self.x, self.y, self.button_state
            )
        }
    }

    impl fmt::Display for ResizeEvent {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "ResizeEvent: width={} height={}", self.width, self.height)
        }
    }

    impl fmt::Display for FocusEvent {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "FocusEvent: gained={}", self.gained)
        }
    }

    impl fmt::Display for MenuEvent {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "MenuEvent: command_id={}", self.command_id)
        }
    }

    impl fmt::Display for InputEvent {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                InputEvent::Key(it) => it.fmt(f),
                InputEvent::Mouse(it) => it.fmt(f),
                InputEvent::Resize(it) => it.fmt(f),
                InputEvent::Focus(it) => it.fmt(f),
                InputEvent::Menu(it) => it.fmt(f),
            }
        }
    }
}

#[cfg(test)]
mod decode_tests {
    use super::*;
    use crate::test_fixtures::{focus_record, key_record, menu_record, mouse_record,
                               resize_record, unknown_record};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_record_decodes_with_identity_field_mapping() {
        let record = key_record(true, 1, 0x41, 0x1e, 0x0041, 0);

        let event = InputEvent::try_from(record).unwrap();

        assert_eq!(
            event,
            InputEvent::Key(KeyEvent {
                key_down: true,
                repeat_count: 1,
                virtual_key_code: 0x41,
                control_key_state: ControlKeyState::empty(),
            })
        );
    }

    #[test]
    fn test_key_record_passes_modifier_mask_through_verbatim() {
        let raw_mask = ControlKeyState::SHIFT_PRESSED.bits()
            | ControlKeyState::LEFT_CTRL_PRESSED.bits()
            | 0x8000;
        let record = key_record(false, 3, 0x10, 0x2a, 0, raw_mask);

        let event = InputEvent::try_from(record).unwrap();

        let InputEvent::Key(key) = event else {
            panic!("expected a key event, got {event:?}");
        };
        assert!(!key.key_down);
        assert_eq!(key.repeat_count, 3);
        assert_eq!(key.control_key_state.bits(), raw_mask);
    }

    #[test]
    fn test_mouse_record_decodes_position_buttons_and_kind() {
        let record = mouse_record(
            40,
            12,
            ButtonState::FROM_LEFT_1ST_BUTTON_PRESSED.bits(),
            0,
            0,
        );

        let event = InputEvent::try_from(record).unwrap();

        assert_eq!(
            event,
            InputEvent::Mouse(MouseEvent {
                x: 40,
                y: 12,
                button_state: ButtonState::FROM_LEFT_1ST_BUTTON_PRESSED,
                kind: MouseEventKind::Click,
            })
        );
    }

    #[test]
    fn test_mouse_coordinates_decode_as_signed_values() {
        // Negative coordinates are possible when the window scrolls; the
        // decoder must not reinterpret them as unsigned.
        let record = mouse_record(-3, -1, 0, 0, mouse_event_flag::MOUSE_MOVED);

        let event = InputEvent::try_from(record).unwrap();

        let InputEvent::Mouse(mouse) = event else {
            panic!("expected a mouse event, got {event:?}");
        };
        assert_eq!((mouse.x, mouse.y), (-3, -1));
        assert_eq!(mouse.kind, MouseEventKind::Move);
    }

    #[test]
    fn test_mouse_event_flags_map_to_each_kind() {
        let cases = [
            (0, MouseEventKind::Click),
            (mouse_event_flag::MOUSE_MOVED, MouseEventKind::Move),
            (mouse_event_flag::DOUBLE_CLICK, MouseEventKind::DoubleClick),
            (mouse_event_flag::MOUSE_WHEELED, MouseEventKind::Wheel),
            (mouse_event_flag::MOUSE_HWHEELED, MouseEventKind::HorizontalWheel),
        ];
        for (event_flags, expected_kind) in cases {
            let record = mouse_record(0, 0, 0, 0, event_flags);
            let event = InputEvent::try_from(record).unwrap();
            let InputEvent::Mouse(mouse) = event else {
                panic!("expected a mouse event, got {event:?}");
            };
            assert_eq!(mouse.kind, expected_kind, "event_flags={event_flags:#x}");
        }
    }

    #[test]
    fn test_resize_record_decodes_dimensions() {
        let record = resize_record(120, 30);

        let event = InputEvent::try_from(record).unwrap();

        assert_eq!(
            event,
            InputEvent::Resize(ResizeEvent {
                width: 120,
                height: 30,
            })
        );
    }

    #[test]
    fn test_focus_record_decodes_both_states() {
        assert_eq!(
            InputEvent::try_from(focus_record(true)).unwrap(),
            InputEvent::Focus(FocusEvent { gained: true })
        );
        assert_eq!(
            InputEvent::try_from(focus_record(false)).unwrap(),
            InputEvent::Focus(FocusEvent { gained: false })
        );
    }

    #[test]
    fn test_menu_record_decodes_command_id() {
        let record = menu_record(0xdead_beef);

        let event = InputEvent::try_from(record).unwrap();

        assert_eq!(
            event,
            InputEvent::Menu(MenuEvent {
                command_id: 0xdead_beef,
            })
        );
    }

    #[test]
    fn test_unknown_tag_is_a_decode_error_not_a_default_event() {
        let result = InputEvent::try_from(unknown_record(0x0020));

        assert_eq!(result, Err(DecodeError::UnknownTag { tag: 0x0020 }));
    }

    #[test]
    fn test_trailing_payload_bytes_do_not_affect_smaller_kinds() {
        // The union is 16 bytes; a resize record only uses the first 4.
        // Garbage in the tail must not leak into the decode.
        let mut record = resize_record(80, 25);
        for byte in &mut record.payload[4..] {
            *byte = 0xff;
        }

        let event = InputEvent::try_from(record).unwrap();

        assert_eq!(
            event,
            InputEvent::Resize(ResizeEvent {
                width: 80,
                height: 25,
            })
        );
    }

    #[test]
    fn test_event_display_is_human_readable() {
        let record = key_record(true, 1, 0x41, 0x1e, 0x0041, 0);
        let event = InputEvent::try_from(record).unwrap();

        assert_eq!(
            event.to_string(),
            "KeyEvent: key_down=true repeat=1 vk=0x0041 ctrl=[(none)]"
        );
    }
}
