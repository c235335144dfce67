// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte-exact raw record builders.
//!
//! These write the per-kind payload fields at the same fixed offsets the
//! decoder reads them from, in native byte order, so decode tests exercise
//! the real wire layout rather than a convenience constructor.

use crate::input_record::{RAW_PAYLOAD_SIZE, RawInputRecord, event_tag};

/// A key record: `key_down u32 @ 0`, `repeat_count u16 @ 4`,
/// `virtual_key_code u16 @ 6`, `virtual_scan_code u16 @ 8`,
/// `unicode_char u16 @ 10`, `control_key_state u32 @ 12`.
#[must_use]
pub fn key_record(
    key_down: bool,
    repeat_count: u16,
    virtual_key_code: u16,
    virtual_scan_code: u16,
    unicode_char: u16,
    control_key_state: u32,
) -> RawInputRecord {
    let mut payload = [0u8; RAW_PAYLOAD_SIZE];
    write_u32(&mut payload, 0, u32::from(key_down));
    write_u16(&mut payload, 4, repeat_count);
    write_u16(&mut payload, 6, virtual_key_code);
    write_u16(&mut payload, 8, virtual_scan_code);
    write_u16(&mut payload, 10, unicode_char);
    write_u32(&mut payload, 12, control_key_state);
    RawInputRecord {
        event_type: event_tag::KEY_EVENT,
        payload,
    }
}

/// A mouse record: `x i16 @ 0`, `y i16 @ 2`, `button_state u32 @ 4`,
/// `control_key_state u32 @ 8`, `event_flags u32 @ 12`.
#[must_use]
pub fn mouse_record(
    x: i16,
    y: i16,
    button_state: u32,
    control_key_state: u32,
    event_flags: u32,
) -> RawInputRecord {
    let mut payload = [0u8; RAW_PAYLOAD_SIZE];
    write_i16(&mut payload, 0, x);
    write_i16(&mut payload, 2, y);
    write_u32(&mut payload, 4, button_state);
    write_u32(&mut payload, 8, control_key_state);
    write_u32(&mut payload, 12, event_flags);
    RawInputRecord {
        event_type: event_tag::MOUSE_EVENT,
        payload,
    }
}

/// A buffer-resize record: `width i16 @ 0`, `height i16 @ 2`.
#[must_use]
pub fn resize_record(width: i16, height: i16) -> RawInputRecord {
    let mut payload = [0u8; RAW_PAYLOAD_SIZE];
    write_i16(&mut payload, 0, width);
    write_i16(&mut payload, 2, height);
    RawInputRecord {
        event_type: event_tag::WINDOW_BUFFER_SIZE_EVENT,
        payload,
    }
}

/// A menu record: `command_id u32 @ 0`.
#[must_use]
pub fn menu_record(command_id: u32) -> RawInputRecord {
    let mut payload = [0u8; RAW_PAYLOAD_SIZE];
    write_u32(&mut payload, 0, command_id);
    RawInputRecord {
        event_type: event_tag::MENU_EVENT,
        payload,
    }
}

/// A focus record: `set_focus u32 @ 0`.
#[must_use]
pub fn focus_record(gained: bool) -> RawInputRecord {
    let mut payload = [0u8; RAW_PAYLOAD_SIZE];
    write_u32(&mut payload, 0, u32::from(gained));
    RawInputRecord {
        event_type: event_tag::FOCUS_EVENT,
        payload,
    }
}

/// A record whose tag matches none of the known kinds.
#[must_use]
pub fn unknown_record(tag: u16) -> RawInputRecord {
    RawInputRecord {
        event_type: tag,
        payload: [0u8; RAW_PAYLOAD_SIZE],
    }
}

fn write_u16(payload: &mut [u8; RAW_PAYLOAD_SIZE], offset: usize, value: u16) {
    payload[offset..offset + 2].copy_from_slice(&value.to_ne_bytes());
}

fn write_i16(payload: &mut [u8; RAW_PAYLOAD_SIZE], offset: usize, value: i16) {
    payload[offset..offset + 2].copy_from_slice(&value.to_ne_bytes());
}

fn write_u32(payload: &mut [u8; RAW_PAYLOAD_SIZE], offset: usize, value: u32) {
    payload[offset..offset + 4].copy_from_slice(&value.to_ne_bytes());
}
