// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The raw input record as the console host delivers it.
//!
//! On the wire an input record is a `u16` event-type tag followed by a
//! fixed-size union of kind-specific payloads. [`RawInputRecord`] carries
//! that union across the collaborator seam as its raw bytes, in native byte
//! order, exactly as read from the host. Nothing here interprets the
//! payload; decoding into a typed event happens in
//! [`InputEvent::try_from`](crate::InputEvent).
//!
//! This layout is a version-pinned contract with the console host: the tag
//! values and per-kind field offsets are fixed, and a record whose tag is
//! not one of the five known kinds is a decode error, never silently
//! dropped.

/// Size in bytes of the event payload union. The union is as large as its
/// largest member (the key record); smaller kinds leave trailing bytes
/// unused.
pub const RAW_PAYLOAD_SIZE: usize = 16;

/// Event-type tag values, one per known record kind.
pub mod event_tag {
    pub const KEY_EVENT: u16 = 0x0001;
    pub const MOUSE_EVENT: u16 = 0x0002;
    pub const WINDOW_BUFFER_SIZE_EVENT: u16 = 0x0004;
    pub const MENU_EVENT: u16 = 0x0008;
    pub const FOCUS_EVENT: u16 = 0x0010;
}

/// One tagged unit of input data, before decoding.
///
/// Owned transiently by the decode call; the union's memory layout is never
/// retained past decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawInputRecord {
    /// Which kind of payload the bytes hold. See [`event_tag`].
    pub event_type: u16,
    /// The raw payload union, byte for byte.
    pub payload: [u8; RAW_PAYLOAD_SIZE],
}
