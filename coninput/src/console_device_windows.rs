// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Win32 implementation of the console primitives.
//!
//! Thin adapter over `GetStdHandle()` / `GetConsoleMode()` /
//! `SetConsoleMode()` / `ReadConsoleInputW()`. No interpretation happens
//! here: the mode travels as its raw bits, and each `INPUT_RECORD`'s event
//! union crosses the seam as its raw bytes for
//! [`InputEvent::try_from`](crate::InputEvent) to decode.

use crate::{ConsoleDevice, InputModeFlags,
            input_record::{RAW_PAYLOAD_SIZE, RawInputRecord}};
use std::io;
use windows::Win32::Foundation::HANDLE;
use windows::Win32::System::Console::{CONSOLE_MODE, GetConsoleMode, GetStdHandle,
                                      INPUT_RECORD, INPUT_RECORD_0,
                                      ReadConsoleInputW, STD_INPUT_HANDLE,
                                      SetConsoleMode};

/// The process's attached Win32 console.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsConsole;

impl WindowsConsole {
    #[must_use]
    pub fn new() -> Self { WindowsConsole }
}

impl ConsoleDevice for WindowsConsole {
    type Handle = HANDLE;

    fn acquire_input_handle(&self) -> io::Result<HANDLE> {
        unsafe { GetStdHandle(STD_INPUT_HANDLE) }.map_err(io::Error::other)
    }

    fn input_mode(&self, handle: HANDLE) -> io::Result<InputModeFlags> {
        let mut mode = CONSOLE_MODE(0);
        unsafe { GetConsoleMode(handle, &mut mode) }.map_err(io::Error::other)?;
        Ok(InputModeFlags::from_bits_retain(mode.0))
    }

    fn set_input_mode(&self, handle: HANDLE, mode: InputModeFlags) -> io::Result<()> {
        unsafe { SetConsoleMode(handle, CONSOLE_MODE(mode.bits())) }
            .map_err(io::Error::other)
    }

    fn read_records(
        &self,
        handle: HANDLE,
        max_records: usize,
    ) -> io::Result<Vec<RawInputRecord>> {
        debug_assert!(max_records >= 1, "read_records needs room for one record");

        // SAFETY: INPUT_RECORD is POD; all-zeroes is a valid value.
        let mut buffer: Vec<INPUT_RECORD> =
            vec![unsafe { core::mem::zeroed() }; max_records];
        let mut records_read: u32 = 0;
        unsafe { ReadConsoleInputW(handle, &mut buffer, &mut records_read) }
            .map_err(io::Error::other)?;

        Ok(buffer[..records_read as usize]
            .iter()
            .map(|record| RawInputRecord {
                event_type: record.EventType,
                // SAFETY: the event union is exactly RAW_PAYLOAD_SIZE bytes;
                // carrying it as raw bytes is the seam's contract.
                payload: unsafe {
                    core::mem::transmute::<INPUT_RECORD_0, [u8; RAW_PAYLOAD_SIZE]>(
                        record.Event,
                    )
                },
            })
            .collect())
    }
}
