// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Batched, blocking reads of decoded events.

use crate::{ConsoleDevice, InputEvent, ReadError};

/// Reads batches of pending input records from a console device and decodes
/// them. Blocking: each [`read_batch`](ConsoleReader::read_batch) call waits
/// until the host has at least one record pending.
pub struct ConsoleReader<'a, D: ConsoleDevice> {
    device: &'a D,
    handle: D::Handle,
}

impl<'a, D: ConsoleDevice> ConsoleReader<'a, D> {
    pub fn new(device: &'a D, handle: D::Handle) -> Self {
        ConsoleReader { device, handle }
    }

    /// Read up to `max_records` pending records in one call and decode them.
    ///
    /// Blocks until at least one record is available; never returns an empty
    /// batch on success. Records come back in exact host delivery order, and
    /// batches do not overlap — no record is delivered twice.
    ///
    /// The batch is all-or-nothing: if any record fails to decode, the whole
    /// batch is discarded and the decode error returned, since silently
    /// dropping events would corrupt the caller's view of input ordering.
    ///
    /// # Errors
    ///
    /// - [`ReadError::Io`] when the raw read primitive reports failure.
    /// - [`ReadError::Decode`] when a record in the batch has an
    ///   unrecognized tag.
    ///
    /// # Panics
    ///
    /// Debug builds assert `max_records >= 1`.
    pub fn read_batch(&self, max_records: usize) -> Result<Vec<InputEvent>, ReadError> {
        debug_assert!(max_records >= 1, "read_batch needs room for one record");

        let records = self
            .device
            .read_records(self.handle, max_records)
            .map_err(ReadError::Io)?;

        let mut events = Vec::with_capacity(records.len());
        for record in records {
            events.push(InputEvent::try_from(record)?);
        }
        Ok(events)
    }
}

impl<D: ConsoleDevice> core::fmt::Debug for ConsoleReader<'_, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConsoleReader").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod record_reader_tests {
    use super::*;
    use crate::{DecodeError, InputModeFlags,
                test_fixtures::{MOCK_HANDLE, MockConsole, focus_record, key_record,
                                resize_record, unknown_record}};
    use pretty_assertions::assert_eq;
    use std::io;

    fn reader_over(console: &MockConsole) -> ConsoleReader<'_, MockConsole> {
        ConsoleReader::new(console, MOCK_HANDLE)
    }

    #[test]
    fn test_batch_smaller_than_max_comes_back_whole_and_in_order() {
        let console = MockConsole::new(InputModeFlags::empty());
        console.enqueue_batch(vec![
            key_record(true, 1, 0x41, 0x1e, 0x0041, 0),
            resize_record(100, 40),
            focus_record(true),
        ]);

        let events = reader_over(&console).read_batch(16).unwrap();

        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], InputEvent::Key(_)));
        assert!(matches!(events[1], InputEvent::Resize(_)));
        assert!(matches!(events[2], InputEvent::Focus(_)));
    }

    #[test]
    fn test_batch_never_exceeds_max_records() {
        let console = MockConsole::new(InputModeFlags::empty());
        console.enqueue_batch(
            (0..5).map(|i| key_record(true, 1, 0x41 + i, 0, 0, 0)).collect(),
        );

        let reader = reader_over(&console);
        let first = reader.read_batch(3).unwrap();
        let second = reader.read_batch(3).unwrap();

        // The primitive truncates at max; the remainder arrives on the next
        // call, with no overlap and no loss.
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 2);

        let virtual_keys: Vec<u16> = first
            .iter()
            .chain(second.iter())
            .map(|event| match event {
                InputEvent::Key(key) => key.virtual_key_code,
                other => panic!("expected key events, got {other:?}"),
            })
            .collect();
        assert_eq!(virtual_keys, vec![0x41, 0x42, 0x43, 0x44, 0x45]);
    }

    #[test]
    fn test_one_bad_record_discards_the_whole_batch() {
        let console = MockConsole::new(InputModeFlags::empty());
        console.enqueue_batch(vec![
            key_record(true, 1, 0x41, 0, 0, 0),
            unknown_record(0x0040),
            focus_record(true),
        ]);

        let result = reader_over(&console).read_batch(16);

        assert!(matches!(
            result,
            Err(ReadError::Decode(DecodeError::UnknownTag { tag: 0x0040 }))
        ));
    }

    #[test]
    fn test_primitive_failure_surfaces_as_io_error() {
        let console = MockConsole::new(InputModeFlags::empty());
        console.enqueue_read_error(io::ErrorKind::BrokenPipe);

        let result = reader_over(&console).read_batch(16);

        assert!(matches!(result, Err(ReadError::Io(_))));
    }
}
