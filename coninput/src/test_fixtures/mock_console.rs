// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ConsoleDevice, InputModeFlags, RawInputRecord};
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

/// The handle value [`MockConsole`] hands out.
pub const MOCK_HANDLE: usize = 0;

/// Scripted, in-memory stand-in for the console device.
///
/// Reads are served from queued batches in FIFO order, honoring the real
/// primitive's contract: at most `max_records` per call, never an empty
/// batch, leftover records carried to the next call. When the script runs
/// dry, reads fail with [`io::ErrorKind::UnexpectedEof`] (the real primitive
/// would block forever — a test must either script enough input or cancel).
///
/// Set-mode outcomes can be planned per call via
/// [`plan_set_mode_success`](MockConsole::plan_set_mode_success) /
/// [`plan_set_mode_failure`](MockConsole::plan_set_mode_failure); an empty
/// plan means every call succeeds. Every attempt is recorded in
/// [`set_mode_log`](MockConsole::set_mode_log), failed ones included.
#[derive(Debug)]
pub struct MockConsole {
    state: Mutex<MockConsoleState>,
}

#[derive(Debug)]
struct MockConsoleState {
    mode: InputModeFlags,
    pending_reads: VecDeque<MockRead>,
    set_mode_plan: VecDeque<SetModeOutcome>,
    set_mode_log: Vec<InputModeFlags>,
    read_calls: usize,
    fail_acquire: bool,
    fail_get_mode: bool,
}

#[derive(Debug)]
enum MockRead {
    Batch(Vec<RawInputRecord>),
    Error(io::ErrorKind),
}

#[derive(Debug)]
enum SetModeOutcome {
    Succeed,
    Fail(io::ErrorKind),
}

impl MockConsole {
    #[must_use]
    pub fn new(initial_mode: InputModeFlags) -> Self {
        MockConsole {
            state: Mutex::new(MockConsoleState {
                mode: initial_mode,
                pending_reads: VecDeque::new(),
                set_mode_plan: VecDeque::new(),
                set_mode_log: vec![],
                read_calls: 0,
                fail_acquire: false,
                fail_get_mode: false,
            }),
        }
    }

    /// Queue one batch of records for delivery. Must not be empty (the real
    /// primitive never delivers an empty batch).
    pub fn enqueue_batch(&self, records: Vec<RawInputRecord>) {
        debug_assert!(!records.is_empty(), "a delivered batch is never empty");
        self.lock().pending_reads.push_back(MockRead::Batch(records));
    }

    /// Queue a raw-read failure at this point of the script.
    pub fn enqueue_read_error(&self, kind: io::ErrorKind) {
        self.lock().pending_reads.push_back(MockRead::Error(kind));
    }

    /// Make every `acquire_input_handle` call fail.
    pub fn fail_acquire(&self) {
        self.lock().fail_acquire = true;
    }

    /// Make every `input_mode` call fail.
    pub fn fail_get_mode(&self) {
        self.lock().fail_get_mode = true;
    }

    /// Plan the next unplanned `set_input_mode` call to succeed.
    pub fn plan_set_mode_success(&self) {
        self.lock().set_mode_plan.push_back(SetModeOutcome::Succeed);
    }

    /// Plan the next unplanned `set_input_mode` call to fail.
    pub fn plan_set_mode_failure(&self, kind: io::ErrorKind) {
        self.lock().set_mode_plan.push_back(SetModeOutcome::Fail(kind));
    }

    /// The mode currently applied to the mock.
    #[must_use]
    pub fn mode(&self) -> InputModeFlags {
        self.lock().mode
    }

    /// Every mode passed to `set_input_mode`, in call order, failed attempts
    /// included.
    #[must_use]
    pub fn set_mode_log(&self) -> Vec<InputModeFlags> {
        self.lock().set_mode_log.clone()
    }

    /// How many times `read_records` was called.
    #[must_use]
    pub fn read_calls(&self) -> usize {
        self.lock().read_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockConsoleState> {
        self.state.lock().expect("mock console state lock poisoned")
    }
}

impl ConsoleDevice for MockConsole {
    type Handle = usize;

    fn acquire_input_handle(&self) -> io::Result<usize> {
        if self.lock().fail_acquire {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "mock console: no attached console",
            ));
        }
        Ok(MOCK_HANDLE)
    }

    fn input_mode(&self, _handle: usize) -> io::Result<InputModeFlags> {
        let state = self.lock();
        if state.fail_get_mode {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "mock console: get mode failure",
            ));
        }
        Ok(state.mode)
    }

    fn set_input_mode(&self, _handle: usize, mode: InputModeFlags) -> io::Result<()> {
        let mut state = self.lock();
        state.set_mode_log.push(mode);
        match state.set_mode_plan.pop_front() {
            Some(SetModeOutcome::Fail(kind)) => {
                Err(io::Error::new(kind, "mock console: set mode failure"))
            }
            Some(SetModeOutcome::Succeed) | None => {
                state.mode = mode;
                Ok(())
            }
        }
    }

    fn read_records(
        &self,
        _handle: usize,
        max_records: usize,
    ) -> io::Result<Vec<RawInputRecord>> {
        let mut state = self.lock();
        state.read_calls += 1;
        match state.pending_reads.pop_front() {
            Some(MockRead::Batch(mut records)) => {
                if records.len() > max_records {
                    // Deliver what fits; the remainder stays pending, like
                    // the real input buffer.
                    let remainder = records.split_off(max_records);
                    state.pending_reads.push_front(MockRead::Batch(remainder));
                }
                Ok(records)
            }
            Some(MockRead::Error(kind)) => {
                Err(io::Error::new(kind, "mock console: scripted read failure"))
            }
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "mock console: input script exhausted",
            )),
        }
    }
}
