// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end tests of the public API: a scripted console pushed through the
//! mode-scoped read loop, checking event delivery and the restoration
//! invariant from the outside.

use coninput::{CancellationSignal, InputEvent, InputModeFlags, MouseEventKind,
               run_event_loop,
               test_fixtures::{MockConsole, focus_record, key_record, menu_record,
                               mouse_record, resize_record}};
use pretty_assertions::assert_eq;

#[test]
fn test_all_five_event_kinds_flow_through_the_loop_in_order() {
    let original_mode = InputModeFlags::ENABLE_PROCESSED_INPUT
        | InputModeFlags::ENABLE_LINE_INPUT
        | InputModeFlags::ENABLE_ECHO_INPUT;
    let console = MockConsole::new(original_mode);
    console.enqueue_batch(vec![
        key_record(true, 1, 0x41, 0x1e, 0x0041, 0),
        mouse_record(10, 5, 0, 0, 0x0001),
        resize_record(120, 30),
    ]);
    console.enqueue_batch(vec![focus_record(true), menu_record(7)]);

    let cancellation = CancellationSignal::new();
    let mut seen: Vec<InputEvent> = vec![];
    let mut batch_sizes: Vec<usize> = vec![];
    {
        let observer = cancellation.clone();
        let result = run_event_loop(
            &console,
            InputModeFlags::ENABLE_MOUSE_INPUT
                | InputModeFlags::ENABLE_WINDOW_INPUT
                | InputModeFlags::ENABLE_PROCESSED_INPUT
                | InputModeFlags::ENABLE_EXTENDED_FLAGS,
            16,
            &cancellation,
            &mut |events| {
                batch_sizes.push(events.len());
                seen.extend_from_slice(events);
                if batch_sizes.len() == 2 {
                    observer.signal();
                }
            },
        );
        assert!(result.is_ok());
    }

    assert_eq!(batch_sizes, vec![3, 2]);
    assert!(matches!(seen[0], InputEvent::Key(key) if key.virtual_key_code == 0x41));
    assert!(matches!(
        seen[1],
        InputEvent::Mouse(mouse)
            if mouse.kind == MouseEventKind::Move && (mouse.x, mouse.y) == (10, 5)
    ));
    assert!(matches!(
        seen[2],
        InputEvent::Resize(resize) if (resize.width, resize.height) == (120, 30)
    ));
    assert!(matches!(seen[3], InputEvent::Focus(focus) if focus.gained));
    assert!(matches!(seen[4], InputEvent::Menu(menu) if menu.command_id == 7));

    // No reads after cancellation, and the pre-loop mode is back.
    assert_eq!(console.read_calls(), 2);
    assert_eq!(console.mode(), original_mode);
}

#[test]
fn test_restoration_preserves_unknown_mode_bits_verbatim() {
    // A console whose pre-loop mode carries bits this library has no name
    // for: they must survive the capture/restore round-trip untouched.
    let original_mode = InputModeFlags::from_bits_retain(
        InputModeFlags::ENABLE_PROCESSED_INPUT.bits() | 0x4000,
    );
    let console = MockConsole::new(original_mode);

    let cancellation = CancellationSignal::new();
    cancellation.signal();
    let result = run_event_loop(
        &console,
        InputModeFlags::ENABLE_MOUSE_INPUT,
        16,
        &cancellation,
        &mut |_events| {},
    );

    assert!(result.is_ok());
    assert_eq!(console.mode(), original_mode);
    assert_eq!(console.mode().bits() & 0x4000, 0x4000);
}
