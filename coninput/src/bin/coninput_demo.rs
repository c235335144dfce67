// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive watcher for decoded console input events.
//!
//! Enables mouse, window, processed, and extended-flags input on the
//! attached console, then prints every batch of decoded events until Ctrl-C.
//! The pre-change mode is restored on the way out, whatever the exit path.

#[cfg(windows)]
use clap::Parser;

/// Watch decoded Windows console input events until interrupted.
#[cfg(windows)]
#[derive(Debug, Parser)]
#[command(name = "coninput-demo", version)]
struct CLIArg {
    /// Maximum number of records drained per blocking read.
    #[arg(long, default_value_t = coninput::DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Log mode transitions and batch sizes to stderr.
    #[arg(long, short = 'l')]
    enable_logging: bool,
}

#[cfg(windows)]
fn main() -> miette::Result<()> {
    use coninput::{CancellationSignal, InputEvent, InputModeFlags, WindowsConsole,
                   run_event_loop};

    let cli_arg = CLIArg::parse();

    if cli_arg.enable_logging {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let target_mode = InputModeFlags::ENABLE_MOUSE_INPUT
        | InputModeFlags::ENABLE_WINDOW_INPUT
        | InputModeFlags::ENABLE_PROCESSED_INPUT
        | InputModeFlags::ENABLE_EXTENDED_FLAGS;
    println!("Setting input mode to: {target_mode}");

    let console = WindowsConsole::new();
    let cancellation = CancellationSignal::subscribe_ctrl_c()?;

    let mut print_batch = |events: &[InputEvent]| {
        println!("Read {} events:", events.len());
        for event in events {
            println!("  {event}");
        }
    };

    run_event_loop(
        &console,
        target_mode,
        cli_arg.batch_size,
        &cancellation,
        &mut print_batch,
    )
}

#[cfg(not(windows))]
fn main() -> miette::Result<()> {
    miette::bail!(
        "coninput-demo drives the raw Win32 console input buffer \
         and only runs on Windows"
    );
}
