// Drives the compiled binary through a PTY to exercise the real event loop
// and crossterm input handling.
//
// Requires a TTY; expectrl allocates a pseudo terminal. Unix-only and ignored
// by default. Run manually via:
// `cargo test --test integration_min_session -- --ignored`.

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

#[test]
#[ignore]
fn minimal_session_completes_and_exits() -> Result<(), Box<dyn std::error::Error>> {
    let bin = assert_cmd::cargo::cargo_bin("typerush");
    let cmd = format!("{} -p hi.", bin.display());

    let mut p = spawn(cmd)?;
    std::thread::sleep(Duration::from_millis(200));

    // enter leaves the welcome screen, "hi." commits the only word
    p.send("\r")?;
    p.send("hi.")?;
    std::thread::sleep(Duration::from_millis(200));

    p.send("\x1b")?; // ESC
    p.expect(Eof)?;
    Ok(())
}
