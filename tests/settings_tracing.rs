//! The tracing backend installs the process-wide subscriber, so it lives in
//! its own test binary.

mod common;

use common::Captured;
use log2::logger::colour::{ANSI_GREEN, ANSI_RESET};
use log2::logger::*;
use log2::settings::{Backend, LogSettings};

#[test]
fn tracing_backend_from_settings_writes_lines() {
    let settings = LogSettings {
        priority: "INFO".into(),
        short_colours: false,
        backend: Backend::Tracing,
        filter: "trace".into(),
    };
    let out = Captured::default();
    let (log, handle) = settings.build_with_writer(out.clone()).unwrap();
    assert!(handle.is_some());
    assert_eq!(log.cutoff(), Severity::Info);

    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(&format!("|-INFO in {SELF_SOURCE} - Log priority cutoff set to 2")));

    out.clear();
    log.verbose("Mod", "hidden");
    log.ok("Mod", "long expected");
    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with(ANSI_GREEN));
    assert!(lines[0].ends_with(&format!("|-OK in Mod - long expected{ANSI_RESET}")));

    out.clear();
    log.set_short_colours(true);
    log.ok("Mod", "short now");
    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].starts_with(ANSI_GREEN));
    assert!(lines[0].ends_with(&format!("|-{ANSI_GREEN}OK{ANSI_RESET} in Mod - short now")));
}
