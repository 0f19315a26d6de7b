use log2::logger::colour::{ANSI_RESET, has_escape};
use log2::logger::*;
use log2::settings::LogSettings;
use std::sync::Arc;
use std::thread;

fn capture() -> (Log, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (Log::with_sink(sink.clone()), sink)
}

#[test]
fn cutoff_hides_everything_below_it() {
    for cutoff in Severity::ALL {
        let (log, sink) = capture();
        log.config().set_cutoff(cutoff);

        for severity in Severity::ALL {
            sink.clear();
            log.log(severity, "Mod", "payload", None);
            let lines = sink.lines();
            if severity < cutoff {
                assert!(lines.is_empty(), "{severity} leaked past {cutoff}");
            } else {
                assert_eq!(lines.len(), 1, "{severity} missing at {cutoff}");
                assert!(lines[0].contains("Mod"));
                assert!(lines[0].contains("payload"));
            }
        }
    }
}

#[test]
fn good_at_info_cutoff() {
    let (log, sink) = capture();
    log.set_priority("INFO");
    sink.clear();

    log.good("Mod", "Good test");
    log.verbose("Mod", "x");

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.contains("GOOD") && line.contains("Mod") && line.contains("Good test"));
}

#[test]
fn long_colours_wrap_coloured_lines_only() {
    let (log, sink) = capture();
    log.set_short_colours(false);
    for severity in Severity::ALL {
        log.log(severity, "Mod", "line", None);
    }

    for (line, severity) in sink.lines().iter().zip(Severity::ALL) {
        match severity.colour() {
            Some(colour) => {
                assert!(line.starts_with(colour));
                assert!(line.ends_with(ANSI_RESET));
            }
            None => {
                assert!(!has_escape(line));
                assert!(line[..4].chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}

#[test]
fn sources_are_cached_across_threads() {
    let (log, sink) = capture();
    let log = Arc::new(log);

    thread::scope(|scope| {
        for i in 0..4 {
            let log = &log;
            scope.spawn(move || {
                for source in ["alpha", "beta", "gamma"] {
                    log.ok(source, &format!("from {i}"));
                }
            });
        }
    });

    assert_eq!(log.cached_sources(), 3);
    assert_eq!(sink.lines().len(), 12);
}

#[test]
fn settings_build_a_working_facade() {
    let settings = LogSettings {
        priority: "ALERT".into(),
        ..LogSettings::default()
    };
    let sink = Arc::new(MemorySink::new());
    let log = settings.build_with_sink(sink.clone());
    sink.clear();

    "quiet".logg(&log, "Mod");
    "loud".loga(&log, "Mod");

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("in Mod - loud"));
}
