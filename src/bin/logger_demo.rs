use log2::logger::*;
use log2::settings::*;

const SOURCE: &str = module_path!();

fn every_severity(log: &Log) {
    for severity in Severity::ALL {
        log.log(severity, SOURCE, &format!("{} test", severity.name()), None);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = parse_settings(cli.settings.as_deref())?.log;

    let (log, handle) = settings.build()?;
    log.info(SOURCE, &format!("{:?} backend, filter {}", settings.backend, settings.filter));
    if let Some(priority) = cli.priority.as_deref() {
        log.set_priority(priority);
    }

    log.set_short_colours(true);
    every_severity(&log);

    log.set_short_colours(false);
    every_severity(&log);

    "bound to the receiver".logok(&log, SOURCE);
    let err = std::io::Error::other("connection reset");
    "request failed".log_err(&log, Severity::Error, SOURCE, &err);

    if let (Some(handle), Some(filter)) = (&handle, cli.reload_filter.as_deref()) {
        handle.reload_filter(filter)?;
        log.info(SOURCE, &format!("filter replaced with {filter}"));
    }

    log.set_priority("WARNING");
    log.info(SOURCE, "hidden by the cutoff");
    log.warning(SOURCE, "still shown");

    Ok(())
}
