#![forbid(unsafe_code)]

//! bxui binary entry point.

use bxui_cli::cli;
use bxui_cli::run;
use tracing_subscriber::EnvFilter;

fn init_logging(filter: Option<&str>, json: bool) {
    let Some(filter) = filter else {
        return;
    };
    if json {
        if !bxui::core::logging::init_json_subscriber(filter) {
            eprintln!("Invalid log filter {filter:?}");
        }
        return;
    }
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {filter:?}: {e}");
        EnvFilter::new("warn")
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let opts = cli::Opts::parse();
    init_logging(opts.log_directive(), opts.log_json);

    match run::execute(&opts.command) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
