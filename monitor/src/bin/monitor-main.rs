use std::process::exit;

use clap::{App, Arg};

use i8080_monitor::{run_repl, Monitor};

const VERSION: &str = "0.1";

fn main() {
    let matches = App::new("i8080-monitor")
        .version(VERSION)
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("raises trace verbosity (-v, -vv)"),
        )
        .arg(
            Arg::with_name("columns")
                .long("columns")
                .takes_value(true)
                .help("console wrap width (default 80)"),
        )
        .arg(
            Arg::with_name("FILE")
                .help("Intel-HEX image to load before the first prompt")
                .index(1),
        )
        .get_matches();

    let level = match matches.occurrences_of("v") {
        0 => "warn",
        1 => "info",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut monitor = Monitor::new();

    if let Some(columns) = matches.value_of("columns") {
        match columns.parse::<usize>() {
            Ok(n) => monitor.machine.columns = n,
            Err(_) => {
                eprintln!("invalid --columns value: {}", columns);
                exit(1);
            }
        }
    }

    if let Some(path) = matches.value_of("FILE") {
        if let Err(e) = monitor.machine.load_hex_file(path) {
            eprintln!("failed to load {}: {}", path, e);
            exit(1);
        }
    }

    if let Err(e) = run_repl(monitor) {
        eprintln!("monitor exited: {}", e);
        exit(1);
    }
}
