#![forbid(unsafe_code)]

//! Command-line argument parsing for the `bxui` binary.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `BXUI_*` prefix; explicit flags win.

use std::env;
use std::process;

use bxui::{Error, GridfinityTray, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
bxui: tray layout diagrams and golden-ratio matting

USAGE:
    bxui <COMMAND> [OPTIONS]

COMMANDS:
    tray         Render a layout diagram from section lists
    gridfinity   Render a layout diagram for a gridfinity tray
    matting      Solve the golden matting width for a photo
    preview      Build the preview URL for a generator form

TRAY OPTIONS:
    --sx=SECTIONS        Sections left to right, e.g. 50*3 or 250/5 or 30:25.5:70
    --sy=SECTIONS        Sections back to front (default: 50*3)
    --strict             Reject malformed section lists instead of truncating

GRIDFINITY OPTIONS:
    --nx=N               Grid cells in X (default: 3)
    --ny=N               Grid cells in Y (default: 2)
    --countx=N           Compartments in X, 0 = one per cell (default: 5)
    --county=N           Compartments in Y, 0 = one per cell (default: 3)
    --margin=MM          Total outer margin (default: 0.75)

MATTING OPTIONS:
    --x=MM               Photo width (default: 100)
    --y=MM               Photo height (default: 150)
    --overlap=MM         Mat overlap on each side of the photo (default: 2)
    --frame              Also print the layer sizes of the whole frame

PREVIEW OPTIONS:
    --action=URL         Form action of the generator page (required)
    KEY=VALUE ...        Form fields, in form order

GLOBAL OPTIONS:
    --log=FILTER         Tracing filter, e.g. debug or bxui_layout=trace
    --log-json           Write log events as JSON lines (filter defaults to info)
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    BXUI_LOG             Override --log
    BXUI_LOG_JSON        Set to 1 for --log-json
    BXUI_STRICT          Set to 1 to make tray parsing strict by default";

const DEFAULT_SECTIONS: &str = "50*3";

/// What to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Layout diagram from section lists.
    Tray { sx: String, sy: String, strict: bool },
    /// Layout diagram for a gridfinity tray.
    Gridfinity(GridfinityTray),
    /// Golden matting for a photo.
    Matting {
        x: f64,
        y: f64,
        overlap: f64,
        frame: bool,
    },
    /// Preview URL for a form.
    Preview {
        action: String,
        fields: Vec<(String, String)>,
    },
    /// Print usage.
    Help,
    /// Print the version.
    Version,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// The command to run.
    pub command: Command,
    /// Tracing filter directive, if logging is wanted.
    pub log_filter: Option<String>,
    /// Log as JSON lines instead of text.
    pub log_json: bool,
}

/// Filter used when JSON logging is asked for without `--log`.
pub const DEFAULT_JSON_FILTER: &str = "info";

impl Opts {
    /// The tracing filter to install, if any. JSON output without an
    /// explicit filter logs at [`DEFAULT_JSON_FILTER`].
    #[must_use]
    pub fn log_directive(&self) -> Option<&str> {
        match (self.log_filter.as_deref(), self.log_json) {
            (Some(filter), _) => Some(filter),
            (None, true) => Some(DEFAULT_JSON_FILTER),
            (None, false) => None,
        }
    }
}

fn usage(msg: impl Into<String>) -> Error {
    Error::Usage(msg.into())
}

fn number<T: std::str::FromStr>(flag: &str, val: &str) -> Result<T> {
    val.parse()
        .map_err(|_| usage(format!("Invalid --{flag} value: {val}")))
}

fn unknown(arg: &str) -> Error {
    usage(format!(
        "Unknown argument: {arg}\nRun with --help for usage information."
    ))
}

impl Opts {
    /// Parse the process arguments and environment. Prints help or version
    /// and exits when asked; exits with status 1 on a usage error.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(&args, |key| env::var(key).ok()) {
            Ok(opts) => match opts.command {
                Command::Help => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                Command::Version => {
                    println!("bxui {VERSION}");
                    process::exit(0);
                }
                _ => opts,
            },
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }

    /// Parse `args` (without the program name), reading environment
    /// variables through `var`.
    pub fn parse_from<S, F>(args: &[S], var: F) -> Result<Self>
    where
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut log_filter = var("BXUI_LOG");
        let mut log_json = var("BXUI_LOG_JSON").is_some_and(|v| v == "1");
        let strict_default = var("BXUI_STRICT").is_some_and(|v| v == "1");

        // Global flags may appear anywhere.
        let mut rest: Vec<&str> = Vec::with_capacity(args.len());
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => {
                    return Ok(Self {
                        command: Command::Help,
                        log_filter,
                        log_json,
                    });
                }
                "--version" | "-V" => {
                    return Ok(Self {
                        command: Command::Version,
                        log_filter,
                        log_json,
                    });
                }
                "--log-json" => log_json = true,
                other => {
                    if let Some(val) = other.strip_prefix("--log=") {
                        log_filter = Some(val.to_string());
                    } else {
                        rest.push(other);
                    }
                }
            }
        }

        let Some((&name, flags)) = rest.split_first() else {
            return Ok(Self {
                command: Command::Help,
                log_filter,
                log_json,
            });
        };
        let command = match name {
            "tray" => parse_tray(flags, strict_default)?,
            "gridfinity" => parse_gridfinity(flags)?,
            "matting" => parse_matting(flags)?,
            "preview" => parse_preview(flags)?,
            other => return Err(usage(format!("Unknown command: {other}"))),
        };
        Ok(Self {
            command,
            log_filter,
            log_json,
        })
    }
}

fn parse_tray(flags: &[&str], strict: bool) -> Result<Command> {
    let mut sx = DEFAULT_SECTIONS.to_string();
    let mut sy = DEFAULT_SECTIONS.to_string();
    let mut strict = strict;
    for &arg in flags {
        if let Some(val) = arg.strip_prefix("--sx=") {
            sx = val.to_string();
        } else if let Some(val) = arg.strip_prefix("--sy=") {
            sy = val.to_string();
        } else if arg == "--strict" {
            strict = true;
        } else {
            return Err(unknown(arg));
        }
    }
    Ok(Command::Tray { sx, sy, strict })
}

fn parse_gridfinity(flags: &[&str]) -> Result<Command> {
    let mut tray = GridfinityTray::default();
    for &arg in flags {
        if let Some(val) = arg.strip_prefix("--nx=") {
            tray.cells_x = number("nx", val)?;
        } else if let Some(val) = arg.strip_prefix("--ny=") {
            tray.cells_y = number("ny", val)?;
        } else if let Some(val) = arg.strip_prefix("--countx=") {
            tray.split_x = number("countx", val)?;
        } else if let Some(val) = arg.strip_prefix("--county=") {
            tray.split_y = number("county", val)?;
        } else if let Some(val) = arg.strip_prefix("--margin=") {
            tray.margin = number("margin", val)?;
        } else {
            return Err(unknown(arg));
        }
    }
    Ok(Command::Gridfinity(tray))
}

fn parse_matting(flags: &[&str]) -> Result<Command> {
    let (mut x, mut y, mut overlap, mut frame) = (100.0, 150.0, 2.0, false);
    for &arg in flags {
        if let Some(val) = arg.strip_prefix("--x=") {
            x = number("x", val)?;
        } else if let Some(val) = arg.strip_prefix("--y=") {
            y = number("y", val)?;
        } else if let Some(val) = arg.strip_prefix("--overlap=") {
            overlap = number("overlap", val)?;
        } else if arg == "--frame" {
            frame = true;
        } else {
            return Err(unknown(arg));
        }
    }
    Ok(Command::Matting {
        x,
        y,
        overlap,
        frame,
    })
}

fn parse_preview(flags: &[&str]) -> Result<Command> {
    let mut action = None;
    let mut fields = Vec::new();
    for &arg in flags {
        if let Some(val) = arg.strip_prefix("--action=") {
            action = Some(val.to_string());
        } else if arg.starts_with("--") {
            return Err(unknown(arg));
        } else if let Some((key, value)) = arg.split_once('=') {
            fields.push((key.to_string(), value.to_string()));
        } else {
            return Err(usage(format!("Expected KEY=VALUE, got: {arg}")));
        }
    }
    let action = action.ok_or_else(|| usage("preview needs --action=URL"))?;
    Ok(Command::Preview { action, fields })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Opts> {
        Opts::parse_from(args, |_| None)
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_lists_commands() {
        for command in ["tray", "gridfinity", "matting", "preview"] {
            assert!(HELP_TEXT.contains(command));
        }
        assert!(HELP_TEXT.contains("BXUI_STRICT"));
    }

    #[test]
    fn no_args_is_help() {
        assert_eq!(parse(&[]).unwrap().command, Command::Help);
        assert_eq!(parse(&["tray", "-h"]).unwrap().command, Command::Help);
        assert_eq!(parse(&["-V"]).unwrap().command, Command::Version);
    }

    #[test]
    fn tray_defaults_and_flags() {
        let opts = parse(&["tray", "--sx=10:20"]).unwrap();
        assert_eq!(
            opts.command,
            Command::Tray {
                sx: "10:20".into(),
                sy: "50*3".into(),
                strict: false
            }
        );
        let opts = parse(&["tray", "--strict"]).unwrap();
        assert!(matches!(opts.command, Command::Tray { strict: true, .. }));
    }

    #[test]
    fn env_overrides() {
        let env = |key: &str| match key {
            "BXUI_STRICT" => Some("1".to_string()),
            "BXUI_LOG" => Some("debug".to_string()),
            _ => None,
        };
        let opts = Opts::parse_from(&["tray"], env).unwrap();
        assert!(matches!(opts.command, Command::Tray { strict: true, .. }));
        assert_eq!(opts.log_filter.as_deref(), Some("debug"));

        // Flags win over the environment.
        let opts = Opts::parse_from(&["--log=trace", "tray", "--log-json"], env).unwrap();
        assert_eq!(opts.log_filter.as_deref(), Some("trace"));
        assert!(opts.log_json);
    }

    #[test]
    fn json_logging_defaults_its_filter() {
        let opts = parse(&["--log-json", "tray"]).unwrap();
        assert_eq!(opts.log_directive(), Some(DEFAULT_JSON_FILTER));

        let env = |key: &str| (key == "BXUI_LOG_JSON").then(|| "1".to_string());
        let opts = Opts::parse_from(&["tray"], env).unwrap();
        assert_eq!(opts.log_directive(), Some("info"));

        let opts = parse(&["--log-json", "--log=debug", "tray"]).unwrap();
        assert_eq!(opts.log_directive(), Some("debug"));

        assert_eq!(parse(&["tray"]).unwrap().log_directive(), None);
    }

    #[test]
    fn gridfinity_numbers() {
        let opts = parse(&["gridfinity", "--nx=4", "--countx=0", "--margin=1"]).unwrap();
        let Command::Gridfinity(tray) = opts.command else {
            panic!("wrong command");
        };
        assert_eq!(tray.cells_x, 4);
        assert_eq!(tray.split_x, 0);
        assert_eq!(tray.margin, 1.0);
        assert_eq!(tray.cells_y, 2);

        let err = parse(&["gridfinity", "--nx=two"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid --nx value: two");
    }

    #[test]
    fn preview_fields() {
        let opts = parse(&["preview", "--action=TrayLayout", "sx=50*3", "layout="]).unwrap();
        assert_eq!(
            opts.command,
            Command::Preview {
                action: "TrayLayout".into(),
                fields: vec![
                    ("sx".into(), "50*3".into()),
                    ("layout".into(), String::new())
                ],
            }
        );
        assert!(parse(&["preview", "sx=1"]).is_err());
        assert!(parse(&["preview", "--action=a", "sx"]).is_err());
    }

    #[test]
    fn unknown_things_are_errors() {
        assert!(parse(&["bake"]).is_err());
        assert!(parse(&["matting", "--z=1"]).is_err());
    }
}
