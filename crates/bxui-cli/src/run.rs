#![forbid(unsafe_code)]

//! Command execution. Every command produces its full output as a string so
//! the binary only has to print it.

use bxui::{
    format_fixed, golden_matting_for_photo, preview_url, FrameDimensions, FrameParams, GridSpec,
    Result, Size,
};
use tracing::{debug, info_span};

use crate::cli::Command;

/// Run a command and return what it prints.
pub fn execute(command: &Command) -> Result<String> {
    let span = info_span!("execute");
    let _guard = span.enter();

    match command {
        Command::Tray { sx, sy, strict } => {
            let grid = if *strict {
                GridSpec::from_sections_strict(sx, sy)?
            } else {
                GridSpec::from_sections(sx, sy)
            };
            debug!(cols = grid.cols().len(), rows = grid.rows().len(), "tray grid");
            Ok(grid.render())
        }
        Command::Gridfinity(tray) => {
            debug!(span_x = tray.span_x(), span_y = tray.span_y(), "gridfinity spans");
            Ok(tray.render())
        }
        Command::Matting {
            x,
            y,
            overlap,
            frame,
        } => {
            let width = golden_matting_for_photo(Size::new(*x, *y), *overlap)?;
            let mut out = format!("Matting width: {} mm\n", format_fixed(width, 1));
            if *frame {
                let dims = FrameDimensions::new(FrameParams {
                    x: *x,
                    y: *y,
                    matting_overlap: *overlap,
                    ..FrameParams::default()
                })?;
                for line in dims.summary() {
                    out.push_str(&line);
                    out.push('\n');
                }
            }
            Ok(out)
        }
        Command::Preview { action, fields } => Ok(format!("{}\n", preview_url(action, fields))),
        Command::Help => Ok(format!("{}\n", crate::cli::HELP_TEXT)),
        Command::Version => Ok(format!("bxui {}\n", crate::cli::VERSION)),
    }
}
