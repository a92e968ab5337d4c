//! Interactive console menu.

use std::io::{self, BufRead, Write};

use texmix_core::TransformId;

use crate::config::AppConfig;
use crate::runner;
use crate::source::{self, PathSource, Prompt};

/// Print the catalog, run the chosen transform, repeat.
///
/// An empty selection, `q`, or end of input leaves the loop. Failures are
/// reported and the menu continues.
pub fn run_menu<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    config: &AppConfig,
) -> io::Result<()> {
    loop {
        for id in TransformId::all() {
            writeln!(out, "{}: {}", id.index(), id.label())?;
        }
        write!(out, "Selection: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let selection = line.trim();
        if selection.is_empty() || selection.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let id = match selection.parse::<TransformId>() {
            Ok(id) => id,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        writeln!(out, "Doing {}", id.label())?;
        let result = if config.dialog {
            source::dialog().and_then(|mut dialog| runner::run(id, dialog.as_mut(), config))
        } else {
            let mut prompt = Prompt::new(&mut input, &mut out);
            runner::run(id, &mut prompt as &mut dyn PathSource, config)
        };

        match result {
            Ok(written) => {
                for path in written {
                    writeln!(out, "Saved {}", path.display())?;
                }
                writeln!(out, "Done")?;
            }
            Err(e) => {
                tracing::error!("{} failed: {e}", id.key());
                writeln!(out, "Failed: {e}")?;
            }
        }
    }
}
