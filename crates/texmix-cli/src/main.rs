//! texmix — console front end for the texture transforms.
//!
//! Without a transform argument it runs the interactive menu. With one, input
//! paths are consumed from the command line in catalog order.

mod args;
mod catalog_view;
mod config;
mod error;
mod image_loader;
mod logging;
mod menu;
mod runner;
mod source;

use std::process::ExitCode;

use clap::Parser;
use texmix_core::TransformId;

use crate::args::Args;
use crate::config::AppConfig;
use crate::error::CliError;
use crate::source::{ArgQueue, PathSource};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = AppConfig::default().with_args(&args);
    logging::init(&config.log_filter);
    if !config.dialog && std::env::var_os("TEXMIX_DIALOG").is_some() {
        tracing::warn!("TEXMIX_DIALOG ignored: built without the `dialog` feature");
    }

    match run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, config: &AppConfig) -> Result<(), CliError> {
    if args.list {
        if args.json {
            println!("{}", catalog_view::to_json()?);
        } else {
            catalog_view::write_text(std::io::stdout().lock())?;
        }
        return Ok(());
    }

    let Some(selection) = args.transform else {
        let stdin = std::io::stdin();
        menu::run_menu(stdin.lock(), std::io::stdout(), config)?;
        return Ok(());
    };

    let id: TransformId = selection.parse()?;
    if id == TransformId::SplitImageChannels && args.output.is_some() {
        tracing::warn!("--output is ignored by {}; use --output-dir", id.key());
    }

    let mut source: Box<dyn PathSource> = if config.dialog && args.inputs.is_empty() {
        source::dialog()?
    } else {
        let expected = id.inputs().len();
        if args.inputs.len() != expected {
            return Err(CliError::ArgumentCount {
                transform: id.key(),
                expected,
                found: args.inputs.len(),
            });
        }
        Box::new(ArgQueue::new(args.inputs, args.output))
    };

    let written = runner::run(id, source.as_mut(), config)?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
