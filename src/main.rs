// SPDX-License-Identifier: MPL-2.0
use artic_gallery::app::{self, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        document: args.opt_value_from_str("--document")?,
        mount: args.opt_value_from_str("--mount")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }
    Ok(flags)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!(%err, "invalid command line");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "startup failed");
            ExitCode::FAILURE
        }
    }
}
