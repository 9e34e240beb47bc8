// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, paths, Flags};
use art_space::logging;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
ArtSpace - browse a small gallery of art pieces

USAGE:
  art_space [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr, ru)
  --gallery <path>     JSON gallery file to show instead of the bundled one
  --start <index>      Index of the first art piece to show (0-based)
  --data-dir <dir>     Directory for saved state (env: ART_SPACE_DATA_DIR)
  --config-dir <dir>   Directory for settings.toml (env: ART_SPACE_CONFIG_DIR)
  -h, --help           Print this help

Set RUST_LOG (e.g. RUST_LOG=debug) to change log verbosity.
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        gallery_path: args.opt_value_from_os_str("--gallery", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        start_index: args.opt_value_from_str("--start")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(arguments = ?rest, "ignoring unrecognized arguments");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    logging::init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let lang = flags.lang.clone();
    let bootstrap = match app::bootstrap(flags) {
        Ok(bootstrap) => bootstrap,
        Err(err) => {
            tracing::error!(error = %err, "cannot start without a valid gallery");
            eprintln!("{}", app::startup_failure_message(&err, lang));
            return ExitCode::FAILURE;
        }
    };

    match app::run(bootstrap) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
