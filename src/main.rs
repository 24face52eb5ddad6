// SPDX-License-Identifier: MPL-2.0
use iced_feedback::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_feedback - star rating and snackbar demo

USAGE:
  iced_feedback [OPTIONS]

OPTIONS:
  --max-value N      Number of rating items (1-100)
  --config-dir DIR   Directory holding settings.toml
  -h, --help         Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let max_value = match args.opt_value_from_str::<_, u32>("--max-value") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Invalid --max-value: {err}");
            None
        }
    };
    let config_dir = match args.opt_value_from_str::<_, PathBuf>("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Invalid --config-dir: {err}");
            None
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(Flags {
        max_value,
        config_dir,
    })
}
