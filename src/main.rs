// SPDX-License-Identifier: MPL-2.0
use iced_translator::app::{self, paths, Flags};
use iced_translator::logging;

const HELP: &str = "\
iced_translator

USAGE:
  iced_translator [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --server <URL>        Translation server base URL
  --config-dir <DIR>    Directory holding settings.toml
  -v, --verbose         Log at info level (RUST_LOG overrides)
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    logging::init(verbose);

    let lang = option(&mut args, "--lang");
    let server = option(&mut args, "--server");
    paths::init_cli_overrides(option(&mut args, "--config-dir"));

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!("ignoring unexpected arguments: {rest:?}");
    }

    app::run(Flags { lang, server })
}

/// Reads `--name <value>`, logging and ignoring malformed values.
fn option(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    args.opt_value_from_str(name).unwrap_or_else(|err| {
        tracing::warn!("invalid {name}: {err}");
        None
    })
}
