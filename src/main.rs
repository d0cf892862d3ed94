// SPDX-License-Identifier: MPL-2.0
use toast_shelf::app::{self, Flags};

const HELP: &str = "\
Usage: toast_shelf [OPTIONS]

Options:
  --lang <LOCALE>        UI language (e.g. en-US, ru)
  --config-dir <PATH>    Directory holding settings.toml
  --header <TEXT>        Show a toast with this header on startup
  --body <TEXT>          Show a toast with this body on startup
  --color <#RRGGBB>      Background color for toasts
  --delay <MS>           Auto-hide delay of the startup toast
  --no-autohide          Keep the startup toast until it is closed
  -h, --help             Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        header: args.opt_value_from_str("--header")?,
        body: args.opt_value_from_str("--body")?,
        color: args.opt_value_from_str("--color")?,
        delay_ms: args.opt_value_from_str("--delay")?,
        no_autohide: args.contains("--no-autohide"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut help_args = pico_args::Arguments::from_env();
    if help_args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
