// SPDX-License-Identifier: MPL-2.0
use overlay_controls::app::{self, Flags};
use overlay_controls::config::paths;
use overlay_controls::error::Result;

const HELP: &str = "\
Overlay Controls - adaptive video player overlay demo

USAGE:
  overlay_controls [OPTIONS]

OPTIONS:
  --config-dir <PATH>    Directory containing settings.toml
                         (default: platform config dir, or $OVERLAY_CONTROLS_CONFIG_DIR)
  --hide-delay-ms <MS>   Idle delay before the controls fade out
  --autoplay             Start playback immediately
  -h, --help             Print this help

SHORTCUTS:
  Space                  Play / pause
  E                      Simulate a playback error
  C                      Simulate a cast error
";

fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        hide_delay_ms: args.opt_value_from_str("--hide-delay-ms")?,
        autoplay: args.contains("--autoplay"),
    };
    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
