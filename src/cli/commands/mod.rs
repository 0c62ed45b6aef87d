use crate::cli::config::{DEFAULT_DIRECTORY, DIRECTORY_ENV, MAX_TIMER_NAME};
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Actions:
  start [NAME]  Set the start time, optionally for a named timer
  show [NAME]   Output the intermediate or final elapsed time
  stop [NAME]   Stop (remove) a previously started timer

Output format:
  [0 days ][0 hours ][0 minutes ]0.000 seconds
  Examples:  1 minute 48.043 seconds
             1 day 0 hours 17 minutes 54.941 seconds

See also:
  Documentation & code: https://github.com/codereserve/elapsed

Author:
  Jesse R Luckett, The Code Reserve, codereserve.com";

pub fn validator_timer_name() -> ValueParser {
    ValueParser::from(move |s: &str| -> std::result::Result<String, String> {
        if s.chars().count() > MAX_TIMER_NAME {
            return Err(format!(
                "Timer name longer than {MAX_TIMER_NAME} characters"
            ));
        }

        Ok(s.to_string())
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("elapsed")
        .about("Display elapsed time from within shell scripts ⏱")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_version_flag(true)
        .disable_help_flag(true)
        .color(ColorChoice::Auto)
        .styles(styles)
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("action")
                .help("start, show or stop (case-insensitive)")
                .value_name("ACTION"),
        )
        .arg(
            Arg::new("name")
                .help("Timer name, absolute paths are used as the timer location")
                .value_parser(validator_timer_name())
                .value_name("NAME"),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .short_alias('?')
                .long("help")
                .help("Print this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-newline")
                .short('n')
                .help("Do not output the trailing newline with show")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("restart")
                .short('r')
                .help("Restart the timer after show")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .help("Directory for timers not given as absolute paths")
                .env(DIRECTORY_ENV)
                .default_value(DEFAULT_DIRECTORY)
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("DIR"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase verbosity, -vv for debug")
                .action(ArgAction::Count),
        )
}
