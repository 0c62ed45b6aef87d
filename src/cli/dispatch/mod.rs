use crate::{
    cli::{
        actions::{Action, Command},
        commands,
        globals::GlobalArgs,
    },
    error::{Error, Result},
};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::{ffi::OsString, path::PathBuf};

/// Parse the command line, reporting failures as usage errors
pub fn parse<I, T>(args: I) -> Result<clap::ArgMatches>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    commands::new().try_get_matches_from(args).map_err(usage)
}

fn usage(err: clap::Error) -> Error {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
            let what = if arg.starts_with('-') {
                "option"
            } else {
                "argument"
            };

            return Error::Usage(format!(
                "Unexpected {what}: {arg} (Terminated, see -h for help)"
            ));
        }
    }

    Error::Usage(err.render().to_string().trim_end().to_string())
}

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    if matches.get_flag("help") {
        let help = commands::new().render_help().to_string();
        return Err(Error::Help(help.trim_end().to_string()));
    }

    let command = matches
        .get_one::<String>("action")
        .ok_or_else(|| Error::Usage("Argument(s) expected. See -h for help".to_string()))?;

    let name = matches.get_one::<String>("name").cloned().unwrap_or_default();

    let action = match command.parse::<Command>() {
        Ok(Command::Start) => Action::Start { name },
        Ok(Command::Show) => Action::Show {
            name,
            newline: !matches.get_flag("no-newline"),
            restart: matches.get_flag("restart"),
        },
        Ok(Command::Stop) => Action::Stop { name },
        Err(_) => {
            return Err(Error::Usage(format!(
                "Unknown command: {} (Terminated, see -h for help)",
                command.to_uppercase()
            )))
        }
    };

    Ok(action)
}

pub fn globals(matches: &clap::ArgMatches) -> GlobalArgs {
    // clap fills in DEFAULT_DIRECTORY when neither --dir nor ELAPSED_DIR is set
    let directory = matches
        .get_one::<PathBuf>("dir")
        .cloned()
        .unwrap_or_default();

    GlobalArgs::new(directory)
}
