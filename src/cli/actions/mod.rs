pub mod show;
pub mod start;
pub mod stop;

use crate::{cli::globals::GlobalArgs, error::Result, timer::TimerStore};
use std::io::Write;
use strum::EnumString;

/// The command token given as ACTION.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Command {
    Start,
    Show,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start {
        name: String,
    },
    Show {
        name: String,
        newline: bool,
        restart: bool,
    },
    Stop {
        name: String,
    },
}

/// Run `action` against the timers in `globals.directory`, writing any
/// output to `out`.
///
/// # Errors
/// Will return an error if the timer is missing, corrupt or unwritable
pub fn execute<W: Write>(action: Action, globals: &GlobalArgs, out: &mut W) -> Result<()> {
    let store = TimerStore::new(&globals.directory);

    match action {
        Action::Start { name } => start::handle(&store, &name),
        Action::Show {
            name,
            newline,
            restart,
        } => show::handle(&store, &name, newline, restart, out),
        Action::Stop { name } => stop::handle(&store, &name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::Builder;

    #[test]
    fn test_command_from_str() {
        assert_eq!("start".parse::<Command>().unwrap(), Command::Start);
        assert_eq!("SHOW".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("sToP".parse::<Command>().unwrap(), Command::Stop);
        assert!("restart".parse::<Command>().is_err());
    }

    #[test]
    fn test_execute_lifecycle() {
        let dir = Builder::new().prefix("elapsed").tempdir().unwrap();
        let globals = GlobalArgs::new(dir.path().to_path_buf());
        let mut out = Vec::new();

        let name = "build".to_string();

        execute(Action::Start { name: name.clone() }, &globals, &mut out).unwrap();
        assert!(dir.path().join("build.elapsed").exists());

        execute(
            Action::Show {
                name: name.clone(),
                newline: true,
                restart: false,
            },
            &globals,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with(" seconds\n"), "{text}");

        execute(Action::Stop { name: name.clone() }, &globals, &mut Vec::new()).unwrap();
        assert!(!dir.path().join("build.elapsed").exists());

        let err = execute(Action::Stop { name }, &globals, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
