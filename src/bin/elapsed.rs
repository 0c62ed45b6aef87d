use elapsed::cli::{actions, start};
use std::{
    io::{self, Write},
    process::ExitCode,
};
use tracing::debug;

// Main function
fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();

    // Start the program
    let result =
        start().and_then(|(action, globals)| actions::execute(action, &globals, &mut stdout));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{:?}", err);

            let _ = writeln!(stdout, "{err}");
            let _ = stdout.flush();

            ExitCode::from(err.exit_code())
        }
    }
}
