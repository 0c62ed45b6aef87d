use crate::{
    cli::{actions::Action, dispatch, globals::GlobalArgs, telemetry},
    error::Result,
};

/// Start the CLI
///
/// # Errors
/// Will return an error on bad arguments, when help was requested, or if
/// logging can not be set up
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = dispatch::parse(std::env::args_os())?;

    let verbose = matches.get_one::<u8>("verbose").copied().unwrap_or(0);

    telemetry::init(Some(telemetry::verbosity(verbose)))?;

    let action = dispatch::handler(&matches)?;

    let global_args = dispatch::globals(&matches);

    Ok((action, global_args))
}
