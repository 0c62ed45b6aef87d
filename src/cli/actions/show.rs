use crate::{
    error::{Error, Result},
    timer::{clock, Elapsed, TimerStore},
};
use std::io::Write;
use tracing::{info, instrument};

/// Handle the show action
///
/// Prints the time since the timer started and, with `restart`, starts it
/// again right after printing.
#[instrument(skip(store, out))]
pub fn handle<W: Write>(
    store: &TimerStore,
    name: &str,
    newline: bool,
    restart: bool,
    out: &mut W,
) -> Result<()> {
    let started = store.read(name)?;

    if started == 0 {
        return Err(Error::NoStartTime {
            name: name.to_string(),
        });
    }

    let ms = clock::now().saturating_sub(started);

    let elapsed = Elapsed::from_millis(ms);

    write!(out, "{elapsed}{}", if newline { "\n" } else { "" })
        .and_then(|()| out.flush())
        .map_err(|e| Error::Other(e.into()))?;

    info!(timer = name, ms, "elapsed");

    if restart {
        store.start(name)?;
    }

    Ok(())
}
