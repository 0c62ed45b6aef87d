use crate::{error::Result, timer::TimerStore};
use tracing::info;

/// Handle the start action
pub fn handle(store: &TimerStore, name: &str) -> Result<()> {
    let instant = store.start(name)?;

    info!(timer = name, instant, "timer started");

    Ok(())
}
