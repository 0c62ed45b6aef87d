use crate::{error::Result, timer::TimerStore};
use tracing::info;

/// Handle the stop action
pub fn handle(store: &TimerStore, name: &str) -> Result<()> {
    store.stop(name)?;

    info!(timer = name, "timer stopped");

    Ok(())
}
