use std::path::PathBuf;

// Define the global arguments
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    /// Where timers without an absolute name live.
    pub directory: PathBuf,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }
}
