/// Directory holding timer files for relative (or absent) timer names.
pub const DEFAULT_DIRECTORY: &str = "/tmp";

/// Base name of the timer used when no name is given.
pub const DEFAULT_TIMER: &str = "timer$tart";

/// Appended to every timer path as `.elapsed`.
pub const TIMER_EXTENSION: &str = "elapsed";

/// Longest timer name accepted on the command line, in characters.
pub const MAX_TIMER_NAME: usize = 2048;

/// Environment variable overriding [`DEFAULT_DIRECTORY`].
pub const DIRECTORY_ENV: &str = "ELAPSED_DIR";
