// ПРИЁМНИКИ
pub const STDOUT_NAME: &str = "<stdout>";
pub const STDERR_NAME: &str = "<stderr>";

//SETTINGS
pub const DEFAULT_SETTINGS_FILE: &str = "printlog";
pub const SETTINGS_ENV_PREFIX: &str = "PRINTLOG";
pub const DEFAULT_LOG_FILE: &str = "file.txt";
pub const DEFAULT_LOG_LEVEL: &str = "info";
