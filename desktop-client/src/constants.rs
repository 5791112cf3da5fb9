pub const EVENT_LOG_SIZE: usize = 64;
pub const DEFAULT_BOT_MOVE_DELAY_MS: u64 = 400;
pub const MAX_BOT_MOVE_DELAY_MS: u64 = 5000;
pub const ERROR_DISPLAY_MS: u64 = 2000;
