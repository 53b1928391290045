// Fundamental configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 7080;

// Fixed response served to every request
pub const HELLO_WORLD: &str = "Hello World!";
pub const SERVER_NAME: &str = "Rust";
pub const TEXT_PLAIN: &str = "text/plain";

// Connection timeout constants
pub const READ_TIMEOUT_SECS: u64 = 120;
pub const IDLE_TIMEOUT_SECS: u64 = 120;

// Worker configuration constants
pub const FIXED_WORKER_COUNT: usize = 6;
