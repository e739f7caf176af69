pub const DEFAULT_CONFIG_PATH: &str = "config/chat.toml";
pub const DEFAULT_ENV_PATH: &str = "config/.env";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_ANALYZE_PATH: &str = "/api/lab/analyze";
pub const ENDPOINT_ENV_VAR: &str = "VIVO_ENDPOINT";
pub const DEFAULT_GREETING: &str = "Hello! I'm your AI health assistant. I can help you understand your lab results, answer medical questions, and provide health information. How can I assist you today?";
