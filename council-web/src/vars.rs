pub const APP_TITLE: &str = "Council";
pub const APP_SUBTITLE: &str = "Enter password to continue";

// backend mounts all auth endpoints below this path
pub const API_AUTH_PATH: &str = "/api/auth";

// single user-facing message for every login failure
pub const INVALID_PASSWORD: &str = "Invalid password";
