// src/modules/router/whitelist.rs

// Paths allowed to bypass the version guard.
pub const WHITELISTED_PATHS: &[&str] = &["/"];
