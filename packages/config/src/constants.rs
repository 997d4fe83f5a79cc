// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across EightPass

// Storage Location
pub const EIGHTPASS_HOME: &str = "EIGHTPASS_HOME";
pub const EIGHTPASS_SETTINGS_PATH: &str = "EIGHTPASS_SETTINGS_PATH";

// System Environment Variables
pub const HOME: &str = "HOME";
pub const USERPROFILE: &str = "USERPROFILE"; // Windows
