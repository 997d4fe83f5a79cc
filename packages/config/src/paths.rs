use std::env;
use std::path::PathBuf;
use tracing::debug;

use crate::constants::{EIGHTPASS_HOME, EIGHTPASS_SETTINGS_PATH, HOME, USERPROFILE};

/// File name of the settings store inside the EightPass directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Get the path to the EightPass directory (~/.eightpass)
///
/// `EIGHTPASS_HOME` wins when set. Otherwise `HOME` (or `USERPROFILE` on
/// Windows) is consulted first so tests can redirect it, then the `dirs`
/// crate, then the current directory.
pub fn eightpass_dir() -> PathBuf {
    if let Some(dir) = non_empty_var(EIGHTPASS_HOME) {
        return PathBuf::from(dir);
    }

    let home = non_empty_var(HOME)
        .or_else(|| non_empty_var(USERPROFILE))
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    home.join(".eightpass")
}

/// Get the path to the settings store (~/.eightpass/settings.json)
pub fn settings_file() -> PathBuf {
    if let Some(path) = non_empty_var(EIGHTPASS_SETTINGS_PATH) {
        debug!("Using settings path from {}: {}", EIGHTPASS_SETTINGS_PATH, path);
        return PathBuf::from(path);
    }

    eightpass_dir().join(SETTINGS_FILE_NAME)
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(names: &[&'static str]) -> Self {
            let saved = names.iter().map(|n| (*n, env::var(n).ok())).collect();
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_eightpass_dir_uses_home() {
        let _guard = EnvGuard::capture(&[EIGHTPASS_HOME, HOME]);
        let temp_dir = TempDir::new().unwrap();

        env::remove_var(EIGHTPASS_HOME);
        env::set_var(HOME, temp_dir.path());

        assert_eq!(eightpass_dir(), temp_dir.path().join(".eightpass"));
    }

    #[test]
    #[serial]
    fn test_eightpass_home_overrides_home() {
        let _guard = EnvGuard::capture(&[EIGHTPASS_HOME, HOME]);
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("custom");

        env::set_var(HOME, temp_dir.path());
        env::set_var(EIGHTPASS_HOME, &custom);

        assert_eq!(eightpass_dir(), custom);
    }

    #[test]
    #[serial]
    fn test_settings_file_default_location() {
        let _guard = EnvGuard::capture(&[EIGHTPASS_HOME, EIGHTPASS_SETTINGS_PATH, HOME]);
        let temp_dir = TempDir::new().unwrap();

        env::remove_var(EIGHTPASS_HOME);
        env::remove_var(EIGHTPASS_SETTINGS_PATH);
        env::set_var(HOME, temp_dir.path());

        assert_eq!(
            settings_file(),
            temp_dir.path().join(".eightpass").join(SETTINGS_FILE_NAME)
        );
    }

    #[test]
    #[serial]
    fn test_settings_path_override() {
        let _guard = EnvGuard::capture(&[EIGHTPASS_SETTINGS_PATH]);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("elsewhere.json");

        env::set_var(EIGHTPASS_SETTINGS_PATH, &path);

        assert_eq!(settings_file(), path);
    }

    #[test]
    #[serial]
    fn test_blank_override_is_ignored() {
        let _guard = EnvGuard::capture(&[EIGHTPASS_SETTINGS_PATH, EIGHTPASS_HOME, HOME]);
        let temp_dir = TempDir::new().unwrap();

        env::set_var(EIGHTPASS_SETTINGS_PATH, "   ");
        env::remove_var(EIGHTPASS_HOME);
        env::set_var(HOME, temp_dir.path());

        assert_eq!(
            settings_file(),
            temp_dir.path().join(".eightpass").join(SETTINGS_FILE_NAME)
        );
    }
}
