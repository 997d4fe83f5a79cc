// ABOUTME: Persisted setting key names
// ABOUTME: Must stay stable so existing stores keep working

pub const KEY_ANALYTICS: &str = "Analytics";
pub const KEY_HIDE_BIN: &str = "HideRecycleBin";
pub const KEY_INSTANCE_ID: &str = "InstanceId";
pub const KEY_PASSWORD: &str = "Password";
pub const KEY_TOAST_SHOWNS: &str = "ToastShowns";
pub const KEY_USE_INT_BROWSER: &str = "UseIntegratedBrowser";
pub const KEY_SEARCH_IN_PW: &str = "SearchInPW";
pub const KEY_SYNC_TOAST: &str = "SyncToast";
pub const KEY_AUTO_UPDATE: &str = "AutoUpdate";
pub const KEY_AUTO_UPDATE_WLAN: &str = "AutoUpdateWLAN";

/// Every key the facade reads or writes
pub const ALL_KEYS: [&str; 10] = [
    KEY_ANALYTICS,
    KEY_HIDE_BIN,
    KEY_INSTANCE_ID,
    KEY_PASSWORD,
    KEY_TOAST_SHOWNS,
    KEY_USE_INT_BROWSER,
    KEY_SEARCH_IN_PW,
    KEY_SYNC_TOAST,
    KEY_AUTO_UPDATE,
    KEY_AUTO_UPDATE_WLAN,
];
