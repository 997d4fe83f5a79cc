// ABOUTME: Password change notification seam
// ABOUTME: Lets the settings facade tell its handler that the password was written

/// Read access to the current password, handed to notifiers by the facade.
///
/// The notifier never owns the facade; it only sees it through this trait
/// for the duration of a call.
pub trait PasswordSource {
    fn password(&self) -> Option<String>;
}

/// Reacts to the password setting being written.
///
/// Implementations must contain their own failures (log them) rather than
/// panic: the password setter always returns normally once the store write
/// has succeeded.
pub trait PasswordChangeNotifier: Send + Sync {
    /// Called once when the facade is constructed, before any caller can
    /// observe it.
    fn attach(&self, _source: &dyn PasswordSource) {}

    /// Called after every password write, including writes that were
    /// skipped because the value did not change.
    fn on_password_entered(&self, source: &dyn PasswordSource);
}
