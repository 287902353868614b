/// Session lifecycle notifications broadcast by [`crate::SessionStore`].
///
/// `Invalidated` is emitted by the HTTP response middleware after a 401/403
/// teardown; `LoggedOut` by an explicit logout. Subscribers (the app shell)
/// react by returning to the login view — the store itself never navigates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected the session; the store has already been cleared.
    Invalidated {
        /// HTTP status that triggered the teardown (401 or 403).
        status: u16,
    },
    /// The user logged out; the store has already been cleared.
    LoggedOut,
}
