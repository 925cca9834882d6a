pub mod event;

/// Opaque bearer token handed out at login and resolved back to a
/// user id on every authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);
