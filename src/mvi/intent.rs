//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User commands (favorite toggles, search input, chip selection)
/// - System events (fetch starts, fetch completions)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
