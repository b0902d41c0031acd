/// Marker for actions fed to a reducer: key presses, resolved swipes,
/// finished fetches.
pub trait Intent: Send + 'static {}
