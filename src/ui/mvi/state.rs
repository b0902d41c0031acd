/// Marker for screen state.
///
/// States are values: cloned to derive a new one, compared to detect changes,
/// and complete enough to render from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
