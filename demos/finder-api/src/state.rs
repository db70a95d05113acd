use precon_finder::AsyncPreconFinder;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Dispatches blocking finder operations to a thread pool internally.
    pub finder: AsyncPreconFinder,
}
