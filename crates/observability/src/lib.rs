//! Logging for the catalog service.

pub mod tracing;

/// Install the JSON subscriber for the service process. Later calls do nothing.
pub fn init() {
    tracing::init();
}
