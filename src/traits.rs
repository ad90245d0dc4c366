//! Core trait for pluggable travel-time sources.
//!
//! External routing services and test stubs both implement this; the
//! drive-time estimator tries each configured source in order.

/// Supplies an estimated driving duration between two coordinates.
pub trait DurationProvider {
    /// Driving duration in seconds between two `(lat, lng)` points.
    ///
    /// Returns `None` when this source cannot answer (no data, network
    /// failure, malformed response). A `None` is never an error; the
    /// caller falls through to the next source.
    fn duration_secs(&self, from: (f64, f64), to: (f64, f64)) -> Option<u32>;
}
