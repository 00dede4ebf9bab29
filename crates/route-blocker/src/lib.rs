//! Route Blocker - Padded bounding boxes along a navigational route
//!
//! Given an ordered list of latitude/longitude waypoints, this library walks
//! the route and emits an axis-aligned box every time the distance travelled
//! since the previous box reaches a resolution threshold. Each box spans the
//! latitudes of its two end waypoints and is padded east and west by a fixed
//! distance in meters.
//!
//! # Architecture
//!
//! - **[`geodesy`]**: Ellipsoidal Earth radius, surface distance and displacement math
//! - **[`compute_bounds`]**: Padded box for a single pair of waypoints
//! - **[`RouteSegmenter`]**: Segmentation loop over a route, plus parallel batches
//! - **[`create_route_blocker`]**: One-call entry point
//!
//! # Example
//!
//! ```
//! use route_blocker::{Waypoint, create_route_blocker};
//!
//! let route = [
//!     Waypoint::new(0.0, 0.0),
//!     Waypoint::new(0.0, 0.001),
//!     Waypoint::new(0.0, 0.002),
//! ];
//! let boxes = create_route_blocker(&route, 50.0, 100.0)?;
//! assert_eq!(boxes.len(), 2);
//! # Ok::<(), route_blocker::BlockerError>(())
//! ```
//!
//! # Numeric policy
//!
//! All math is plain `f64`. NaN or infinite inputs are not rejected by the
//! segmentation functions; they propagate into the output. Use
//! [`Config::validated`] to reject them up front.

mod bounds;
pub mod geodesy;
mod segmenter;
mod types;

// Public API exports
pub use bounds::compute_bounds;
pub use segmenter::{Config, RouteSegmenter, create_route_blocker};
pub use types::{Bounds, Waypoint};

/// Error types for route segmentation
#[derive(Debug, thiserror::Error)]
pub enum BlockerError {
    #[error("Empty route: at least one waypoint is required")]
    EmptyRoute,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Route {index} failed: {source}")]
    Route {
        index: usize,
        source: Box<BlockerError>,
    },
}

pub type Result<T> = std::result::Result<T, BlockerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify that all public types are accessible
        let _: fn(Config) -> RouteSegmenter = RouteSegmenter::new;
        let _: fn(&[Waypoint], f64, f64) -> Result<Vec<Bounds>> = create_route_blocker;
        let _: fn(&Waypoint, &Waypoint, f64) -> Bounds = compute_bounds;
        let _: fn(&Waypoint, &Waypoint) -> f64 = geodesy::vertical_distance;
    }

    #[test]
    fn test_error_messages() {
        let err = BlockerError::Route {
            index: 3,
            source: Box::new(BlockerError::EmptyRoute),
        };
        assert_eq!(
            err.to_string(),
            "Route 3 failed: Empty route: at least one waypoint is required"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
