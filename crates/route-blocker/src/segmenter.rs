//! RouteSegmenter - Walks a route and emits one bounding box per resolved segment
//!
//! A segment starts at the last emitting waypoint (initially the first one)
//! and ends at the first later waypoint whose distance from the start reaches
//! the configured resolution. Whatever remains after the last emission is
//! dropped: a route tail shorter than the resolution produces no box.

use crate::bounds::compute_bounds;
use crate::geodesy::vertical_distance;
use crate::{BlockerError, Bounds, Result, Waypoint};

use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Segmentation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Minimum distance in meters a segment must cover before it is emitted.
    /// Values `<= 0` close a segment at every waypoint after the first.
    pub resolution_meters: f64,
    /// Horizontal padding in meters applied to both longitude sides of every box.
    pub padding_meters: f64,
}

impl Config {
    /// Create a configuration without checking the values
    ///
    /// Non-finite values are accepted and propagate as NaN through the output.
    pub const fn new(resolution_meters: f64, padding_meters: f64) -> Self {
        Self {
            resolution_meters,
            padding_meters,
        }
    }

    /// Create a configuration, rejecting non-finite values
    pub fn validated(resolution_meters: f64, padding_meters: f64) -> Result<Self> {
        if !resolution_meters.is_finite() {
            return Err(BlockerError::InvalidConfig(format!(
                "resolution must be finite, got {resolution_meters}"
            )));
        }
        if !padding_meters.is_finite() {
            return Err(BlockerError::InvalidConfig(format!(
                "padding must be finite, got {padding_meters}"
            )));
        }
        Ok(Self::new(resolution_meters, padding_meters))
    }

    fn is_finite(&self) -> bool {
        self.resolution_meters.is_finite() && self.padding_meters.is_finite()
    }
}

/// Splits routes into padded bounding boxes
#[derive(Debug, Clone)]
pub struct RouteSegmenter {
    config: Config,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl RouteSegmenter {
    /// Create a segmenter with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this segmenter was built with
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compute the boxes covering `waypoints`, in route order
    ///
    /// # Returns
    /// One [`Bounds`] per emitted segment, or [`BlockerError::EmptyRoute`] if
    /// `waypoints` is empty. A single waypoint yields no boxes.
    pub fn segment(&self, waypoints: &[Waypoint]) -> Result<Vec<Bounds>> {
        #[cfg(feature = "profiling")]
        profiling::scope!("segmenter::segment");

        let Some(first) = waypoints.first() else {
            return Err(BlockerError::EmptyRoute);
        };

        if !self.config.is_finite() || waypoints.iter().any(|w| !w.is_finite()) {
            tracing::warn!(
                "Non-finite input in route of {} waypoints (resolution {}, padding {}); output may contain NaN",
                waypoints.len(),
                self.config.resolution_meters,
                self.config.padding_meters
            );
        }

        let mut start = first;
        let mut start_index = 0;
        let mut bounds = Vec::new();

        // The first waypoint is the initial segment start and never closes a
        // segment on its own, even for non-positive resolutions.
        for (index, waypoint) in waypoints.iter().enumerate().skip(1) {
            let distance = vertical_distance(start, waypoint);
            if distance >= self.config.resolution_meters {
                tracing::trace!(
                    start_index,
                    end_index = index,
                    distance,
                    "Emitting route blocker"
                );
                bounds.push(compute_bounds(start, waypoint, self.config.padding_meters));
                start = waypoint;
                start_index = index;
            }
        }

        tracing::debug!(
            waypoints = waypoints.len(),
            resolution = self.config.resolution_meters,
            padding = self.config.padding_meters,
            emitted = bounds.len(),
            "Segmented route"
        );

        Ok(bounds)
    }

    /// Segment several independent routes in parallel
    ///
    /// Output order matches input order. If any route fails, the whole batch
    /// fails with [`BlockerError::Route`] carrying that route's index.
    pub fn segment_many<R: AsRef<[Waypoint]> + Sync>(
        &self,
        routes: &[R],
    ) -> Result<Vec<Vec<Bounds>>> {
        #[cfg(feature = "profiling")]
        profiling::scope!("segmenter::segment_many");

        routes
            .par_iter()
            .enumerate()
            .map(|(index, route)| {
                self.segment(route.as_ref())
                    .map_err(|source| BlockerError::Route {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect()
    }
}

/// Create the route blocker for `waypoints`
///
/// # Arguments
/// * `waypoints` - Polyline of a navigational route
/// * `resolution` - Distance in meters each box must cover along the route
/// * `distance` - Horizontal padding in meters on each side of every box
///
/// # Returns
/// The boxes along the route, in order. Fails with
/// [`BlockerError::EmptyRoute`] when `waypoints` is empty.
pub fn create_route_blocker(
    waypoints: &[Waypoint],
    resolution: f64,
    distance: f64,
) -> Result<Vec<Bounds>> {
    RouteSegmenter::new(Config::new(resolution, distance)).segment(waypoints)
}
