//! Colors for RGB pedestrian heads.
//!
//! Many pedestrian signals are a single common-cathode RGB LED with the
//! walk lamp on the green channel and the stop lamp on the red channel.

use palette::Srgb;

/// Pedestrian walk.
pub const WALK_COLOR: Srgb = Srgb::new(0.0, 1.0, 0.0);

/// Pedestrian stop.
pub const STOP_COLOR: Srgb = Srgb::new(1.0, 0.0, 0.0);
