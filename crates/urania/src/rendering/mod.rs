//! Placement consumer: turns adjusted positions and the chart frame into
//! screen geometry.
//!
//! Nothing here feeds back into collision resolution.

pub mod glyphs;
pub mod markers;
pub mod placement;
pub mod primitives;
pub mod projection;
pub mod wheel;

pub use markers::Marker;
pub use placement::{place_bodies, RingGeometry};
pub use primitives::{Point, Shape};
pub use projection::{ascendant_offset, describe_ring_sector, polar_to_cartesian};
pub use wheel::{house_lines, zodiac_band, WheelGeometry};
