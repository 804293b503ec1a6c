//! Exact verifier for minimum convex cover solutions on polygonal domains
//! with holes.
//!
//! Every numeric value that enters a geometric predicate is an
//! [`number::ExactNumber`] (an arbitrary-precision rational) rather than a
//! float, so no check here can be fooled by rounding: a solution is either
//! exactly valid or it isn't. The pipeline in [`verifier`] ties the pieces
//! together; [`adapters`] handles the JSON/ZIP boundary with the outside
//! world.

pub mod adapters;
pub mod boolean;
pub mod error;
pub mod number;
pub mod orientation;
pub mod point;
pub mod polygon;
pub mod predicates;
pub mod verifier;

pub use boolean::Region;
pub use number::ExactNumber;
pub use orientation::{orientation, Orientation};
pub use point::Point;
pub use polygon::{Polygon, PolygonWithHoles};
pub use predicates::PointLocation;
pub use verifier::{verify, verify_instance, VerificationResult};
