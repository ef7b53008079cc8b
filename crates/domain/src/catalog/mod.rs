//! Closed sets of valid query values.

mod body;
mod orbit_class;

pub use body::CloseApproachBody;
pub use orbit_class::OrbitClass;
