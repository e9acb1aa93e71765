mod spatial_math;

pub use spatial_math::{SearchRegion, SpatialMath};
