use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation driven by the generation actions. Implementations
/// own whatever coordinate mapping and parameters they need; the actions
/// only see pixels in and values out.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
