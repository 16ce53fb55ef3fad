mod point;
mod validity;

#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use validity::{DEFAULT_OVERLAP_TOLERANCE, clearance_violation, is_valid_position};
