mod circle_spec;
mod layout;
mod placed_circle;
mod results;
mod sheet;

#[doc(inline)]
pub use circle_spec::CircleSpec;
#[doc(inline)]
pub use circle_spec::validate_circles;
#[doc(inline)]
pub use circle_spec::MIN_DIAMETER;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use placed_circle::PlacedCircle;
#[doc(inline)]
pub use results::CircleTypeSummary;
#[doc(inline)]
pub use results::FitResult;
#[doc(inline)]
pub use results::MaxCirclesResult;
#[doc(inline)]
pub use sheet::Sheet;
