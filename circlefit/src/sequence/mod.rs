mod generator;
mod lcg;

#[doc(inline)]
pub use generator::{COMPATIBILITY_RATIO, SequenceGenerator, compatibility_groups};
#[doc(inline)]
pub use lcg::{Lcg, unit_sample};
