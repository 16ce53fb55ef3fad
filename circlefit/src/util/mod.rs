/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod parse;
mod time;

#[doc(inline)]
pub use config::PackConfig;
#[doc(inline)]
pub use parse::{NumberInput, is_allowed_char, parse_number, validate_number_input};
#[doc(inline)]
pub use time::Deadline;
