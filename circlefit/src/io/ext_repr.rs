use crate::util::parse_number;
use serde::{Deserialize, Serialize};

/// A number as typed by a person: either a JSON number or a string such as `"12,5"` or `"250cm"`.
/// Strings are read with [`parse_number`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtNumber {
    Number(f64),
    Text(String),
}

impl ExtNumber {
    pub fn value(&self) -> Option<f64> {
        match self {
            ExtNumber::Number(n) => Some(*n),
            ExtNumber::Text(s) => parse_number(s),
        }
    }
}

impl From<f64> for ExtNumber {
    fn from(n: f64) -> Self {
        ExtNumber::Number(n)
    }
}

/// External representation of a [`Sheet`](crate::entities::Sheet)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheet {
    pub width: ExtNumber,
    pub height: ExtNumber,
    /// Minimum clearance between circles, none if not specified
    #[serde(default = "ExtSheet::no_gap")]
    pub gap: ExtNumber,
}

impl ExtSheet {
    fn no_gap() -> ExtNumber {
        ExtNumber::Number(0.0)
    }
}

/// External representation of a [`CircleSpec`](crate::entities::CircleSpec)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCircle {
    pub diameter: ExtNumber,
    /// Display color, any CSS color. Gray if not specified
    #[serde(default = "ExtCircle::default_color")]
    pub color: String,
}

impl ExtCircle {
    fn default_color() -> String {
        "gray".to_string()
    }
}

/// A complete problem instance: a sheet and the circles to put on it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub sheet: ExtSheet,
    pub circles: Vec<ExtCircle>,
}
