/// External (serializable) representations of problem instances
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for creating SVG from results
pub mod svg;
