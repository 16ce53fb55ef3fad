//! `circlefit` packs circles of a given set of diameters onto a rectangular sheet,
//! keeping a minimum clearance between any two circles.
//!
//! Two entry points are provided:
//! * [`fit_check::try_fit_circles`] checks whether one instance of each requested circle fits.
//! * [`optimizer::calculate_max_circles_for_all`] packs as many circles as possible,
//!   favouring an even distribution over the requested circle types.

/// Entities modelling the packing problem and its results
pub mod entities;

/// Geometric primitives and the placement validity predicate
pub mod geometry;

/// Spatial index over placed circles
pub mod collision_detection;

/// Strategies searching for a valid position for a single circle
pub mod placement;

/// Greedy placement of a sequence of circles onto a sheet
pub mod packer;

/// Deterministic generation of the order in which circle types are offered to the packer
pub mod sequence;

/// Multi-attempt optimization over differently seeded sequences
pub mod optimizer;

/// Placing exactly one of each requested circle and suggesting smaller diameters on failure
pub mod fit_check;

/// Aggregation of placed circles into per-type summaries
pub mod grouping;

/// Importing external representations and rendering results
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
