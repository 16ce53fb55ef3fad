use crate::entities::{CircleSpec, Sheet};
use crate::sequence::unit_sample;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::RngCore;

/// Two diameters are compatible if the larger is at most this many times the smaller
pub const COMPATIBILITY_RATIO: f64 = 1.5;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Decides the order in which circle types are offered to the packer.
///
/// Types are clustered into compatibility groups of similar diameters.
/// Every next element is drawn from the group whose least represented member is
/// least represented overall, so when an attempt stops early all groups
/// (and all types within a group) are covered as evenly as possible.
#[derive(Clone, Debug)]
pub struct SequenceGenerator {
    /// Distinct circle types, ascending diameter
    types: Vec<CircleSpec>,
    /// Indices into `types`
    groups: Vec<Vec<usize>>,
}

impl SequenceGenerator {
    pub fn new(specs: &[CircleSpec]) -> Self {
        let types = specs
            .iter()
            .unique_by(|s| OrderedFloat(s.diameter))
            .sorted_by_key(|s| OrderedFloat(s.diameter))
            .cloned()
            .collect_vec();
        let diameters = types.iter().map(|t| t.diameter).collect_vec();
        let groups = compatibility_groups(&diameters);
        Self { types, groups }
    }

    /// Distinct circle types, ascending diameter
    pub fn types(&self) -> &[CircleSpec] {
        &self.types
    }

    /// Compatibility groups, as diameters
    pub fn groups(&self) -> Vec<Vec<f64>> {
        self.groups
            .iter()
            .map(|g| g.iter().map(|&i| self.types[i].diameter).collect())
            .collect()
    }

    /// Generates a sequence of `target_len` circles.
    /// The same generator state always yields the same sequence.
    pub fn generate(&self, target_len: usize, rng: &mut impl RngCore) -> Vec<CircleSpec> {
        if self.types.is_empty() {
            return vec![];
        }
        let mut counts = vec![0usize; self.types.len()];
        let mut sequence = Vec::with_capacity(target_len);

        for _ in 0..target_len {
            let group_mins = self
                .groups
                .iter()
                .map(|g| g.iter().map(|&i| counts[i]).min().unwrap_or(usize::MAX))
                .collect_vec();
            let global_min = group_mins.iter().copied().min().unwrap_or(0);

            let tied_groups = (0..self.groups.len())
                .filter(|&g| group_mins[g] == global_min)
                .collect_vec();
            let group = pick(&tied_groups, rng);

            let tied_members = self.groups[group]
                .iter()
                .copied()
                .filter(|&i| counts[i] == global_min)
                .collect_vec();
            let member = pick(&tied_members, rng);

            counts[member] += 1;
            sequence.push(self.types[member].clone());
        }
        sequence
    }

    /// Length of sequence worth generating for `sheet`: enough rounds over all types
    /// to fill the sheet with the smallest type in hexagonal packing, bounded by `max_len`.
    pub fn target_len(&self, sheet: &Sheet, max_len: usize) -> usize {
        let Some(smallest) = self.types.first() else {
            return 0;
        };
        let pitch = smallest.diameter + sheet.gap;
        let hex_cell_area = pitch * pitch * SQRT_3 / 2.0;
        //saturating float to int conversion, huge sheets are bounded by `max_len`
        let rounds = ((sheet.area() / hex_cell_area).ceil().max(0.0) as usize).saturating_add(1);
        usize::min(rounds.saturating_mul(self.types.len()), max_len)
    }
}

/// Partitions ascending `diameters` into groups of compatible sizes.
/// Scanning from small to large, each not yet grouped diameter starts a new group and absorbs
/// every larger, not yet grouped diameter within [`COMPATIBILITY_RATIO`] of it.
pub fn compatibility_groups(diameters: &[f64]) -> Vec<Vec<usize>> {
    let mut grouped = vec![false; diameters.len()];
    let mut groups = vec![];
    for i in 0..diameters.len() {
        if grouped[i] {
            continue;
        }
        grouped[i] = true;
        let mut group = vec![i];
        for j in (i + 1)..diameters.len() {
            if !grouped[j] && diameters[j] / diameters[i] <= COMPATIBILITY_RATIO {
                grouped[j] = true;
                group.push(j);
            }
        }
        groups.push(group);
    }
    groups
}

/// Picks an element of a non-empty slice, only consuming randomness when there is a choice
fn pick(options: &[usize], rng: &mut impl RngCore) -> usize {
    match options {
        [only] => *only,
        _ => {
            let idx = (unit_sample(rng) * options.len() as f64) as usize;
            options[idx.min(options.len() - 1)]
        }
    }
}
