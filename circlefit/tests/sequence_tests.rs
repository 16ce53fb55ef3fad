#[cfg(test)]
mod tests {
    use circlefit::entities::{CircleSpec, Sheet};
    use circlefit::sequence::{Lcg, SequenceGenerator, compatibility_groups, unit_sample};
    use itertools::Itertools;
    use rand::{RngCore, SeedableRng};
    use test_case::test_case;

    fn specs(diameters: &[f64]) -> Vec<CircleSpec> {
        diameters
            .iter()
            .map(|&d| CircleSpec::new(d, format!("c{d}")))
            .collect()
    }

    #[test]
    fn lcg_follows_the_recurrence() {
        let mut lcg = Lcg::new(0);
        assert_eq!(lcg.next_u32(), 1_013_904_223);
        assert_eq!(lcg.next_u32(), 1_196_435_762);
        assert_eq!(lcg.next_u32(), 3_519_870_697);
    }

    #[test]
    fn lcg_seeding_is_consistent() {
        assert_eq!(Lcg::seed_from_u64(42), Lcg::new(42));
        assert_eq!(Lcg::seed_from_u64((1 << 32) + 42), Lcg::new(42));
        assert_eq!(Lcg::from_seed(42u32.to_le_bytes()), Lcg::new(42));
    }

    #[test]
    fn unit_samples_are_in_the_unit_interval() {
        let mut lcg = Lcg::new(0);
        assert!((unit_sample(&mut lcg) - 0.236_067_972_844_466_57).abs() < 1e-12);
        for _ in 0..10_000 {
            let v = lcg.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test_case(&[40.0, 50.0, 60.0, 75.0], vec![vec![0, 1, 2], vec![3]]; "mixed")]
    #[test_case(&[10.0, 20.0, 40.0], vec![vec![0], vec![1], vec![2]]; "doubling")]
    #[test_case(&[10.0, 15.0, 16.0, 22.0], vec![vec![0, 1], vec![2, 3]]; "chained")]
    #[test_case(&[30.0], vec![vec![0]]; "single")]
    fn compatibility_groups_of(diameters: &[f64], expected: Vec<Vec<usize>>) {
        assert_eq!(compatibility_groups(diameters), expected);
    }

    #[test]
    fn generator_deduplicates_and_sorts_types() {
        let generator = SequenceGenerator::new(&specs(&[75.0, 40.0, 60.0, 40.0, 50.0]));
        let diameters = generator.types().iter().map(|t| t.diameter).collect_vec();
        assert_eq!(diameters, vec![40.0, 50.0, 60.0, 75.0]);
        assert_eq!(generator.groups(), vec![vec![40.0, 50.0, 60.0], vec![75.0]]);
    }

    #[test]
    fn same_seed_same_sequence() {
        let generator = SequenceGenerator::new(&specs(&[75.0, 60.0, 50.0, 40.0]));
        let a = generator.generate(200, &mut Lcg::new(0));
        let b = generator.generate(200, &mut Lcg::new(0));
        let c = generator.generate(200, &mut Lcg::new(1));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let first = a.iter().take(4).map(|s| s.diameter).collect_vec();
        assert_eq!(first, vec![40.0, 75.0, 60.0, 50.0]);
    }

    #[test_case(&[75.0, 60.0, 50.0, 40.0]; "four types")]
    #[test_case(&[10.0, 11.0, 12.0, 50.0, 90.0]; "uneven groups")]
    #[test_case(&[25.0]; "single type")]
    fn every_prefix_is_balanced(diameters: &[f64]) {
        let generator = SequenceGenerator::new(&specs(diameters));
        for seed in 0..10 {
            let sequence = generator.generate(300, &mut Lcg::new(seed));
            assert_eq!(sequence.len(), 300);
            let mut counts = vec![0usize; generator.types().len()];
            for spec in &sequence {
                let idx = generator
                    .types()
                    .iter()
                    .position(|t| t.diameter == spec.diameter)
                    .unwrap();
                counts[idx] += 1;
                let (min, max) = counts.iter().minmax().into_option().unwrap();
                assert!(max - min <= 1, "unbalanced prefix {counts:?} for seed {seed}");
            }
        }
    }

    #[test]
    fn target_len_covers_the_sheet_with_the_smallest_type() {
        let sheet = Sheet::new(100.0, 100.0, 0.0);
        let single = SequenceGenerator::new(&specs(&[10.0]));
        assert_eq!(single.target_len(&sheet, 5000), 117);
        assert_eq!(single.target_len(&sheet, 50), 50);

        let double = SequenceGenerator::new(&specs(&[10.0, 30.0]));
        assert_eq!(double.target_len(&sheet, 5000), 234);
    }

    #[test]
    fn target_len_of_a_huge_sheet_is_bounded() {
        let sheet = Sheet::new(1e9, 1e9, 0.0);
        let generator = SequenceGenerator::new(&specs(&[0.01]));
        assert_eq!(generator.target_len(&sheet, 5000), 5000);

        let generator = SequenceGenerator::new(&specs(&[0.01, 0.02]));
        assert_eq!(generator.target_len(&sheet, usize::MAX), usize::MAX);
    }

    #[test]
    fn no_types_no_sequence() {
        let generator = SequenceGenerator::new(&[]);
        assert!(generator.generate(10, &mut Lcg::new(0)).is_empty());
        assert_eq!(generator.target_len(&Sheet::new(10.0, 10.0, 0.0), 100), 0);
    }
}
