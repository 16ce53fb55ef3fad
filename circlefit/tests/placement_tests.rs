#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::thread;
    use std::time::Duration;

    use circlefit::entities::{CircleSpec, Layout, PlacedCircle, Sheet};
    use circlefit::geometry::{DEFAULT_OVERLAP_TOLERANCE, Point, is_valid_position};
    use circlefit::packer::SingleAttemptPacker;
    use circlefit::placement::{CompositeFinder, FallbackProbe, GridScan, HexScan, PositionFinder};
    use circlefit::sequence::{Lcg, SequenceGenerator};
    use circlefit::util::assertions;
    use circlefit::util::{Deadline, PackConfig};
    use float_cmp::approx_eq;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    fn placed(diameter: f64, x: f64, y: f64) -> PlacedCircle {
        PlacedCircle::new(&CircleSpec::new(diameter, "red"), Point(x, y))
    }

    fn expired_deadline() -> Deadline {
        let deadline = Deadline::from_now_ms(0);
        thread::sleep(Duration::from_millis(2));
        deadline
    }

    #[test_case(75.0, true; "exactly the gap apart")]
    #[test_case(74.95, true; "within tolerance")]
    #[test_case(74.0, false; "too close")]
    #[test_case(50.0, false; "overlapping")]
    #[test_case(120.0, true; "far apart")]
    fn validity_respects_gap(x: f64, expected: bool) {
        let others = [placed(20.0, 50.0, 50.0)];
        let valid = is_valid_position(x, 50.0, 10.0, &others, 5.0, DEFAULT_OVERLAP_TOLERANCE);
        assert_eq!(valid, expected);
    }

    #[test]
    fn touching_circles_without_gap_are_valid() {
        let others = [placed(20.0, 10.0, 10.0)];
        assert!(is_valid_position(30.0, 10.0, 10.0, &others, 0.0, DEFAULT_OVERLAP_TOLERANCE));
        assert!(!is_valid_position(29.0, 10.0, 10.0, &others, 0.0, DEFAULT_OVERLAP_TOLERANCE));
    }

    #[test]
    fn anything_is_valid_on_an_empty_sheet() {
        assert!(is_valid_position(0.0, 0.0, 1000.0, &[], 50.0, DEFAULT_OVERLAP_TOLERANCE));
    }

    #[test]
    fn layout_agrees_with_brute_force_validity() {
        let sheet = Sheet::new(300.0, 200.0, 3.0);
        let specs = [CircleSpec::new(8.0, "a"), CircleSpec::new(45.0, "b")];
        let mut rng = SmallRng::seed_from_u64(0);
        let mut layout = Layout::new(sheet, &specs);
        for _ in 0..150 {
            let spec = &specs[rng.random_range(0..specs.len())];
            let center = Point(rng.random_range(0.0..300.0), rng.random_range(0.0..200.0));
            layout.place(spec, center);
        }
        for _ in 0..5000 {
            let (x, y) = (rng.random_range(0.0..300.0), rng.random_range(0.0..200.0));
            let radius = rng.random_range(1.0..30.0);
            let brute_force = is_valid_position(
                x,
                y,
                radius,
                layout.placed_circles(),
                sheet.gap,
                DEFAULT_OVERLAP_TOLERANCE,
            );
            let indexed = layout.first_conflict(x, y, radius, DEFAULT_OVERLAP_TOLERANCE).is_none();
            assert_eq!(brute_force, indexed, "disagreement at ({x}, {y}) with radius {radius}");
        }
    }

    #[test]
    fn layout_rejects_positions_outside_the_sheet() {
        let layout = Layout::new(Sheet::new(100.0, 100.0, 0.0), &[CircleSpec::new(20.0, "a")]);
        assert!(layout.is_valid(10.0, 10.0, 10.0, DEFAULT_OVERLAP_TOLERANCE));
        assert!(!layout.is_valid(9.0, 50.0, 10.0, DEFAULT_OVERLAP_TOLERANCE));
        assert!(!layout.is_valid(50.0, 90.5, 10.0, DEFAULT_OVERLAP_TOLERANCE));
    }

    #[test]
    fn finders_start_in_the_top_left_corner() {
        let config = PackConfig::default();
        let layout = Layout::new(Sheet::new(100.0, 100.0, 5.0), &[]);
        let deadline = Deadline::never();
        let finders: [&dyn PositionFinder; 4] = [
            &GridScan::from_config(&config),
            &HexScan::new(config.overlap_tolerance),
            &FallbackProbe::new(config.overlap_tolerance),
            &CompositeFinder::from_config(&config),
        ];
        for finder in finders {
            assert_eq!(finder.find_position(&layout, 10.0, &deadline), Some(Point(10.0, 10.0)));
        }
    }

    #[test]
    fn grid_scan_skips_past_placed_circles() {
        let config = PackConfig::default();
        let specs = [CircleSpec::new(40.0, "a")];
        let mut layout = Layout::new(Sheet::new(100.0, 100.0, 0.0), &specs);
        let finder = GridScan::from_config(&config);
        let deadline = Deadline::never();

        let first = finder.find_position(&layout, 20.0, &deadline).unwrap();
        assert_eq!(first, Point(20.0, 20.0));
        layout.place(&specs[0], first);

        let second = finder.find_position(&layout, 20.0, &deadline).unwrap();
        assert!(approx_eq!(f64, second.0, 60.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, second.1, 20.0, epsilon = 1e-9));
    }

    #[test_case(100.9, 75.9; "far edge off the lattice")]
    #[test_case(102.5, 77.5; "far edge on the lattice")]
    fn grid_scan_probes_the_far_edge(width: f64, expected_x: f64) {
        let config = PackConfig::default();
        let specs = [CircleSpec::new(50.0, "a")];
        let mut layout = Layout::new(Sheet::new(width, 50.0, 0.5), &specs);
        layout.place(&specs[0], Point(25.0, 25.0));

        let finder = GridScan::from_config(&config);
        let position = finder.find_position(&layout, 25.0, &Deadline::never()).unwrap();
        assert!(approx_eq!(f64, position.0, expected_x, epsilon = 1e-9));
        assert!(approx_eq!(f64, position.1, 25.0, epsilon = 1e-9));
    }

    #[test]
    fn grid_scan_step_has_a_lower_bound() {
        let finder = GridScan::from_config(&PackConfig::default());
        assert!(approx_eq!(f64, finder.step(50.0), 5.0));
        assert!(approx_eq!(f64, finder.step(2.0), 0.5));
    }

    #[test]
    fn hex_scan_offsets_every_other_row() {
        let specs = [CircleSpec::new(20.0, "a")];
        //a single column of hexagonal cells fits on a 30 wide sheet
        let mut layout = Layout::new(Sheet::new(30.0, 100.0, 0.0), &specs);
        let finder = HexScan::new(DEFAULT_OVERLAP_TOLERANCE);
        let deadline = Deadline::never();

        layout.place(&specs[0], Point(10.0, 10.0));
        let next = finder.find_position(&layout, 10.0, &deadline).unwrap();
        assert!(approx_eq!(f64, next.0, 20.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, next.1, 10.0 + 10.0 * 3f64.sqrt(), epsilon = 1e-9));
    }

    #[test]
    fn fallback_probes_the_corners_then_the_center() {
        let specs = [CircleSpec::new(20.0, "a")];
        let mut layout = Layout::new(Sheet::new(100.0, 100.0, 0.0), &specs);
        let finder = FallbackProbe::new(DEFAULT_OVERLAP_TOLERANCE);
        let deadline = Deadline::never();

        let expected = [
            Point(10.0, 10.0),
            Point(90.0, 10.0),
            Point(10.0, 90.0),
            Point(90.0, 90.0),
            Point(50.0, 50.0),
        ];
        for point in expected {
            assert_eq!(finder.find_position(&layout, 10.0, &deadline), Some(point));
            layout.place(&specs[0], point);
        }
        assert_eq!(finder.find_position(&layout, 10.0, &deadline), None);
    }

    #[test_case(60.0, 100.0; "too wide")]
    #[test_case(100.0, 60.0; "too high")]
    fn oversized_circles_are_never_placed(width: f64, height: f64) {
        let config = PackConfig::default();
        let layout = Layout::new(Sheet::new(width, height, 0.0), &[]);
        let finder = CompositeFinder::from_config(&config);
        assert_eq!(finder.find_position(&layout, 35.0, &Deadline::never()), None);
    }

    #[test]
    fn scans_give_up_after_the_deadline() {
        let config = PackConfig::default();
        let layout = Layout::new(Sheet::new(100.0, 100.0, 0.0), &[]);
        let deadline = expired_deadline();
        assert_eq!(GridScan::from_config(&config).find_position(&layout, 10.0, &deadline), None);
        assert_eq!(HexScan::new(0.1).find_position(&layout, 10.0, &deadline), None);
        assert_eq!(FallbackProbe::new(0.1).find_position(&layout, 10.0, &deadline), None);
    }

    /// Never finds a position, counting how often it was asked
    struct Hopeless {
        calls: Cell<usize>,
    }

    impl PositionFinder for Hopeless {
        fn find_position(&self, _: &Layout, _: f64, _: &Deadline) -> Option<Point> {
            self.calls.set(self.calls.get() + 1);
            None
        }
    }

    #[test_case(Some(50), 50; "default limit")]
    #[test_case(Some(5), 5; "custom limit")]
    #[test_case(None, 50; "disabled limit")]
    fn packer_stops_after_consecutive_failures(empty_failure_limit: Option<usize>, expected: usize) {
        let config = PackConfig {
            empty_failure_limit,
            ..PackConfig::default()
        };
        let finder = Hopeless { calls: Cell::new(0) };
        let packer = SingleAttemptPacker::with_finder(Sheet::new(100.0, 100.0, 0.0), config, finder);
        let sequence = vec![CircleSpec::new(10.0, "a"); 500];

        let outcome = packer.pack(&sequence, 1, &Deadline::never());
        assert!(outcome.placed.is_empty());
        assert!(!outcome.timeout);
        assert_eq!(packer.finder.calls.get(), expected);
    }

    #[test]
    fn packer_failure_ceiling_grows_with_the_number_of_types() {
        let config = PackConfig::default();
        assert_eq!(config.failure_ceiling(1), 50);
        assert_eq!(config.failure_ceiling(5), 50);
        assert_eq!(config.failure_ceiling(8), 80);
        assert_eq!(config.empty_failure_ceiling(8), 50);
    }

    #[test]
    fn packer_places_a_sequence_validly() {
        let _ = env_logger::builder().is_test(true).try_init();
        let sheet = Sheet::new(100.0, 100.0, 0.0);
        let config = PackConfig::default();
        let packer = SingleAttemptPacker::new(sheet, config);
        let sequence = vec![CircleSpec::new(40.0, "a"); 4];

        let outcome = packer.pack(&sequence, 1, &Deadline::never());
        assert_eq!(outcome.placed.len(), 4);
        assert!(!outcome.timeout);
        assert_eq!(outcome.placed[0].center(), Point(20.0, 20.0));
        assert!(assertions::placement_is_valid(&outcome.placed, &sheet, config.overlap_tolerance));
    }

    #[test]
    fn packer_is_deterministic() {
        let sheet = Sheet::new(180.0, 120.0, 3.0);
        let packer = SingleAttemptPacker::new(sheet, PackConfig::default());
        let circles = [CircleSpec::new(35.0, "a"), CircleSpec::new(20.0, "b")];
        let generator = SequenceGenerator::new(&circles);
        let sequence = generator.generate(60, &mut Lcg::new(3));

        let first = packer.pack(&sequence, 2, &Deadline::never());
        let second = packer.pack(&sequence, 2, &Deadline::never());
        assert!(!first.placed.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn packer_keeps_partial_results_on_timeout() {
        let packer = SingleAttemptPacker::new(Sheet::new(100.0, 100.0, 0.0), PackConfig::default());
        let sequence = vec![CircleSpec::new(10.0, "a"); 10];

        let outcome = packer.pack(&sequence, 1, &expired_deadline());
        assert!(outcome.timeout);
        assert!(outcome.placed.is_empty());
    }
}
