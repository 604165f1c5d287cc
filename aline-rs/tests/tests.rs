#[cfg(test)]
mod tests {
    use aline_rs::cut_planner;
    use aline_rs::entities::{
        CalculatorSession, Fabric, Measurements, Panel, SeamAllowances, SplitRatios,
    };
    use aline_rs::error::ValidationError;
    use aline_rs::geometry::PanelRotation;
    use aline_rs::geometry::geo_traits::Shape;
    use aline_rs::nesting::{FabricNester, layout, placement_order};
    use aline_rs::panel_builder::{build_panel, build_panels};
    use aline_rs::partition::partition;
    use float_cmp::approx_eq;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn panel(id: usize, waist: f64, hem: f64, height: f64) -> Panel {
        build_panel(id, waist, hem, height, &SeamAllowances::default())
    }

    fn measurements(waist: f64, hem: f64, length: f64, n: i64) -> Measurements {
        Measurements::try_new(
            Some(waist),
            Some(hem),
            Some(length),
            n,
            SeamAllowances::default(),
        )
        .unwrap()
    }

    #[test]
    fn partition_evenly_spaced_quarters() {
        let ratios = SplitRatios::try_new(vec![0.25, 0.5, 0.75], 4).unwrap();
        assert_eq!(partition(100.0, &ratios), vec![25.0, 25.0, 25.0, 25.0]);
    }

    #[test_case(1, &[]; "single panel")]
    #[test_case(2, &[0.5]; "two panels")]
    #[test_case(4, &[0.25, 0.5, 0.75]; "four panels")]
    #[test_case(5, &[0.2, 0.4, 0.6, 0.8]; "five panels")]
    fn even_split_defaults(n_panels: usize, expected: &[f64]) {
        let ratios = SplitRatios::even(n_panels);
        assert_eq!(ratios.n_panels(), n_panels);
        assert_eq!(ratios.as_slice().len(), expected.len());
        for (r, e) in ratios.as_slice().iter().zip(expected) {
            assert!(approx_eq!(f64, *r, *e, ulps = 2));
        }
    }

    #[test]
    fn single_panel_spans_whole_circumference() {
        let widths = partition(87.5, &SplitRatios::even(1));
        assert_eq!(widths, vec![87.5]);
    }

    #[test]
    fn uneven_splits_produce_uneven_segments() {
        let ratios = SplitRatios::try_new(vec![0.1, 0.1, 0.7], 4).unwrap();
        let widths = partition(200.0, &ratios);
        assert!(approx_eq!(f64, widths[0], 20.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, widths[1], 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, widths[2], 120.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, widths[3], 60.0, epsilon = 1e-9));
    }

    #[test_case(vec![0.5, 0.25], 3; "unsorted")]
    #[test_case(vec![0.5, 1.5], 3; "above one")]
    #[test_case(vec![-0.1, 0.5], 3; "below zero")]
    #[test_case(vec![0.5], 3; "too few")]
    #[test_case(vec![0.2, 0.4, 0.6], 3; "too many")]
    #[test_case(vec![f64::NAN, 0.5], 3; "nan")]
    fn invalid_split_ratios_are_rejected(ratios: Vec<f64>, n_panels: usize) {
        assert!(matches!(
            SplitRatios::try_new(ratios, n_panels),
            Err(ValidationError::InvalidSplitRatios(_))
        ));
    }

    #[test_case(1, 0.9, &[0.25, 0.75, 0.75]; "clamped to next")]
    #[test_case(1, 0.1, &[0.25, 0.25, 0.75]; "clamped to previous")]
    #[test_case(0, -3.0, &[0.0, 0.5, 0.75]; "clamped to zero")]
    #[test_case(2, 7.0, &[0.25, 0.5, 1.0]; "clamped to one")]
    #[test_case(1, 0.6, &[0.25, 0.6, 0.75]; "within bounds")]
    #[test_case(1, f64::NAN, &[0.25, 0.5, 0.75]; "nan is ignored")]
    #[test_case(3, 0.3, &[0.25, 0.5, 0.75]; "index out of range is ignored")]
    fn dragging_a_split_is_clamped(index: usize, value: f64, expected: &[f64]) {
        init_logger();
        let ratios = SplitRatios::even(4);
        let dragged = ratios.clamp_and_sort(index, value);
        assert_eq!(dragged.as_slice(), expected);
        // the original sequence is left untouched
        assert_eq!(ratios, SplitRatios::even(4));
    }

    #[test]
    fn build_panel_adds_seam_allowances() {
        let seams = SeamAllowances::try_new(1.0, 1.5, 1.0).unwrap();
        let panel = build_panel(1, 25.0, 40.0, 50.0, &seams);
        assert_eq!(panel.waist_width_with_seam, 28.0);
        assert_eq!(panel.hem_width_with_seam, 43.0);
        assert_eq!(panel.height_with_seam, 52.0);
        assert_eq!(panel.waist_width, 25.0);
        assert_eq!(panel.hem_width, 40.0);
        assert_eq!(panel.height, 50.0);
    }

    #[test]
    fn build_panels_partitions_waist_and_hem_independently() {
        init_logger();
        let m = measurements(70.0, 200.0, 60.0, 2);
        let waist = SplitRatios::try_new(vec![0.5], 2).unwrap();
        let hem = SplitRatios::try_new(vec![0.25], 2).unwrap();
        let panels = build_panels(&m, &waist, &hem).unwrap();

        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].id, 1);
        assert_eq!(panels[1].id, 2);
        assert_eq!(panels[0].waist_width, 35.0);
        assert_eq!(panels[1].waist_width, 35.0);
        assert_eq!(panels[0].hem_width, 50.0);
        assert_eq!(panels[1].hem_width, 150.0);
        assert!(panels.iter().all(|p| p.height == 60.0));
    }

    #[test]
    fn build_panels_rejects_mismatched_splits() {
        let m = measurements(70.0, 200.0, 60.0, 4);
        let result = build_panels(&m, &SplitRatios::even(4), &SplitRatios::even(3));
        assert!(matches!(
            result,
            Err(ValidationError::InvalidSplitRatios(_))
        ));
    }

    #[test_case(None, Some(100.0), Some(60.0), 4, "waist circumference"; "missing waist")]
    #[test_case(Some(70.0), Some(0.0), Some(60.0), 4, "hem circumference"; "zero hem")]
    #[test_case(Some(70.0), Some(100.0), Some(-5.0), 4, "skirt length"; "negative length")]
    #[test_case(Some(f64::NAN), Some(100.0), Some(60.0), 4, "waist circumference"; "nan waist")]
    fn invalid_measurements_are_rejected(
        waist: Option<f64>,
        hem: Option<f64>,
        length: Option<f64>,
        n: i64,
        expected_name: &str,
    ) {
        let result = Measurements::try_new(waist, hem, length, n, SeamAllowances::default());
        match result {
            Err(ValidationError::InvalidMeasurement { name, .. }) => {
                assert_eq!(name, expected_name)
            }
            other => panic!("expected an invalid measurement, got {other:?}"),
        }
    }

    #[test_case(0; "zero")]
    #[test_case(-2; "negative")]
    fn invalid_panel_count_is_rejected(n: i64) {
        let result =
            Measurements::try_new(Some(70.0), Some(100.0), Some(60.0), n, SeamAllowances::default());
        assert_eq!(result, Err(ValidationError::InvalidPanelCount(n)));
    }

    #[test_case(-1.0, 0.0, 0.0; "negative waist")]
    #[test_case(0.0, -0.5, 0.0; "negative side")]
    #[test_case(0.0, 0.0, f64::INFINITY; "infinite hem")]
    fn invalid_allowances_are_rejected(waist: f64, side: f64, hem: f64) {
        assert!(matches!(
            SeamAllowances::try_new(waist, side, hem),
            Err(ValidationError::InvalidAllowance { .. })
        ));
    }

    #[test]
    fn cut_plan_with_seam_allowance() {
        let plan = cut_planner::plan(150.0, 320.0, 2.0).unwrap();
        assert_eq!(plan.total_wanted, 324.0);
        assert_eq!(plan.full_cuts, 2);
        assert!(approx_eq!(f64, plan.remainder, 24.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, plan.cuts, 2.16, epsilon = 1e-9));
        assert_eq!(plan.n_pieces(), 3);
        let pieces = plan.pieces();
        assert_eq!(pieces.len(), 3);
        assert_eq!(&pieces[..2], &[150.0, 150.0]);
        assert!(approx_eq!(f64, pieces[2], 24.0, epsilon = 1e-9));
        assert_eq!(
            plan.to_string(),
            "You need to cut the main fabric 2.16 times. Meaning, you will have 2 piece(s) of 150cm. And the final piece will be 24.00cm."
        );
    }

    #[test]
    fn cut_plan_without_remainder() {
        let plan = cut_planner::plan(100.0, 300.0, 0.0).unwrap();
        assert_eq!(plan.full_cuts, 3);
        assert_eq!(plan.remainder, 0.0);
        assert_eq!(plan.pieces(), vec![100.0, 100.0, 100.0]);
        assert!(plan.to_string().ends_with("All pieces will be 100cm."));
    }

    #[test]
    fn cut_plan_shorter_than_one_length() {
        let plan = cut_planner::plan(150.0, 40.0, 0.0).unwrap();
        assert_eq!(plan.full_cuts, 0);
        assert_eq!(plan.remainder, 40.0);
        assert_eq!(plan.pieces(), vec![40.0]);
        assert_eq!(
            plan.to_string(),
            "You need to cut the main fabric 0.27 times. And the final piece will be 40.00cm."
        );
    }

    #[test_case(0.0, 10.0, 0.0; "zero fabric length")]
    #[test_case(150.0, -1.0, 0.0; "negative wanted length")]
    #[test_case(150.0, 10.0, -1.0; "negative seam allowance")]
    fn invalid_cut_plans_are_rejected(fabric: f64, wanted: f64, seam: f64) {
        assert!(cut_planner::plan(fabric, wanted, seam).is_err());
    }

    #[test]
    fn layout_wraps_rows_with_cut_allowance() {
        init_logger();
        let panels = (1..=4).map(|id| panel(id, 20.0, 30.0, 60.0)).collect::<Vec<_>>();
        let layout = layout(&panels, 100.0, 2.0).unwrap();

        assert_eq!(layout.n_rows(), 2);
        assert_eq!(layout.rows[0].n_panels, 3);
        assert_eq!(layout.rows[1].n_panels, 1);
        assert!(approx_eq!(f64, layout.required_length, 122.0, epsilon = 1e-9));

        let xs = layout.placements.iter().map(|p| p.x).collect::<Vec<_>>();
        let ys = layout.placements.iter().map(|p| p.y).collect::<Vec<_>>();
        assert_eq!(xs, vec![0.0, 32.0, 64.0, 0.0]);
        assert_eq!(ys, vec![0.0, 0.0, 0.0, 62.0]);
        assert!(approx_eq!(f64, layout.rows[0].used_width, 94.0, epsilon = 1e-9));
    }

    #[test]
    fn layout_places_widest_hem_first_and_alternates_rotation() {
        let panels = vec![
            panel(1, 10.0, 20.0, 50.0),
            panel(2, 10.0, 40.0, 50.0),
            panel(3, 10.0, 30.0, 50.0),
            panel(4, 10.0, 40.0, 50.0),
        ];
        let order = placement_order(&panels)
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        // ties keep their input order
        assert_eq!(order, vec![2, 4, 3, 1]);

        let layout = layout(&panels, 500.0, 0.0).unwrap();
        let placed = layout
            .placements
            .iter()
            .map(|p| (p.panel.id, p.rotation))
            .collect::<Vec<_>>();
        assert_eq!(
            placed,
            vec![
                (2, PanelRotation::Upright),
                (4, PanelRotation::Flipped),
                (3, PanelRotation::Upright),
                (1, PanelRotation::Flipped),
            ]
        );
        assert_eq!(layout.n_rows(), 1);
        assert_eq!(layout.required_length, 50.0);
    }

    #[test]
    fn rotation_does_not_change_packing() {
        // a flipped panel reserves the same bounding box as an upright one
        let panels = vec![panel(1, 20.0, 45.0, 70.0), panel(2, 20.0, 45.0, 70.0)];
        let layout = layout(&panels, 90.0, 0.0).unwrap();
        assert_eq!(layout.n_rows(), 1);
        let flipped = &layout.placements[1];
        assert!(flipped.rotation.is_flipped());
        let (reserved, drawn) = (flipped.bbox(), flipped.outline().bbox());
        assert!(reserved.almost_contains(&drawn));
        assert!(drawn.almost_contains(&reserved));
    }

    #[test]
    fn flipped_outline_puts_hem_on_top() {
        let panels = vec![panel(1, 20.0, 40.0, 60.0), panel(2, 20.0, 40.0, 60.0)];
        let layout = layout(&panels, 200.0, 5.0).unwrap();

        let upright = layout.placements[0].outline();
        let (w0, w1) = upright.waist_edge();
        assert!(approx_eq!(f64, w0.y(), 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, w1.x() - w0.x(), 20.0, epsilon = 1e-9));

        let flipped = layout.placements[1].outline();
        let (h0, h1) = flipped.hem_edge();
        let (fw0, fw1) = flipped.waist_edge();
        assert!(approx_eq!(f64, h0.y(), 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, (h1.x() - h0.x()).abs(), 40.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, fw0.y(), 60.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, (fw1.x() - fw0.x()).abs(), 20.0, epsilon = 1e-9));

        let bbox = flipped.bbox();
        assert!(approx_eq!(f64, bbox.x_min, 45.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.x_max, 85.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, flipped.area(), upright.area(), epsilon = 1e-9));
    }

    #[test]
    fn empty_layout_needs_no_fabric() {
        let layout = layout(&[], 150.0, 1.0).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.required_length, 0.0);
        assert_eq!(layout.n_rows(), 0);
        assert_eq!(layout.utilization(), 0.0);
    }

    #[test_case(0.0; "zero")]
    #[test_case(-150.0; "negative")]
    #[test_case(f64::NAN; "nan")]
    fn invalid_fabric_width_is_rejected(width: f64) {
        let panels = vec![panel(1, 20.0, 30.0, 60.0)];
        assert!(matches!(
            layout(&panels, width, 1.0),
            Err(ValidationError::InvalidFabricWidth(_))
        ));
    }

    #[test]
    fn panel_wider_than_fabric_is_rejected() {
        let panels = vec![panel(1, 20.0, 30.0, 60.0), panel(2, 20.0, 160.0, 60.0)];
        assert_eq!(
            layout(&panels, 150.0, 1.0),
            Err(ValidationError::PanelExceedsFabric {
                panel_id: 2,
                width: 160.0,
                fabric_width: 150.0
            })
        );
    }

    #[test]
    fn utilization_of_a_full_row() {
        let panels = vec![panel(1, 50.0, 50.0, 10.0), panel(2, 50.0, 50.0, 10.0)];
        let fabric = Fabric::try_new(100.0, 0.0).unwrap();
        let layout = FabricNester::new(fabric).layout(&panels).unwrap();
        assert!(approx_eq!(f64, layout.utilization(), 1.0, epsilon = 1e-9));
    }

    #[test]
    fn session_resets_splits_on_panel_count_change() {
        init_logger();
        let mut session = CalculatorSession::new(measurements(80.0, 240.0, 60.0, 4));
        let widths = session.drag_waist_split(0, 0.4);
        assert!(approx_eq!(f64, widths[0], 32.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, widths[1], 8.0, epsilon = 1e-9));
        assert_eq!(session.hem_splits(), &SplitRatios::even(4));

        session.set_panel_count(6).unwrap();
        assert_eq!(session.waist_splits(), &SplitRatios::even(6));
        assert_eq!(session.hem_splits(), &SplitRatios::even(6));
        assert_eq!(session.panels().unwrap().len(), 6);

        assert_eq!(
            session.set_panel_count(0),
            Err(ValidationError::InvalidPanelCount(0))
        );
        assert_eq!(session.measurements().panel_count, 6);
    }

    #[test]
    fn session_keeps_splits_when_panel_count_is_unchanged() {
        let mut session = CalculatorSession::new(measurements(80.0, 240.0, 60.0, 4));
        session.drag_hem_split(0, 0.1);
        let dragged = session.hem_splits().clone();

        session.set_measurements(measurements(90.0, 260.0, 70.0, 4));
        assert_eq!(session.hem_splits(), &dragged);
        assert_eq!(session.measurements().waist_circumference, 90.0);

        session.set_measurements(measurements(90.0, 260.0, 70.0, 5));
        assert_eq!(session.hem_splits(), &SplitRatios::even(5));
        assert_eq!(session.panels().unwrap().len(), 5);
    }

    #[test]
    fn session_single_panel_has_no_splits() {
        let session = CalculatorSession::new(measurements(80.0, 240.0, 60.0, 1));
        assert!(session.waist_splits().as_slice().is_empty());
        let panels = session.panels().unwrap();
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].waist_width, 80.0);
        assert_eq!(panels[0].hem_width, 240.0);
    }

    #[test]
    fn session_drag_hem_keeps_total() {
        let mut session = CalculatorSession::new(measurements(80.0, 240.0, 60.0, 3));
        let widths = session.drag_hem_split(1, 0.9);
        assert!(approx_eq!(f64, widths.iter().sum::<f64>(), 240.0, epsilon = 1e-9));
        assert!(widths.iter().all(|w| *w >= 0.0));
        let panels = session.panels().unwrap();
        assert!(approx_eq!(f64, panels[2].hem_width, 24.0, epsilon = 1e-9));
    }
}
