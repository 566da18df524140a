//! Integration tests for waypoint generation.
//!
//! Covers the reference 4 x 4 scenario, row direction, coverage of the scan
//! area and rejection of degenerate specifications.

use photoplan_core::{
    test_utils::{reference_camera, reference_dataset_spec, survey_camera, survey_dataset_spec},
    DatasetSpec, ModelError, Real, Waypoint,
};
use photoplan_planner::{
    compute_distance_between_images, compute_speed_during_photo_capture,
    generate_photo_plan_on_grid, generate_photo_plan_on_grid_with, PlanError, PlanOptions,
    DEFAULT_ALLOWED_MOVEMENT_PX,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Split a plan into rows by y coordinate, preserving visitation order.
fn rows(plan: &[Waypoint]) -> Vec<Vec<Waypoint>> {
    let mut out: Vec<Vec<Waypoint>> = Vec::new();
    for wp in plan {
        match out.last_mut() {
            Some(row) if row[0].position.y == wp.position.y => row.push(*wp),
            _ => out.push(vec![*wp]),
        }
    }
    out
}

#[test]
fn reference_scenario_generates_sixteen_waypoints() {
    init_logging();
    let plan = generate_photo_plan_on_grid(&reference_camera(), &reference_dataset_spec()).unwrap();

    assert_eq!(plan.len(), 16);
    let first = plan[0].position;
    assert_eq!((first.x, first.y, first.z), (0.0, 0.0, 10.0));

    // Second row starts at x = 15 and descends to 0.
    let second_row: Vec<Real> = plan[4..8].iter().map(|w| w.position.x).collect();
    assert_eq!(second_row, vec![15.0, 10.0, 5.0, 0.0]);
    assert!(plan[4..8].iter().all(|w| w.position.y == 5.0));

    let last = plan[15].position;
    assert_eq!((last.x, last.y), (0.0, 15.0));
}

#[test]
fn every_waypoint_flies_at_height_and_capture_speed() {
    init_logging();
    let cam = survey_camera();
    let spec = survey_dataset_spec();
    let plan = generate_photo_plan_on_grid(&cam, &spec).unwrap();
    let speed = compute_speed_during_photo_capture(&cam, &spec, DEFAULT_ALLOWED_MOVEMENT_PX);

    assert!(!plan.is_empty());
    for wp in &plan {
        assert_eq!(wp.position.z, spec.height);
        assert_eq!(wp.speed, speed);
    }
}

#[test]
fn rows_alternate_direction() {
    let plan = generate_photo_plan_on_grid(&survey_camera(), &survey_dataset_spec()).unwrap();
    let rows = rows(&plan);
    assert!(rows.len() > 1);

    for (j, row) in rows.iter().enumerate() {
        let xs: Vec<Real> = row.iter().map(|w| w.position.x).collect();
        if j % 2 == 0 {
            assert!(xs.windows(2).all(|w| w[0] <= w[1]), "row {j} not ascending");
        } else {
            assert!(xs.windows(2).all(|w| w[0] >= w[1]), "row {j} not descending");
        }
    }
}

#[test]
fn grid_covers_requested_area() {
    let cam = survey_camera();
    for (x, y) in [(150.0, 100.0), (7.3, 210.0), (0.5, 0.5), (333.3, 12.0)] {
        let spec = DatasetSpec {
            scan_dimension_x: x,
            scan_dimension_y: y,
            ..survey_dataset_spec()
        };
        let d = compute_distance_between_images(&cam, &spec);
        let plan = generate_photo_plan_on_grid(&cam, &spec).unwrap();

        let max_x = plan.iter().map(|w| w.position.x).fold(Real::MIN, Real::max);
        let max_y = plan.iter().map(|w| w.position.y).fold(Real::MIN, Real::max);
        assert!(max_x + d.x >= x - 1e-9, "x coverage {max_x} + {} < {x}", d.x);
        assert!(max_y + d.y >= y - 1e-9, "y coverage {max_y} + {} < {y}", d.y);
        // Never more than one spacing unit of overshoot.
        assert!(max_x < x + 1e-9 && max_y < y + 1e-9);
    }
}

#[test]
fn small_area_gives_single_waypoint() {
    let spec = DatasetSpec {
        scan_dimension_x: 1.0,
        scan_dimension_y: 1.0,
        ..reference_dataset_spec()
    };
    let plan = generate_photo_plan_on_grid(&reference_camera(), &spec).unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].position.x, 0.0);
    assert_eq!(plan[0].position.y, 0.0);
}

#[test]
fn zero_scan_dimension_gives_empty_plan() {
    init_logging();
    for scan_y in [0.0, 20.0, 1000.0] {
        let spec = DatasetSpec {
            scan_dimension_x: 0.0,
            scan_dimension_y: scan_y,
            ..reference_dataset_spec()
        };
        let plan = generate_photo_plan_on_grid(&reference_camera(), &spec).unwrap();
        assert!(plan.is_empty());
    }
}

#[test]
fn degenerate_specs_are_rejected() {
    let cam = reference_camera();

    let full_sidelap = DatasetSpec {
        sidelap: 1.0,
        ..reference_dataset_spec()
    };
    assert_eq!(
        generate_photo_plan_on_grid(&cam, &full_sidelap),
        Err(PlanError::InvalidInput(ModelError::FractionOutOfRange {
            field: "sidelap",
            value: 1.0
        }))
    );

    let grounded = DatasetSpec {
        height: 0.0,
        ..reference_dataset_spec()
    };
    let err = generate_photo_plan_on_grid(&cam, &grounded).unwrap_err();
    assert!(err.to_string().starts_with("invalid specification"), "{err}");

    let blind = photoplan_core::Camera {
        image_size_x_px: 0,
        ..cam
    };
    assert!(matches!(
        generate_photo_plan_on_grid(&blind, &reference_dataset_spec()),
        Err(PlanError::InvalidInput(ModelError::ZeroImageSize { .. }))
    ));
}

#[test]
fn near_total_overlap_hits_waypoint_limit() {
    let spec = DatasetSpec {
        overlap: 0.999_999,
        sidelap: 0.999_999,
        scan_dimension_x: 500.0,
        scan_dimension_y: 500.0,
        ..reference_dataset_spec()
    };
    assert!(matches!(
        generate_photo_plan_on_grid(&reference_camera(), &spec),
        Err(PlanError::TooManyWaypoints { .. })
    ));
}

#[test]
fn infinite_footprint_is_rejected_as_spacing_error() {
    // A 1 px focal length at 1e308 m overflows the footprint to infinity.
    let cam = photoplan_core::Camera {
        fx: 1.0,
        fy: 1.0,
        ..reference_camera()
    };
    let spec = DatasetSpec {
        height: 1e308,
        ..reference_dataset_spec()
    };
    match generate_photo_plan_on_grid(&cam, &spec) {
        Err(PlanError::NonPositiveSpacing { dx, dy }) => {
            assert!(dx.is_infinite() && dy.is_infinite(), "dx={dx}, dy={dy}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    let err = PlanError::NonPositiveSpacing {
        dx: Real::INFINITY,
        dy: 5.0,
    };
    assert!(err
        .to_string()
        .starts_with("spacing between images must be finite and positive"));
}

#[test]
fn unlimited_plan_still_rejects_uncountable_grid() {
    let spec = DatasetSpec {
        scan_dimension_x: 1e300,
        scan_dimension_y: 1.0,
        ..reference_dataset_spec()
    };
    let opts = PlanOptions {
        max_waypoints: None,
        ..PlanOptions::default()
    };
    assert!(matches!(
        generate_photo_plan_on_grid_with(&reference_camera(), &spec, &opts),
        Err(PlanError::TileCountOverflow { .. })
    ));

    // Without a limit an ordinary grid is still generated in full.
    let plan =
        generate_photo_plan_on_grid_with(&reference_camera(), &reference_dataset_spec(), &opts)
            .unwrap();
    assert_eq!(plan.len(), 16);
}
