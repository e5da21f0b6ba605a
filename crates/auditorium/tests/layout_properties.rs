//! Property tests for generated layouts.

use float_cmp::approx_eq;
use proptest::prelude::*;

use auditorium::{
    Layout, config::LayoutConstants, generate_layout, params::LayoutParameters,
};

// ===================
// Strategies
// ===================

fn params_strategy() -> impl Strategy<Value = LayoutParameters> {
    (
        1usize..30,
        1usize..40,
        0.1f32..5.0,
        0.1f32..5.0,
        -2.0f32..2.0,
        5.0f32..200.0,
        5.0f32..200.0,
    )
        .prop_map(|(rows, seats, dx, dz, dy, width, depth)| {
            LayoutParameters::default()
                .with_room(width, depth, 10.0)
                .with_rows(rows)
                .with_seats_per_row(seats)
                .with_seat_spacing(dx)
                .with_row_spacing(dz)
                .with_row_elevation(dy)
        })
}

fn generate(params: &LayoutParameters) -> Layout {
    generate_layout(params, &LayoutConstants::default()).expect("strategy yields valid params")
}

// ===================
// Property Test Functions
// ===================

/// Counts follow directly from the grid dimensions.
fn check_counts(params: LayoutParameters) -> Result<(), TestCaseError> {
    let layout = generate(&params);
    prop_assert_eq!(layout.seats().len(), params.rows() * params.seats_per_row());
    prop_assert_eq!(layout.risers().len(), params.rows() - 1);
    Ok(())
}

/// Every row's x-coordinates mirror about the room's center axis.
fn check_rows_are_symmetric(params: LayoutParameters) -> Result<(), TestCaseError> {
    let layout = generate(&params);
    for row in 0..params.rows() {
        let mut xs: Vec<f32> = layout
            .seats_in_row(row)
            .iter()
            .map(|seat| seat.position().x)
            .collect();
        xs.sort_by(f32::total_cmp);

        let mirrored: Vec<f32> = xs.iter().rev().map(|x| -x).collect();
        for (x, m) in xs.iter().zip(&mirrored) {
            prop_assert!(approx_eq!(f32, *x, *m, epsilon = 1e-3), "{x} vs {m}");
        }
    }
    Ok(())
}

/// Two runs over the same parameters produce identical output.
fn check_determinism(params: LayoutParameters) -> Result<(), TestCaseError> {
    prop_assert_eq!(generate(&params), generate(&params));
    Ok(())
}

/// Rows recede monotonically toward the screen wall.
fn check_depth_is_monotonic(params: LayoutParameters) -> Result<(), TestCaseError> {
    let layout = generate(&params);
    let row_z: Vec<f32> = (0..params.rows())
        .map(|row| layout.seats_in_row(row)[0].position().z)
        .collect();
    for pair in row_z.windows(2) {
        prop_assert!(pair[0] > pair[1], "{} should be > {}", pair[0], pair[1]);
    }
    Ok(())
}

/// Neighbouring risers share a face: no gap, no overlap along z.
fn check_risers_abut(params: LayoutParameters) -> Result<(), TestCaseError> {
    let layout = generate(&params);
    for pair in layout.risers().windows(2) {
        let nearer = pair[0].footprint();
        let farther = pair[1].footprint();
        prop_assert!(approx_eq!(
            f32,
            nearer.min_z(),
            farther.max_z(),
            epsilon = 1e-3
        ));
    }
    Ok(())
}

/// Risers stand on the floor and reach their row's seat pan.
fn check_risers_are_solid_blocks(params: LayoutParameters) -> Result<(), TestCaseError> {
    let constants = LayoutConstants::default();
    let layout = generate(&params);
    for riser in layout.risers() {
        prop_assert!(approx_eq!(f32, riser.base(), 0.0, epsilon = 1e-4));
        let expected_top =
            riser.row() as f32 * params.row_elevation() + constants.seat_height_offset();
        prop_assert!(approx_eq!(f32, riser.top(), expected_top, epsilon = 1e-4));
    }
    Ok(())
}

/// All seats share one yaw regardless of row or index.
fn check_constant_facing(params: LayoutParameters) -> Result<(), TestCaseError> {
    let layout = generate(&params);
    let yaw = LayoutConstants::default().seat_yaw();
    prop_assert!(layout.seats().iter().all(|seat| seat.yaw() == yaw));
    Ok(())
}

// ===================
// Proptest Wrappers
// ===================

proptest! {
    #[test]
    fn counts(params in params_strategy()) {
        check_counts(params)?;
    }

    #[test]
    fn rows_are_symmetric(params in params_strategy()) {
        check_rows_are_symmetric(params)?;
    }

    #[test]
    fn determinism(params in params_strategy()) {
        check_determinism(params)?;
    }

    #[test]
    fn depth_is_monotonic(params in params_strategy()) {
        check_depth_is_monotonic(params)?;
    }

    #[test]
    fn risers_abut(params in params_strategy()) {
        check_risers_abut(params)?;
    }

    #[test]
    fn risers_are_solid_blocks(params in params_strategy()) {
        check_risers_are_solid_blocks(params)?;
    }

    #[test]
    fn constant_facing(params in params_strategy()) {
        check_constant_facing(params)?;
    }

    #[test]
    fn positive_elevation_never_fails(rows in 1usize..200, dy in 0.0f32..10.0) {
        let params = LayoutParameters::default().with_rows(rows).with_row_elevation(dy);
        prop_assert!(generate_layout(&params, &LayoutConstants::default()).is_ok());
    }
}

#[test]
fn even_row_has_no_center_seat() {
    let layout = generate(&LayoutParameters::default());
    let xs: Vec<f32> = layout
        .seats_in_row(0)
        .iter()
        .map(|seat| seat.position().x)
        .collect();
    assert_eq!(xs, vec![-7.0, -5.0, -3.0, -1.0, 1.0, 3.0, 5.0, 7.0]);
}

#[test]
fn single_row_layout() {
    let layout = generate(&LayoutParameters::default().with_rows(1));
    assert!(layout.risers().is_empty());
    assert_eq!(layout.seats().len(), 8);
}
