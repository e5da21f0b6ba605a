//! Layout assembler.
//!
//! Drives the row-by-seat iteration over the elevation model and the
//! placement grid. [`Placements`] streams the records one at a time;
//! [`generate_layout`] collects them into a [`Layout`].

use std::iter::FusedIterator;

use log::{debug, info, trace, warn};
use serde::Serialize;

use auditorium_core::{
    geometry::PlanBounds,
    params::LayoutParameters,
    placement::{Placement, RiserSpec, SeatSlot},
};

use super::{elevation::RiserElevation, grid::PlacementGrid};
use crate::{config::LayoutConstants, error::AuditoriumError};

/// Streaming placement generator.
///
/// Rows are visited in order; within a row the riser (if the row has one)
/// comes first, followed by the seats in index order. Parameters are
/// validated on construction, so iteration itself cannot fail.
#[derive(Debug, Clone)]
pub struct Placements {
    grid: PlacementGrid,
    constants: LayoutConstants,
    rows: usize,
    seats_per_row: usize,
    row_elevation: f32,
    row: usize,
    seat: usize,
    row_started: bool,
    elevation: Option<RiserElevation>,
    remaining: usize,
}

impl Placements {
    /// Validates `params` and prepares the placement stream.
    ///
    /// # Errors
    ///
    /// Returns [`AuditoriumError::InvalidParameters`] before any geometry is
    /// computed when the parameters are rejected by
    /// [`LayoutParameters::validate`].
    pub fn new(
        params: &LayoutParameters,
        constants: &LayoutConstants,
    ) -> Result<Self, AuditoriumError> {
        params.validate()?;

        debug!(
            rows = params.rows(),
            seats_per_row = params.seats_per_row(),
            row_elevation = params.row_elevation();
            "Placement stream prepared"
        );

        Ok(Self {
            grid: PlacementGrid::new(params, constants),
            constants: *constants,
            rows: params.rows(),
            seats_per_row: params.seats_per_row(),
            row_elevation: params.row_elevation(),
            row: 0,
            seat: 0,
            row_started: false,
            elevation: None,
            // Checked by `validate`; the sum fits in a usize.
            remaining: params.riser_count() + params.seat_count(),
        })
    }

    fn start_row(&mut self) -> Option<RiserSpec> {
        self.row_started = true;

        if self.grid.is_floor_row(self.row) {
            self.elevation = None;
            return None;
        }

        let elevation = RiserElevation::for_row(self.row, self.row_elevation, &self.constants);
        self.elevation = Some(elevation);

        let riser = self.grid.riser(self.row, &elevation);
        if riser.is_degenerate() {
            warn!(
                row = self.row,
                thickness = riser.size().thickness(),
                width = riser.size().width();
                "Degenerate riser emitted"
            );
        }
        Some(riser)
    }
}

impl Iterator for Placements {
    type Item = Placement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.rows {
            return None;
        }

        if !self.row_started {
            if let Some(riser) = self.start_row() {
                trace!(riser:?; "Riser placed");
                self.remaining -= 1;
                return Some(Placement::Riser(riser));
            }
        }

        let seat = self
            .grid
            .seat(self.row, self.seat, self.elevation.as_ref());
        trace!(seat:?; "Seat placed");

        self.seat += 1;
        if self.seat == self.seats_per_row {
            self.row += 1;
            self.seat = 0;
            self.row_started = false;
        }
        self.remaining -= 1;

        Some(Placement::Seat(seat))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Placements {}

impl FusedIterator for Placements {}

/// Upper bound on records reserved up front when collecting a layout.
const MAX_PREALLOCATED: usize = 1 << 16;

/// A fully generated layout.
///
/// `risers` holds one entry per row except the last, `seats` holds
/// `rows * seats_per_row` entries in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip)]
    seats_per_row: usize,
    risers: Vec<RiserSpec>,
    seats: Vec<SeatSlot>,
}

impl Layout {
    /// Collects a placement stream into a layout.
    pub fn from_placements(placements: Placements) -> Self {
        let seats_per_row = placements.seats_per_row;
        let riser_count = placements.rows.saturating_sub(1);
        let seat_count = placements.len() - riser_count.min(placements.len());
        let mut risers = Vec::with_capacity(riser_count.min(MAX_PREALLOCATED));
        let mut seats = Vec::with_capacity(seat_count.min(MAX_PREALLOCATED));

        for placement in placements {
            match placement {
                Placement::Riser(riser) => risers.push(riser),
                Placement::Seat(seat) => seats.push(seat),
            }
        }

        Self {
            seats_per_row,
            risers,
            seats,
        }
    }

    /// Returns the risers, ordered by row
    pub fn risers(&self) -> &[RiserSpec] {
        &self.risers
    }

    /// Returns all seats in row-major order
    pub fn seats(&self) -> &[SeatSlot] {
        &self.seats
    }

    /// Returns the number of rows in the layout
    pub fn rows(&self) -> usize {
        self.seats.len() / self.seats_per_row.max(1)
    }

    /// Returns the seats of `row`, or an empty slice past the last row.
    pub fn seats_in_row(&self, row: usize) -> &[SeatSlot] {
        let start = row.saturating_mul(self.seats_per_row);
        let end = start.saturating_add(self.seats_per_row);
        self.seats.get(start..end).unwrap_or_default()
    }

    /// Returns the riser under `row`, if the row has one
    pub fn riser_for_row(&self, row: usize) -> Option<&RiserSpec> {
        self.risers.get(row)
    }

    /// Returns the floor-plane bounds covering all risers and seat positions.
    pub fn plan_bounds(&self) -> PlanBounds {
        let seat_bounds = self
            .seats
            .iter()
            .map(|seat| PlanBounds::new_from_center(seat.position(), 0.0, 0.0));
        self.risers
            .iter()
            .map(RiserSpec::footprint)
            .chain(seat_bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }
}

/// Generates the complete layout for `params`.
///
/// # Errors
///
/// Returns [`AuditoriumError::InvalidParameters`] when there are no rows or
/// seats, when a spacing is not positive, or when a length is not finite.
/// A negative `row_elevation` is accepted; see
/// [`RiserElevation::for_row`].
///
/// # Examples
///
/// ```
/// use auditorium::{config::LayoutConstants, generate_layout};
/// use auditorium_core::params::LayoutParameters;
///
/// let layout = generate_layout(&LayoutParameters::default(), &LayoutConstants::default())
///     .expect("reference parameters are valid");
/// assert_eq!(layout.risers().len(), 4);
/// assert_eq!(layout.seats().len(), 40);
/// ```
pub fn generate_layout(
    params: &LayoutParameters,
    constants: &LayoutConstants,
) -> Result<Layout, AuditoriumError> {
    info!(
        rows = params.rows(),
        seats_per_row = params.seats_per_row();
        "Generating layout"
    );

    let layout = Layout::from_placements(Placements::new(params, constants)?);

    debug!(
        risers = layout.risers().len(),
        seats = layout.seats().len();
        "Layout generated"
    );

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use auditorium_core::params::ParameterIssue;

    use super::*;

    fn reference() -> Layout {
        generate_layout(&LayoutParameters::default(), &LayoutConstants::default())
            .expect("reference parameters are valid")
    }

    #[test]
    fn test_reference_counts() {
        let layout = reference();
        assert_eq!(layout.risers().len(), 4);
        assert_eq!(layout.seats().len(), 40);
        assert_eq!(layout.rows(), 5);
    }

    #[test]
    fn test_first_seat() {
        let layout = reference();
        let first = layout.seats()[0];
        assert_eq!(first.row(), 0);
        assert_eq!(first.index(), 0);
        assert_eq!(first.position().x, -7.0);
        assert_eq!(first.position().y, 1.0);
        assert_eq!(first.position().z, 6.25);
    }

    #[test]
    fn test_floor_row_shares_fixed_height() {
        let layout = reference();
        let floor_row = layout.seats_in_row(4);
        assert_eq!(floor_row.len(), 8);
        assert!(floor_row.iter().all(|seat| seat.position().y == 1.0));
        assert!(layout.riser_for_row(4).is_none());
    }

    #[test]
    fn test_stream_order_puts_riser_before_its_seats() {
        let params = LayoutParameters::default().with_rows(3).with_seats_per_row(2);
        let placements: Vec<Placement> = Placements::new(&params, &LayoutConstants::default())
            .expect("valid")
            .collect();

        let kinds: Vec<(&str, usize)> = placements
            .iter()
            .map(|placement| match placement {
                Placement::Riser(riser) => ("riser", riser.row()),
                Placement::Seat(seat) => ("seat", seat.row()),
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                ("riser", 0),
                ("seat", 0),
                ("seat", 0),
                ("riser", 1),
                ("seat", 1),
                ("seat", 1),
                ("seat", 2),
                ("seat", 2),
            ]
        );
    }

    #[test]
    fn test_exact_size_hint() {
        let mut placements =
            Placements::new(&LayoutParameters::default(), &LayoutConstants::default())
                .expect("valid");
        assert_eq!(placements.len(), 44);
        placements.next();
        assert_eq!(placements.len(), 43);
        let rest = placements.by_ref().count();
        assert_eq!(rest, 43);
        assert_eq!(placements.len(), 0);
        assert!(placements.next().is_none());
    }

    #[test]
    fn test_single_row_has_no_risers() {
        let params = LayoutParameters::default().with_rows(1);
        let layout = generate_layout(&params, &LayoutConstants::default()).expect("valid");
        assert!(layout.risers().is_empty());
        assert_eq!(layout.seats().len(), 8);
        assert!(layout.seats().iter().all(|seat| seat.position().y == 1.0));
    }

    #[test]
    fn test_invalid_parameters_fail_before_streaming() {
        let params = LayoutParameters::default().with_seats_per_row(0);
        let result = Placements::new(&params, &LayoutConstants::default());
        assert!(matches!(
            result,
            Err(AuditoriumError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_uncountable_grid_is_rejected() {
        let params = LayoutParameters::default()
            .with_rows(usize::MAX / 2)
            .with_seats_per_row(3);
        assert!(params.rows() > 0 && params.seats_per_row() > 0);

        let result = Placements::new(&params, &LayoutConstants::default());
        match result {
            Err(AuditoriumError::InvalidParameters(err)) => assert!(matches!(
                err.issue(),
                ParameterIssue::TooManyPlacements { .. }
            )),
            other => panic!("Expected TooManyPlacements, got {other:?}"),
        }
        assert!(generate_layout(&params, &LayoutConstants::default()).is_err());
    }

    #[test]
    fn test_huge_grid_streams_lazily() {
        let params = LayoutParameters::default()
            .with_rows(usize::MAX / 4)
            .with_seats_per_row(2);
        let mut placements =
            Placements::new(&params, &LayoutConstants::default()).expect("countable grid");

        let expected = params.placement_count().expect("countable grid");
        assert_eq!(placements.len(), expected);

        let head: Vec<Placement> = placements.by_ref().take(3).collect();
        assert!(matches!(head[0], Placement::Riser(_)));
        assert!(matches!(head[1], Placement::Seat(_)));
        assert!(matches!(head[2], Placement::Seat(_)));
        assert_eq!(placements.len(), expected - 3);
    }

    #[test]
    fn test_negative_elevation_is_emitted_unclamped() {
        let params = LayoutParameters::default().with_row_elevation(-0.5);
        let layout = generate_layout(&params, &LayoutConstants::default()).expect("valid");
        let thicknesses: Vec<f32> = layout
            .risers()
            .iter()
            .map(|riser| riser.size().thickness())
            .collect();
        assert_eq!(thicknesses, vec![0.5, 0.0, -0.5, -1.0]);
        assert!(layout.risers()[1].is_degenerate());
    }

    #[test]
    fn test_seats_in_row_out_of_range() {
        let layout = reference();
        assert!(layout.seats_in_row(5).is_empty());
        assert!(layout.seats_in_row(usize::MAX).is_empty());
    }

    #[test]
    fn test_plan_bounds() {
        let bounds = reference().plan_bounds();
        assert_eq!(bounds.min_x(), -9.0);
        assert_eq!(bounds.max_x(), 9.0);
        // Row 0 riser front face and the floor row's seats.
        assert_eq!(bounds.max_z(), 7.5);
        assert_eq!(bounds.min_z(), -3.75);
    }
}
