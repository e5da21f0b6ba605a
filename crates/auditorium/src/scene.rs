//! Seams to the renderer that draws a layout.
//!
//! The generator never touches renderer objects. A host implements
//! [`SceneHost`] and an [`AssetProvider`], and [`populate`] hands it one
//! placement at a time together with the asset handles it asked for. How a
//! seat is instanced (true clones, shared meshes, GPU instancing) is the
//! host's choice; `populate` only clones whatever handle the provider returns.

use log::{debug, info};

use auditorium_core::placement::{Placement, RiserSpec, SeatSlot};

/// Supplies the handles a host needs to draw placements.
///
/// The values are opaque to this crate; they are only passed through.
pub trait AssetProvider {
    /// Handle to one seat instance. Cloned once per seat.
    type Renderable: Clone;

    /// Material applied to every riser.
    type Material;

    /// Returns the seat prototype to instance at every seat slot.
    fn seat_prototype(&self) -> Self::Renderable;

    /// Returns the material for riser blocks.
    fn riser_material(&self) -> Self::Material;
}

/// Receives placements and owns whatever it builds from them.
pub trait SceneHost<A: AssetProvider> {
    /// Adds a riser block at the given transform.
    fn place_riser(&mut self, riser: &RiserSpec, material: &A::Material);

    /// Adds one seat instance at the given transform.
    fn place_seat(&mut self, seat: &SeatSlot, instance: A::Renderable);
}

/// Counts of what [`populate`] handed to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    pub risers: usize,
    pub seats: usize,
}

/// Feeds every placement to `host`.
///
/// The seat prototype and riser material are requested once; each seat gets
/// its own clone of the prototype.
pub fn populate<A, H, I>(host: &mut H, assets: &A, placements: I) -> PopulateSummary
where
    A: AssetProvider,
    H: SceneHost<A>,
    I: IntoIterator<Item = Placement>,
{
    let prototype = assets.seat_prototype();
    let material = assets.riser_material();
    let mut summary = PopulateSummary::default();

    for placement in placements {
        match placement {
            Placement::Riser(riser) => {
                host.place_riser(&riser, &material);
                summary.risers += 1;
            }
            Placement::Seat(seat) => {
                host.place_seat(&seat, prototype.clone());
                summary.seats += 1;
            }
        }
    }

    debug!(risers = summary.risers, seats = summary.seats; "Placements handed to host");
    info!("Scene populated");

    summary
}
