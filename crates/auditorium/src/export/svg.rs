//! Top-down SVG plan of a generated layout.
//!
//! The plan looks down the Y axis: room X maps to SVG x and room Z maps to
//! SVG y, so the screen wall (at `-Z`) is drawn at the top of the page and
//! rows further from the screen appear lower down.

use std::io::Write;

use glam::Vec3;
use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use auditorium_core::{
    color::Color,
    geometry::PlanBounds,
    placement::{RiserSpec, SeatSlot},
};

use super::{Error, Exporter};
use crate::{
    config::StyleConfig,
    layout::Layout,
    room::{RoomEnvelope, Surface},
};

/// Radius of a seat marker in world units.
const SEAT_RADIUS: f32 = 0.4;
/// Length of the facing tick drawn from a seat's center, in world units.
const FACING_TICK: f32 = 0.7;
/// Depth of the screen bar in world units.
const SCREEN_DEPTH: f32 = 0.2;
/// Lowest fill opacity used for the thinnest riser.
const MIN_RISER_OPACITY: f32 = 0.35;

/// Builder for [`Svg`] exporters.
pub struct SvgBuilder<W: Write> {
    writer: W,
    style: StyleConfig,
}

impl<W: Write> SvgBuilder<W> {
    /// Creates a builder that will write the document to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            style: StyleConfig::default(),
        }
    }

    /// Sets the style used for colors, scale and padding.
    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Resolves the style and creates the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a configured color cannot be parsed or
    /// the scale is not a positive number.
    pub fn build(self) -> Result<Svg<W>, Error> {
        let style = &self.style;
        if !(style.scale() > 0.0 && style.scale().is_finite()) {
            return Err(Error::Render(format!(
                "plan scale must be positive, got {}",
                style.scale()
            )));
        }

        Ok(Svg {
            writer: self.writer,
            background: style.background_color().map_err(Error::Render)?,
            floor: style.floor_color().map_err(Error::Render)?,
            wall: style.wall_color().map_err(Error::Render)?,
            screen: style.screen_color().map_err(Error::Render)?,
            riser: style.riser_color().map_err(Error::Render)?,
            seat: style.seat_color().map_err(Error::Render)?,
            scale: style.scale(),
            padding: style.padding().max(0.0),
        })
    }
}

/// SVG plan exporter writing into `W`.
pub struct Svg<W: Write> {
    writer: W,
    background: Option<Color>,
    floor: Color,
    wall: Color,
    screen: Color,
    riser: Color,
    seat: Color,
    scale: f32,
    padding: f32,
}

/// Maps room-space floor coordinates to SVG user units.
#[derive(Debug, Clone, Copy)]
struct PlanProjection {
    origin_x: f32,
    origin_z: f32,
    scale: f32,
}

impl PlanProjection {
    fn new(bounds: PlanBounds, scale: f32) -> Self {
        Self {
            origin_x: bounds.min_x(),
            origin_z: bounds.min_z(),
            scale,
        }
    }

    fn x(self, x: f32) -> f32 {
        (x - self.origin_x) * self.scale
    }

    fn y(self, z: f32) -> f32 {
        (z - self.origin_z) * self.scale
    }

    fn length(self, length: f32) -> f32 {
        length * self.scale
    }

    fn rect(self, bounds: PlanBounds) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", self.x(bounds.min_x()))
            .set("y", self.y(bounds.min_z()))
            .set("width", self.length(bounds.width()))
            .set("height", self.length(bounds.depth()))
    }
}

impl<W: Write> Svg<W> {
    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Renders the plan of `layout` inside `room` to an SVG document.
    pub fn render_plan(&self, room: &RoomEnvelope, layout: &Layout) -> Document {
        let floor = room.floor();
        let room_bounds = PlanBounds::new_from_center(floor.center(), floor.width(), floor.height());
        let bounds = room_bounds
            .merge(&layout.plan_bounds())
            .add_padding(self.padding);
        let projection = PlanProjection::new(bounds, self.scale);

        let width = projection.length(bounds.width());
        let height = projection.length(bounds.depth());
        debug!(width, height; "Plan dimensions");

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(background) = &self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("width", width)
                    .set("height", height)
                    .set("fill", background),
            );
        }

        doc = doc.add(self.render_room(room, room_bounds, projection));
        doc = doc.add(self.render_risers(layout.risers(), projection));
        doc.add(self.render_seats(layout.seats(), projection))
    }

    fn render_room(
        &self,
        room: &RoomEnvelope,
        room_bounds: PlanBounds,
        projection: PlanProjection,
    ) -> svg_element::Group {
        let floor = projection
            .rect(room_bounds)
            .set("fill", &self.floor)
            .set("stroke", "none");

        let stroke_width = projection.length(0.15);
        let wall = |surface: &Surface| {
            let half = surface.width() / 2.0;
            let along = surface.rotation() * Vec3::X * half;
            let center = surface.center();
            svg_element::Line::new()
                .set("x1", projection.x(center.x - along.x))
                .set("y1", projection.y(center.z - along.z))
                .set("x2", projection.x(center.x + along.x))
                .set("y2", projection.y(center.z + along.z))
                .set("stroke", &self.wall)
                .set("stroke-width", stroke_width)
        };

        let screen = room.screen();
        let screen_bounds = PlanBounds::new_from_center(screen.center(), screen.width(), SCREEN_DEPTH);

        svg_element::Group::new()
            .set("class", "room")
            .add(floor)
            .add(wall(room.screen_wall()))
            .add(wall(room.left_wall()))
            .add(wall(room.right_wall()))
            .add(
                projection
                    .rect(screen_bounds)
                    .set("class", "screen")
                    .set("fill", &self.screen),
            )
    }

    fn render_risers(&self, risers: &[RiserSpec], projection: PlanProjection) -> svg_element::Group {
        let tallest = risers
            .iter()
            .map(|riser| riser.size().thickness())
            .fold(0.0f32, f32::max);

        risers.iter().fold(
            svg_element::Group::new().set("class", "risers"),
            |group, riser| {
                let rect = projection
                    .rect(riser.footprint())
                    .set("data-row", riser.row())
                    .set("data-thickness", riser.size().thickness());

                let rect = if riser.is_degenerate() {
                    rect.set("fill", "none")
                        .set("stroke", &self.wall)
                        .set("stroke-dasharray", "4 2")
                } else {
                    let shade = riser.size().thickness() / tallest;
                    let opacity = MIN_RISER_OPACITY + (1.0 - MIN_RISER_OPACITY) * shade;
                    rect.set("fill", &self.riser)
                        .set("fill-opacity", opacity * self.riser.alpha())
                        .set("stroke", "none")
                };

                group.add(rect)
            },
        )
    }

    fn render_seats(&self, seats: &[SeatSlot], projection: PlanProjection) -> svg_element::Group {
        seats.iter().fold(
            svg_element::Group::new().set("class", "seats"),
            |group, seat| {
                let position = seat.position();
                let facing = seat.rotation() * Vec3::X * FACING_TICK;

                let marker = svg_element::Group::new()
                    .set("data-row", seat.row())
                    .set("data-seat", seat.index())
                    .add(
                        svg_element::Circle::new()
                            .set("cx", projection.x(position.x))
                            .set("cy", projection.y(position.z))
                            .set("r", projection.length(SEAT_RADIUS))
                            .set("fill", &self.seat),
                    )
                    .add(
                        svg_element::Line::new()
                            .set("x1", projection.x(position.x))
                            .set("y1", projection.y(position.z))
                            .set("x2", projection.x(position.x + facing.x))
                            .set("y2", projection.y(position.z + facing.z))
                            .set("stroke", &self.wall)
                            .set("stroke-width", projection.length(0.08)),
                    );

                group.add(marker)
            },
        )
    }

    fn write_document(&mut self, doc: &Document) -> Result<(), Error> {
        if let Err(err) = write!(self.writer, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(Error::Io(err));
        }
        Ok(())
    }
}

impl<W: Write> Exporter for Svg<W> {
    fn export_layout(&mut self, room: &RoomEnvelope, layout: &Layout) -> Result<(), Error> {
        let doc = self.render_plan(room, layout);
        debug!("SVG document rendered");

        self.write_document(&doc)?;
        info!(
            risers = layout.risers().len(),
            seats = layout.seats().len();
            "SVG plan written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use auditorium_core::params::LayoutParameters;

    use super::*;
    use crate::{config::LayoutConstants, layout::generate_layout};

    fn render(params: &LayoutParameters, style: &StyleConfig) -> String {
        let layout = generate_layout(params, &LayoutConstants::default()).expect("valid");
        let room = RoomEnvelope::new(params);
        let mut exporter = SvgBuilder::new(Vec::new())
            .with_style(style)
            .build()
            .expect("valid style");
        exporter.export_layout(&room, &layout).expect("export");
        String::from_utf8(exporter.into_inner()).expect("utf-8")
    }

    #[test]
    fn test_plan_contains_every_placement() {
        let svg = render(&LayoutParameters::default(), &StyleConfig::default());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 40);
        assert_eq!(svg.matches("data-thickness").count(), 4);
        assert!(svg.contains("class=\"screen\""));
    }

    #[test]
    fn test_plan_size_follows_scale() {
        // Room 20 x 25 plus 1 unit of padding on every side.
        let svg = render(&LayoutParameters::default(), &StyleConfig::default());
        assert!(svg.contains("viewBox=\"0 0 528 648\""));
    }

    #[test]
    fn test_degenerate_risers_are_outlined() {
        let params = LayoutParameters::default().with_row_elevation(-0.5);
        let svg = render(&params, &StyleConfig::default());
        assert_eq!(svg.matches("stroke-dasharray").count(), 3);
    }

    #[test]
    fn test_invalid_scale_is_rejected() {
        let style: StyleConfig = toml::from_str("scale = 0.0").expect("valid toml");
        let result = SvgBuilder::new(Vec::new()).with_style(&style).build();
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let style: StyleConfig = toml::from_str("seat_color = \"nope\"").expect("valid toml");
        let result = SvgBuilder::new(Vec::new()).with_style(&style).build();
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
