//! Integration tests for the AuditoriumBuilder API
//!
//! These tests verify that the public API works and is usable.

use auditorium::{
    AuditoriumBuilder, AuditoriumError,
    config::{AppConfig, LayoutConstants, StyleConfig},
    params::{LayoutParameters, ParameterIssue},
    placement::Placement,
};

#[test]
fn test_builder_api_exists() {
    let _builder = AuditoriumBuilder::default();
}

#[test]
fn test_reference_scenario() {
    let params = LayoutParameters::default()
        .with_room(20.0, 25.0, 10.0)
        .with_rows(5)
        .with_seats_per_row(8)
        .with_seat_spacing(2.0)
        .with_row_spacing(2.5)
        .with_row_elevation(0.5);

    let layout = AuditoriumBuilder::default()
        .generate(&params)
        .expect("Failed to generate layout");

    assert_eq!(layout.risers().len(), 4);
    assert_eq!(layout.seats().len(), 40);
    assert_eq!(layout.seats()[0].position().x, -7.0);

    let floor_heights: Vec<f32> = layout
        .seats_in_row(4)
        .iter()
        .map(|seat| seat.position().y)
        .collect();
    assert_eq!(floor_heights.len(), 8);
    assert!(floor_heights.iter().all(|&y| y == floor_heights[0]));
    assert!(layout.riser_for_row(4).is_none());
}

#[test]
fn test_rejects_each_invalid_parameter() {
    let builder = AuditoriumBuilder::default();
    let base = LayoutParameters::default();

    let cases = [
        (base.with_rows(0), ParameterIssue::NoRows),
        (base.with_seats_per_row(0), ParameterIssue::NoSeats),
        (
            base.with_seat_spacing(0.0),
            ParameterIssue::NonPositiveSeatSpacing(0.0),
        ),
        (
            base.with_row_spacing(0.0),
            ParameterIssue::NonPositiveRowSpacing(0.0),
        ),
    ];

    for (params, expected) in cases {
        match builder.generate(&params) {
            Err(AuditoriumError::InvalidParameters(err)) => assert_eq!(err.issue(), expected),
            other => panic!("Expected InvalidParameters for {params:?}, got {other:?}"),
        }
        assert!(builder.placements(&params).is_err());
    }
}

#[test]
fn test_streaming_matches_collected_layout() {
    let builder = AuditoriumBuilder::default();
    let params = LayoutParameters::default();
    let layout = builder.generate(&params).expect("Failed to generate");

    let mut risers = Vec::new();
    let mut seats = Vec::new();
    for placement in builder.placements(&params).expect("Failed to stream") {
        match placement {
            Placement::Riser(riser) => risers.push(riser),
            Placement::Seat(seat) => seats.push(seat),
        }
    }

    assert_eq!(risers, layout.risers());
    assert_eq!(seats, layout.seats());
}

#[test]
fn test_render_svg() {
    let builder = AuditoriumBuilder::default();
    let params = LayoutParameters::default();
    let layout = builder.generate(&params).expect("Failed to generate");
    let result = builder.render_svg(&params, &layout);

    if let Ok(svg) = result {
        assert!(svg.contains("<svg"), "Output should contain SVG tag");
        assert!(svg.contains("</svg>"), "Output should be complete SVG");
    } else {
        panic!("Failed to render: {:?}", result.err());
    }
}

#[test]
fn test_render_svg_with_bad_style_fails() {
    let style: StyleConfig = toml::from_str("riser_color = \"definitely-not\"").expect("toml");
    let builder = AuditoriumBuilder::new(AppConfig::new(LayoutConstants::default(), style));
    let params = LayoutParameters::default();
    let layout = builder.generate(&params).expect("Failed to generate");

    let result = builder.render_svg(&params, &layout);
    assert!(matches!(result, Err(AuditoriumError::Export(_))));
}

#[test]
fn test_custom_constants_flow_through() {
    let constants = LayoutConstants::default()
        .with_riser_margin(0.0)
        .with_floor_seat_height(0.25);
    let builder = AuditoriumBuilder::new(AppConfig::new(constants, StyleConfig::default()));
    let layout = builder
        .generate(&LayoutParameters::default())
        .expect("Failed to generate");

    assert!(layout.risers().iter().all(|riser| riser.size().width() == 20.0));
    assert!(layout.seats_in_row(4).iter().all(|seat| seat.position().y == 0.25));
}

#[test]
fn test_builder_reusability() {
    let builder = AuditoriumBuilder::default();

    let small = LayoutParameters::default().with_rows(2).with_seats_per_row(3);
    let large = LayoutParameters::default().with_rows(12).with_seats_per_row(20);

    let first = builder.generate(&small).expect("Failed to generate small");
    let second = builder.generate(&large).expect("Failed to generate large");

    assert_eq!(first.seats().len(), 6);
    assert_eq!(second.seats().len(), 240);
    assert_eq!(second.risers().len(), 11);
}
