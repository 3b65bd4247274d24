//! End-to-end chart behavior against a recording surface.

use chartxy::prelude::*;
use chartxy::{DrawOp, RecordingSurface, TickLength};
use proptest::prelude::*;

/// A 240×320 portrait controller; the chart rotates it to 320×240.
fn display() -> RecordingSurface {
    RecordingSurface::new(240, 320)
}

fn example_chart(surface: &mut RecordingSurface) -> ChartXY {
    let mut chart = ChartXY::new(surface);
    chart.set_viewport(25, 20, 315, 195).unwrap();
    chart.set_x_range(0.0, 100.0, 10.0).unwrap();
    chart.set_y_range(0.0, 100.0, 10.0).unwrap();
    surface.clear_ops();
    chart
}

#[test]
fn axis_ends_map_onto_viewport_corners() {
    let mut surface = display();
    let chart = example_chart(&mut surface);

    assert_eq!(chart.x_to_px(0.0), 25);
    assert_eq!(chart.x_to_px(100.0), 315);
    assert_eq!(chart.y_to_px(0.0), 195);
    assert_eq!(chart.y_to_px(100.0), 20);
}

#[test]
fn full_render_pass_issues_only_in_band_primitives() {
    let mut surface = display();
    let mut chart = example_chart(&mut surface);
    chart.set_y_range(-50.0, 50.0, 25.0).unwrap();
    // Give zero lines a color of their own so they are countable below
    // (the default palette shares red between axis and zero lines).
    chart.theme.zero = Rgb565::ORANGE;

    chart.draw_frame(&mut surface, FrameParts::all(), TickLength::Px(4));
    chart.draw_title(&mut surface, "Sensor");
    chart.draw_x_title(&mut surface, "Time");
    chart.draw_y_title(&mut surface, "Volts");
    chart.draw_point(&mut surface, 40.0, 10.0, 2);
    chart.draw_line(&mut surface, 0.0, -25.0, 100.0, 25.0);

    // The pass must end in the orientation it started in.
    assert_eq!(surface.orientation(), Orientation::LandscapeFlipped);

    // Zero is inside both ranges: one vertical and one horizontal zero line.
    let zero_lines = surface
        .ops()
        .iter()
        .filter(|op| {
            matches!(
                op,
                DrawOp::HLine { color, .. } | DrawOp::VLine { color, .. }
                    if *color == chart.theme.zero
            )
        })
        .count();
    assert_eq!(zero_lines, 2);
}

#[test]
fn reconfiguring_viewport_never_leaves_stale_scales() {
    let mut surface = display();
    let mut chart = example_chart(&mut surface);

    chart.set_viewport(50, 50, 250, 150).unwrap();
    // No axis setter in between: endpoints must land on the new corners.
    assert_eq!(chart.x_to_px(0.0), 50);
    assert_eq!(chart.x_to_px(100.0), 250);
    assert_eq!(chart.y_to_px(0.0), 150);
    assert_eq!(chart.y_to_px(100.0), 50);
}

#[test]
fn rejected_configuration_is_not_observable_in_draws() {
    let mut surface = display();
    let mut chart = example_chart(&mut surface);

    assert!(matches!(
        chart.set_x_range(10.0, 10.0, 1.0),
        Err(ChartError::InvalidRange { .. })
    ));
    assert!(matches!(
        chart.set_x_range(0.0, 10.0, -1.0),
        Err(ChartError::InvalidStep { .. })
    ));
    assert!(matches!(
        chart.set_viewport(0, 0, 400, 100),
        Err(ChartError::InvalidViewport { .. })
    ));

    chart.draw_point(&mut surface, 100.0, 100.0, 1);
    assert_eq!(
        surface.take_ops(),
        vec![DrawOp::FillCircle {
            cx: 315,
            cy: 20,
            radius: 1,
            color: chart.theme.point,
        }]
    );
}

#[test]
fn tick_counts_match_range_division() {
    let mut surface = display();
    let mut chart = example_chart(&mut surface);

    chart.draw_x_axis(&mut surface, TickLength::Px(4));
    assert_eq!(surface.take_ops().len(), 11);

    chart.set_x_range(0.0, 95.0, 10.0).unwrap();
    chart.draw_x_axis(&mut surface, TickLength::Px(4));
    assert_eq!(surface.take_ops().len(), 10);
}

#[test]
fn erase_then_redraw_round_trips_the_same_pixels() {
    let mut surface = display();
    let chart = example_chart(&mut surface);

    chart.draw_point(&mut surface, 33.3, 66.6, 2);
    chart.erase_point(&mut surface, 33.3, 66.6, 2);

    let ops = surface.take_ops();
    match (&ops[0], &ops[1]) {
        (
            DrawOp::FillCircle { cx: a, cy: b, .. },
            DrawOp::FillCircle {
                cx: c,
                cy: d,
                color,
                ..
            },
        ) => {
            assert_eq!((a, b), (c, d));
            assert_eq!(*color, chart.theme.chart_bg);
        }
        other => panic!("unexpected ops: {other:?}"),
    }
}

#[test]
fn legend_draws_at_caller_position_with_caller_style() {
    let mut surface = display();
    let chart = example_chart(&mut surface);
    chart.draw_legend(&mut surface, "ch0", 200, 30, 2, Rgb565::CYAN);

    assert_eq!(
        surface.take_ops(),
        vec![DrawOp::Text {
            x: 200,
            y: 30,
            text: "ch0".into(),
            style: TextStyle::new(2, Rgb565::CYAN, chart.theme.chart_bg),
        }]
    );
}

proptest! {
    #[test]
    fn transforms_round_trip_for_arbitrary_ranges(
        min in -1_000.0f32..1_000.0,
        width in 1.0f32..5_000.0,
        t in 0.0f32..1.0,
    ) {
        let mut surface = display();
        let mut chart = example_chart(&mut surface);
        chart.set_x_range(min, min + width, width / 4.0).unwrap();

        let v = min + t * width;
        let back = chart.px_to_x(chart.x_to_px(v));
        let unit = width / 290.0;
        prop_assert!((back - v).abs() <= unit, "v={v} back={back} unit={unit}");
    }

    #[test]
    fn zero_line_drawn_iff_zero_in_range(
        min in -500.0f32..500.0,
        width in 1.0f32..1_000.0,
    ) {
        let mut surface = display();
        let mut chart = example_chart(&mut surface);
        chart.set_x_range(min, min + width, width / 2.0).unwrap();

        chart.draw_x_zero(&mut surface);
        let expected = min <= 0.0 && min + width >= 0.0;
        prop_assert_eq!(surface.ops().len(), usize::from(expected));
    }
}
