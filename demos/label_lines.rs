//! Prints label placement candidates for a sample airspace outline.
//!
//! Usage:
//! ```text
//! cargo run --example label_lines                  # limit 4, merge below 10°
//! cargo run --example label_lines -- 2 5.0         # limit 2, merge below 5°
//! RUST_LOG=geolabel=trace cargo run --example label_lines
//! ```

use geolabel::{GeolabelError, LabelLineParams, LongPolygonLines, Polygon, Viewport};

fn main() -> Result<(), GeolabelError> {
    // Default: WARN for everything, INFO for geolabel.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geolabel=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let limit = args.next().and_then(|a| a.parse().ok()).unwrap_or(4);
    let max_merge_angle = args.next().and_then(|a| a.parse().ok()).unwrap_or(10.0);

    let params = LabelLineParams {
        limit,
        max_merge_angle,
        detect_circle: true,
    };
    params.validate()?;

    // Screen coordinates: the outline leaves the viewport on the right.
    let outline = Polygon::from_xy(&[
        (120.0, 80.0),
        (300.0, 82.0),
        (480.0, 85.0),
        (900.0, 140.0),
        (880.0, 420.0),
        (460.0, 430.0),
        (200.0, 380.0),
        (110.0, 250.0),
        (120.0, 80.0),
    ])?;
    let viewport = Viewport::new(0.0, 0.0, 640.0, 480.0)?;

    println!("winding: {:?}", outline.orientation());

    let result = LongPolygonLines::new(&outline, &viewport)
        .with_params(params)
        .execute();
    println!("circle: {:?}", result.circle);
    for seg in &result.segments {
        let line = seg.line();
        println!(
            "edges {:?}: ({:.1}, {:.1}) -> ({:.1}, {:.1}) length {:.1} bearing {:.1}",
            seg.index_range(),
            line.p1.x,
            line.p1.y,
            line.p2.x,
            line.p2.y,
            seg.length(),
            seg.angle()
        );
    }
    Ok(())
}
