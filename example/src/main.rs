//! Headless walkthrough of a progress indicator's lifecycle.
//!
//! Runs a simulated 60 fps frame loop: an indeterminate phase while a fake
//! download is "connecting", then determinate progress with the expressive
//! wave, then completion. Plans, meshes and semantics are logged through
//! `tracing`; set `RUST_LOG=tessera_progress=debug` to see the core's own
//! events.

use std::time::Duration;

use tessera_progress::{
    ActiveShape, Dp, IndicatorConfig, IndicatorMode, LinearProgressIndicator, MaterialColorScheme,
    ProgressIndicatorTheme, TextDirection, ThemeVariant, dp::set_scale_factor, resolve_theme,
    tessellate_plan,
};
use tracing::info;

const FRAME: Duration = Duration::from_millis(16);

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,example=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    set_scale_factor(2.0);

    let scheme = MaterialColorScheme::default();
    let ambient = ProgressIndicatorTheme::default().track_gap(Dp(6.0));
    let config = IndicatorConfig::default()
        .mode(IndicatorMode::Expressive)
        .semantics_label("Downloading update");
    let mut indicator = LinearProgressIndicator::new(config)?;

    let theme = resolve_theme(
        indicator.config(),
        Some(&ambient),
        ThemeVariant::Material,
        &scheme,
    );
    let canvas = indicator.measure(None, &theme);
    info!(?canvas, "measured indicator");

    // Connecting: one full indeterminate loop.
    for frame in 0..=112 {
        indicator.tick(FRAME);
        let plan = indicator.paint(&theme, canvas, TextDirection::Ltr);
        if frame % 28 == 0 {
            let spans: Vec<_> = plan
                .active
                .iter()
                .map(|shape| {
                    let bounds = shape.bounds();
                    (bounds.left(), bounds.width)
                })
                .collect();
            info!(
                phase = indicator.driver().current_phase(),
                ?spans,
                "indeterminate frame"
            );
        }
    }

    // Downloading: ease toward each reported chunk.
    for target in [0.25, 0.6, 1.0] {
        indicator.animate_to(target);
        while indicator.tick(FRAME) {
            indicator.paint(&theme, canvas, TextDirection::Ltr);
        }
        let plan = indicator.paint(&theme, canvas, TextDirection::Ltr);
        let shape = match plan.active.first() {
            Some(ActiveShape::Wave { stroke, .. }) => format!("wave, {} samples", stroke.path.len()),
            Some(ActiveShape::Bar(_)) => "bar".to_owned(),
            None => "none".to_owned(),
        };
        let mesh = tessellate_plan(plan)?;
        let semantics = indicator.semantics();
        info!(
            value = target,
            shape = %shape,
            vertices = mesh.vertices.len(),
            triangles = mesh.indices.len() / 3,
            label = ?semantics.label,
            "determinate frame"
        );
    }

    // Same state laid out right to left.
    let rtl = indicator.paint(&theme, canvas, TextDirection::Rtl);
    if let Some(stop) = rtl.stop_indicator {
        info!(center = ?stop.center, "stop indicator in rtl");
    }

    let node = indicator.semantics().to_accesskit_node();
    info!(role = ?node.role(), value = ?node.numeric_value(), "accessibility node");
    Ok(())
}
