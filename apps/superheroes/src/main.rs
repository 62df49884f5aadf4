use anyhow::Context;
use heroes_core::{Role, SceneNode};
use heroes_ui::outline;
use superheroes::{AppConfig, HeroesRepository, app, init_logging, render};
use web_time::Instant;

// Pixel 4-ish: 411x891 dp at 2.625 px/dp
const WINDOW_DP: (f32, f32) = (411.0, 891.0);
const DENSITY: f32 = 2.625;

fn main() -> anyhow::Result<()> {
    init_logging();

    let size_px = (
        (WINDOW_DP.0 * DENSITY).round() as u32,
        (WINDOW_DP.1 * DENSITY).round() as u32,
    );

    for dark in [false, true] {
        let config = AppConfig::new().dark_theme(dark).density(DENSITY);
        let label = if dark { "dark" } else { "light" };

        let start = Instant::now();
        let frame = render(&config, HeroesRepository::heroes(), size_px, None)
            .with_context(|| format!("rendering {label} preview"))?;
        let elapsed = start.elapsed();

        let texts = frame
            .scene
            .nodes
            .iter()
            .filter(|n| matches!(n, SceneNode::Text { .. }))
            .count();
        log::info!(
            "{label}: {}x{} px, {} scene nodes ({texts} text runs), {} list items in {:?}",
            size_px.0,
            size_px.1,
            frame.scene.nodes.len(),
            frame.with_role(Role::ListItem).count(),
            elapsed
        );
        if let Some(extent) = frame.scroll_extents.first() {
            log::info!(
                "{label}: list viewport {:.0} px, content {:.0} px",
                extent.viewport_px,
                extent.content_px
            );
        }
    }

    println!("{}", outline(&app(&AppConfig::default())));
    Ok(())
}
