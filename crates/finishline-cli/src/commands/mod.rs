pub mod check;
pub mod init;
pub mod run;
pub mod snapshot;
pub mod sweep;

use finishline_core::Scene;
use std::path::Path;

/// Load a scene, applying optional viewport overrides.
pub(crate) fn load_scene(
    path: &Path,
    scroll: Option<f64>,
    width: Option<f64>,
) -> Result<Scene, Box<dyn std::error::Error>> {
    let mut scene = Scene::load(path)?;
    if let Some(scroll) = scroll {
        scene.page.set_scroll_top(scroll);
    }
    if let Some(width) = width {
        scene.page.set_viewport_width(width);
    }
    Ok(scene)
}
