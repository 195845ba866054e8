/// Per-frame rendering
///
/// Every frame is drawn from scratch based on the current `GameState`:
///
/// - `Normal`: islands background, plus optional red outlines around each region
/// - `Victory` / `Defeat`: their static scene and nothing else
///
/// The canvas has a logical size set, so all coordinates here are logical
/// pixels and SDL2 handles scaling to the real window.
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::assets::SceneTextures;
use crate::game::{GameState, Scene};
use crate::region::RegionCatalog;

const OUTLINE_COLOR: Color = Color::RGB(255, 0, 0);

/// Drawing options that stay fixed for a run
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_region_outlines: bool,
}

/// What a frame will contain, decided without touching the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlan {
    pub scene: Scene,
    pub outlines: bool,
}

impl FramePlan {
    pub fn for_state(state: GameState, options: RenderOptions) -> Self {
        let scene = state.scene();
        FramePlan {
            scene,
            outlines: scene == Scene::Islands && options.show_region_outlines,
        }
    }
}

/// Clear, draw and present one frame
pub fn render_frame(
    canvas: &mut Canvas<Window>,
    textures: &SceneTextures,
    catalog: &RegionCatalog,
    state: GameState,
    options: RenderOptions,
) -> Result<(), String> {
    let plan = FramePlan::for_state(state, options);

    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();

    // Stretch the scene over the whole logical surface
    canvas.copy(textures.get(plan.scene), None, None)?;

    if plan.outlines {
        draw_region_outlines(canvas, catalog)?;
    }

    canvas.present();
    Ok(())
}

/// Draws a 1px outline along the inside edge of every region
fn draw_region_outlines(canvas: &mut Canvas<Window>, catalog: &RegionCatalog) -> Result<(), String> {
    canvas.set_draw_color(OUTLINE_COLOR);
    for region in catalog.regions() {
        canvas.draw_rect(region.bounds())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_frame_with_outlines() {
        let options = RenderOptions { show_region_outlines: true };
        let plan = FramePlan::for_state(GameState::Normal, options);
        assert_eq!(plan, FramePlan { scene: Scene::Islands, outlines: true });
    }

    #[test]
    fn test_outlines_can_be_disabled() {
        let options = RenderOptions { show_region_outlines: false };
        let plan = FramePlan::for_state(GameState::Normal, options);
        assert!(!plan.outlines);
    }

    #[test]
    fn test_terminal_frames_show_scene_only() {
        let options = RenderOptions { show_region_outlines: true };

        let plan = FramePlan::for_state(GameState::Victory, options);
        assert_eq!(plan, FramePlan { scene: Scene::Victory, outlines: false });

        let plan = FramePlan::for_state(GameState::Defeat, options);
        assert_eq!(plan, FramePlan { scene: Scene::Defeat, outlines: false });
    }
}
