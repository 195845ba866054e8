//! Scene textures
//!
//! The three full-screen images are loaded once before the window shows any
//! frame. Any failure aborts startup.

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::fmt;
use tracing::info;

use crate::config::AssetPaths;
use crate::game::Scene;

/// Error types for asset loading
#[derive(Debug, Clone)]
pub enum AssetError {
    Load {
        scene: Scene,
        path: String,
        reason: String,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetError::Load { scene, path, reason } => {
                write!(f, "Failed to load {:?} texture from {}: {}", scene, path, reason)
            }
        }
    }
}

impl std::error::Error for AssetError {}

impl From<AssetError> for String {
    fn from(error: AssetError) -> Self {
        error.to_string()
    }
}

/// Helper struct to hold all scene textures
pub struct SceneTextures<'a> {
    pub islands: Texture<'a>,
    pub victory: Texture<'a>,
    pub defeat: Texture<'a>,
}

impl<'a> SceneTextures<'a> {
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        paths: &AssetPaths,
    ) -> Result<Self, AssetError> {
        Ok(SceneTextures {
            islands: load_texture(texture_creator, Scene::Islands, &paths.islands)?,
            victory: load_texture(texture_creator, Scene::Victory, &paths.victory)?,
            defeat: load_texture(texture_creator, Scene::Defeat, &paths.defeat)?,
        })
    }

    pub fn get(&self, scene: Scene) -> &Texture<'a> {
        match scene {
            Scene::Islands => &self.islands,
            Scene::Victory => &self.victory,
            Scene::Defeat => &self.defeat,
        }
    }
}

/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    scene: Scene,
    path: &str,
) -> Result<Texture<'a>, AssetError> {
    let texture = texture_creator
        .load_texture(path)
        .map_err(|reason| AssetError::Load {
            scene,
            path: path.to_string(),
            reason,
        })?;

    let query = texture.query();
    info!(?scene, path, width = query.width, height = query.height, "texture_loaded");
    Ok(texture)
}
