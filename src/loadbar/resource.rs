//! Names of the well known resources reporting their loading progress.
//!
//! The loader accepts any name, these are only the ones the application uses.

pub(crate) const SCENE: &str = "scene-model";
pub(crate) const LEVEL_CONFIG: &str = "level-config";
pub(crate) const TEXTURE_FIRE: &str = "tex-fire";
