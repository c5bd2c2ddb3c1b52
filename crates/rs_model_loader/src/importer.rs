use crate::{error::Result, scene::Scene, settings::ImportSettings};
use std::path::Path;

pub trait SceneImporter {
    /// An `Err` stands for "no scene", carrying the importer's error string.
    fn import(&self, path: &Path, settings: &ImportSettings) -> Result<Scene>;
}

/// Treats an importer error, an incomplete scene and a scene without root node the same way.
pub fn validate_scene(path: &Path, result: Result<Scene>) -> Result<Scene> {
    let scene = result?;
    if scene.is_incomplete() {
        return Err(crate::error::Error::IncompleteScene(format!(
            "{} is incomplete",
            path.display()
        )));
    }
    if scene.root_node.is_none() {
        return Err(crate::error::Error::MissingRootNode(format!(
            "{} has no root node",
            path.display()
        )));
    }
    Ok(scene)
}
