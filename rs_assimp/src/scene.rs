use crate::{
    convert::ConvertToString, error::Result, get_assimp_error, material::Material, mesh::Mesh,
    node::Node, post_process_steps::PostProcessSteps, raw_ptr_slice,
};
use bitflags::bitflags;
use russimp_sys::*;
use std::{ffi::CString, path::Path};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SceneFlags: u32 {
        const Incomplete = 0x1;
        const Validated = 0x2;
        const ValidationWarning = 0x4;
        const NonVerboseFormat = 0x8;
        const Terrain = 0x10;
    }
}

/// Owned copy of an imported scene. The Assimp import is released as soon as it is copied.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub name: String,
    pub flags: SceneFlags,
    pub root_node: Option<Node>,
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
}

impl Scene {
    fn copy_from(ai_scene: &aiScene) -> Scene {
        let root_node = unsafe { ai_scene.mRootNode.as_ref() }.map(Node::copy_from);
        let meshes = unsafe { raw_ptr_slice(ai_scene.mMeshes, ai_scene.mNumMeshes) }
            .into_iter()
            .map(Mesh::copy_from)
            .collect();
        let materials = unsafe { raw_ptr_slice(ai_scene.mMaterials, ai_scene.mNumMaterials) }
            .into_iter()
            .map(Material::copy_from)
            .collect();
        Scene {
            name: ai_scene.mName.to_string(),
            flags: SceneFlags::from_bits_truncate(ai_scene.mFlags),
            root_node,
            meshes,
            materials,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, flags: PostProcessSteps) -> Result<Scene> {
        let path = path.as_ref();
        let path = path.as_os_str().as_encoded_bytes();
        let path = CString::new(path).map_err(|err| crate::error::Error::Nul(err))?;
        unsafe {
            let ai_scene = aiImportFile(path.as_ptr(), flags.bits());
            let Some(scene) = ai_scene.as_ref() else {
                return Err(crate::error::Error::Assimp(get_assimp_error()));
            };
            let scene = Self::copy_from(scene);
            aiReleaseImport(ai_scene);
            Ok(scene)
        }
    }

    pub fn is_incomplete(&self) -> bool {
        self.flags.contains(SceneFlags::Incomplete)
    }
}

#[cfg(test)]
mod test {
    use super::Scene;
    use crate::post_process_steps::PostProcessSteps;

    #[test]
    fn test_case_missing_file() {
        let result = Scene::from_file(
            "./not_exist/model.fbx",
            PostProcessSteps::Triangulate | PostProcessSteps::FlipUVs,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_case_interior_nul() {
        let result = Scene::from_file("model\0.fbx", PostProcessSteps::Triangulate);
        assert!(matches!(result, Err(crate::error::Error::Nul(_))));
    }
}
