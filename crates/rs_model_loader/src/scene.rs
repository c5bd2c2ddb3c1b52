//! Owned scene graph handed over by a [`crate::importer::SceneImporter`].

use bitflags::bitflags;
use std::collections::HashMap;
use strum_macros::EnumIter;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SceneFlags: u32 {
        const INCOMPLETE = 0x1;
        const VALIDATED = 0x2;
        const VALIDATION_WARNING = 0x4;
        const NON_VERBOSE_FORMAT = 0x8;
        const TERRAIN = 0x10;
    }
}

#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ETextureType {
    Diffuse,
    Specular,
    Ambient,
    Emissive,
    Height,
    Normals,
    Displacement,
    BaseColor,
    AmbientOcclusion,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexWeight {
    pub vertex_id: u32,
    pub weight: f32,
}

impl VertexWeight {
    pub fn new(vertex_id: u32, weight: f32) -> VertexWeight {
        VertexWeight { vertex_id, weight }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Face {
    pub indices: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bone {
    pub name: String,
    /// Inverse bind pose.
    pub offset_matrix: glam::Mat4,
    pub weights: Vec<VertexWeight>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<glam::Vec3>,
    pub normals: Vec<glam::Vec3>,
    pub tangents: Vec<glam::Vec3>,
    pub bitangents: Vec<glam::Vec3>,
    /// First texture coordinate channel, if the source has one.
    pub texture_coords: Option<Vec<glam::Vec2>>,
    pub bones: Vec<Bone>,
    pub faces: Vec<Face>,
    pub material_index: Option<usize>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    pub name: String,
    pub textures: HashMap<ETextureType, Vec<String>>,
}

impl Material {
    pub fn get_texture_count(&self, texture_type: ETextureType) -> usize {
        self.textures
            .get(&texture_type)
            .map(|paths| paths.len())
            .unwrap_or(0)
    }

    pub fn get_texture(&self, texture_type: ETextureType, index: usize) -> Option<&str> {
        self.textures
            .get(&texture_type)
            .and_then(|paths| paths.get(index))
            .map(|path| path.as_str())
    }

    pub fn add_texture(&mut self, texture_type: ETextureType, path: impl Into<String>) {
        self.textures
            .entry(texture_type)
            .or_default()
            .push(path.into());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub transformation: glam::Mat4,
    /// Indices into [`Scene::meshes`].
    pub meshes: Vec<usize>,
    pub children: Vec<Node>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            name: Default::default(),
            transformation: glam::Mat4::IDENTITY,
            meshes: Default::default(),
            children: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub flags: SceneFlags,
    pub root_node: Option<Node>,
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
}

impl Scene {
    pub fn is_incomplete(&self) -> bool {
        self.flags.contains(SceneFlags::INCOMPLETE)
    }
}

#[cfg(test)]
mod test {
    use super::{ETextureType, Material};

    #[test]
    fn test_case_material_textures_keep_order() {
        let mut material = Material::default();
        material.add_texture(ETextureType::Diffuse, "a.png");
        material.add_texture(ETextureType::Diffuse, "b.png");
        assert_eq!(material.get_texture_count(ETextureType::Diffuse), 2);
        assert_eq!(material.get_texture(ETextureType::Diffuse, 0), Some("a.png"));
        assert_eq!(material.get_texture(ETextureType::Diffuse, 1), Some("b.png"));
        assert_eq!(material.get_texture_count(ETextureType::Normals), 0);
        assert_eq!(material.get_texture(ETextureType::Normals, 0), None);
    }
}
