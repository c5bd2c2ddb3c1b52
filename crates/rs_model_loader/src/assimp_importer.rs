use crate::{
    error::Result,
    importer::SceneImporter,
    scene::{Bone, ETextureType, Face, Material, Mesh, Node, Scene, SceneFlags, VertexWeight},
    settings::ImportSettings,
};
use rs_assimp::{post_process_steps::PostProcessSteps, texture_type::TextureType};
use std::path::Path;

pub fn get_post_process_steps(settings: &ImportSettings) -> PostProcessSteps {
    let mut steps = PostProcessSteps::empty();
    if settings.is_triangulate {
        steps |= PostProcessSteps::Triangulate;
    }
    if settings.is_flip_uvs {
        steps |= PostProcessSteps::FlipUVs;
    }
    if settings.is_calc_tangent_space {
        steps |= PostProcessSteps::CalcTangentSpace;
    }
    steps
}

fn to_texture_type(texture_type: TextureType) -> ETextureType {
    match texture_type {
        TextureType::Diffuse => ETextureType::Diffuse,
        TextureType::Specular => ETextureType::Specular,
        TextureType::Ambient => ETextureType::Ambient,
        TextureType::Emissive => ETextureType::Emissive,
        TextureType::Height => ETextureType::Height,
        TextureType::Normals => ETextureType::Normals,
        TextureType::Displacement => ETextureType::Displacement,
        TextureType::BaseColor => ETextureType::BaseColor,
        TextureType::AmbientOcclusion => ETextureType::AmbientOcclusion,
    }
}

fn to_node(node: rs_assimp::node::Node) -> Node {
    Node {
        name: node.name,
        transformation: node.transformation,
        meshes: node.meshes.into_iter().map(|x| x as usize).collect(),
        children: node.children.into_iter().map(to_node).collect(),
    }
}

fn to_bone(bone: rs_assimp::bone::Bone) -> Bone {
    Bone {
        name: bone.name,
        offset_matrix: bone.offset_matrix,
        weights: bone
            .weights
            .iter()
            .map(|x| VertexWeight::new(x.vertex_id, x.weight))
            .collect(),
    }
}

fn to_mesh(mesh: rs_assimp::mesh::Mesh) -> Mesh {
    let texture_coords = mesh
        .texture_coords
        .into_iter()
        .next()
        .flatten()
        .map(|channel| channel.iter().map(|x| x.truncate()).collect());
    Mesh {
        name: mesh.name,
        vertices: mesh.vertices,
        normals: mesh.normals,
        tangents: mesh.tangents,
        bitangents: mesh.bitangents,
        texture_coords,
        bones: mesh.bones.into_iter().map(to_bone).collect(),
        faces: mesh
            .faces
            .into_iter()
            .map(|x| Face { indices: x.indices })
            .collect(),
        material_index: Some(mesh.material_index as usize),
    }
}

fn to_material(material: rs_assimp::material::Material) -> Material {
    Material {
        name: material.name,
        textures: material
            .textures
            .into_iter()
            .map(|(texture_type, paths)| (to_texture_type(texture_type), paths))
            .collect(),
    }
}

pub fn to_scene(scene: rs_assimp::scene::Scene) -> Scene {
    Scene {
        flags: SceneFlags::from_bits_truncate(scene.flags.bits()),
        root_node: scene.root_node.map(to_node),
        meshes: scene.meshes.into_iter().map(to_mesh).collect(),
        materials: scene.materials.into_iter().map(to_material).collect(),
    }
}

/// Imports through Assimp with the post-processing steps picked by [`ImportSettings`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AssimpImporter;

impl AssimpImporter {
    pub fn new() -> AssimpImporter {
        AssimpImporter
    }
}

impl SceneImporter for AssimpImporter {
    fn import(&self, path: &Path, settings: &ImportSettings) -> Result<Scene> {
        let steps = get_post_process_steps(settings);
        log::trace!("Import {} with {:?}", path.display(), steps);
        let scene = rs_assimp::scene::Scene::from_file(path, steps)
            .map_err(|err| crate::error::Error::Assimp(err))?;
        Ok(to_scene(scene))
    }
}
