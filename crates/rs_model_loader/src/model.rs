use crate::{
    bone::BoneData,
    handle::ShaderHandle,
    mesh::{Mesh, MeshBufferUploader},
    render::{ERenderPassType, MeshRenderer},
};
use std::collections::HashMap;

pub struct Model {
    pub(crate) meshes: Vec<Mesh>,
    pub(crate) bone_data_map: HashMap<String, BoneData>,
    pub(crate) bone_count: i32,
    pub(crate) global_inverse_transform: glam::Mat4,
    pub(crate) directory: String,
    pub(crate) name: String,
}

impl Model {
    pub fn new() -> Model {
        Model {
            meshes: vec![],
            bone_data_map: HashMap::new(),
            bone_count: 0,
            global_inverse_transform: glam::Mat4::IDENTITY,
            directory: String::new(),
            name: String::new(),
        }
    }

    pub fn from_mesh(mesh: Mesh) -> Model {
        Self::from_meshes(vec![mesh])
    }

    pub fn from_meshes(meshes: Vec<Mesh>) -> Model {
        let mut model = Model::new();
        model.meshes = meshes;
        model
    }

    /// Material information is only bound for passes that sample it.
    pub fn draw(
        &self,
        shader: &ShaderHandle,
        pass: ERenderPassType,
        renderer: &mut dyn MeshRenderer,
    ) {
        for mesh in &self.meshes {
            if pass == ERenderPassType::MaterialRequired {
                mesh.get_material()
                    .bind_material_information(shader, renderer);
            }
            mesh.draw(renderer);
        }
    }

    pub fn generate_gpu_data(&mut self, uploader: &mut dyn MeshBufferUploader) {
        for mesh in &mut self.meshes {
            mesh.generate_gpu_data(uploader);
        }
    }

    /// An empty model is what a failed load leaves behind.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn get_meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn get_bone_data_map(&self) -> &HashMap<String, BoneData> {
        &self.bone_data_map
    }

    pub fn get_bone_count(&self) -> i32 {
        self.bone_count
    }

    pub fn get_global_inverse_transform(&self) -> glam::Mat4 {
        self.global_inverse_transform
    }

    pub fn get_directory(&self) -> &str {
        &self.directory
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
