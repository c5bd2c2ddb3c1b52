use crate::{
    bone::BoneRegistry,
    error::Result,
    importer::{validate_scene, SceneImporter},
    index_builder::build_indices,
    material_resolver::resolve_material,
    mesh::Mesh,
    model::Model,
    scene,
    settings::Settings,
    texture::TextureLoader,
    vertex_attributes::VertexAttributes,
    vertex_bone_data::{assign_bone_influences, VertexBoneData},
};
use std::path::Path;

/// Everything before the last `/`, or nothing when the path has no `/`.
pub fn get_model_directory(path: &str) -> String {
    match path.rfind('/') {
        Some(index) => path[..index].to_string(),
        None => String::new(),
    }
}

/// Everything after the last `/` or `\`.
pub fn get_model_name(path: &str) -> String {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(index) => path[index + 1..].to_string(),
        None => path.to_string(),
    }
}

struct LoadContext<'a> {
    scene: &'a scene::Scene,
    directory: &'a str,
    bone_registry: &'a mut BoneRegistry,
    texture_loader: &'a mut dyn TextureLoader,
    meshes: Vec<Mesh>,
}

pub struct ModelLoader {
    settings: Settings,
}

impl ModelLoader {
    pub fn new(settings: Settings) -> ModelLoader {
        ModelLoader { settings }
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Logs a failed import and hands back an empty model.
    pub fn load_model(
        &self,
        path: &str,
        importer: &dyn SceneImporter,
        texture_loader: &mut dyn TextureLoader,
    ) -> Model {
        match self.try_load_model(path, importer, texture_loader) {
            Ok(model) => model,
            Err(err) => {
                log::error!("Failed to load model - {}", err);
                Model::new()
            }
        }
    }

    pub fn try_load_model(
        &self,
        path: &str,
        importer: &dyn SceneImporter,
        texture_loader: &mut dyn TextureLoader,
    ) -> Result<Model> {
        let scene = validate_scene(
            Path::new(path),
            importer.import(Path::new(path), &self.settings.import_setting),
        )?;
        let mut model = Model::new();
        model.directory = get_model_directory(path);
        model.name = get_model_name(path);
        Self::load_scene(&mut model, &scene, texture_loader);
        log::debug!(
            "Loaded model {}: {} meshes, {} bones",
            model.name,
            model.meshes.len(),
            model.bone_count
        );
        Ok(model)
    }

    fn load_scene(
        model: &mut Model,
        scene: &scene::Scene,
        texture_loader: &mut dyn TextureLoader,
    ) {
        let Some(root_node) = &scene.root_node else {
            return;
        };
        model.global_inverse_transform = root_node.transformation.inverse();

        let mut bone_registry = BoneRegistry::new();
        let mut context = LoadContext {
            scene,
            directory: &model.directory,
            bone_registry: &mut bone_registry,
            texture_loader,
            meshes: vec![],
        };
        Self::process_node(&mut context, root_node);
        let meshes = context.meshes;
        let (bone_data_map, bone_count) = bone_registry.into_parts();
        model.meshes = meshes;
        model.bone_data_map = bone_data_map;
        model.bone_count = bone_count;
    }

    fn process_node(context: &mut LoadContext, node: &scene::Node) {
        log::trace!("Process node: {}", node.name);
        for mesh_index in &node.meshes {
            let scene = context.scene;
            let Some(mesh) = scene.meshes.get(*mesh_index) else {
                log::warn!(
                    "Node {} references mesh {} which does not exist",
                    node.name,
                    mesh_index
                );
                continue;
            };
            let mesh = Self::process_mesh(context, mesh);
            context.meshes.push(mesh);
        }
        for child in &node.children {
            Self::process_node(context, child);
        }
    }

    fn process_mesh(context: &mut LoadContext, source_mesh: &scene::Mesh) -> Mesh {
        let attributes = VertexAttributes::extract(source_mesh);

        let mut bone_weights: Vec<VertexBoneData> = vec![];
        if !source_mesh.bones.is_empty() {
            bone_weights = vec![VertexBoneData::default(); source_mesh.vertex_count()];
            for bone in &source_mesh.bones {
                let bone_id = context
                    .bone_registry
                    .register_bone(&bone.name, bone.offset_matrix);
                assign_bone_influences(&mut bone_weights, bone_id, &bone.weights);
            }
        }

        let indices = build_indices(&source_mesh.faces);

        let mut mesh = Mesh::new(attributes, bone_weights, indices);

        if let Some(material) = source_mesh
            .material_index
            .and_then(|index| context.scene.materials.get(index))
        {
            mesh.material = resolve_material(material, context.directory, context.texture_loader);
        }
        mesh
    }
}
