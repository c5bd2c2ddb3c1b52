pub mod asset_manager;
#[cfg(feature = "assimp")]
pub mod assimp_importer;
pub mod bone;
pub mod error;
pub mod handle;
pub mod importer;
pub mod index_builder;
pub mod logger;
pub mod material;
pub mod material_resolver;
pub mod mesh;
pub mod mesh_vertex;
pub mod model;
pub mod model_loader;
pub mod render;
pub mod scene;
pub mod settings;
#[cfg(test)]
mod test_logger;
pub mod texture;
pub mod vertex_attributes;
pub mod vertex_bone_data;
