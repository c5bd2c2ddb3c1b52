use crate::{
    handle::TextureHandle,
    material::{ETextureChannel, Material},
    scene,
    texture::{TextureLoader, TextureSettings},
};
use strum::IntoEnumIterator;

/// Textures are assumed to live next to the model file.
pub fn join_texture_path(directory: &str, relative_path: &str) -> String {
    if directory.is_empty() {
        relative_path.to_string()
    } else {
        format!("{}/{}", directory, relative_path)
    }
}

pub fn load_material_texture(
    material: &scene::Material,
    channel: ETextureChannel,
    directory: &str,
    texture_loader: &mut dyn TextureLoader,
) -> Option<TextureHandle> {
    let texture_type = channel.source_texture_type();
    if material.get_texture_count(texture_type) > 1 {
        log::warn!(
            "Material {} contains more than one {:?} texture, only the first one is used",
            material.name,
            texture_type
        );
    }
    let relative_path = material.get_texture(texture_type, 0)?;
    let path = join_texture_path(directory, relative_path);
    log::trace!("Request texture: {}, channel: {:?}", path, channel);
    let settings = TextureSettings {
        is_srgb: channel.is_srgb(),
    };
    texture_loader.load_2d_texture_async(&path, &settings)
}

pub fn resolve_material(
    material: &scene::Material,
    directory: &str,
    texture_loader: &mut dyn TextureLoader,
) -> Material {
    let mut resolved = Material::new();
    for channel in ETextureChannel::iter() {
        let texture = load_material_texture(material, channel, directory, texture_loader);
        resolved.set_texture(channel, texture);
    }
    resolved
}
