use crate::{
    handle::{ShaderHandle, TextureHandle},
    render::MeshRenderer,
    scene::ETextureType,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ETextureChannel {
    Albedo,
    Normal,
    AmbientOcclusion,
    Displacement,
}

impl ETextureChannel {
    /// Only color data is gamma encoded.
    pub fn is_srgb(&self) -> bool {
        match self {
            ETextureChannel::Albedo => true,
            ETextureChannel::Normal
            | ETextureChannel::AmbientOcclusion
            | ETextureChannel::Displacement => false,
        }
    }

    pub fn source_texture_type(&self) -> ETextureType {
        match self {
            ETextureChannel::Albedo => ETextureType::Diffuse,
            ETextureChannel::Normal => ETextureType::Normals,
            ETextureChannel::AmbientOcclusion => ETextureType::Ambient,
            ETextureChannel::Displacement => ETextureType::Displacement,
        }
    }
}

/// At most one texture per channel. The textures belong to the asset manager.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    albedo_map: Option<TextureHandle>,
    normal_map: Option<TextureHandle>,
    ambient_occlusion_map: Option<TextureHandle>,
    displacement_map: Option<TextureHandle>,
}

impl Material {
    pub fn new() -> Material {
        Material::default()
    }

    pub fn get_texture(&self, channel: ETextureChannel) -> Option<&TextureHandle> {
        match channel {
            ETextureChannel::Albedo => self.albedo_map.as_ref(),
            ETextureChannel::Normal => self.normal_map.as_ref(),
            ETextureChannel::AmbientOcclusion => self.ambient_occlusion_map.as_ref(),
            ETextureChannel::Displacement => self.displacement_map.as_ref(),
        }
    }

    pub fn set_texture(&mut self, channel: ETextureChannel, texture: Option<TextureHandle>) {
        let slot = match channel {
            ETextureChannel::Albedo => &mut self.albedo_map,
            ETextureChannel::Normal => &mut self.normal_map,
            ETextureChannel::AmbientOcclusion => &mut self.ambient_occlusion_map,
            ETextureChannel::Displacement => &mut self.displacement_map,
        };
        *slot = texture;
    }

    pub fn is_empty(&self) -> bool {
        ETextureChannel::iter().all(|channel| self.get_texture(channel).is_none())
    }

    pub fn bind_material_information(&self, shader: &ShaderHandle, renderer: &mut dyn MeshRenderer) {
        for channel in ETextureChannel::iter() {
            renderer.bind_texture(shader, channel, self.get_texture(channel));
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ETextureChannel, Material};
    use crate::handle::HandleManager;
    use strum::IntoEnumIterator;

    #[test]
    fn test_case_color_space() {
        assert!(ETextureChannel::Albedo.is_srgb());
        assert!(!ETextureChannel::Normal.is_srgb());
        assert!(!ETextureChannel::AmbientOcclusion.is_srgb());
        assert!(!ETextureChannel::Displacement.is_srgb());
    }

    #[test]
    fn test_case_slots() {
        let mut handle_manager = HandleManager::new();
        let mut material = Material::new();
        assert!(material.is_empty());
        let normal = handle_manager.next_texture();
        material.set_texture(ETextureChannel::Normal, Some(normal.clone()));
        assert!(!material.is_empty());
        for channel in ETextureChannel::iter() {
            if channel == ETextureChannel::Normal {
                assert_eq!(material.get_texture(channel), Some(&normal));
            } else {
                assert!(material.get_texture(channel).is_none());
            }
        }
        material.set_texture(ETextureChannel::Normal, None);
        assert!(material.is_empty());
    }
}
