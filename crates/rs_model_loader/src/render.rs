use crate::{
    handle::{ShaderHandle, TextureHandle},
    material::ETextureChannel,
    mesh::Mesh,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ERenderPassType {
    MaterialRequired,
    /// Passes such as depth only, which never sample material textures.
    NoMaterialRequired,
}

pub trait MeshRenderer {
    fn bind_texture(
        &mut self,
        shader: &ShaderHandle,
        channel: ETextureChannel,
        texture: Option<&TextureHandle>,
    );

    fn draw_mesh(&mut self, mesh: &Mesh);
}
