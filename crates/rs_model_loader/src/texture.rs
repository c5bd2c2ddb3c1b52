use crate::handle::TextureHandle;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureSettings {
    pub is_srgb: bool,
}

/// Asynchronous texture source. The returned handle may name a texture that is still loading.
pub trait TextureLoader {
    fn load_2d_texture_async(
        &mut self,
        path: &str,
        settings: &TextureSettings,
    ) -> Option<TextureHandle>;
}
