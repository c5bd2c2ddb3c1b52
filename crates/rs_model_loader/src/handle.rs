use std::{ops::Deref, rc::Rc};

pub struct IDGenerator {
    id: u64,
}

impl IDGenerator {
    pub fn new() -> IDGenerator {
        IDGenerator { id: 0 }
    }

    pub fn get_next_id(&mut self) -> u64 {
        let id = self.id;
        self.id += 1;
        id
    }
}

pub struct HandleManager {
    texture_idgenerator: IDGenerator,
    buffer_idgenerator: IDGenerator,
    shader_idgenerator: IDGenerator,
}

impl HandleManager {
    pub fn new() -> HandleManager {
        HandleManager {
            texture_idgenerator: IDGenerator::new(),
            buffer_idgenerator: IDGenerator::new(),
            shader_idgenerator: IDGenerator::new(),
        }
    }

    pub fn next_texture(&mut self) -> TextureHandle {
        let new_id = self.texture_idgenerator.get_next_id();
        TextureHandle {
            inner: Rc::new(new_id),
        }
    }

    pub fn next_buffer(&mut self) -> BufferHandle {
        let new_id = self.buffer_idgenerator.get_next_id();
        BufferHandle {
            inner: Rc::new(new_id),
        }
    }

    pub fn next_shader(&mut self) -> ShaderHandle {
        let new_id = self.shader_idgenerator.get_next_id();
        ShaderHandle {
            inner: Rc::new(new_id),
        }
    }
}

/// Names a texture owned by the asset manager. Dropping a handle never frees the texture.
#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub struct TextureHandle {
    inner: Rc<u64>,
}

impl Deref for TextureHandle {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub struct BufferHandle {
    inner: Rc<u64>,
}

impl Deref for BufferHandle {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub struct ShaderHandle {
    inner: Rc<u64>,
}

impl Deref for ShaderHandle {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
