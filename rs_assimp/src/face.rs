use crate::raw_slice;

#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub indices: Vec<u32>,
}

impl Face {
    pub fn copy_from(c: &russimp_sys::aiFace) -> Face {
        let indices = unsafe { raw_slice(c.mIndices, c.mNumIndices) }.to_vec();
        Face { indices }
    }
}
