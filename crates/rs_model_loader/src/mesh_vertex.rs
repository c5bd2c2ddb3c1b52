use type_layout::TypeLayout;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, TypeLayout)]
pub struct MeshVertex0 {
    pub position: glam::Vec3,
    pub tex_coord: glam::Vec2,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, TypeLayout)]
pub struct MeshVertex1 {
    pub normal: glam::Vec3,
    pub tangent: glam::Vec3,
    pub bitangent: glam::Vec3,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, TypeLayout)]
pub struct MeshVertex2 {
    pub bone_ids: glam::IVec4,
    pub bone_weights: glam::Vec4,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshVertexStreams {
    pub vertex0: Vec<MeshVertex0>,
    pub vertex1: Vec<MeshVertex1>,
    /// Empty for meshes without bones.
    pub vertex2: Vec<MeshVertex2>,
}
