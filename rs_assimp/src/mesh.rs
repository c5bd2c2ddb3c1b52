use crate::{
    bone::Bone,
    convert::{ConvertToString, ConvertToVec3},
    face::Face,
    raw_ptr_slice, raw_slice,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<glam::Vec3>,
    pub normals: Vec<glam::Vec3>,
    pub tangents: Vec<glam::Vec3>,
    pub bitangents: Vec<glam::Vec3>,
    /// One entry per Assimp texture coordinate channel, `None` where the channel is absent.
    pub texture_coords: Vec<Option<Vec<glam::Vec3>>>,
    pub bones: Vec<Bone>,
    pub faces: Vec<Face>,
    pub material_index: u32,
}

fn copy_vec3s(data: *const russimp_sys::aiVector3D, len: u32) -> Vec<glam::Vec3> {
    unsafe { raw_slice(data, len) }
        .iter()
        .map(|x| x.to_vec3())
        .collect()
}

impl Mesh {
    pub fn copy_from(c: &russimp_sys::aiMesh) -> Mesh {
        let vertex_count = c.mNumVertices;
        let bones = unsafe { raw_ptr_slice(c.mBones, c.mNumBones) }
            .into_iter()
            .map(Bone::copy_from)
            .collect();
        let texture_coords = c
            .mTextureCoords
            .iter()
            .map(|channel| {
                if channel.is_null() {
                    None
                } else {
                    Some(copy_vec3s(*channel, vertex_count))
                }
            })
            .collect();
        let faces = unsafe { raw_slice(c.mFaces, c.mNumFaces) }
            .iter()
            .map(Face::copy_from)
            .collect();

        Mesh {
            name: c.mName.to_string(),
            vertices: copy_vec3s(c.mVertices, vertex_count),
            normals: copy_vec3s(c.mNormals, vertex_count),
            tangents: copy_vec3s(c.mTangents, vertex_count),
            bitangents: copy_vec3s(c.mBitangents, vertex_count),
            texture_coords,
            bones,
            faces,
            material_index: c.mMaterialIndex,
        }
    }
}
