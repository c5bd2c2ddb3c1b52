use crate::{
    handle::BufferHandle,
    material::Material,
    mesh_vertex::{MeshVertex0, MeshVertex1, MeshVertex2, MeshVertexStreams},
    render::MeshRenderer,
    vertex_attributes::VertexAttributes,
    vertex_bone_data::VertexBoneData,
};

pub struct MeshBuffer {
    pub vertex_buffers: Vec<BufferHandle>,
    pub vertex_count: u32,
    pub index_buffer: Option<BufferHandle>,
    pub index_count: Option<u32>,
}

/// Receives finished meshes and creates their GPU buffers.
pub trait MeshBufferUploader {
    fn upload_mesh_buffers(&mut self, mesh: &Mesh) -> MeshBuffer;
}

pub struct Mesh {
    positions: Vec<glam::Vec3>,
    uvs: Vec<glam::Vec2>,
    normals: Vec<glam::Vec3>,
    tangents: Vec<glam::Vec3>,
    bitangents: Vec<glam::Vec3>,
    bone_data: Vec<VertexBoneData>,
    indices: Vec<u32>,
    vertex_streams: MeshVertexStreams,
    mesh_buffer: Option<MeshBuffer>,
    pub(crate) material: Material,
}

impl Mesh {
    /// `bone_data` is either empty or holds one entry per vertex.
    pub fn new(
        attributes: VertexAttributes,
        bone_data: Vec<VertexBoneData>,
        indices: Vec<u32>,
    ) -> Mesh {
        let vertex_count = attributes.vertex_count();
        assert!(
            attributes.uvs.len() == vertex_count
                && attributes.normals.len() == vertex_count
                && attributes.tangents.len() == vertex_count
                && attributes.bitangents.len() == vertex_count,
            "Vertex attribute sequences must have the same length"
        );
        assert!(bone_data.is_empty() || bone_data.len() == vertex_count);
        let VertexAttributes {
            positions,
            uvs,
            normals,
            tangents,
            bitangents,
        } = attributes;
        let mut mesh = Mesh {
            positions,
            uvs,
            normals,
            tangents,
            bitangents,
            bone_data,
            indices,
            vertex_streams: MeshVertexStreams::default(),
            mesh_buffer: None,
            material: Material::new(),
        };
        mesh.load_data();
        mesh
    }

    fn load_data(&mut self) {
        let vertex_count = self.positions.len();
        let mut streams = MeshVertexStreams {
            vertex0: Vec::with_capacity(vertex_count),
            vertex1: Vec::with_capacity(vertex_count),
            vertex2: Vec::with_capacity(self.bone_data.len()),
        };
        for index in 0..vertex_count {
            streams.vertex0.push(MeshVertex0 {
                position: self.positions[index],
                tex_coord: self.uvs[index],
            });
            streams.vertex1.push(MeshVertex1 {
                normal: self.normals[index],
                tangent: self.tangents[index],
                bitangent: self.bitangents[index],
            });
        }
        for bone_data in &self.bone_data {
            streams.vertex2.push(MeshVertex2 {
                bone_ids: glam::IVec4::from_array(bone_data.bone_ids),
                bone_weights: glam::Vec4::from_array(bone_data.weights),
            });
        }
        self.vertex_streams = streams;
    }

    pub fn generate_gpu_data(&mut self, uploader: &mut dyn MeshBufferUploader) {
        let mesh_buffer = uploader.upload_mesh_buffers(self);
        self.mesh_buffer = Some(mesh_buffer);
    }

    pub fn draw(&self, renderer: &mut dyn MeshRenderer) {
        renderer.draw_mesh(self);
    }

    pub fn is_render_ready(&self) -> bool {
        self.mesh_buffer.is_some()
    }

    pub fn is_skinned(&self) -> bool {
        !self.bone_data.is_empty()
    }

    pub fn get_vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn get_positions(&self) -> &[glam::Vec3] {
        &self.positions
    }

    pub fn get_uvs(&self) -> &[glam::Vec2] {
        &self.uvs
    }

    pub fn get_normals(&self) -> &[glam::Vec3] {
        &self.normals
    }

    pub fn get_tangents(&self) -> &[glam::Vec3] {
        &self.tangents
    }

    pub fn get_bitangents(&self) -> &[glam::Vec3] {
        &self.bitangents
    }

    pub fn get_bone_data(&self) -> &[VertexBoneData] {
        &self.bone_data
    }

    pub fn get_indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn get_vertex_streams(&self) -> &MeshVertexStreams {
        &self.vertex_streams
    }

    pub fn get_mesh_buffer(&self) -> Option<&MeshBuffer> {
        self.mesh_buffer.as_ref()
    }

    pub fn get_material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::{Mesh, MeshBuffer, MeshBufferUploader};
    use crate::{
        handle::HandleManager, vertex_attributes::VertexAttributes,
        vertex_bone_data::VertexBoneData,
    };

    pub(crate) struct FakeUploader {
        pub handle_manager: HandleManager,
        pub uploaded_vertex_counts: Vec<usize>,
    }

    impl FakeUploader {
        pub fn new() -> FakeUploader {
            FakeUploader {
                handle_manager: HandleManager::new(),
                uploaded_vertex_counts: vec![],
            }
        }
    }

    impl MeshBufferUploader for FakeUploader {
        fn upload_mesh_buffers(&mut self, mesh: &Mesh) -> MeshBuffer {
            self.uploaded_vertex_counts.push(mesh.get_vertex_count());
            let streams = mesh.get_vertex_streams();
            let mut vertex_buffers = vec![
                self.handle_manager.next_buffer(),
                self.handle_manager.next_buffer(),
            ];
            if !streams.vertex2.is_empty() {
                vertex_buffers.push(self.handle_manager.next_buffer());
            }
            MeshBuffer {
                vertex_buffers,
                vertex_count: mesh.get_vertex_count() as u32,
                index_buffer: Some(self.handle_manager.next_buffer()),
                index_count: Some(mesh.get_indices().len() as u32),
            }
        }
    }

    fn triangle_attributes() -> VertexAttributes {
        VertexAttributes {
            positions: vec![glam::Vec3::X, glam::Vec3::Y, glam::Vec3::Z],
            uvs: vec![glam::Vec2::ZERO, glam::Vec2::X, glam::Vec2::Y],
            normals: vec![glam::Vec3::Z; 3],
            tangents: vec![glam::Vec3::X; 3],
            bitangents: vec![glam::Vec3::Y; 3],
        }
    }

    #[test]
    fn test_case_vertex_streams() {
        let mut bone_data = vec![VertexBoneData::default(); 3];
        bone_data[1].add_bone_data(2, 0.75);
        let mesh = Mesh::new(triangle_attributes(), bone_data, vec![0, 1, 2]);
        let streams = mesh.get_vertex_streams();
        assert_eq!(streams.vertex0.len(), 3);
        assert_eq!(streams.vertex1.len(), 3);
        assert_eq!(streams.vertex2.len(), 3);
        assert_eq!(streams.vertex0[1].tex_coord, glam::Vec2::X);
        assert_eq!(streams.vertex2[1].bone_ids, glam::ivec4(2, -1, -1, -1));
        assert_eq!(streams.vertex2[1].bone_weights, glam::vec4(0.75, 0.0, 0.0, 0.0));
        assert!(mesh.is_skinned());
        assert!(!mesh.is_render_ready());
    }

    #[test]
    fn test_case_unskinned_upload() {
        let mut mesh = Mesh::new(triangle_attributes(), vec![], vec![0, 1, 2]);
        assert!(mesh.get_vertex_streams().vertex2.is_empty());
        let mut uploader = FakeUploader::new();
        mesh.generate_gpu_data(&mut uploader);
        assert!(mesh.is_render_ready());
        let mesh_buffer = mesh.get_mesh_buffer().unwrap();
        assert_eq!(mesh_buffer.vertex_buffers.len(), 2);
        assert_eq!(mesh_buffer.vertex_count, 3);
        assert_eq!(mesh_buffer.index_count, Some(3));
    }
}
