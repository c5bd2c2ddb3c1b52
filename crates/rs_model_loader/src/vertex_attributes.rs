use crate::scene;

/// Per-vertex attributes of one mesh as parallel sequences of identical length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexAttributes {
    pub positions: Vec<glam::Vec3>,
    pub uvs: Vec<glam::Vec2>,
    pub normals: Vec<glam::Vec3>,
    pub tangents: Vec<glam::Vec3>,
    pub bitangents: Vec<glam::Vec3>,
}

impl VertexAttributes {
    /// Missing texture coordinates read as (0, 0); missing normal frame entries read as zero.
    pub fn extract(mesh: &scene::Mesh) -> VertexAttributes {
        let vertex_count = mesh.vertex_count();
        let mut attributes = VertexAttributes {
            positions: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            tangents: Vec::with_capacity(vertex_count),
            bitangents: Vec::with_capacity(vertex_count),
        };

        let read = |values: &[glam::Vec3], index: usize| -> glam::Vec3 {
            values.get(index).copied().unwrap_or(glam::Vec3::ZERO)
        };

        for (index, position) in mesh.vertices.iter().enumerate() {
            let uv = match &mesh.texture_coords {
                Some(texture_coords) => texture_coords
                    .get(index)
                    .copied()
                    .unwrap_or(glam::Vec2::ZERO),
                None => glam::Vec2::ZERO,
            };
            attributes.positions.push(*position);
            attributes.uvs.push(uv);
            attributes.normals.push(read(&mesh.normals, index));
            attributes.tangents.push(read(&mesh.tangents, index));
            attributes.bitangents.push(read(&mesh.bitangents, index));
        }
        attributes
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod test {
    use super::VertexAttributes;
    use crate::scene;

    fn quad() -> scene::Mesh {
        scene::Mesh {
            vertices: vec![
                glam::vec3(0.0, 0.0, 0.0),
                glam::vec3(1.0, 0.0, 0.0),
                glam::vec3(1.0, 1.0, 0.0),
                glam::vec3(0.0, 1.0, 0.0),
            ],
            normals: vec![glam::Vec3::Z; 4],
            tangents: vec![glam::Vec3::X; 4],
            bitangents: vec![glam::Vec3::Y; 4],
            ..Default::default()
        }
    }

    #[test]
    fn test_case_parallel_lengths() {
        let mut mesh = quad();
        mesh.texture_coords = Some(vec![
            glam::vec2(0.0, 0.0),
            glam::vec2(1.0, 0.0),
            glam::vec2(1.0, 1.0),
            glam::vec2(0.0, 1.0),
        ]);
        let attributes = VertexAttributes::extract(&mesh);
        assert_eq!(attributes.vertex_count(), 4);
        assert_eq!(attributes.uvs.len(), 4);
        assert_eq!(attributes.normals.len(), 4);
        assert_eq!(attributes.tangents.len(), 4);
        assert_eq!(attributes.bitangents.len(), 4);
        assert_eq!(attributes.positions[2], glam::vec3(1.0, 1.0, 0.0));
        assert_eq!(attributes.uvs[2], glam::vec2(1.0, 1.0));
        assert_eq!(attributes.normals[3], glam::Vec3::Z);
    }

    #[test]
    fn test_case_missing_uv_channel() {
        let attributes = VertexAttributes::extract(&quad());
        assert!(attributes.uvs.iter().all(|uv| *uv == glam::Vec2::ZERO));
        assert_eq!(attributes.uvs.len(), 4);
    }

    #[test]
    fn test_case_missing_normals() {
        let mut mesh = quad();
        mesh.normals.clear();
        mesh.tangents.clear();
        mesh.bitangents.clear();
        let attributes = VertexAttributes::extract(&mesh);
        assert_eq!(attributes.normals, vec![glam::Vec3::ZERO; 4]);
        assert_eq!(attributes.tangents.len(), 4);
        assert_eq!(attributes.bitangents.len(), 4);
    }
}
