use crate::scene::Face;

/// Flattens faces into one index list. Faces are expected to be triangulated already.
pub fn build_indices(faces: &[Face]) -> Vec<u32> {
    let mut indices = Vec::with_capacity(faces.len() * 3);
    for face in faces {
        indices.extend_from_slice(&face.indices);
    }
    indices
}
