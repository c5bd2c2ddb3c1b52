use crate::{
    convert::{ConvertToMat4, ConvertToString},
    raw_slice,
    vertex_weight::VertexWeight,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    pub name: String,
    pub offset_matrix: glam::Mat4,
    pub weights: Vec<VertexWeight>,
}

impl Bone {
    pub fn copy_from(c: &russimp_sys::aiBone) -> Bone {
        let weights = unsafe { raw_slice(c.mWeights, c.mNumWeights) }
            .iter()
            .map(VertexWeight::from)
            .collect();
        Bone {
            name: c.mName.to_string(),
            offset_matrix: c.mOffsetMatrix.to_mat4(),
            weights,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Bone;
    use crate::convert::test::{ai_string, ai_translation};
    use russimp_sys::{aiBone, aiVertexWeight};

    #[test]
    fn test_case_copy_bone() {
        let mut weights = vec![
            aiVertexWeight {
                mVertexId: 0,
                mWeight: 0.25,
            },
            aiVertexWeight {
                mVertexId: 7,
                mWeight: 0.75,
            },
        ];
        let mut ai_bone: aiBone = unsafe { std::mem::zeroed() };
        ai_bone.mName = ai_string("spine");
        ai_bone.mNumWeights = weights.len() as _;
        ai_bone.mWeights = weights.as_mut_ptr();
        ai_bone.mOffsetMatrix = ai_translation(0.0, -1.5, 0.0);

        let bone = Bone::copy_from(&ai_bone);
        assert_eq!(bone.name, "spine");
        assert_eq!(bone.weights.len(), 2);
        assert_eq!(bone.weights[1].vertex_id, 7);
        assert_eq!(bone.weights[1].weight, 0.75);
        assert_eq!(bone.offset_matrix.w_axis, glam::vec4(0.0, -1.5, 0.0, 1.0));
    }

    #[test]
    fn test_case_null_weights() {
        let mut ai_bone: aiBone = unsafe { std::mem::zeroed() };
        ai_bone.mNumWeights = 3;
        let bone = Bone::copy_from(&ai_bone);
        assert!(bone.weights.is_empty());
    }
}
