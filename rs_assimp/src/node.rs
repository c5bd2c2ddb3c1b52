use crate::{
    convert::{ConvertToMat4, ConvertToString},
    raw_ptr_slice, raw_slice,
};
use russimp_sys::aiNode;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub transformation: glam::Mat4,
    /// Indices into the scene's mesh array.
    pub meshes: Vec<u32>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn copy_from(c: &aiNode) -> Node {
        let meshes = unsafe { raw_slice(c.mMeshes, c.mNumMeshes) }.to_vec();
        let children = unsafe { raw_ptr_slice(c.mChildren, c.mNumChildren) }
            .into_iter()
            .map(Node::copy_from)
            .collect();
        Node {
            name: c.mName.to_string(),
            transformation: c.mTransformation.to_mat4(),
            meshes,
            children,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Node;
    use crate::convert::test::{ai_string, ai_translation};
    use russimp_sys::aiNode;

    #[test]
    fn test_case_copy_tree() {
        let mut child: aiNode = unsafe { std::mem::zeroed() };
        child.mName = ai_string("arm");
        child.mTransformation = ai_translation(4.0, 0.0, 0.0);

        let mut mesh_indices: Vec<u32> = vec![0, 3];
        let mut children: Vec<*mut aiNode> = vec![
            std::ptr::null_mut(),
            &mut child as *mut aiNode,
        ];
        let mut root: aiNode = unsafe { std::mem::zeroed() };
        root.mName = ai_string("root");
        root.mTransformation = ai_translation(0.0, 0.0, 0.0);
        root.mNumMeshes = mesh_indices.len() as _;
        root.mMeshes = mesh_indices.as_mut_ptr();
        root.mNumChildren = children.len() as _;
        root.mChildren = children.as_mut_ptr();

        let node = Node::copy_from(&root);
        assert_eq!(node.name, "root");
        assert_eq!(node.meshes, vec![0, 3]);
        assert_eq!(node.transformation, glam::Mat4::IDENTITY);
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].name, "arm");
        assert!(node.children[0].meshes.is_empty());
        assert!(node.children[0].children.is_empty());
        assert_eq!(
            node.children[0].transformation.w_axis,
            glam::vec4(4.0, 0.0, 0.0, 1.0)
        );
    }
}
