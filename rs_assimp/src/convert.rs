use russimp_sys::{aiMatrix4x4, aiString, aiVector3D};

pub(crate) trait ConvertToMat4 {
    fn to_mat4(&self) -> glam::Mat4;
}

pub(crate) trait ConvertToString {
    fn to_string(&self) -> String;
}

pub(crate) trait ConvertToVec3 {
    fn to_vec3(&self) -> glam::Vec3;
}

impl ConvertToVec3 for aiVector3D {
    fn to_vec3(&self) -> glam::Vec3 {
        glam::vec3(self.x, self.y, self.z)
    }
}

impl ConvertToMat4 for aiMatrix4x4 {
    /// Assimp stores rows, glam stores columns.
    fn to_mat4(&self) -> glam::Mat4 {
        glam::mat4(
            glam::vec4(self.a1, self.b1, self.c1, self.d1),
            glam::vec4(self.a2, self.b2, self.c2, self.d2),
            glam::vec4(self.a3, self.b3, self.c3, self.d3),
            glam::vec4(self.a4, self.b4, self.c4, self.d4),
        )
    }
}

impl ConvertToString for aiString {
    fn to_string(&self) -> String {
        self.into()
    }
}
