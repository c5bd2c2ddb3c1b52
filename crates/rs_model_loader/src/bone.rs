use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneData {
    pub bone_id: i32,
    pub inverse_bind_pose: glam::Mat4,
}

/// Model-wide bone table. Ids are handed out in first-seen order and shared by every mesh of
/// the model, so a skeleton-wide transform array can be indexed by them.
#[derive(Debug, Clone, Default)]
pub struct BoneRegistry {
    bone_data_map: HashMap<String, BoneData>,
    bone_count: i32,
}

impl BoneRegistry {
    pub fn new() -> BoneRegistry {
        BoneRegistry::default()
    }

    /// Returns the id already assigned to `name`, or assigns the next one.
    /// The offset matrix of a bone seen before is ignored.
    pub fn register_bone(&mut self, name: &str, offset_matrix: glam::Mat4) -> i32 {
        if let Some(bone_data) = self.bone_data_map.get(name) {
            return bone_data.bone_id;
        }
        let bone_data = BoneData {
            bone_id: self.bone_count,
            inverse_bind_pose: offset_matrix,
        };
        self.bone_count += 1;
        self.bone_data_map.insert(name.to_string(), bone_data);
        log::trace!("Register bone: {}, id: {}", name, bone_data.bone_id);
        bone_data.bone_id
    }

    pub fn get_bone_data(&self, name: &str) -> Option<&BoneData> {
        self.bone_data_map.get(name)
    }

    pub fn get_bone_count(&self) -> i32 {
        self.bone_count
    }

    pub fn into_parts(self) -> (HashMap<String, BoneData>, i32) {
        (self.bone_data_map, self.bone_count)
    }
}
