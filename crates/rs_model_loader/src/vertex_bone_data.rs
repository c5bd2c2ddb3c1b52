use crate::scene::VertexWeight;

pub const MAX_BONES_PER_VERTEX: usize = 4;

pub const INVALID_BONE_ID: i32 = -1;

/// Fixed slots of (bone id, weight). Unused slots hold `INVALID_BONE_ID` and `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexBoneData {
    pub bone_ids: [i32; MAX_BONES_PER_VERTEX],
    pub weights: [f32; MAX_BONES_PER_VERTEX],
}

impl Default for VertexBoneData {
    fn default() -> Self {
        Self {
            bone_ids: [INVALID_BONE_ID; MAX_BONES_PER_VERTEX],
            weights: [0.0; MAX_BONES_PER_VERTEX],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EBoneSlotAssignment {
    Filled {
        slot: usize,
    },
    Replaced {
        slot: usize,
        old_bone_id: i32,
        old_weight: f32,
    },
    Dropped,
}

impl VertexBoneData {
    pub fn get_used_slot_count(&self) -> usize {
        self.bone_ids
            .iter()
            .filter(|bone_id| **bone_id != INVALID_BONE_ID)
            .count()
    }

    /// Puts the influence in the first free slot. When every slot is taken, the influence
    /// replaces the lightest one (first in slot order on ties) only if it is strictly heavier.
    pub fn add_bone_data(&mut self, bone_id: i32, weight: f32) -> EBoneSlotAssignment {
        if let Some(slot) = self
            .bone_ids
            .iter()
            .position(|slot_bone_id| *slot_bone_id == INVALID_BONE_ID)
        {
            self.bone_ids[slot] = bone_id;
            self.weights[slot] = weight;
            return EBoneSlotAssignment::Filled { slot };
        }

        let mut lowest_slot = 0;
        for slot in 1..MAX_BONES_PER_VERTEX {
            if self.weights[slot] < self.weights[lowest_slot] {
                lowest_slot = slot;
            }
        }

        if weight > self.weights[lowest_slot] {
            let assignment = EBoneSlotAssignment::Replaced {
                slot: lowest_slot,
                old_bone_id: self.bone_ids[lowest_slot],
                old_weight: self.weights[lowest_slot],
            };
            self.bone_ids[lowest_slot] = bone_id;
            self.weights[lowest_slot] = weight;
            assignment
        } else {
            EBoneSlotAssignment::Dropped
        }
    }
}

/// Distributes the weights of one bone over the per-vertex slots of a mesh.
///
/// Panics if a weight references a vertex outside `bone_weights`, which means the source
/// data does not belong to this mesh.
pub fn assign_bone_influences(
    bone_weights: &mut [VertexBoneData],
    bone_id: i32,
    weights: &[VertexWeight],
) {
    let vertex_count = bone_weights.len();
    for vertex_weight in weights {
        let vertex_id = vertex_weight.vertex_id as usize;
        assert!(
            vertex_id < vertex_count,
            "Bone data is trying to access vertex {} but the mesh only has {} vertices",
            vertex_id,
            vertex_count
        );
        let weight = vertex_weight.weight;
        match bone_weights[vertex_id].add_bone_data(bone_id, weight) {
            EBoneSlotAssignment::Filled { .. } => {}
            EBoneSlotAssignment::Replaced {
                old_bone_id,
                old_weight,
                ..
            } => {
                log::warn!(
                    "Hit bone vertex capacity {} on vertex id: {} - replacing bone: {} (influence: {}) with bone: {} (influence: {})",
                    MAX_BONES_PER_VERTEX,
                    vertex_id,
                    old_bone_id,
                    old_weight,
                    bone_id,
                    weight
                );
            }
            EBoneSlotAssignment::Dropped => {
                log::warn!(
                    "Hit bone vertex capacity {} on vertex id: {} - not adding bone: {} (influence: {}) because it is the least significant",
                    MAX_BONES_PER_VERTEX,
                    vertex_id,
                    bone_id,
                    weight
                );
            }
        }
    }
}
