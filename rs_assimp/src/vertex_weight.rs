use russimp_sys::aiVertexWeight;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexWeight {
    pub vertex_id: u32,
    pub weight: f32,
}

impl From<&aiVertexWeight> for VertexWeight {
    fn from(c: &aiVertexWeight) -> VertexWeight {
        VertexWeight {
            vertex_id: c.mVertexId,
            weight: c.mWeight,
        }
    }
}
