use bitflags::bitflags;
use russimp_sys::*;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct PostProcessSteps: u32 {
        const CalcTangentSpace = aiPostProcessSteps_aiProcess_CalcTangentSpace as _;
        const JoinIdenticalVertices = aiPostProcessSteps_aiProcess_JoinIdenticalVertices as _;
        const Triangulate = aiPostProcessSteps_aiProcess_Triangulate as _;
        const GenSmoothNormals = aiPostProcessSteps_aiProcess_GenSmoothNormals as _;
        const LimitBoneWeights = aiPostProcessSteps_aiProcess_LimitBoneWeights as _;
        const ValidateDataStructure = aiPostProcessSteps_aiProcess_ValidateDataStructure as _;
        const SortByPType = aiPostProcessSteps_aiProcess_SortByPType as _;
        const FlipUVs = aiPostProcessSteps_aiProcess_FlipUVs as _;
    }
}
