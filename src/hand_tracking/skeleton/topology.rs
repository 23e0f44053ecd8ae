//! Hand skeleton topology
//!
//! Five finger chains fanning out from the wrist landmark. Joint and bone
//! counts are derived from the chain table.

/// Landmarks per finger chain, wrist included
pub const CHAIN_LEN: usize = 5;

pub const FINGER_COUNT: usize = 5;

/// Landmark index of the wrist, shared by every chain
pub const ROOT_JOINT: usize = 0;

pub const FINGER_CHAINS: [[usize; CHAIN_LEN]; FINGER_COUNT] = [
    [0, 1, 2, 3, 4],      // thumb
    [0, 5, 6, 7, 8],      // index
    [0, 9, 10, 11, 12],   // middle
    [0, 13, 14, 15, 16],  // ring
    [0, 17, 18, 19, 20],  // pinky
];

pub const BONE_COUNT: usize = FINGER_COUNT * (CHAIN_LEN - 1);

pub const JOINT_COUNT: usize = BONE_COUNT + 1;

/// Bone segments as (start, end) landmark pairs, chain by chain
pub const BONES: [(usize, usize); BONE_COUNT] = build_bones();

const fn build_bones() -> [(usize, usize); BONE_COUNT] {
    let mut bones = [(0, 0); BONE_COUNT];
    let mut finger = 0;
    while finger < FINGER_COUNT {
        let mut link = 1;
        while link < CHAIN_LEN {
            bones[finger * (CHAIN_LEN - 1) + link - 1] =
                (FINGER_CHAINS[finger][link - 1], FINGER_CHAINS[finger][link]);
            link += 1;
        }
        finger += 1;
    }
    bones
}
