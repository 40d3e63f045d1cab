pub mod sequence;
pub mod layout;
pub mod mapping;
pub mod model;

// Re-export what the navigator and the front ends use
pub use layout::{
    hit_test, Point, BEAD_COUNT, CENTERPIECE, CONCLUSION_SLOT, CROSS_ARM, CROSS_BAR_DROP, CROSS_LENGTH, VIEW_BOX,
};
pub use mapping::{ClickTarget, IndexMaps};
pub use model::RosaryModel;
pub use sequence::{phase_of, Phase, SEQUENCE_LEN};
