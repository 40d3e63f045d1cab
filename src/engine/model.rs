use std::sync::Arc;

use super::layout::{build_layout, chain_path, chain_segments, Point};
use super::mapping::IndexMaps;
use super::sequence::build_sequence;
use crate::types::rosary_data::{RosaryBead, VisualBead};

/// Everything immutable about the rosary, built once at startup.
#[derive(Debug, Clone)]
pub struct RosaryModel {
    pub sequence: Vec<RosaryBead>,
    pub layout: Vec<VisualBead>,
    pub maps: IndexMaps,
    pub chain_path: String,
}

impl RosaryModel {
    pub fn build() -> Self {
        let sequence = build_sequence();
        let layout = build_layout();
        let maps = IndexMaps::build(&sequence, &layout);
        let chain_path = chain_path(&layout);
        log::debug!(
            "Rosary model ready: {} steps over {} beads",
            sequence.len(),
            layout.len()
        );
        RosaryModel { sequence, layout, maps, chain_path }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::build())
    }

    pub fn step_count(&self) -> usize {
        self.sequence.len()
    }

    pub fn chain_segments(&self) -> Vec<(Point, Point)> {
        chain_segments(&self.layout)
    }
}
