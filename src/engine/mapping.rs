use std::collections::BTreeMap;

use serde::Serialize;

use super::layout::{BEAD_COUNT, CONCLUSION_SLOT, LOOP_START};
use super::sequence::{DECADE_COUNT, HAIL_MARYS_PER_DECADE, INTRO_LEN, SEQUENCE_LEN};
use crate::types::rosary_data::{RosaryBead, VisualBead};

/// Something the user can click on the diagram.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    Bead(usize),
    /// The centerpiece; it has no bead of its own and opens the closing prayers.
    Conclusion,
}

impl ClickTarget {
    pub fn from_visual_index(index: usize) -> Option<Self> {
        match index {
            i if i < BEAD_COUNT => Some(ClickTarget::Bead(i)),
            CONCLUSION_SLOT => Some(ClickTarget::Conclusion),
            _ => None,
        }
    }

    pub fn visual_index(self) -> usize {
        match self {
            ClickTarget::Bead(i) => i,
            ClickTarget::Conclusion => CONCLUSION_SLOT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// The bead belongs to this step; clicking it jumps here.
    Own,
    /// Highlight only: the step shares or looks ahead to another step's bead.
    Shared,
    /// Closing prayers, reached through the centerpiece.
    Conclusion,
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    visual: usize,
    role: Role,
}

/// Forward (step → bead) and reverse (click → step) tables.
#[derive(Debug, Clone)]
pub struct IndexMaps {
    prayer_to_visual: Vec<usize>,
    visual_to_prayer: BTreeMap<ClickTarget, usize>,
}

fn place_steps(sequence: &[RosaryBead]) -> Vec<Placement> {
    let own = |visual| Placement { visual, role: Role::Own };
    let shared = |visual| Placement { visual, role: Role::Shared };

    let mut placements = Vec::with_capacity(SEQUENCE_LEN);

    // Sign of the cross on the crucifix, then the pendant beads one to one.
    placements.extend((0..INTRO_LEN - 1).map(own));
    // The intro Glory Be already points at the first decade's bead.
    placements.push(shared(LOOP_START));

    let mut cursor = LOOP_START;
    for decade in 0..DECADE_COUNT {
        let major = cursor;
        debug_assert!(sequence[placements.len()].is_announcement());
        placements.push(own(major)); // announcement
        placements.push(shared(major)); // Our Father
        cursor += 1;

        for _ in 0..HAIL_MARYS_PER_DECADE {
            placements.push(own(cursor));
            cursor += 1;
        }

        // Glory Be and Fatima look ahead to the next major bead, wrapping after the last decade.
        let next_major = if decade + 1 < DECADE_COUNT { cursor } else { LOOP_START };
        placements.push(shared(next_major));
        placements.push(shared(next_major));
    }

    let last_bead = cursor - 1;
    while placements.len() < sequence.len() {
        placements.push(Placement { visual: last_bead, role: Role::Conclusion });
    }

    placements
}

impl IndexMaps {
    /// Panics if the sequence or layout do not have the shape the tables are
    /// built for; that can only come from a construction bug.
    pub fn build(sequence: &[RosaryBead], layout: &[VisualBead]) -> Self {
        assert_eq!(sequence.len(), SEQUENCE_LEN, "prayer sequence has an unexpected length");
        assert_eq!(layout.len(), BEAD_COUNT, "bead layout has an unexpected length");

        let placements = place_steps(sequence);
        let prayer_to_visual: Vec<usize> = placements.iter().map(|p| p.visual).collect();

        // The first step that owns a bead is its click target.
        let mut visual_to_prayer = BTreeMap::new();
        for (step, placement) in placements.iter().enumerate() {
            let target = match placement.role {
                Role::Own => ClickTarget::Bead(placement.visual),
                Role::Conclusion => ClickTarget::Conclusion,
                Role::Shared => continue,
            };
            visual_to_prayer.entry(target).or_insert(step);
        }

        assert!(prayer_to_visual.iter().all(|&v| v < layout.len()));
        log::debug!(
            "Index maps built: {} steps, {} click targets",
            prayer_to_visual.len(),
            visual_to_prayer.len()
        );

        IndexMaps { prayer_to_visual, visual_to_prayer }
    }

    /// The bead to highlight for a step. Panics on a step outside the sequence.
    pub fn visual_for_step(&self, step: usize) -> usize {
        self.prayer_to_visual[step]
    }

    pub fn step_for(&self, target: ClickTarget) -> Option<usize> {
        self.visual_to_prayer.get(&target).copied()
    }

    pub fn step_for_visual(&self, visual_index: usize) -> Option<usize> {
        ClickTarget::from_visual_index(visual_index).and_then(|target| self.step_for(target))
    }

    pub fn prayer_to_visual(&self) -> &[usize] {
        &self.prayer_to_visual
    }

    pub fn click_targets(&self) -> impl Iterator<Item = (ClickTarget, usize)> + '_ {
        self.visual_to_prayer.iter().map(|(&target, &step)| (target, step))
    }
}
