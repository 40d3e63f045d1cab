use std::sync::Arc;

use serde::Serialize;

use crate::catalog;
use crate::engine::{phase_of, ClickTarget, Phase, RosaryModel};
use crate::types::rosary_data::{Mystery, MysteryType, Prayer, PrayerKey, RosaryBead, StepKind};

/// Read-only view handed to whatever draws the rosary.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub current_index: usize,
    pub total_steps: usize,
    pub progress: String,
    pub phase: Phase,
    pub prayer: Prayer,
    pub mystery: Option<Mystery>,
    pub selected_mystery: MysteryType,
    pub recommended_mystery: MysteryType,
    pub highlighted_bead: usize,
}

/// Single-owner recitation state: which step we are on and which mysteries are prayed.
#[derive(Debug, Clone)]
pub struct Navigator {
    model: Arc<RosaryModel>,
    current_index: usize,
    selected: MysteryType,
    recommended: MysteryType,
}

impl Navigator {
    pub fn new(model: Arc<RosaryModel>, recommended: MysteryType) -> Self {
        Navigator { model, current_index: 0, selected: recommended, recommended }
    }

    /// Starts on today's mysteries.
    pub fn for_today(model: Arc<RosaryModel>) -> Self {
        Self::new(model, catalog::recommended_today())
    }

    /// Opens on `kind` while still reporting the weekday recommendation.
    pub fn starting_with(mut self, kind: MysteryType) -> Self {
        self.selected = kind;
        self
    }

    pub fn model(&self) -> &RosaryModel {
        &self.model
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_steps(&self) -> usize {
        self.model.step_count()
    }

    pub fn selected_mystery(&self) -> MysteryType {
        self.selected
    }

    pub fn recommended_mystery(&self) -> MysteryType {
        self.recommended
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.total_steps()
    }

    fn current_bead(&self) -> &RosaryBead {
        &self.model.sequence[self.current_index]
    }

    pub fn next(&mut self) {
        let last = self.total_steps() - 1;
        self.current_index = (self.current_index + 1).min(last);
        log::trace!("next -> step {}", self.current_index);
    }

    pub fn previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
        log::trace!("previous -> step {}", self.current_index);
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
    }

    /// Switching sets inside a decade keeps the position; before the first
    /// decade it starts over.
    pub fn select_mystery(&mut self, kind: MysteryType) {
        self.selected = kind;
        if self.current_bead().mystery_index.is_none() {
            self.current_index = 0;
        }
        log::debug!("Selected {:?} mysteries, now at step {}", kind, self.current_index);
    }

    /// Bead click. Slots without a jump target are ignored.
    pub fn jump_to_bead(&mut self, visual_index: usize) {
        match self.model.maps.step_for_visual(visual_index) {
            Some(step) => {
                log::debug!("Bead {} clicked -> step {}", visual_index, step);
                self.current_index = step;
            }
            None => log::trace!("Bead {} has no jump target", visual_index),
        }
    }

    pub fn jump_to(&mut self, target: ClickTarget) {
        self.jump_to_bead(target.visual_index());
    }

    /// Moves straight to a step; `false` (and no change) when out of range.
    pub fn go_to_step(&mut self, step: usize) -> bool {
        if step < self.total_steps() {
            self.current_index = step;
            true
        } else {
            false
        }
    }

    pub fn current_prayer(&self) -> Prayer {
        let bead = self.current_bead();
        match bead.step {
            StepKind::MysteryAnnouncement => {
                let index = bead.mystery_index.expect("announcement outside a decade");
                let mystery = catalog::mystery(self.selected, index);
                Prayer { name: mystery.name, text: mystery.announcement }
            }
            StepKind::Prayer(PrayerKey::ApostlesCreed) => *catalog::prayer(PrayerKey::SignOfCross),
            StepKind::Prayer(key) => *catalog::prayer(key),
        }
    }

    /// The mystery being meditated, or the next one coming up.
    pub fn current_mystery(&self) -> Option<&'static Mystery> {
        self.model.sequence[self.current_index..]
            .iter()
            .find_map(|bead| bead.mystery_index)
            .map(|index| catalog::mystery(self.selected, index))
    }

    pub fn phase(&self) -> Phase {
        phase_of(self.current_index)
    }

    pub fn highlighted_bead(&self) -> usize {
        self.model.maps.visual_for_step(self.current_index)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_index: self.current_index,
            total_steps: self.total_steps(),
            progress: format!("{} / {}", self.current_index + 1, self.total_steps()),
            phase: self.phase(),
            prayer: self.current_prayer(),
            mystery: self.current_mystery().copied(),
            selected_mystery: self.selected,
            recommended_mystery: self.recommended,
            highlighted_bead: self.highlighted_bead(),
        }
    }
}
