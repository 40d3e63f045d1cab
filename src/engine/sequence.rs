use serde::Serialize;

use crate::types::rosary_data::{PrayerKey, RosaryBead, StepKind};

pub const DECADE_COUNT: usize = 5;
pub const HAIL_MARYS_PER_DECADE: usize = 10;
pub const INTRO_LEN: usize = 6;
pub const DECADE_LEN: usize = 14;
pub const CONCLUSION_LEN: usize = 2;
pub const SEQUENCE_LEN: usize = INTRO_LEN + DECADE_COUNT * DECADE_LEN + CONCLUSION_LEN; // 78

const INTRO: [PrayerKey; INTRO_LEN] = [
    PrayerKey::SignOfCross, // includes the creed
    PrayerKey::OurFather,
    PrayerKey::HailMary,
    PrayerKey::HailMary,
    PrayerKey::HailMary,
    PrayerKey::GloryBe,
];

const CONCLUSION: [PrayerKey; CONCLUSION_LEN] = [PrayerKey::HailHolyQueen, PrayerKey::FinalPrayer];

/// Where a step sits in the recitation. Always derived from the index.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Intro,
    Decade(usize),
    Conclusion,
}

pub fn phase_of(index: usize) -> Phase {
    if index < INTRO_LEN {
        Phase::Intro
    } else if index < INTRO_LEN + DECADE_COUNT * DECADE_LEN {
        Phase::Decade((index - INTRO_LEN) / DECADE_LEN)
    } else {
        Phase::Conclusion
    }
}

fn push_decade(sequence: &mut Vec<RosaryBead>, mystery_index: usize) {
    sequence.push(RosaryBead::in_decade(StepKind::MysteryAnnouncement, mystery_index));
    sequence.push(RosaryBead::in_decade(StepKind::Prayer(PrayerKey::OurFather), mystery_index));
    for _ in 0..HAIL_MARYS_PER_DECADE {
        sequence.push(RosaryBead::in_decade(StepKind::Prayer(PrayerKey::HailMary), mystery_index));
    }
    sequence.push(RosaryBead::in_decade(StepKind::Prayer(PrayerKey::GloryBe), mystery_index));
    sequence.push(RosaryBead::in_decade(StepKind::Prayer(PrayerKey::FatimaPrayer), mystery_index));
}

/// Expands intro, five decades and conclusion into the full recitation.
pub fn build_sequence() -> Vec<RosaryBead> {
    let mut sequence = Vec::with_capacity(SEQUENCE_LEN);
    sequence.extend(INTRO.iter().map(|&key| RosaryBead::prayer(key)));
    for mystery_index in 0..DECADE_COUNT {
        push_decade(&mut sequence, mystery_index);
    }
    sequence.extend(CONCLUSION.iter().map(|&key| RosaryBead::prayer(key)));
    debug_assert_eq!(sequence.len(), SEQUENCE_LEN);
    sequence
}
