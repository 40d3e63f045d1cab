use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosaryError;

/// Identifiers of the fixed prayer texts held by the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PrayerKey {
    SignOfCross,
    OurFather,
    HailMary,
    GloryBe,
    FatimaPrayer,
    HailHolyQueen,
    FinalPrayer,
    // Merged into SignOfCross; kept so older sequences still resolve.
    ApostlesCreed,
}

impl PrayerKey {
    pub const ALL: [PrayerKey; 8] = [
        PrayerKey::SignOfCross,
        PrayerKey::OurFather,
        PrayerKey::HailMary,
        PrayerKey::GloryBe,
        PrayerKey::FatimaPrayer,
        PrayerKey::HailHolyQueen,
        PrayerKey::FinalPrayer,
        PrayerKey::ApostlesCreed,
    ];
}

/// What a single step of the recitation shows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Prayer(PrayerKey),
    MysteryAnnouncement,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum MysteryType {
    Joyful,
    Luminous,
    Sorrowful,
    Glorious,
}

impl MysteryType {
    pub const ALL: [MysteryType; 4] = [
        MysteryType::Joyful,
        MysteryType::Luminous,
        MysteryType::Sorrowful,
        MysteryType::Glorious,
    ];

    /// Label shown in the mystery selector.
    pub fn label(self) -> &'static str {
        match self {
            MysteryType::Joyful => "Gozosos",
            MysteryType::Luminous => "Luminosos",
            MysteryType::Sorrowful => "Dolorosos",
            MysteryType::Glorious => "Gloriosos",
        }
    }

    fn english_name(self) -> &'static str {
        match self {
            MysteryType::Joyful => "joyful",
            MysteryType::Luminous => "luminous",
            MysteryType::Sorrowful => "sorrowful",
            MysteryType::Glorious => "glorious",
        }
    }
}

impl fmt::Display for MysteryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MysteryType {
    type Err = RosaryError;

    /// Accepts the English name or the Spanish label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MysteryType::ALL
            .into_iter()
            .find(|kind| kind.english_name() == wanted || kind.label().to_lowercase() == wanted)
            .ok_or_else(|| RosaryError::UnknownMysteryType(s.to_string()))
    }
}

impl TryFrom<String> for MysteryType {
    type Error = RosaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prayer {
    pub name: &'static str,
    pub text: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mystery {
    pub name: &'static str,
    pub announcement: &'static str,
}

/// One step of the logical recitation sequence.
///
/// This is a plain `Copy` value: the ten Hail Marys of a decade are ten
/// independent entries, never aliases of one shared object.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RosaryBead {
    pub step: StepKind,
    pub mystery_index: Option<usize>,
}

impl RosaryBead {
    pub const fn prayer(key: PrayerKey) -> Self {
        RosaryBead { step: StepKind::Prayer(key), mystery_index: None }
    }

    pub const fn in_decade(step: StepKind, mystery_index: usize) -> Self {
        RosaryBead { step, mystery_index: Some(mystery_index) }
    }

    pub fn is_announcement(&self) -> bool {
        self.step == StepKind::MysteryAnnouncement
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BeadKind {
    Major, // Our Father
    Minor, // Hail Mary
}

/// A drawn position on the rosary diagram, in SVG user units.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct VisualBead {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub kind: BeadKind,
}
