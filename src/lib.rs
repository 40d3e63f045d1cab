pub mod config;
pub mod error;
pub mod types {
    pub mod rosary_data;
}
pub mod catalog;
pub mod engine;
pub mod navigation;
pub mod text_format;
pub mod svg_export;
pub mod viewer;

pub use engine::{ClickTarget, RosaryModel};
pub use error::{Result, RosaryError};
pub use navigation::{Navigator, Snapshot};
pub use types::rosary_data::{MysteryType, PrayerKey};
