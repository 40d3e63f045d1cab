use std::sync::OnceLock;

use regex::Regex;

use crate::navigation::Snapshot;

fn line_break() -> &'static Regex {
    static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
    LINE_BREAK.get_or_init(|| Regex::new(r"\r?\n").expect("line break pattern is valid"))
}

/// Splits prayer text into paragraphs, one per line, dropping blank lines.
pub fn paragraphs(text: &str) -> Vec<&str> {
    line_break()
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Header shown above the prayer when a mystery is being meditated.
pub fn meditation_heading(snapshot: &Snapshot) -> Option<String> {
    snapshot.mystery.map(|m| format!("Meditación: {}", m.name))
}

/// Plain-text rendering of a snapshot, used by the command line.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    if let Some(heading) = meditation_heading(snapshot) {
        out.push_str(&heading);
        out.push('\n');
    }
    out.push_str(snapshot.prayer.name);
    out.push_str("\n\n");
    out.push_str(&paragraphs(snapshot.prayer.text).join("\n\n"));
    out.push_str(&format!("\n\nProgreso: {}", snapshot.progress));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::engine::RosaryModel;
    use crate::navigation::Navigator;
    use crate::types::rosary_data::{MysteryType, PrayerKey};

    #[test]
    fn sign_of_cross_splits_into_two_paragraphs() {
        let parts = paragraphs(catalog::prayer(PrayerKey::SignOfCross).text);
        assert_eq!(parts.len(), 2);
        assert!(parts[0].starts_with("Por la señal"));
        assert!(parts[1].starts_with("Creo en Dios"));
    }

    #[test]
    fn single_paragraph_and_whitespace_lines() {
        assert_eq!(paragraphs("uno"), vec!["uno"]);
        assert_eq!(paragraphs("uno\n  \ndos\n\n\n"), vec!["uno", "dos"]);
        assert!(paragraphs("").is_empty());
    }

    #[test]
    fn every_line_break_starts_a_paragraph() {
        assert_eq!(paragraphs("Dios te salve, Reina\ny Madre"), vec!["Dios te salve, Reina", "y Madre"]);
        assert_eq!(paragraphs("uno\r\ndos\n \ntres"), vec!["uno", "dos", "tres"]);
    }

    #[test]
    fn rendered_snapshot_carries_heading_and_progress() {
        let nav = Navigator::new(RosaryModel::shared(), MysteryType::Joyful);
        let text = render_snapshot(&nav.snapshot());
        assert!(text.starts_with("Meditación: Primer Misterio Gozoso\nSeñal de la Cruz y Credo"));
        assert!(text.ends_with("Progreso: 1 / 78"));
    }
}
