use std::sync::Arc;

use camino_rosary::catalog;
use camino_rosary::engine::mapping::ClickTarget;
use camino_rosary::engine::RosaryModel;
use camino_rosary::types::rosary_data::{BeadKind, MysteryType, StepKind};
use camino_rosary::Navigator;
use chrono::Weekday;

fn model() -> Arc<RosaryModel> {
    RosaryModel::shared()
}

#[test]
fn sequence_blocks_carry_their_decade_index() {
    let model = model();
    assert_eq!(model.sequence.len(), 78);
    for (i, bead) in model.sequence.iter().enumerate() {
        let expected = match i {
            0..=5 | 76..=77 => None,
            _ => Some((i - 6) / 14),
        };
        assert_eq!(bead.mystery_index, expected, "step {}", i);
    }
}

#[test]
fn layout_has_five_major_loop_beads() {
    let model = model();
    assert_eq!(model.layout.len(), 60);
    assert_eq!(model.layout[0].r, 0.0);
    let majors: Vec<usize> = (5..60).filter(|&i| model.layout[i].kind == BeadKind::Major).map(|i| i - 5).collect();
    assert_eq!(majors, vec![0, 11, 22, 33, 44]);
}

#[test]
fn every_step_highlights_a_real_bead() {
    let model = model();
    assert_eq!(model.maps.prayer_to_visual().len(), 78);
    assert!(model.maps.prayer_to_visual().iter().all(|&v| v <= 59));
}

#[test]
fn bead_clicks_show_the_prayer_of_the_step_they_resolve_to() {
    let model = model();
    for kind in MysteryType::ALL {
        for (target, step) in model.maps.click_targets() {
            let mut clicked = Navigator::new(model.clone(), kind);
            clicked.jump_to(target);
            assert_eq!(clicked.current_index(), step);

            let mut direct = Navigator::new(model.clone(), kind);
            assert!(direct.go_to_step(step));
            assert_eq!(clicked.current_prayer(), direct.current_prayer(), "{:?}", target);
        }
    }
}

#[test]
fn bead_click_by_visual_index_matches_click_target() {
    let model = model();
    let mut nav = Navigator::new(model.clone(), MysteryType::Joyful);
    nav.jump_to_bead(60);
    assert_eq!(nav.current_index(), model.maps.step_for(ClickTarget::Conclusion).unwrap());
}

#[test]
fn walking_forward_stops_at_the_final_prayer() {
    let mut nav = Navigator::new(model(), MysteryType::Sorrowful);
    for _ in 0..77 {
        nav.next();
    }
    assert_eq!(nav.current_index(), 77);
    nav.next();
    assert_eq!(nav.current_index(), 77);
}

#[test]
fn switching_sets_mid_decade_changes_text_not_position() {
    let mut nav = Navigator::new(model(), MysteryType::Joyful);
    assert!(nav.go_to_step(34)); // third decade announcement
    assert!(matches!(nav.model().sequence[34].step, StepKind::MysteryAnnouncement));
    assert_eq!(nav.current_prayer().name, "Tercer Misterio Gozoso");

    nav.select_mystery(MysteryType::Glorious);
    assert_eq!(nav.current_index(), 34);
    assert_eq!(nav.current_prayer().name, "Tercer Misterio Glorioso");
    assert_eq!(nav.current_mystery(), Some(catalog::mystery(MysteryType::Glorious, 2)));
}

#[test]
fn switching_sets_in_the_intro_starts_over() {
    let mut nav = Navigator::new(model(), MysteryType::Joyful);
    assert!(nav.go_to_step(3));
    nav.select_mystery(MysteryType::Luminous);
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn joyful_walkthrough_reaches_first_announcement() {
    let mut nav = Navigator::new(model(), MysteryType::Joyful);
    assert_eq!(nav.current_prayer().name, "Señal de la Cruz y Credo");
    for _ in 0..6 {
        nav.next();
    }
    let snapshot = nav.snapshot();
    assert_eq!(snapshot.prayer.name, "Primer Misterio Gozoso");
    assert_eq!(snapshot.mystery.map(|m| m.name), Some("Primer Misterio Gozoso"));
}

#[test]
fn crucifix_click_from_first_announcement_goes_home() {
    let mut nav = Navigator::new(model(), MysteryType::Joyful);
    assert!(nav.go_to_step(6));
    nav.jump_to_bead(0);
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn weekday_defaults() {
    assert_eq!(catalog::recommended_for(Weekday::Thu), MysteryType::Luminous);
    assert_eq!(catalog::recommended_for(Weekday::Mon), MysteryType::Joyful);
    assert_eq!(catalog::recommended_for(Weekday::Sat), MysteryType::Joyful);
}

#[test]
fn snapshot_serializes_for_renderers() {
    let mut nav = Navigator::new(model(), MysteryType::Luminous);
    nav.jump_to(ClickTarget::Conclusion);
    let json = serde_json::to_value(nav.snapshot()).unwrap();
    assert_eq!(json["current_index"], 76);
    assert_eq!(json["total_steps"], 78);
    assert_eq!(json["phase"], "conclusion");
    assert_eq!(json["prayer"]["name"], "La Salve");
    assert!(json["mystery"].is_null());
    assert_eq!(json["selected_mystery"], "luminous");
    assert_eq!(json["highlighted_bead"], 59);
}
