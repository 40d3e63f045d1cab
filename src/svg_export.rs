use std::fmt::Write as _;

use crate::engine::{RosaryModel, CENTERPIECE, CROSS_ARM, CROSS_BAR_DROP, CROSS_LENGTH, VIEW_BOX};
use crate::types::rosary_data::BeadKind;

const CHAIN_COLOR: &str = "#a16207";
const MAJOR_FILL: &str = "#93c5fd";
const MINOR_FILL: &str = "#fcd34d";
const ACTIVE_FILL: &str = "#1d4ed8";

/// Standalone SVG of the rosary with `highlighted` drawn as the active bead.
pub fn render_svg(model: &RosaryModel, highlighted: usize) -> String {
    let (width, height) = VIEW_BOX;
    let mut svg = String::new();

    // Writing into a String cannot fail, hence the ignored results below.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" aria-label="Rosario interactivo">"#,
        width, height
    );
    let _ = writeln!(
        svg,
        r#"  <path d="{}" stroke="{}" stroke-width="0.75" fill="none" opacity="0.5"/>"#,
        model.chain_path.trim_end(),
        CHAIN_COLOR
    );
    let _ = writeln!(
        svg,
        r#"  <circle class="centerpiece" cx="{}" cy="{}" r="12" fill="{}"/>"#,
        CENTERPIECE.x, CENTERPIECE.y, MINOR_FILL
    );

    let anchor = &model.layout[0];
    let _ = writeln!(
        svg,
        r#"  <path class="crucifix{}" d="M {} {} v {} M {} {} h {}" stroke="{}" stroke-width="3"/>"#,
        if highlighted == 0 { " active" } else { "" },
        anchor.cx,
        anchor.cy,
        CROSS_LENGTH,
        anchor.cx - CROSS_ARM,
        anchor.cy + CROSS_BAR_DROP,
        2.0 * CROSS_ARM,
        if highlighted == 0 { ACTIVE_FILL } else { CHAIN_COLOR }
    );

    for (index, bead) in model.layout.iter().enumerate().skip(1) {
        let active = index == highlighted;
        if active {
            let _ = writeln!(
                svg,
                r#"  <circle class="halo" cx="{}" cy="{}" r="{}" fill="{}" opacity="0.7"/>"#,
                bead.cx,
                bead.cy,
                bead.r + 2.0,
                ACTIVE_FILL
            );
        }
        let fill = match (active, bead.kind) {
            (true, _) => ACTIVE_FILL,
            (false, BeadKind::Major) => MAJOR_FILL,
            (false, BeadKind::Minor) => MINOR_FILL,
        };
        let _ = writeln!(
            svg,
            r#"  <circle data-bead="{}" cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="0.75"/>"#,
            index, bead.cx, bead.cy, bead.r, fill, CHAIN_COLOR
        );
    }

    svg.push_str("</svg>\n");
    svg
}
