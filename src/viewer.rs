use eframe::App;

use crate::engine::{hit_test, Point, CENTERPIECE, CROSS_ARM, CROSS_BAR_DROP, CROSS_LENGTH, VIEW_BOX};
use crate::navigation::Navigator;
use crate::text_format::{meditation_heading, paragraphs};
use crate::types::rosary_data::{BeadKind, MysteryType};

const GOLD: egui::Color32 = egui::Color32::from_rgb(252, 211, 77);
const CHAIN: egui::Color32 = egui::Color32::from_rgb(161, 98, 7);
const BLUE: egui::Color32 = egui::Color32::from_rgb(147, 197, 253);
const ACTIVE: egui::Color32 = egui::Color32::from_rgb(29, 78, 216);

/// Maps diagram units onto the painter rect, keeping the aspect ratio.
#[derive(Debug, Clone, Copy)]
struct DiagramTransform {
    origin: egui::Pos2,
    scale: f32,
}

impl DiagramTransform {
    fn fit(rect: egui::Rect) -> Self {
        let (w, h) = VIEW_BOX;
        let scale = (rect.width() / w).min(rect.height() / h);
        let offset = egui::vec2((rect.width() - w * scale) / 2.0, (rect.height() - h * scale) / 2.0);
        DiagramTransform { origin: rect.min + offset, scale }
    }

    fn to_screen(self, p: Point) -> egui::Pos2 {
        self.origin + egui::vec2(p.x * self.scale, p.y * self.scale)
    }

    fn to_diagram(self, pos: egui::Pos2) -> (f32, f32) {
        let d = pos - self.origin;
        (d.x / self.scale, d.y / self.scale)
    }
}

pub struct RosaryApp {
    navigator: Navigator,
    config_display: String,
}

impl RosaryApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, navigator: Navigator, config_display: String) -> Self {
        Self { navigator, config_display }
    }

    fn mystery_selector(&mut self, ui: &mut egui::Ui) {
        ui.heading("Misterios del Rosario");
        let selected = self.navigator.selected_mystery();
        let recommended = self.navigator.recommended_mystery();
        let mut clicked: Option<MysteryType> = None;
        egui::Grid::new("mystery_grid").num_columns(2).show(ui, |ui| {
            for (i, kind) in MysteryType::ALL.into_iter().enumerate() {
                let label = if kind == recommended && kind != selected {
                    format!("{} (Hoy)", kind.label())
                } else {
                    kind.label().to_string()
                };
                if ui.selectable_label(kind == selected, label).clicked() {
                    clicked = Some(kind);
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
        if let Some(kind) = clicked {
            self.navigator.select_mystery(kind);
        }
    }

    fn prayer_panel(&self, ui: &mut egui::Ui) {
        let snapshot = self.navigator.snapshot();
        egui::ScrollArea::vertical().id_source("prayer_text_scroll").max_height(420.0).show(ui, |ui| {
            if let Some(heading) = meditation_heading(&snapshot) {
                ui.colored_label(CHAIN, heading);
            }
            ui.heading(snapshot.prayer.name);
            ui.add_space(6.0);
            for paragraph in paragraphs(snapshot.prayer.text) {
                ui.label(paragraph);
                ui.add_space(4.0);
            }
        });
    }

    fn navigation_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Progreso: {} / {}", self.navigator.current_index() + 1, self.navigator.total_steps()));
            if ui.link("Reiniciar").clicked() {
                self.navigator.reset();
            }
        });
        ui.horizontal(|ui| {
            if ui.add_enabled(!self.navigator.is_first(), egui::Button::new("Anterior")).clicked() {
                self.navigator.previous();
            }
            if ui.add_enabled(!self.navigator.is_last(), egui::Button::new("Siguiente")).clicked() {
                self.navigator.next();
            }
        });
    }

    fn rosary_diagram(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let transform = DiagramTransform::fit(response.rect);
        let model = self.navigator.model();
        let highlighted = self.navigator.highlighted_bead();

        let chain_stroke = egui::Stroke::new(1.0, CHAIN.gamma_multiply(0.5));
        for (from, to) in model.chain_segments() {
            painter.line_segment([transform.to_screen(from), transform.to_screen(to)], chain_stroke);
        }

        painter.circle(transform.to_screen(CENTERPIECE), 12.0 * transform.scale, GOLD, egui::Stroke::new(1.0, CHAIN));

        let anchor = transform.to_screen(Point { x: model.layout[0].cx, y: model.layout[0].cy });
        let cross_color = if highlighted == 0 { ACTIVE } else { CHAIN };
        let cross_stroke = egui::Stroke::new(3.0 * transform.scale, cross_color);
        let unit = |dx: f32, dy: f32| egui::vec2(dx * transform.scale, dy * transform.scale);
        painter.line_segment([anchor, anchor + unit(0.0, CROSS_LENGTH)], cross_stroke);
        painter.line_segment(
            [anchor + unit(-CROSS_ARM, CROSS_BAR_DROP), anchor + unit(CROSS_ARM, CROSS_BAR_DROP)],
            cross_stroke,
        );

        for (index, bead) in model.layout.iter().enumerate().skip(1) {
            let center = transform.to_screen(Point { x: bead.cx, y: bead.cy });
            let active = index == highlighted;
            let fill = match (active, bead.kind) {
                (true, _) => ACTIVE,
                (false, BeadKind::Major) => BLUE,
                (false, BeadKind::Minor) => GOLD,
            };
            let radius = (if active { bead.r * 1.2 } else { bead.r }) * transform.scale;
            if active {
                painter.circle_filled(center, radius + 2.0 * transform.scale, ACTIVE.gamma_multiply(0.4));
            }
            painter.circle(center, radius, fill, egui::Stroke::new(0.75, CHAIN));
        }

        let clicked_slot = response
            .clicked()
            .then(|| response.interact_pointer_pos())
            .flatten()
            .and_then(|pos| {
                let (x, y) = transform.to_diagram(pos);
                hit_test(&model.layout, x, y)
            });
        if let Some(slot) = clicked_slot {
            self.navigator.jump_to_bead(slot);
        }
    }
}

impl App for RosaryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Archivo", |ui| {
                    if ui.button("Salir").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.label(self.config_display.as_str());
            });
        });

        egui::SidePanel::left("side_panel_left").min_width(300.0).default_width(380.0).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Rosario Interactivo");
                ui.label("Una guía para la oración y meditación");
            });
            ui.separator();
            self.mystery_selector(ui);
            ui.separator();
            self.prayer_panel(ui);
            ui.separator();
            self.navigation_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.rosary_diagram(ui);
        });
    }
}
