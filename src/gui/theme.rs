//! Screen Theme
//! Dark neon palette and the small custom-painted widgets shared by the panels.

use egui::{Align2, Color32, FontId, Response, RichText, Sense, Stroke, Ui};

pub const BACKGROUND: Color32 = Color32::from_rgb(0x05, 0x08, 0x16);
pub const CARD: Color32 = Color32::from_rgb(0x07, 0x11, 0x24);
pub const BUTTON: Color32 = Color32::from_rgb(0x10, 0x1b, 0x33);
pub const BORDER: Color32 = Color32::from_rgb(0x1b, 0x29, 0x44);
pub const ACCENT: Color32 = Color32::from_rgb(0xff, 0xb3, 0x00); // Amber
pub const NEON: Color32 = Color32::from_rgb(0x00, 0xff, 0x6a); // Neon green
pub const UP: Color32 = Color32::from_rgb(0x00, 0xc8, 0x53);
pub const DOWN: Color32 = Color32::from_rgb(0xff, 0x4d, 0x4f);
pub const COIN: Color32 = Color32::from_rgb(0xff, 0x9f, 0x1c);
pub const MUTED: Color32 = Color32::from_rgb(0x6f, 0x7e, 0x9c);
pub const BALANCE_LABEL: Color32 = Color32::from_rgb(0xa3, 0x9b, 0xc5);
pub const BALANCE_VALUE: Color32 = Color32::from_rgb(0xe5, 0x73, 0xff);
pub const TEXT: Color32 = Color32::WHITE;

/// Vertical gap between screen sections.
pub const SECTION_GAP: f32 = 24.0;

/// Install the dark visuals on the context.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = BACKGROUND;
    visuals.override_text_color = Some(TEXT);
    visuals.selection.bg_fill = BUTTON;
    ctx.set_visuals(visuals);
}

/// Round button with a single glyph, e.g. the header back button.
pub fn circle_button(ui: &mut Ui, glyph: &str, diameter: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(diameter, diameter), Sense::click());
    let fill = if response.hovered() {
        BORDER
    } else {
        BUTTON
    };
    let painter = ui.painter();
    painter.circle_filled(rect.center(), diameter / 2.0, fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(18.0),
        TEXT,
    );
    response
}

/// Round menu button with three painted bars.
pub fn menu_button(ui: &mut Ui, diameter: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(diameter, diameter), Sense::click());
    let fill = if response.hovered() {
        BORDER
    } else {
        BUTTON
    };
    let painter = ui.painter();
    painter.circle_filled(rect.center(), diameter / 2.0, fill);

    let half = diameter * 0.2;
    let stroke = Stroke::new(2.0, TEXT);
    for dy in [-half * 0.7, 0.0, half * 0.7] {
        let y = rect.center().y + dy;
        painter.hline(rect.center().x - half..=rect.center().x + half, y, stroke);
    }
    response
}

/// Coin badge: filled circle with the asset glyph.
pub fn coin_badge(ui: &mut Ui, glyph: &str, diameter: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), diameter / 2.0, COIN);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(diameter * 0.5),
        TEXT,
    );
}

/// Rounded segment button. Active segments get `active_fill` and `active_text`.
pub fn segment_button(
    ui: &mut Ui,
    label: &str,
    active: bool,
    size: egui::Vec2,
    active_fill: Color32,
    active_text: Color32,
) -> Response {
    let (fill, text) = if active {
        (active_fill, RichText::new(label).color(active_text).strong())
    } else {
        (Color32::TRANSPARENT, RichText::new(label).color(MUTED))
    };

    ui.add_sized(
        size,
        egui::Button::new(text)
            .fill(fill)
            .stroke(Stroke::NONE)
            .rounding(16.0),
    )
}

/// Text-only toggle, used by the order type switch and the position tabs.
pub fn text_toggle(ui: &mut Ui, label: &str, active: bool, active_color: Color32) -> Response {
    let text = if active {
        RichText::new(label).color(active_color).strong()
    } else {
        RichText::new(label).color(MUTED)
    };
    ui.add(egui::Label::new(text).sense(Sense::click()))
}
