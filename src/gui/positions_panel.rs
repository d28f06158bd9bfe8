//! Positions Panel Widget
//! Tab row and the position cards below it.

use crate::config::ScreenConfig;
use crate::gui::theme;
use crate::market::{Position, PositionSide};
use crate::selection::{PositionsTab, SelectionState};
use egui::{Color32, RichText, Stroke};

pub struct PositionsPanel;

impl PositionsPanel {
    pub fn show(
        ui: &mut egui::Ui,
        selection: &SelectionState,
        config: &ScreenConfig,
    ) -> PositionsAction {
        let mut action = PositionsAction::None;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;
            for (tab, active) in selection.tab.options() {
                let caption = tab.caption(config.positions.len());
                if theme::text_toggle(ui, &caption, active, theme::TEXT).clicked() {
                    action = PositionsAction::SelectTab(tab);
                }
            }
        });

        ui.add_space(16.0);

        for (idx, position) in config.positions.iter().enumerate() {
            if Self::draw_position_card(ui, idx, position, config) {
                action = PositionsAction::Cancel(idx);
            }
            ui.add_space(16.0);
        }

        action
    }

    /// Draw one card. Returns true when its Cancel button was clicked.
    fn draw_position_card(
        ui: &mut egui::Ui,
        idx: usize,
        position: &Position,
        config: &ScreenConfig,
    ) -> bool {
        let quote = &config.quote;
        let mut cancel = false;

        let side_color = match position.side {
            PositionSide::Long => theme::NEON,
            PositionSide::Short => theme::DOWN,
        };
        let pnl_color = if position.is_profitable() {
            theme::NEON
        } else {
            theme::DOWN
        };

        egui::Frame::none()
            .fill(theme::CARD)
            .rounding(24.0)
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                // Header: coin + symbol on the left, side and leverage on the right
                ui.horizontal(|ui| {
                    theme::coin_badge(ui, &quote.glyph, 24.0);
                    ui.label(
                        RichText::new(quote.symbol())
                            .size(16.0)
                            .strong()
                            .color(theme::TEXT),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (side, leverage) = position.meta_text();
                        ui.spacing_mut().item_spacing.x = 4.0;
                        ui.label(RichText::new(leverage).strong().color(theme::MUTED));
                        ui.label(RichText::new("·").color(theme::MUTED));
                        ui.label(RichText::new(side).strong().color(side_color));
                    });
                });

                ui.add_space(12.0);

                let rows = [
                    (
                        "Unrealized PNL",
                        position.pnl_text(&quote.quote),
                        pnl_color,
                    ),
                    ("Size", position.size_text(&quote.base), theme::TEXT),
                    (
                        "Margin(Cross)",
                        position.margin_text(&quote.quote),
                        theme::TEXT,
                    ),
                    ("Entry Price", position.entry_text(), theme::TEXT),
                    ("Liq. Price", position.liq_text(), theme::TEXT),
                ];
                for (label, value, color) in rows {
                    Self::draw_row(ui, label, &value, color);
                }

                ui.add_space(16.0);

                let button = egui::Button::new(
                    RichText::new("Cancel")
                        .strong()
                        .color(theme::BACKGROUND),
                )
                .fill(theme::ACCENT)
                .stroke(Stroke::NONE)
                .rounding(999.0);
                let size = egui::vec2(ui.available_width(), 40.0);
                if ui.push_id(idx, |ui| ui.add_sized(size, button)).inner.clicked() {
                    cancel = true;
                }
            });

        cancel
    }

    fn draw_row(ui: &mut egui::Ui, label: &str, value: &str, color: Color32) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(label).size(12.0).color(theme::MUTED));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(value).size(12.0).color(color));
            });
        });
    }
}

/// Intents reported by the positions panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionsAction {
    None,
    SelectTab(PositionsTab),
    /// Cancel pressed on the card at this index.
    Cancel(usize),
}
