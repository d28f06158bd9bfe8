//! Order Panel Widget
//! Timeframe selector, side and leverage row, order type switch, amount input and slider dots.

use crate::config::ScreenConfig;
use crate::gui::theme;
use crate::market::sanitize;
use crate::selection::{Choice, OrderType, SelectionState, Side, Timeframe};
use egui::{RichText, Sense, Stroke};

const SLIDER_STOPS: usize = 5;

/// Order entry controls. Holds the only free-form input on the screen.
#[derive(Default)]
pub struct OrderPanel {
    pub amount: String,
}

impl OrderPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the panel. Selection changes are reported, never applied here.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        selection: &SelectionState,
        config: &ScreenConfig,
    ) -> OrderPanelAction {
        let mut action = OrderPanelAction::None;

        // ===== Timeframe Selector =====
        egui::Frame::none()
            .fill(theme::CARD)
            .rounding(20.0)
            .inner_margin(4.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    let count = Timeframe::ALL.len() as f32;
                    let width = ui.available_width() / count;
                    for (tf, active) in selection.timeframe.options() {
                        let clicked = theme::segment_button(
                            ui,
                            tf.label(),
                            active,
                            egui::vec2(width, 30.0),
                            theme::BUTTON,
                            theme::TEXT,
                        )
                        .clicked();
                        if clicked {
                            action = OrderPanelAction::SelectTimeframe(tf);
                        }
                    }
                });
            });

        ui.add_space(theme::SECTION_GAP);

        // ===== Buy / Sell + Leverage =====
        ui.horizontal(|ui| {
            egui::Frame::none()
                .fill(theme::CARD)
                .rounding(20.0)
                .inner_margin(4.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        for (side, active) in selection.side.options() {
                            let clicked = theme::segment_button(
                                ui,
                                side.label(),
                                active,
                                egui::vec2(72.0, 32.0),
                                theme::ACCENT,
                                theme::BACKGROUND,
                            )
                            .clicked();
                            if clicked {
                                action = OrderPanelAction::SelectSide(side);
                            }
                        }
                    });
                });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let leverage = egui::Button::new(
                    RichText::new(config.account.leverage_text())
                        .color(theme::TEXT)
                        .strong(),
                )
                .fill(theme::CARD)
                .stroke(Stroke::NONE)
                .rounding(16.0)
                .min_size(egui::vec2(84.0, 38.0));
                if ui.add(leverage).clicked() {
                    action = OrderPanelAction::Leverage;
                }
            });
        });

        ui.add_space(16.0);

        // ===== Market / Limit + Balance =====
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;
            for (order_type, active) in selection.order_type.options() {
                if theme::text_toggle(ui, order_type.label(), active, theme::NEON).clicked() {
                    action = OrderPanelAction::SelectOrderType(order_type);
                }
            }

            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                ui.label(
                    RichText::new("Available")
                        .size(12.0)
                        .color(theme::BALANCE_LABEL),
                );
                ui.label(
                    RichText::new(config.account.available_text())
                        .size(12.0)
                        .strong()
                        .color(theme::BALANCE_VALUE),
                );
            });
        });

        ui.add_space(16.0);

        // ===== Amount Input =====
        egui::Frame::none()
            .rounding(28.0)
            .stroke(Stroke::new(1.0, theme::BORDER))
            .inner_margin(egui::Margin::symmetric(20.0, 12.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let input_width = ui.available_width() * 0.8;
                    let edit = egui::TextEdit::singleline(&mut self.amount)
                        .hint_text(RichText::new("Enter Amount").color(theme::MUTED))
                        .text_color(theme::TEXT)
                        .frame(false)
                        .desired_width(input_width);
                    if ui.add(edit).changed() {
                        self.amount = sanitize(&self.amount);
                        action = OrderPanelAction::AmountEdited;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let suffix = format!("{} ▾", config.quote.base);
                        if theme::text_toggle(ui, &suffix, true, theme::TEXT).clicked() {
                            action = OrderPanelAction::AmountUnit;
                        }
                    });
                });
            });

        ui.add_space(16.0);

        // ===== Slider Dots =====
        Self::draw_slider_dots(ui);

        action
    }

    /// Five evenly spaced stops on a dark track.
    fn draw_slider_dots(ui: &mut egui::Ui) {
        let dot = 12.0;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), dot), Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, theme::CARD);

        let step = (rect.width() - dot) / (SLIDER_STOPS - 1) as f32;
        for i in 0..SLIDER_STOPS {
            let center = egui::pos2(rect.left() + dot / 2.0 + step * i as f32, rect.center().y);
            painter.circle_filled(center, dot / 2.0, theme::ACCENT);
        }
    }
}

/// Intents reported by the order panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderPanelAction {
    None,
    SelectTimeframe(Timeframe),
    SelectSide(Side),
    SelectOrderType(OrderType),
    AmountEdited,
    AmountUnit,
    Leverage,
}
