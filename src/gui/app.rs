//! Trade Screen Main Application
//! Single scrolling screen: header, price, chart, order controls and positions.

use crate::config::ScreenConfig;
use crate::gui::{theme, ChartCard, OrderPanel, OrderPanelAction, PositionsAction, PositionsPanel};
use crate::market::parse_amount;
use crate::selection::{Choice, SelectionState};
use egui::{RichText, ScrollArea};

/// Main application window.
pub struct TradeScreenApp {
    config: ScreenConfig,
    selection: SelectionState,
    chart: ChartCard,
    order_panel: OrderPanel,
}

impl TradeScreenApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ScreenConfig) -> Self {
        theme::apply(&cc.egui_ctx);
        Self::from_config(config)
    }

    /// Build the screen state without a window.
    pub fn from_config(config: ScreenConfig) -> Self {
        let chart = ChartCard::new(&config.chart);
        Self {
            config,
            selection: SelectionState::default(),
            chart,
            order_panel: OrderPanel::new(),
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn chart(&self) -> &ChartCard {
        &self.chart
    }

    /// Apply an order panel intent
    pub fn handle_order_action(&mut self, action: OrderPanelAction) {
        match action {
            OrderPanelAction::SelectTimeframe(tf) => {
                if self.selection.timeframe.select(tf) {
                    log::debug!("Timeframe -> {}", tf.label());
                }
            }
            OrderPanelAction::SelectSide(side) => {
                if self.selection.side.select(side) {
                    log::debug!("Side -> {}", side.label());
                }
            }
            OrderPanelAction::SelectOrderType(order_type) => {
                if self.selection.order_type.select(order_type) {
                    log::debug!("Order type -> {}", order_type.label());
                }
            }
            OrderPanelAction::AmountEdited => match parse_amount(&self.order_panel.amount) {
                Ok(amount) => log::debug!("Amount -> {} {}", amount, self.config.quote.base),
                Err(e) => log::debug!("Amount not set: {}", e),
            },
            OrderPanelAction::AmountUnit => log::debug!("Amount unit pressed"),
            OrderPanelAction::Leverage => log::debug!("Leverage pressed"),
            OrderPanelAction::None => {}
        }
    }

    /// Apply a positions panel intent
    pub fn handle_positions_action(&mut self, action: PositionsAction) {
        match action {
            PositionsAction::SelectTab(tab) => {
                if self.selection.tab.select(tab) {
                    log::debug!("Tab -> {}", tab.label());
                }
            }
            PositionsAction::Cancel(idx) => {
                // Display only: nothing is ever submitted, so there is nothing to cancel
                log::debug!("Cancel pressed on position card {}", idx);
            }
            PositionsAction::None => {}
        }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if theme::circle_button(ui, "<", 44.0).clicked() {
                log::debug!("Back pressed");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if theme::menu_button(ui, 44.0).clicked() {
                    log::debug!("Menu pressed");
                }

                // Centre the pair between the two buttons
                ui.with_layout(
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.horizontal_centered(|ui| {
                            theme::coin_badge(ui, &self.config.quote.glyph, 32.0);
                            ui.label(
                                RichText::new(self.config.quote.pair_text())
                                    .size(18.0)
                                    .strong()
                                    .color(theme::TEXT),
                            );
                        });
                    },
                );
            });
        });
    }

    fn show_price(&self, ui: &mut egui::Ui) {
        let quote = &self.config.quote;
        let change_color = if quote.is_up() {
            theme::UP
        } else {
            theme::DOWN
        };

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(quote.price_text())
                    .size(36.0)
                    .strong()
                    .color(theme::TEXT),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(quote.change_text())
                    .size(14.0)
                    .strong()
                    .color(change_color),
            );
        });
    }
}

impl eframe::App for TradeScreenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::none()
            .fill(theme::BACKGROUND)
            .inner_margin(egui::Margin::symmetric(24.0, 16.0));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_header(ui);
                    ui.add_space(theme::SECTION_GAP);

                    self.show_price(ui);
                    ui.add_space(theme::SECTION_GAP);

                    self.chart.show(ui);
                    ui.add_space(theme::SECTION_GAP);

                    let action = self.order_panel.show(ui, &self.selection, &self.config);
                    self.handle_order_action(action);
                    ui.add_space(theme::SECTION_GAP);

                    let action = PositionsPanel::show(ui, &self.selection, &self.config);
                    self.handle_positions_action(action);
                });
        });
    }
}
