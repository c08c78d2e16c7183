//! Main application for the four-in-a-row GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::game_state::{GameMode, Session};
use super::theme::*;
use crate::config::AppConfig;
use crate::{Difficulty, GameStatus, Player};

/// Main four-in-a-row application
pub struct FourRowApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
}

impl FourRowApp {
    /// Create the app from loaded configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            session: Session::from_config(config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn current_difficulty(&self) -> Option<Difficulty> {
        match self.session.mode {
            GameMode::PvE { difficulty, .. } => Some(difficulty),
            GameMode::PvP => None,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                let difficulty = self.current_difficulty().unwrap_or_default();
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - X)").clicked() {
                        self.session.new_game(GameMode::PvE {
                            human: Player::X,
                            difficulty,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - O)").clicked() {
                        self.session.new_game(GameMode::PvE {
                            human: Player::O,
                            difficulty,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.session.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    if ui.button("Rematch").clicked() {
                        self.session.rematch();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.add_enabled(self.session.can_undo(), egui::Button::new("Undo")).clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                    if ui.add_enabled(self.session.can_redo(), egui::Button::new("Redo")).clicked() {
                        self.session.redo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for d in Difficulty::ALL {
                        let selected = self.current_difficulty() == Some(d);
                        if ui.radio(selected, d.name()).clicked() {
                            self.session.set_difficulty(d);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::PvE { human, difficulty } => {
                            format!("PvE - You: {human} - {difficulty}")
                        }
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_timer_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.session.game.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(22.0).strong().color(X_COLOR));
            ui.label(RichText::new("O").size(22.0).strong().color(O_COLOR));
            ui.add_space(4.0);
            ui.label(RichText::new("FOUR IN A ROW").size(20.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("6x6 board, four to win").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.session.game.current_player();
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, egui::Color32::from_rgb(50, 53, 58));
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    player.symbol(),
                    egui::FontId::proportional(28.0),
                    player_color(player),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("{player} to move")).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.session.game.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.session.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Waiting for AI", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 {
                    TIMER_NORMAL
                } else if secs < 1.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.session.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.session.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.add_enabled(self.session.can_undo(), egui::Button::new("Undo")).clicked() {
                    self.session.undo();
                }
                if ui.add_enabled(self.session.can_redo(), egui::Button::new("Redo")).clicked() {
                    self.session.redo();
                }
                if let GameMode::PvP = self.session.mode {
                    if ui.button("Hint").clicked() {
                        self.session.request_suggestion();
                    }
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.session.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(TIMER_NORMAL));
                            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {}", result.best_move)).size(12.0).strong().color(WIN_HIGHLIGHT));
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (headline, accent) = match self.session.game.status() {
            GameStatus::Won(winner) => (format!("{winner} WINS!"), player_color(winner)),
            GameStatus::Draw => ("DRAW".to_string(), TEXT_SECONDARY),
            GameStatus::InProgress => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(20.0).strong().color(accent));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("Rematch").size(14.0).strong()).clicked() {
                        self.session.rematch();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let frame = BoardFrame {
                board: self.session.game.board(),
                current_player: self.session.game.current_player(),
                last_move: self.session.game.last_move().map(|m| m.pos),
                suggested_move: self.session.suggested_move,
                winning_line: self.session.game.winning_line(),
                accepting_input: !self.session.game.is_over() && self.session.is_human_turn(),
            };
            let clicked = self.board_view.show(ui, &frame);

            if let Some(pos) = clicked {
                if let Err(msg) = self.session.try_place(pos) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint (PvP mode)
            if i.key_pressed(egui::Key::H) && self.session.mode == GameMode::PvP {
                self.session.request_suggestion();
            }

            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }
            if i.key_pressed(egui::Key::R) {
                self.session.redo();
            }

            // N - New game in the same mode
            if i.key_pressed(egui::Key::N) {
                self.session.new_game(self.session.mode);
            }
        });
    }
}

impl eframe::App for FourRowApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();

        if self.session.is_ai_turn() && !self.session.is_ai_thinking() && !self.session.game.is_over() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the worker runs; the move timer also needs redraws
        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
