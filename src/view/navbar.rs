// Navigation bar, collapsed menu overlay and status bar

use crate::app::Portfolio;
use crate::layout;
use crate::message::Message;
use crate::model::Section;
use crate::style::Theme;
use eframe::egui;

impl Portfolio {
    pub(crate) fn render_navbar(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        let compact = self.is_compact(ctx);
        let active = self.navigation.active_section();
        let theme = self.ui.theme;

        egui::TopBottomPanel::top("nav_panel")
            .exact_height(layout::NAV_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let title = egui::RichText::new(&self.config.site.title)
                        .heading()
                        .color(theme.accent());
                    if ui
                        .add(egui::Label::new(title).sense(egui::Sense::click()))
                        .clicked()
                    {
                        messages.push(Message::NavigateTo(Section::Home));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme_icon = match theme {
                            Theme::Dark => "☀",
                            Theme::Light => "🌙",
                        };
                        if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                            messages.push(Message::ToggleTheme);
                        }

                        if compact {
                            let menu_icon = if self.navigation.menu_open() { "✕" } else { "☰" };
                            if ui
                                .button(menu_icon)
                                .on_hover_text("Toggle navigation menu")
                                .clicked()
                            {
                                messages.push(Message::ToggleMenu);
                            }
                        } else {
                            // Right-to-left layout, so the last section goes first
                            for section in Section::ALL.iter().rev() {
                                nav_link(ui, *section, active, theme, messages);
                            }
                        }
                    });
                });
            });
    }

    pub(crate) fn render_menu_overlay(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        let active = self.navigation.active_section();
        let theme = self.ui.theme;

        egui::Area::new(egui::Id::new("nav_menu"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_TOP, [-8.0, layout::NAV_HEIGHT])
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(160.0);
                    ui.vertical(|ui| {
                        for section in Section::ALL {
                            nav_link(ui, section, active, theme, messages);
                        }
                    });
                });
            });
    }

    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        if self.ui.error_message.is_none() && self.ui.info_message.is_none() {
            return;
        }
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, _)) = &self.ui.error_message {
                    ui.colored_label(self.ui.theme.error(), msg);
                }
                if let Some((msg, _)) = &self.ui.info_message {
                    ui.label(msg);
                }
            });
        });
    }
}

fn nav_link(
    ui: &mut egui::Ui,
    section: Section,
    active: Section,
    theme: Theme,
    messages: &mut Vec<Message>,
) {
    let is_active = section == active;
    let mut text = egui::RichText::new(section.label());
    if is_active {
        text = text.strong().color(theme.accent());
    }
    if ui.selectable_label(is_active, text).clicked() {
        messages.push(Message::NavigateTo(section));
    }
}
