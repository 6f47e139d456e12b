// Page sections rendered in one vertical scroll area

use crate::app::Portfolio;
use crate::content;
use crate::layout;
use crate::message::Message;
use crate::model::Section;
use chrono::Datelike;
use eframe::egui;

impl Portfolio {
    /// Renders every section and returns the scroll viewport in screen space.
    pub(crate) fn render_page(&mut self, ui: &mut egui::Ui, messages: &mut Vec<Message>) -> egui::Rect {
        self.section_rects.clear();
        let min_height = ui.available_height().max(layout::SECTION_MIN_HEIGHT);

        egui::ScrollArea::vertical()
            .id_salt("page_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let width = layout::content_width(ui);
                    ui.set_max_width(width);
                    for section in Section::ALL {
                        self.render_section(ui, section, min_height, messages);
                    }
                    self.render_footer(ui);
                });
            })
            .inner_rect
    }

    fn render_section(
        &mut self,
        ui: &mut egui::Ui,
        section: Section,
        min_height: f32,
        messages: &mut Vec<Message>,
    ) {
        let accent = self.ui.theme.accent();
        let rect = ui
            .scope(|ui| {
                ui.set_min_height(min_height);
                ui.add_space(layout::SECTION_PADDING);
                if section != Section::Home {
                    ui.label(
                        egui::RichText::new(heading(section))
                            .heading()
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(12.0);
                }
                match section {
                    Section::Home => self.render_home(ui),
                    Section::About => render_about(ui),
                    Section::Skills => render_skills(ui),
                    Section::Education => render_education(ui),
                    Section::Projects => render_projects(ui, messages),
                    Section::Contact => self.render_contact(ui, messages),
                }
                ui.add_space(layout::SECTION_PADDING);
            })
            .response
            .rect;

        self.section_rects.push((section, rect));
        if self.ui.scroll_target == Some(section) {
            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
            self.ui.scroll_target = None;
        }
        ui.separator();
    }

    fn render_home(&self, ui: &mut egui::Ui) {
        if let Some(photo) = &self.config.site.photo {
            let uri = format!("file://{}", photo.display());
            ui.add(
                egui::Image::new(uri)
                    .fit_to_exact_size(egui::vec2(layout::PHOTO_SIZE, layout::PHOTO_SIZE)),
            );
            ui.add_space(16.0);
        }
        ui.label(egui::RichText::new("Hi, I'm").size(28.0));
        ui.label(
            egui::RichText::new(content::OWNER)
                .size(36.0)
                .strong()
                .color(self.ui.theme.accent()),
        );
        ui.add_space(8.0);
        ui.label(content::TAGLINE);
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.add_space(16.0);
        ui.weak(format!(
            "© {} {} | Portfolio",
            chrono::Local::now().year(),
            content::OWNER
        ));
        ui.add_space(16.0);
    }
}

fn heading(section: Section) -> &'static str {
    match section {
        Section::About => "About Me",
        Section::Contact => "Contact Me",
        other => other.label(),
    }
}

fn render_about(ui: &mut egui::Ui) {
    ui.add(egui::Label::new(content::ABOUT).wrap());
}

fn render_skills(ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        for skill in content::SKILLS {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_size(egui::vec2(layout::CARD_WIDTH / 2.0, layout::CARD_HEIGHT / 2.0));
                ui.label(egui::RichText::new(skill).strong());
            });
        }
    });
}

fn render_education(ui: &mut egui::Ui) {
    for item in content::EDUCATION {
        ui.label(format!("• {}", item));
    }
}

fn render_projects(ui: &mut egui::Ui, messages: &mut Vec<Message>) {
    ui.horizontal_wrapped(|ui| {
        for project in &content::PROJECTS {
            let button = egui::Button::new(egui::RichText::new(project.name).strong());
            if ui
                .add_sized([layout::CARD_WIDTH, layout::CARD_HEIGHT], button)
                .on_hover_text(project.link)
                .clicked()
            {
                messages.push(Message::OpenLink(project.link.to_string()));
            }
        }
    });
}
