// Contact form

use crate::app::Portfolio;
use crate::content;
use crate::layout;
use crate::message::Message;
use crate::state::SubmissionStatus;
use eframe::egui;

impl Portfolio {
    pub(crate) fn render_contact(&mut self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let theme = self.ui.theme;
        let pending = self.contact.is_pending();
        let form = &mut self.contact.form;

        ui.scope(|ui| {
            ui.set_max_width(layout::FORM_WIDTH);
            ui.add(
                egui::TextEdit::singleline(&mut form.user_name)
                    .hint_text("Your Name")
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                egui::TextEdit::singleline(&mut form.user_email)
                    .hint_text("Your Email")
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                egui::TextEdit::multiline(&mut form.message)
                    .hint_text("Your Message")
                    .desired_rows(layout::MESSAGE_ROWS)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            let send = ui.add_enabled(!pending, egui::Button::new("Send Message"));
            if send.clicked() {
                messages.push(Message::SubmitContact);
            }
        });

        let status = &self.contact.status;
        if *status != SubmissionStatus::Idle {
            let color = match status {
                SubmissionStatus::Sent => theme.success(),
                s if s.is_error() => theme.error(),
                _ => ui.visuals().text_color(),
            };
            ui.add_space(8.0);
            let label = ui.colored_label(color, status.text());
            if let Some(detail) = status.detail() {
                label.on_hover_text(detail);
            }
        }

        ui.add_space(16.0);
        for link in &content::CONTACT_LINKS {
            ui.horizontal(|ui| {
                ui.label(format!("{}:", link.label));
                if ui.link(link.text).on_hover_text(link.url).clicked() {
                    messages.push(Message::OpenLink(link.url.to_string()));
                }
            });
        }
    }
}
