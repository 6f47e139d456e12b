use crate::config::Config;
use crate::input;
use crate::io::{spawn_worker, EmailRelay, RelayCommand, RelayResult};
use crate::layout;
use crate::message::Message;
use crate::model::Section;
use crate::state::{ContactState, NavigationController, UIState};
use crate::style::Theme;
use crate::subscription::{ViewportEvent, ViewportEvents, VisibilityTracker};
use eframe::egui;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Portfolio {
    pub config: Config,

    // State
    pub navigation: NavigationController,
    pub contact: ContactState,
    pub ui: UIState,

    // Viewport observation
    pub(crate) viewport_events: ViewportEvents,
    pub(crate) visibility: VisibilityTracker,
    pub(crate) section_rects: Vec<(Section, egui::Rect)>,

    // Relay worker
    pub(crate) command_tx: Sender<RelayCommand>,
    pub(crate) result_rx: Receiver<RelayResult>,
}

impl Portfolio {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, relay: Arc<dyn EmailRelay>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::from_config(&config.theme.mode);
        cc.egui_ctx.set_visuals(theme.visuals());

        let (command_tx, result_rx) = spawn_worker(cc.egui_ctx.clone(), relay);

        let viewport_events = if config.navigation.track_visibility {
            ViewportEvents::new()
        } else {
            ViewportEvents::without_visibility()
        };
        let mut navigation = NavigationController::new(
            config.navigation.breakpoint,
            config.navigation.visibility_threshold,
        );
        navigation.attach(&viewport_events);

        info!(title = %config.site.title, "Portfolio started");

        Self {
            visibility: VisibilityTracker::new(config.navigation.visibility_threshold),
            config,
            navigation,
            contact: ContactState::new(),
            ui: UIState::new(theme),
            viewport_events,
            section_rects: Vec::with_capacity(Section::ALL.len()),
            command_tx,
            result_rx,
        }
    }

    pub fn is_compact(&self, ctx: &egui::Context) -> bool {
        layout::is_compact(layout::screen_width(ctx), self.navigation.breakpoint())
    }

    fn poll_relay(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            self.contact.on_result(result);
        }
    }

    /// Report a width change to the resize listeners.
    fn observe_resize(&mut self, ctx: &egui::Context) {
        let width = layout::screen_width(ctx);
        if self.ui.width_changed(width) {
            self.viewport_events.emit(ViewportEvent::Resized { width });
            // Sections reflow on resize, so every ratio is reported afresh
            self.visibility.reset();
        }
    }

    /// Report sections that crossed the visibility threshold during this frame.
    fn observe_sections(&mut self, ctx: &egui::Context, viewport: egui::Rect) {
        let before = self.navigation.active_section();
        for event in self.visibility.observe(viewport, &self.section_rects) {
            self.viewport_events.emit(event);
        }
        self.navigation.pump();
        if self.navigation.active_section() != before {
            ctx.request_repaint();
        }
    }

    fn apply(&mut self, ctx: &egui::Context, message: Message) {
        match message {
            Message::NavigateTo(section) => {
                self.ui.scroll_target = Some(self.navigation.navigate_to(section));
                ctx.request_repaint();
            }
            Message::ToggleMenu => self.navigation.toggle_menu(),
            Message::CloseMenu => self.navigation.close_menu(),
            Message::SubmitContact => {
                self.contact
                    .submit(&self.command_tx, &self.config.site.title);
            }
            Message::ToggleTheme => {
                self.ui.theme = self.ui.theme.toggle();
                ctx.set_visuals(self.ui.theme.visuals());
                self.config.theme.mode = self.ui.theme.as_config().to_string();
                if let Err(e) = Config::save_theme(&self.config.theme.mode) {
                    warn!("Failed to save config: {}", e);
                    self.ui.set_error(format!("Failed to save config: {}", e));
                }
            }
            Message::OpenLink(url) => {
                debug!(%url, "Opening link");
                match open::that(&url) {
                    Ok(()) => self.ui.set_info(format!("Opened {}", url)),
                    Err(e) => self.ui.set_error(format!("Could not open link: {}", e)),
                }
            }
        }
    }
}

impl eframe::App for Portfolio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.clear_expired_messages(layout::MESSAGE_TIMEOUT_SECS);
        self.poll_relay();

        self.observe_resize(ctx);
        self.navigation.pump();

        let mut messages = input::keyboard_messages(ctx, self.navigation.menu_open());

        self.render_navbar(ctx, &mut messages);
        if self.navigation.menu_open() && self.is_compact(ctx) {
            self.render_menu_overlay(ctx, &mut messages);
        }
        self.render_status_bar(ctx);

        let viewport = egui::CentralPanel::default()
            .show(ctx, |ui| self.render_page(ui, &mut messages))
            .inner;
        self.observe_sections(ctx, viewport);

        for message in messages {
            self.apply(ctx, message);
        }
    }
}
