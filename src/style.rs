use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

impl Theme {
    /// Parse the config value. Anything but "light" is dark.
    pub fn from_config(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn as_config(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }

    /// Highlight for the active navigation entry and headings
    pub fn accent(&self) -> egui::Color32 {
        match self {
            Self::Light => egui::Color32::from_rgb(0, 110, 200),
            Self::Dark => egui::Color32::from_rgb(120, 180, 255),
        }
    }

    pub fn success(&self) -> egui::Color32 {
        match self {
            Self::Light => egui::Color32::from_rgb(20, 130, 60),
            Self::Dark => egui::Color32::from_rgb(110, 210, 140),
        }
    }

    pub fn error(&self) -> egui::Color32 {
        egui::Color32::from_rgb(230, 80, 80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        assert_eq!(Theme::from_config("light"), Theme::Light);
        assert_eq!(Theme::from_config("LIGHT"), Theme::Light);
        assert_eq!(Theme::from_config("dark"), Theme::Dark);
        assert_eq!(Theme::from_config("solarized"), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().as_config(), "light");
    }
}
