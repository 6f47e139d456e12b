use crate::model::Section;

/// User intents collected while rendering a frame and applied after it.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    NavigateTo(Section),
    ToggleMenu,
    CloseMenu,

    // Contact form
    SubmitContact,

    // UI
    ToggleTheme,
    OpenLink(String),
}
