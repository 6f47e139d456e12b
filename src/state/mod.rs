pub mod contact;
pub mod navigation;
pub mod ui;

pub use contact::{ContactState, SubmissionStatus};
pub use navigation::NavigationController;
pub use ui::UIState;
