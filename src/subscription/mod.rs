mod viewport;
mod visibility;

pub use viewport::{EventKind, Subscription, ViewportEvent, ViewportEvents};
pub use visibility::VisibilityTracker;
