mod contact;
mod section;

pub use contact::ContactForm;
pub use section::Section;
