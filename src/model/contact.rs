// Contact form fields as entered by the visitor

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

impl ContactForm {
    #[cfg(test)]
    pub fn new(
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            user_email: user_email.into(),
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.user_name.is_empty() && self.user_email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        self.user_name.clear();
        self.user_email.clear();
        self.message.clear();
    }

    /// Returns the first problem that keeps the form from being sent.
    pub fn validate(&self) -> Result<(), String> {
        if self.user_name.trim().is_empty() {
            return Err("Please enter your name".to_string());
        }
        if self.user_email.trim().is_empty() {
            return Err("Please enter your email".to_string());
        }
        if !looks_like_email(self.user_email.trim()) {
            return Err("Please enter a valid email address".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("Please enter a message".to_string());
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_form_is_valid() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let mut form = ContactForm::default();
        assert_eq!(form.validate().unwrap_err(), "Please enter your name");
        form.user_name = "Ada".into();
        assert_eq!(form.validate().unwrap_err(), "Please enter your email");
        form.user_email = "ada@example.com".into();
        assert_eq!(form.validate().unwrap_err(), "Please enter a message");
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a b@c.de"));
        assert!(!looks_like_email("a@@b.co"));
    }

    #[test]
    fn test_clear() {
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hello");
        form.clear();
        assert!(form.is_empty());
    }
}
