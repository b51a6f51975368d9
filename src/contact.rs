use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("enter your {0}")]
pub struct MissingField(pub &'static str);

/// A consultation request, captured whole and handed to the email
/// collaborator. Presence is the only validation the form performs.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Result<ContactSubmission, MissingField> {
        Ok(ContactSubmission {
            name: required(name, "name")?,
            email: required(email, "email")?,
            message: required(message, "message")?,
        })
    }
}

fn required(raw: &str, field: &'static str) -> Result<String, MissingField> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        Err(MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_all_fields() {
        let submission =
            ContactSubmission::new("Jane Doe", "jane@example.com", "Call me back").unwrap();

        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(submission.message, "Call me back");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let submission =
            ContactSubmission::new("  Jane ", " jane@example.com ", " hello ").unwrap();

        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(submission.message, "hello");
    }

    #[test]
    fn rejects_empty_name() {
        let result = ContactSubmission::new("", "jane@example.com", "hello");

        assert_eq!(result, Err(MissingField("name")));
    }

    #[test]
    fn rejects_empty_email() {
        let result = ContactSubmission::new("Jane", "", "hello");

        assert_eq!(result, Err(MissingField("email")));
    }

    #[test]
    fn rejects_whitespace_only_message() {
        let result = ContactSubmission::new("Jane", "jane@example.com", "   ");

        assert_eq!(result, Err(MissingField("message")));
    }
}
