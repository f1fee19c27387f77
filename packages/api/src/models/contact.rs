//! Landing page contact message.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// JSON body accepted by the form relay.
#[derive(Debug, Serialize)]
pub(crate) struct ContactPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    #[serde(rename = "_subject")]
    subject: String,
    #[serde(rename = "_template")]
    template: &'static str,
}

impl ContactMessage {
    pub(crate) fn payload(&self) -> ContactPayload<'_> {
        ContactPayload {
            name: &self.name,
            email: &self.email,
            message: &self.message,
            subject: format!("New Contact from {}", self.name),
            template: "table",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_fields() {
        let msg = ContactMessage {
            name: "Dana".into(),
            email: "dana@example.com".into(),
            message: "Hello".into(),
        };
        let json = serde_json::to_value(msg.payload()).unwrap();
        assert_eq!(json["_subject"], "New Contact from Dana");
        assert_eq!(json["_template"], "table");
        assert_eq!(json["email"], "dana@example.com");
    }
}
