use serde::Deserialize;

/// The four-field record behind the contact form.
///
/// Created empty when the page is rendered, filled in field by field on the
/// client, submitted as-is. There is no identity and nothing is persisted;
/// once relayed the record is reset for the next visitor interaction.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactMessage {
    /// Overwrite a single field. Last write wins; no validation happens here,
    /// required-ness is enforced by the browser form.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Clear every field back to the empty string.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
