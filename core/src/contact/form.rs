//! Contact form fields.
use serde::{Deserialize, Serialize};
use std::fmt;

// *************
// *** Field ***
// *************

/// Contact form fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Html `name` and `id` attribute of the field's control.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// *******************
// *** ContactForm ***
// *******************

/// Values of the contact form.
/// Serializes to the request body sent to the form intake.
#[derive(Serialize, Deserialize, Default, Clone, PartialEq, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Fields without a value.
    /// Whitespace alone does not count as a value.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Whether every field has a value.
    pub fn is_complete(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| !self.get(field).trim().is_empty())
    }

    /// Clears every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "./form_test.rs"]
mod form_test;
