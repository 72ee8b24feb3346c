use std::fmt::Display;

/// An immutable named message. Both fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    name: String,
    message: String,
}

impl Message {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Name: {} - {}", self.name(), self.message())
    }
}
