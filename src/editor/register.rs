//! Kill register

/// One slot of killed text. Every kill replaces the slot; yanking reads it
/// without clearing, so repeated yanks insert the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KillRegister {
    content: Option<String>,
}

impl KillRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kill(&mut self, text: String) {
        self.content = Some(text);
    }

    pub fn yank(&self) -> Option<&str> {
        self.content.as_deref()
    }
}
