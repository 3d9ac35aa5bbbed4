//! One dismissable-overlay abstraction shared by the detail and error
//! surfaces, so escape-key/backdrop handling lives in a single place.

/// How the user asked an overlay to go away. All reasons behave identically;
/// the distinction exists so input handling can stay declarative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    EscapeKey,
    Backdrop,
}

/// A modal surface rendered above normal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay<T> {
    Closed,
    Open(T),
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Overlay::Closed
    }
}

impl<T> Overlay<T> {
    pub fn open(content: T) -> Self {
        Overlay::Open(content)
    }

    /// Closing drops the content; a dismissed overlay holds nothing.
    pub fn dismiss(&mut self, _reason: DismissReason) {
        *self = Overlay::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open(_))
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            Overlay::Open(content) => Some(content),
            Overlay::Closed => None,
        }
    }
}
