//! Start-up phases keyed on `document.readyState`.

/// Parsed `document.readyState`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Unknown values are treated as `Interactive`: the DOM is usable but
    /// `load` has not been seen.
    pub fn parse(state: &str) -> Self {
        match state {
            "loading" => ReadyState::Loading,
            "complete" => ReadyState::Complete,
            _ => ReadyState::Interactive,
        }
    }

    /// `DOMContentLoaded` has already fired
    pub fn content_ready(&self) -> bool {
        !matches!(self, ReadyState::Loading)
    }

    /// `load` has already fired
    pub fn loaded(&self) -> bool {
        matches!(self, ReadyState::Complete)
    }
}
