//! Small state machines for reader front-ends.
//!
//! Each piece of interactive state is one enum with explicit transitions,
//! so front-ends never juggle independent boolean flags.

use serde::{Deserialize, Serialize};

use crate::storage::{HighlightColor, NewHighlight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    Chat,
    Settings,
    WordLookup,
}

/// At most one overlay is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Open(OverlayKind),
}

impl Overlay {
    /// Open `kind`, replacing whatever overlay was open.
    pub fn open(self, kind: OverlayKind) -> Self {
        Self::Open(kind)
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    /// Close `kind` if it is the open overlay, otherwise open it.
    pub fn toggle(self, kind: OverlayKind) -> Self {
        match self {
            Self::Open(current) if current == kind => Self::Closed,
            _ => Self::Open(kind),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Today,
    Calendar,
    Stats,
    Journal,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Today, Tab::Calendar, Tab::Stats, Tab::Journal];

    fn position(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A verse the reader has selected but not yet coloured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingHighlight {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HighlightSelection {
    #[default]
    Idle,
    Pending(PendingHighlight),
}

impl HighlightSelection {
    /// Select a verse. A previous pending selection is discarded.
    pub fn select(&mut self, pending: PendingHighlight) {
        *self = Self::Pending(pending);
    }

    /// Commit the pending selection with a colour and return to `Idle`.
    ///
    /// Returns `None` when nothing was selected.
    pub fn confirm(
        &mut self,
        color: HighlightColor,
        note: Option<String>,
    ) -> Option<NewHighlight> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Pending(pending) => Some(NewHighlight {
                book: pending.book,
                chapter: pending.chapter,
                verse: pending.verse,
                text: pending.text,
                color,
                note,
            }),
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_transitions() {
        let overlay = Overlay::default();
        assert!(!overlay.is_open());

        let overlay = overlay.open(OverlayKind::Chat);
        assert_eq!(overlay, Overlay::Open(OverlayKind::Chat));

        let overlay = overlay.toggle(OverlayKind::Settings);
        assert_eq!(overlay, Overlay::Open(OverlayKind::Settings));

        let overlay = overlay.toggle(OverlayKind::Settings);
        assert_eq!(overlay, Overlay::Closed);

        assert_eq!(Overlay::Open(OverlayKind::WordLookup).close(), Overlay::Closed);
    }

    #[test]
    fn test_tab_cycles() {
        assert_eq!(Tab::Today.next(), Tab::Calendar);
        assert_eq!(Tab::Journal.next(), Tab::Today);
        assert_eq!(Tab::Today.prev(), Tab::Journal);
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    fn pending() -> PendingHighlight {
        PendingHighlight {
            book: "요한복음".to_string(),
            chapter: 3,
            verse: 16,
            text: "하나님이 세상을 이처럼 사랑하사".to_string(),
        }
    }

    #[test]
    fn test_highlight_confirm() {
        let mut selection = HighlightSelection::default();
        assert_eq!(selection.confirm(HighlightColor::Blue, None), None);

        selection.select(pending());
        assert!(selection.is_pending());

        let highlight = selection
            .confirm(HighlightColor::Green, Some("암송".to_string()))
            .expect("pending selection should produce a highlight");
        assert_eq!(highlight.verse, 16);
        assert_eq!(highlight.color, HighlightColor::Green);
        assert_eq!(highlight.note.as_deref(), Some("암송"));
        assert_eq!(selection, HighlightSelection::Idle);
    }

    #[test]
    fn test_highlight_cancel() {
        let mut selection = HighlightSelection::default();
        selection.select(pending());
        selection.cancel();
        assert!(!selection.is_pending());
        assert_eq!(selection.confirm(HighlightColor::Pink, None), None);
    }
}
