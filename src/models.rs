//! Frontend Models
//!
//! UI-only data structures. Link entities come from `nav_core`.

/// Severity of a toast notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    /// How long the notice stays on screen
    pub fn duration_ms(&self) -> u32 {
        match self {
            NoticeKind::Success => 1_000,
            NoticeKind::Warning | NoticeKind::Error => 2_000,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice success",
            NoticeKind::Warning => "notice warning",
            NoticeKind::Error => "notice error",
        }
    }
}

/// A toast notice
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}
