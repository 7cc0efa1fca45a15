#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Transient UI state: dark mode and the one-slot notice banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub notice: Option<Notice>,
}

/// Why a notice is shown; the idle logout and the access denial are
/// deliberately distinguishable from each other and from ordinary errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    IdleLogout,
    AccessDenied,
}

/// A user-visible notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Forced logout after the inactivity window elapsed.
    pub fn idle_logout() -> Self {
        Self {
            kind: NoticeKind::IdleLogout,
            message: "Byli jste odhlášeni z důvodu neaktivity".to_owned(),
        }
    }

    /// Authenticated but under-privileged navigation attempt.
    pub fn access_denied() -> Self {
        Self {
            kind: NoticeKind::AccessDenied,
            message: "Nemáte oprávnění pro přístup do této sekce".to_owned(),
        }
    }
}
