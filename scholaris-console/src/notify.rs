//! Operator-facing notices raised by command settlement.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A banner shown over the current page.
///
/// Success notices are transient and dismissed by any key; error notices
/// block until explicitly dismissed so the operator sees the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            body: None,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: Some(body.into()),
        }
    }

    /// Whether this notice requires an explicit dismissal.
    pub fn is_blocking(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
