//! Transient toast queue for non-blocking action feedback.
//!
//! Action failures (follow/attend/volunteer toggles, sends) surface here and
//! never block the page; load failures use inline panels instead.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// One queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

/// FIFO toast queue provided as a context signal.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, text: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            text: text.to_owned(),
        });
        id
    }

    pub fn push_error(&mut self, text: &str) -> String {
        self.push(ToastKind::Error, text)
    }

    pub fn push_success(&mut self, text: &str) -> String {
        self.push(ToastKind::Success, text)
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}
