use std::time::Duration;

/// Time before a toast starts fading out.
pub const FADE_AFTER: Duration = Duration::from_millis(900);
/// Time before a toast is removed from the page.
pub const REMOVE_AFTER: Duration = Duration::from_millis(1400);

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub fading: bool,
}

/// Toasts currently on screen, oldest first.
///
/// Every pushed toast is independent: the same message twice gives two toasts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStack {
    next_id: ToastId,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, message: impl Into<String>) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            fading: false,
        });
        id
    }

    pub fn fade(&mut self, id: ToastId) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.fading = true;
        }
    }

    pub fn remove(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
