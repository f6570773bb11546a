#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Warning,
}

impl ToastTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ToastTone::Success => "toast-success",
            ToastTone::Warning => "toast-warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub tone: ToastTone,
    pub generation: u64,
}

/// On-screen notification slot. Holds at most one toast; a new one replaces
/// the old one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    current: Option<Toast>,
    next_generation: u64,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing anything on screen. Returns the generation to
    /// pass to [`ToastQueue::dismiss`] when the display timer fires.
    pub fn show(&mut self, message: impl Into<String>, tone: ToastTone) -> u64 {
        self.next_generation = self.next_generation.wrapping_add(1);
        let generation = self.next_generation;
        self.current = Some(Toast {
            message: message.into(),
            tone,
            generation,
        });
        generation
    }

    /// Hide the toast if it is still the one from `generation`.
    ///
    /// Timers of replaced toasts are stale and leave the newer toast alone.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(toast) if toast.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
