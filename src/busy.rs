use leptos::prelude::*;

/// Busy handling for one form: the page-global overlay signal plus that
/// form's own disabled flag, toggled as a unit.
///
/// The overlay is shared by every form on the page and is not coordinated
/// across them; whichever form entered or exited busy most recently wins.
/// Each form serializes its own submissions by disabling its controls, so
/// the overlap window only exists when both forms are in flight at once.
#[derive(Clone, Copy)]
pub struct BusyState {
    overlay: RwSignal<bool>,
    disabled: RwSignal<bool>,
}

impl BusyState {
    pub fn new(overlay: RwSignal<bool>) -> Self {
        Self {
            overlay,
            disabled: RwSignal::new(false),
        }
    }

    /// Signal the form's controls bind their `disabled` attribute to.
    pub fn disabled(&self) -> RwSignal<bool> {
        self.disabled
    }

    /// Shows the overlay (idempotent) and disables the form's controls.
    /// Busy state lasts as long as the returned guard: dropping it hides
    /// the overlay and re-enables the controls, so every exit path out of
    /// a submission restores the form.
    pub fn enter(self) -> BusyGuard {
        self.overlay.set(true);
        self.disabled.set(true);
        BusyGuard(self)
    }
}

pub struct BusyGuard(BusyState);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.overlay.set(false);
        self.0.disabled.set(false);
    }
}
