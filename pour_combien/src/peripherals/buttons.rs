//! Button press counters.

use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use crate::game::entities::Button;

/// Source of accumulated button presses.
///
/// Counts grow with every press until the controller resets them.
/// Debouncing and press detection happen before this point.
pub trait ButtonSource {
    /// Presses of `button` since it was last reset.
    fn press_count(&self, button: Button) -> u32;

    fn reset(&mut self, button: Button);

    fn reset_all(&mut self) {
        for button in Button::ALL {
            self.reset(button);
        }
    }
}

impl<T: ButtonSource + ?Sized> ButtonSource for &mut T {
    fn press_count(&self, button: Button) -> u32 {
        (**self).press_count(button)
    }

    fn reset(&mut self, button: Button) {
        (**self).reset(button);
    }
}

/// Three press counters shared between an input producer and the
/// round controller.
///
/// Cloning gives another handle to the same counters, so an interrupt
/// handler or input thread can keep pressing while the controller owns
/// its own clone.
#[derive(Clone, Debug, Default)]
pub struct ButtonPanel {
    counts: Arc<[AtomicU32; 3]>,
}

impl ButtonPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, button: Button) {
        self.press_n(button, 1);
    }

    /// Register `n` presses at once. Counts saturate at `u32::MAX`.
    pub fn press_n(&self, button: Button, n: u32) {
        let _ = self.counts[button.index()].fetch_update(
            Ordering::AcqRel,
            Ordering::Acquire,
            |count| Some(count.saturating_add(n)),
        );
    }
}

impl ButtonSource for ButtonPanel {
    fn press_count(&self, button: Button) -> u32 {
        self.counts[button.index()].load(Ordering::Acquire)
    }

    fn reset(&mut self, button: Button) {
        self.counts[button.index()].store(0, Ordering::Release);
    }
}
