use std::cell::RefCell;

use crate::config::FxConfig;
use crate::interactions::surface::Surface;
use crate::interactions::timer::{DelayedTask, Scheduler};
use crate::selectors::OPEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Open,
    Closed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Slide-out navigation. The panel's `is-open` class is the open flag;
/// button and body follow it.
pub struct NavMenu<E, S: Scheduler> {
    panel: E,
    button: Option<E>,
    list: Option<E>,
    body: Option<E>,
    scheduler: S,
    restore: RefCell<DelayedTask<S>>,
    restore_ms: u32,
}

impl<E: Surface + Clone + 'static, S: Scheduler> NavMenu<E, S> {
    pub fn new(
        panel: E,
        button: Option<E>,
        list: Option<E>,
        body: Option<E>,
        scheduler: S,
        config: &FxConfig,
    ) -> Self {
        Self {
            panel,
            button,
            list,
            body,
            scheduler,
            restore: RefCell::new(DelayedTask::new()),
            restore_ms: config.nav_animation_restore_ms,
        }
    }

    pub fn state(&self) -> MenuState {
        if self.panel.has_class(OPEN) {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn toggle(&self) -> MenuState {
        let open = self.panel.toggle_class(OPEN);
        if let Some(button) = &self.button {
            button.set_class(OPEN, open);
        }

        if open {
            self.replay_now();
            if let Some(body) = &self.body {
                body.set_style("overflow", "hidden");
            }
            log::debug!("Menu opened");
            MenuState::Open
        } else {
            self.rewind_entrance();
            if let Some(body) = &self.body {
                body.remove_style("overflow");
            }
            log::debug!("Menu closed");
            MenuState::Closed
        }
    }

    /// Closes the menu if it is open. Returns whether anything changed.
    pub fn close(&self) -> bool {
        if self.is_open() {
            self.toggle();
            true
        } else {
            false
        }
    }

    // Freezes the item list's animation and lets the stylesheet take over
    // again shortly after, so the next open plays the entrance from the start.
    fn rewind_entrance(&self) {
        let Some(list) = self.list.clone() else { return };
        list.set_style("animation", "none");
        self.restore
            .borrow_mut()
            .schedule(&self.scheduler, self.restore_ms, move || list.remove_style("animation"));
    }

    fn replay_now(&self) {
        if self.restore.borrow_mut().cancel() {
            if let Some(list) = &self.list {
                list.remove_style("animation");
            }
        }
    }
}
