use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::FxConfig;
use crate::interactions::surface::Surface;
use crate::interactions::timer::{DelayedTask, Scheduler};
use crate::selectors::{ACTIVE, TEXT_VISIBLE};

struct Rotation<E, S: Scheduler> {
    slides: Vec<E>,
    dots: Vec<E>,
    current: usize,
    scheduler: S,
    reveal: DelayedTask<S>,
    advance: Option<S::Handle>,
    reveal_ms: u32,
    period_ms: u32,
}

/// Concept slider: shows one slide's image, reveals its text after a delay,
/// and moves on to the next slide on a fixed period.
pub struct SlideRotator<E, S: Scheduler> {
    inner: Rc<RefCell<Rotation<E, S>>>,
}

impl<E, S: Scheduler> Clone for SlideRotator<E, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: Surface + Clone + 'static, S: Scheduler> SlideRotator<E, S> {
    pub fn new(slides: Vec<E>, dots: Vec<E>, scheduler: S, config: &FxConfig) -> Self {
        if !dots.is_empty() && dots.len() != slides.len() {
            log::warn!(
                "Slider has {} slides but {} indicators",
                slides.len(),
                dots.len()
            );
        }
        Self {
            inner: Rc::new(RefCell::new(Rotation {
                slides,
                dots,
                current: 0,
                scheduler,
                reveal: DelayedTask::new(),
                advance: None,
                reveal_ms: config.text_reveal_ms,
                period_ms: config.advance_period_ms,
            })),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current(&self) -> usize {
        self.inner.borrow().current
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().advance.is_some()
    }

    /// Shows the current slide and starts auto-advance. Does nothing
    /// without slides.
    pub fn start(&self) {
        if self.is_empty() {
            return;
        }
        let current = self.current();
        Self::show(&self.inner, current);
        Self::arm(&self.inner);
    }

    pub fn stop(&self) {
        let mut rotation = self.inner.borrow_mut();
        rotation.advance = None;
        rotation.reveal.cancel();
    }

    /// Returns false (and changes nothing) when `index` is out of range.
    pub fn select(&self, index: usize) -> bool {
        Self::show(&self.inner, index)
    }

    /// Indicator click: jump to `index` and restart the period from now.
    pub fn choose(&self, index: usize) -> bool {
        if index >= self.len() {
            log::warn!("Ignoring indicator {} of {}", index, self.len());
            return false;
        }
        self.stop();
        Self::show(&self.inner, index);
        Self::arm(&self.inner);
        true
    }

    fn show(inner: &Rc<RefCell<Rotation<E, S>>>, index: usize) -> bool {
        let mut rotation = inner.borrow_mut();
        let Some(slide) = rotation.slides.get(index).cloned() else {
            log::warn!("Slide {} does not exist", index);
            return false;
        };

        for other in &rotation.slides {
            other.remove_class(ACTIVE);
            other.remove_class(TEXT_VISIBLE);
        }
        for dot in &rotation.dots {
            dot.remove_class(ACTIVE);
        }
        slide.add_class(ACTIVE);
        if let Some(dot) = rotation.dots.get(index) {
            dot.add_class(ACTIVE);
        }

        let Rotation {
            reveal,
            scheduler,
            reveal_ms,
            ..
        } = &mut *rotation;
        reveal.schedule(scheduler, *reveal_ms, move || slide.add_class(TEXT_VISIBLE));
        rotation.current = index;
        log::debug!("Slide {} active", index);
        true
    }

    fn arm(inner: &Rc<RefCell<Rotation<E, S>>>) {
        let weak: Weak<RefCell<Rotation<E, S>>> = Rc::downgrade(inner);
        let mut rotation = inner.borrow_mut();
        let period = rotation.period_ms;
        let handle = rotation.scheduler.interval(
            period,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else { return };
                let next = {
                    let rotation = inner.borrow();
                    (rotation.current + 1) % rotation.slides.len().max(1)
                };
                Self::show(&inner, next);
            }),
        );
        rotation.advance = Some(handle);
    }
}
