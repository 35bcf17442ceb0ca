//! In-memory stand-ins for the browser used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::rc::Rc;

use crate::interactions::anchor::PageScroll;
use crate::interactions::surface::{OffsetBox, Surface};
use crate::interactions::timer::{FrameRequester, Scheduler};

#[derive(Default)]
struct ElementState {
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    offset: OffsetBox,
}

#[derive(Clone, Default)]
pub struct FakeElement {
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(top: f64, height: f64) -> Self {
        let element = Self::new();
        element.state.borrow_mut().offset = OffsetBox { top, height };
        element
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }
}

impl Surface for FakeElement {
    fn set_style(&self, property: &str, value: &str) {
        self.state
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn remove_style(&self, property: &str) {
        self.state.borrow_mut().styles.remove(property);
    }

    fn add_class(&self, class: &str) {
        self.state.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.state.borrow_mut().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    fn offset_box(&self) -> OffsetBox {
        self.state.borrow().offset
    }
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(u32, Box<dyn FnMut()>),
}

struct Entry {
    id: u64,
    due: u64,
    alive: Rc<Cell<bool>>,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Virtual clock: timers only fire when the test calls `advance`.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

pub struct ManualHandle {
    alive: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_tasks(&self) -> usize {
        self.clock
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.alive.get())
            .count()
    }

    fn push(&self, millis: u32, task: Task) -> ManualHandle {
        let alive = Rc::new(Cell::new(true));
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + u64::from(millis);
        clock.entries.push(Entry {
            id,
            due,
            alive: alive.clone(),
            task,
        });
        ManualHandle { alive }
    }

    /// Moves time forward, running every timer that comes due in order.
    /// Callbacks run with the clock unborrowed so they may schedule more work.
    pub fn advance(&self, millis: u64) {
        let target = self.clock.borrow().now + millis;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                clock.entries.retain(|entry| entry.alive.get());
                let position = clock
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(index, _)| index);
                position.map(|index| {
                    let entry = clock.entries.remove(index);
                    clock.now = entry.due;
                    entry
                })
            };
            let Some(entry) = next else { break };
            match entry.task {
                Task::Once(task) => {
                    entry.alive.set(false);
                    task();
                }
                Task::Repeat(period, mut task) => {
                    task();
                    if entry.alive.get() {
                        let mut clock = self.clock.borrow_mut();
                        let due = entry.due + u64::from(period.max(1));
                        clock.entries.push(Entry {
                            id: entry.id,
                            due,
                            alive: entry.alive,
                            task: Task::Repeat(period, task),
                        });
                    }
                }
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        self.push(millis, Task::Once(task))
    }

    fn interval(&self, millis: u32, task: Box<dyn FnMut()>) -> ManualHandle {
        self.push(millis.max(1), Task::Repeat(millis, task))
    }
}

/// Animation frames that only run when the test flushes them.
#[derive(Clone, Default)]
pub struct FakeFrames {
    queue: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    refusing: Rc<Cell<bool>>,
}

impl FakeFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, frame requests fail like a browser without
    /// `requestAnimationFrame`.
    pub fn refuse(&self, refusing: bool) {
        self.refusing.set(refusing);
    }

    pub fn queued(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn flush(&self) {
        let callbacks: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl FrameRequester for FakeFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> bool {
        if self.refusing.get() {
            return false;
        }
        self.queue.borrow_mut().push(callback);
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollCall {
    IntoView(String),
    Top,
}

/// Page with a fixed set of section ids that records every scroll request.
#[derive(Default)]
pub struct FakeScroll {
    sections: HashSet<String>,
    calls: RefCell<Vec<ScrollCall>>,
}

impl FakeScroll {
    pub fn with_sections(ids: &[&str]) -> Self {
        Self {
            sections: ids.iter().map(|id| id.to_string()).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ScrollCall> {
        self.calls.borrow().clone()
    }
}

impl PageScroll for FakeScroll {
    type Target = String;

    fn resolve(&self, id: &str) -> Option<String> {
        self.sections.get(id).cloned()
    }

    fn scroll_into_view(&self, target: &String) {
        self.calls
            .borrow_mut()
            .push(ScrollCall::IntoView(target.clone()));
    }

    fn scroll_to_top(&self) {
        self.calls.borrow_mut().push(ScrollCall::Top);
    }
}
