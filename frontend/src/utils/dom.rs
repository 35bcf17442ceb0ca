use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::error::FxError;
use crate::interactions::anchor::PageScroll;
use crate::interactions::scroll_effects::Viewport;
use crate::interactions::surface::{OffsetBox, Surface};
use crate::interactions::timer::{FrameRequester, Scheduler};

impl Surface for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.style().set_property(property, value) {
            log::debug!("Failed to set {}: {:?}", property, e);
        }
    }

    fn remove_style(&self, property: &str) {
        if let Err(e) = self.style().remove_property(property) {
            log::debug!("Failed to clear {}: {:?}", property, e);
        }
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::debug!("Failed to add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::debug!("Failed to remove class {}: {:?}", class, e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn offset_box(&self) -> OffsetBox {
        OffsetBox {
            top: f64::from(self.offset_top()),
            height: f64::from(self.offset_height()),
        }
    }
}

pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn read_viewport(window: &Window) -> Viewport {
    Viewport {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        width: window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0),
        height: window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0),
    }
}

/// An event listener that detaches itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, FxError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| FxError::listener(event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("Failed to detach {} listener: {:?}", self.event, e);
        }
    }
}

/// `setTimeout`/`setInterval` through gloo. Handles clear their timer on drop.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimers;

/// Kept only so dropping it clears the timer.
pub enum TimerHandle {
    Once { _timeout: Timeout },
    Repeat { _interval: Interval },
}

impl Scheduler for BrowserTimers {
    type Handle = TimerHandle;

    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::Once {
            _timeout: Timeout::new(millis, task),
        }
    }

    fn interval(&self, millis: u32, task: Box<dyn FnMut()>) -> TimerHandle {
        TimerHandle::Repeat {
            _interval: Interval::new(millis, task),
        }
    }
}

pub struct BrowserFrames {
    window: Window,
}

impl BrowserFrames {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameRequester for BrowserFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> bool {
        let callback = Closure::once_into_js(move || callback());
        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                false
            }
        }
    }
}

/// Smooth scrolling on the live document.
pub struct BrowserScroll {
    window: Window,
    document: Document,
}

impl BrowserScroll {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl PageScroll for BrowserScroll {
    type Target = Element;

    fn resolve(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_into_view(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
