use std::rc::Rc;

use crate::config::FxConfig;
use crate::interactions::surface::{OffsetBox, Surface};
use crate::interactions::timer::{FrameRequester, FrameThrottle};
use crate::selectors::SCROLLED;

/// Window measurements read fresh for every update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Vertical displacement of a parallax layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shift {
    None,
    Pixels(f64),
}

impl Shift {
    pub fn to_css(self) -> String {
        match self {
            Shift::None => "none".to_string(),
            Shift::Pixels(px) => format!("translateY({}px)", px),
        }
    }
}

pub fn logo_opacity(scroll_y: f64, config: &FxConfig) -> f64 {
    (1.0 - scroll_y / config.logo_fade_distance).clamp(0.0, 1.0)
}

pub fn hero_shift(view: Viewport, config: &FxConfig) -> Shift {
    if config.is_desktop(view.width) {
        Shift::Pixels(view.scroll_y * config.hero_parallax_rate)
    } else {
        Shift::None
    }
}

/// Shift for the contact background, or `None` when the section is out of
/// range and the layer should keep whatever it last had.
pub fn contact_shift(view: Viewport, section: OffsetBox, config: &FxConfig) -> Option<Shift> {
    if !config.is_desktop(view.width) {
        return Some(Shift::None);
    }
    let visible =
        view.scroll_y > section.top - view.height && view.scroll_y < section.top + section.height;
    if !visible {
        return None;
    }
    let relative = view.scroll_y - section.top;
    Some(Shift::Pixels((relative * config.contact_parallax_rate).max(0.0)))
}

pub fn header_scrolled(scroll_y: f64, config: &FxConfig) -> bool {
    scroll_y > config.header_scrolled_threshold
}

/// Parallax layers, hero logo fade and header state. Every element is
/// optional and its effect is skipped when missing.
pub struct ScrollEffects<E> {
    pub hero_bg: Option<E>,
    pub logo: Option<E>,
    pub contact_bg: Option<E>,
    pub contact: Option<E>,
    pub header: Option<E>,
    config: FxConfig,
}

impl<E: Surface> ScrollEffects<E> {
    pub fn new(
        hero_bg: Option<E>,
        logo: Option<E>,
        contact_bg: Option<E>,
        contact: Option<E>,
        header: Option<E>,
        config: FxConfig,
    ) -> Self {
        Self {
            hero_bg,
            logo,
            contact_bg,
            contact,
            header,
            config,
        }
    }

    /// Frame update: hero parallax, logo opacity and contact parallax.
    pub fn render(&self, view: Viewport) {
        if let Some(bg) = &self.hero_bg {
            bg.set_style("transform", &hero_shift(view, &self.config).to_css());
        }

        if let Some(logo) = &self.logo {
            logo.set_style("opacity", &logo_opacity(view.scroll_y, &self.config).to_string());
        }

        if let Some(bg) = &self.contact_bg {
            let shift = match &self.contact {
                Some(section) => contact_shift(view, section.offset_box(), &self.config),
                None => Some(Shift::None),
            };
            if let Some(shift) = shift {
                bg.set_style("transform", &shift.to_css());
            }
        }
    }

    pub fn update_header(&self, scroll_y: f64) {
        if let Some(header) = &self.header {
            header.set_class(SCROLLED, header_scrolled(scroll_y, &self.config));
        }
    }
}

/// Drives `ScrollEffects` from window scroll events: the header follows
/// every event, the layers are redrawn at most once per frame.
pub struct ScrollDriver<E, F> {
    effects: Rc<ScrollEffects<E>>,
    throttle: FrameThrottle<F>,
}

impl<E: Surface + 'static, F: FrameRequester> ScrollDriver<E, F> {
    pub fn new(effects: ScrollEffects<E>, frames: F) -> Self {
        Self {
            effects: Rc::new(effects),
            throttle: FrameThrottle::new(frames),
        }
    }

    pub fn effects(&self) -> &ScrollEffects<E> {
        &self.effects
    }

    /// Immediate full update, used once at mount.
    pub fn refresh(&self, view: Viewport) {
        self.effects.render(view);
        self.effects.update_header(view.scroll_y);
    }

    /// Handles one scroll event. `read` is sampled now for the header and
    /// again when the frame runs. Returns whether a frame was queued.
    pub fn on_scroll(&self, read: impl Fn() -> Viewport + 'static) -> bool {
        self.effects.update_header(read().scroll_y);
        let effects = self.effects.clone();
        self.throttle.schedule(move || effects.render(read()))
    }
}
