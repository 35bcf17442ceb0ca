use std::cell::RefCell;
use std::rc::Rc;

use crate::config::FxConfig;
use crate::interactions::menu::{MenuState, NavMenu};
use crate::interactions::surface::Surface;
use crate::interactions::timer::{DelayedTask, Scheduler};

/// Smooth scrolling over the page's sections.
pub trait PageScroll: 'static {
    type Target: 'static;

    fn resolve(&self, id: &str) -> Option<Self::Target>;
    /// Animates the target's top edge to the top of the viewport.
    fn scroll_into_view(&self, target: &Self::Target);
    fn scroll_to_top(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSource {
    /// Link inside the slide-out menu; the menu closes before scrolling.
    Menu,
    /// Link in the desktop header; scrolls straight away.
    Header,
}

/// Element id named by an in-page `href`, if it is one.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Routes in-page link clicks to smooth scrolls. A menu link scroll waits
/// for the menu to close and stays cancellable until it starts.
pub struct Navigator<E, S: Scheduler, P> {
    menu: Option<Rc<NavMenu<E, S>>>,
    page: Rc<P>,
    scheduler: S,
    pending: RefCell<DelayedTask<S>>,
    close_delay_ms: u32,
}

impl<E, S, P> Navigator<E, S, P>
where
    E: Surface + Clone + 'static,
    S: Scheduler,
    P: PageScroll,
{
    pub fn new(menu: Option<Rc<NavMenu<E, S>>>, page: P, scheduler: S, config: &FxConfig) -> Self {
        Self {
            menu,
            page: Rc::new(page),
            scheduler,
            pending: RefCell::new(DelayedTask::new()),
            close_delay_ms: config.menu_close_delay_ms,
        }
    }

    /// Handles a link click. Returns whether the browser's own navigation
    /// should be suppressed.
    pub fn follow(&self, href: &str, source: LinkSource) -> bool {
        let Some(id) = fragment_id(href) else {
            return false;
        };
        let Some(target) = self.page.resolve(id) else {
            log::debug!("No section for #{}", id);
            return true;
        };

        self.cancel_pending();
        match source {
            LinkSource::Header => self.page.scroll_into_view(&target),
            LinkSource::Menu => {
                if let Some(menu) = &self.menu {
                    menu.close();
                }
                let page = self.page.clone();
                log::debug!("Scrolling to #{} in {}ms", id, self.close_delay_ms);
                self.pending
                    .borrow_mut()
                    .schedule(&self.scheduler, self.close_delay_ms, move || {
                        page.scroll_into_view(&target)
                    });
            }
        }
        true
    }

    /// Menu button and overlay clicks. Opening the menu abandons a scroll
    /// that was still waiting for the previous close.
    pub fn toggle_menu(&self) -> Option<MenuState> {
        let state = self.menu.as_ref()?.toggle();
        if state.is_open() && self.cancel_pending() {
            log::debug!("Menu reopened, pending scroll dropped");
        }
        Some(state)
    }

    pub fn scroll_to_top(&self) {
        self.cancel_pending();
        self.page.scroll_to_top();
    }

    pub fn cancel_pending(&self) -> bool {
        self.pending.borrow_mut().cancel()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.borrow().is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::OPEN;
    use crate::testing::{FakeElement, FakeScroll, ManualScheduler, ScrollCall};

    struct Fixture {
        panel: FakeElement,
        scheduler: ManualScheduler,
        nav: Navigator<FakeElement, ManualScheduler, FakeScroll>,
    }

    fn fixture() -> Fixture {
        let panel = FakeElement::new();
        let scheduler = ManualScheduler::new();
        let menu = NavMenu::new(
            panel.clone(),
            None,
            None,
            None,
            scheduler.clone(),
            &FxConfig::default(),
        );
        let nav = Navigator::new(
            Some(Rc::new(menu)),
            FakeScroll::with_sections(&["concept", "contact"]),
            scheduler.clone(),
            &FxConfig::default(),
        );
        Fixture {
            panel,
            scheduler,
            nav,
        }
    }

    fn calls(f: &Fixture) -> Vec<ScrollCall> {
        f.nav.page.calls()
    }

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#concept"), Some("concept"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/about"), None);
        assert_eq!(fragment_id("https://example.com/#x"), None);
    }

    #[test]
    fn menu_link_closes_then_scrolls_after_delay() {
        let f = fixture();
        f.nav.toggle_menu();
        assert!(f.panel.has_class(OPEN));

        assert!(f.nav.follow("#contact", LinkSource::Menu));
        assert!(!f.panel.has_class(OPEN));
        assert!(calls(&f).is_empty());

        f.scheduler.advance(399);
        assert!(calls(&f).is_empty());
        f.scheduler.advance(1);
        assert_eq!(calls(&f), vec![ScrollCall::IntoView("contact".into())]);
        assert!(!f.nav.has_pending());
    }

    #[test]
    fn header_link_scrolls_immediately() {
        let f = fixture();
        assert!(f.nav.follow("#concept", LinkSource::Header));
        assert_eq!(calls(&f), vec![ScrollCall::IntoView("concept".into())]);
        assert!(!f.panel.has_class(OPEN));
    }

    #[test]
    fn unknown_section_is_swallowed_without_scrolling() {
        let f = fixture();
        f.nav.toggle_menu();
        assert!(f.nav.follow("#missing", LinkSource::Menu));
        f.scheduler.advance(1000);

        assert!(calls(&f).is_empty());
        assert!(f.panel.has_class(OPEN));
    }

    #[test]
    fn external_links_are_left_to_the_browser() {
        let f = fixture();
        assert!(!f.nav.follow("/privacy", LinkSource::Header));
        assert!(!f.nav.follow("#", LinkSource::Menu));
        assert!(calls(&f).is_empty());
    }

    #[test]
    fn reopening_the_menu_cancels_the_pending_scroll() {
        let f = fixture();
        f.nav.toggle_menu();
        f.nav.follow("#contact", LinkSource::Menu);
        f.scheduler.advance(200);

        assert_eq!(f.nav.toggle_menu(), Some(MenuState::Open));
        f.scheduler.advance(1000);
        assert!(calls(&f).is_empty());
    }

    #[test]
    fn second_link_replaces_the_first() {
        let f = fixture();
        f.nav.follow("#contact", LinkSource::Menu);
        f.scheduler.advance(100);
        f.nav.follow("#concept", LinkSource::Menu);
        f.scheduler.advance(1000);

        assert_eq!(calls(&f), vec![ScrollCall::IntoView("concept".into())]);
    }

    #[test]
    fn logo_scrolls_to_top_and_drops_pending() {
        let f = fixture();
        f.nav.follow("#contact", LinkSource::Menu);
        f.nav.scroll_to_top();
        f.scheduler.advance(1000);

        assert_eq!(calls(&f), vec![ScrollCall::Top]);
    }

    #[test]
    fn works_without_a_menu() {
        let scheduler = ManualScheduler::new();
        let nav: Navigator<FakeElement, _, _> = Navigator::new(
            None,
            FakeScroll::with_sections(&["concept"]),
            scheduler.clone(),
            &FxConfig::default(),
        );
        assert_eq!(nav.toggle_menu(), None);
        nav.follow("#concept", LinkSource::Menu);
        scheduler.advance(400);
        assert_eq!(nav.page.calls(), vec![ScrollCall::IntoView("concept".into())]);
    }
}
