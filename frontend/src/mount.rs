use std::rc::Rc;

use web_sys::{Document, Event, HtmlElement, Window};

use crate::config::FxConfig;
use crate::error::FxError;
use crate::interactions::anchor::{LinkSource, Navigator};
use crate::interactions::menu::NavMenu;
use crate::interactions::scroll_effects::{ScrollDriver, ScrollEffects};
use crate::interactions::slider::SlideRotator;
use crate::interactions::surface::Surface;
use crate::selectors;
use crate::utils::dom::{
    query, query_all, read_viewport, BrowserFrames, BrowserScroll, BrowserTimers, Listener,
};

type WebNavigator = Navigator<HtmlElement, BrowserTimers, BrowserScroll>;

/// Interactions attached to the rendered landing markup. Dropping it
/// detaches every listener and clears every timer.
pub struct LandingPage {
    listeners: Vec<Listener>,
    slider: SlideRotator<HtmlElement, BrowserTimers>,
}

impl LandingPage {
    pub fn mount() -> Result<Self, FxError> {
        let window = web_sys::window().ok_or(FxError::NoWindow)?;
        let document = window.document().ok_or(FxError::NoDocument)?;
        let config = FxConfig::from_document(&document);

        let mut listeners = Vec::new();
        listeners.extend(Self::mount_scroll_effects(&window, &document, config)?);
        let (slider, slider_listeners) = Self::mount_slider(&document, config)?;
        listeners.extend(slider_listeners);
        listeners.extend(Self::mount_navigation(&window, &document, config)?);
        listeners.extend(Self::mount_loaded_marker(&window, &document)?);

        log::debug!("Landing interactions mounted ({} listeners)", listeners.len());
        Ok(Self { listeners, slider })
    }

    fn mount_scroll_effects(
        window: &Window,
        document: &Document,
        config: FxConfig,
    ) -> Result<Vec<Listener>, FxError> {
        let effects = ScrollEffects::new(
            query(document, selectors::HERO_BG),
            query(document, selectors::HERO_LOGO),
            query(document, selectors::CONTACT_BG),
            query(document, selectors::CONTACT_SECTION),
            query(document, selectors::HEADER),
            config,
        );
        let driver = ScrollDriver::new(effects, BrowserFrames::new(window.clone()));
        driver.refresh(read_viewport(window));

        let listener = Listener::new(window, "scroll", {
            let window = window.clone();
            move |_: Event| {
                let window = window.clone();
                driver.on_scroll(move || read_viewport(&window));
            }
        })?;
        Ok(vec![listener])
    }

    fn mount_slider(
        document: &Document,
        config: FxConfig,
    ) -> Result<(SlideRotator<HtmlElement, BrowserTimers>, Vec<Listener>), FxError> {
        let dots = query_all(document, selectors::SLIDE_DOTS);
        let slider = SlideRotator::new(
            query_all(document, selectors::SLIDES),
            dots.clone(),
            BrowserTimers,
            &config,
        );
        slider.start();

        let listeners = dots
            .iter()
            .enumerate()
            .map(|(index, dot)| {
                let slider = slider.clone();
                Listener::new(dot, "click", move |_: Event| {
                    slider.choose(index);
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((slider, listeners))
    }

    fn mount_navigation(
        window: &Window,
        document: &Document,
        config: FxConfig,
    ) -> Result<Vec<Listener>, FxError> {
        let menu = query(document, selectors::NAV).map(|panel| {
            Rc::new(NavMenu::new(
                panel,
                query(document, selectors::MENU_BUTTON),
                query(document, selectors::NAV_LIST),
                document.body(),
                BrowserTimers,
                &config,
            ))
        });
        let navigator: Rc<WebNavigator> = Rc::new(Navigator::new(
            menu,
            BrowserScroll::new(window.clone(), document.clone()),
            BrowserTimers,
            &config,
        ));

        let mut listeners = Vec::new();
        let toggles = [
            query(document, selectors::MENU_BUTTON),
            query(document, selectors::NAV_OVERLAY),
        ];
        for trigger in toggles.iter().flatten() {
            let navigator = navigator.clone();
            listeners.push(Listener::new(trigger, "click", move |_: Event| {
                navigator.toggle_menu();
            })?);
        }

        let links = query_all(document, selectors::NAV_LINKS)
            .into_iter()
            .map(|link| (link, LinkSource::Menu))
            .chain(
                query_all(document, selectors::HEADER_LINKS)
                    .into_iter()
                    .map(|link| (link, LinkSource::Header)),
            );
        for (link, source) in links {
            let navigator = navigator.clone();
            let href_source = link.clone();
            listeners.push(Listener::new(&link, "click", move |event: Event| {
                let Some(href) = href_source.get_attribute("href") else {
                    return;
                };
                if navigator.follow(&href, source) {
                    event.prevent_default();
                }
            })?);
        }

        if let Some(logo) = query(document, selectors::HEADER_LOGO) {
            let navigator = navigator.clone();
            listeners.push(Listener::new(&logo, "click", move |event: Event| {
                event.prevent_default();
                navigator.scroll_to_top();
            })?);
        }
        Ok(listeners)
    }

    fn mount_loaded_marker(window: &Window, document: &Document) -> Result<Vec<Listener>, FxError> {
        let Some(body) = document.body() else {
            return Ok(Vec::new());
        };
        if document.ready_state() == "complete" {
            body.add_class(selectors::LOADED);
            return Ok(Vec::new());
        }
        let listener = Listener::new(window, "load", move |_: Event| {
            body.add_class(selectors::LOADED);
        })?;
        Ok(vec![listener])
    }
}

impl Drop for LandingPage {
    fn drop(&mut self) {
        self.slider.stop();
        self.listeners.clear();
    }
}
