//! Page behavior controller: wires every behavior into the live document.
//!
//! ARCHITECTURE
//! ============
//! `PageController::init` reads the DOM once, builds the browser-free state
//! for each behavior, and registers listeners/observers that feed that state
//! from browser events. Each behavior owns its own `Rc<RefCell<_>>`; nothing
//! is shared between behaviors except the document itself.
//!
//! Dropping the controller (or calling [`PageController::teardown`]) removes
//! every listener, disconnects both observers, removes the generated buttons,
//! cancels the copy revert timer and un-hides targets that never revealed.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

use super::intersection::IntersectionWatcher;
use super::listener::Listener;
use super::storage::LocalStorage;
use super::{
    create_button, document, media_matches, offset_height, query, query_all, query_in, scroll_to, scroll_y,
    set_attribute, set_class, window,
};
use crate::cards::{EventOrigin, ProjectCard};
use crate::config::PageConfig;
use crate::consts::{
    ARIA_CURRENT, ARIA_LABEL, BACK_TO_TOP_GLYPH, BACK_TO_TOP_LABEL, CLASS_ACTIVE, CLASS_COPIED, CLASS_COPY_EMAIL,
    CLASS_IN_VIEW, CLASS_REVEAL, CLASS_SCROLL_TOP, CLASS_SCROLLED, CLASS_VISIBLE, COPY_EMAIL_LABEL,
    PREFERS_DARK_QUERY, PREFERS_REDUCED_MOTION_QUERY, THEME_ATTRIBUTE,
};
use crate::copy_email::{CopyEmailButton, email_text};
use crate::error::{CopyError, PageError};
use crate::nav::{ActiveLinkTracker, ScrollMotion, fragment_id, fragment_scroll_top};
use crate::observer::{IntersectionEntry, Observer};
use crate::reveal::RevealAnimator;
use crate::scroll::{ScrollState, ScrollThresholds};
use crate::theme::{Theme, ThemeHost, ThemeManager, ToggleCopy};

/// Elements queried once at startup.
struct PageElements {
    navbar: Option<Element>,
    nav_links: Vec<Element>,
    sections: Vec<Element>,
    project_cards: Vec<Element>,
}

pub struct PageController {
    listeners: Vec<Listener>,
    section_watcher: Option<IntersectionWatcher>,
    reveal_watcher: Option<IntersectionWatcher>,
    reveal: Rc<RefCell<RevealAnimator<Element>>>,
    theme: Rc<RefCell<ThemeManager<LocalStorage>>>,
    created: Vec<Element>,
    copy_timer: Rc<RefCell<Option<Timeout>>>,
}

impl PageController {
    /// Wire every behavior into the current document.
    pub fn init(config: &PageConfig) -> Result<Self, PageError> {
        let window = window()?;
        let document = document(&window)?;
        let motion = ScrollMotion::for_reduced_motion(media_matches(&window, PREFERS_REDUCED_MOTION_QUERY));

        let selectors = &config.selectors;
        let elements = PageElements {
            navbar: query(&document, &selectors.navbar)?,
            nav_links: query_all(&document, &selectors.nav_links)?,
            sections: query_all(&document, &selectors.sections)?
                .into_iter()
                .filter(|section| !section.id().is_empty())
                .collect(),
            project_cards: query_all(&document, &selectors.project_cards)?,
        };

        let theme = Rc::new(RefCell::new(ThemeManager::new(
            LocalStorage::open(&window),
            config.theme.storage_key.clone(),
            media_matches(&window, PREFERS_DARK_QUERY),
        )));

        let mut controller = Self {
            listeners: Vec::new(),
            section_watcher: None,
            reveal_watcher: None,
            reveal: Rc::new(RefCell::new(RevealAnimator::new(Vec::new()))),
            theme,
            created: Vec::new(),
            copy_timer: Rc::new(RefCell::new(None)),
        };

        controller.wire_theme(&document, config)?;
        controller.wire_nav_links(&window, &document, &elements, config.scroll.nav_gap_px, motion)?;
        controller.wire_active_sections(&elements, config)?;
        controller.wire_reveal(&document, &elements, config)?;
        controller.wire_scroll_state(&window, &document, &elements, config.scroll, motion)?;
        controller.wire_project_cards(&elements)?;
        controller.wire_copy_email(&window, &document, config)?;

        log::debug!(
            "page controller ready: {} nav links, {} sections, {} reveal targets",
            elements.nav_links.len(),
            elements.sections.len(),
            controller.reveal.borrow().targets().len()
        );
        Ok(controller)
    }

    /// Currently applied theme.
    pub fn current_theme(&self) -> Theme {
        self.theme.borrow().current()
    }

    /// Release everything `init` registered.
    pub fn teardown(self) {
        drop(self);
    }

    // --- Theme ---

    fn wire_theme(&mut self, document: &Document, config: &PageConfig) -> Result<(), PageError> {
        let host = match config.theme.host {
            ThemeHost::Body => document.body().map(Element::from).ok_or(PageError::NoBody)?,
            ThemeHost::Root => document.document_element().ok_or(PageError::NoRoot)?,
        };

        let toggle = query(document, &config.selectors.theme_toggle)?;
        let (icon, text) = match &toggle {
            Some(toggle) => (
                query_in(toggle, &config.selectors.theme_icon)?,
                query_in(toggle, &config.selectors.theme_text)?,
            ),
            None => (None, None),
        };
        let view = ThemeView { host, icon, text };

        let initial = self.theme.borrow().current();
        let copy = self.theme.borrow_mut().apply(initial);
        view.render(initial, copy)?;

        let Some(toggle) = toggle else {
            log::debug!("no theme toggle on page");
            return Ok(());
        };
        let theme = Rc::clone(&self.theme);
        self.listeners.push(Listener::new(&toggle, "click", move |_| {
            let (next, copy) = theme.borrow_mut().toggle();
            if let Err(err) = view.render(next, copy) {
                log::warn!("theme toggle: {err}");
            }
        })?);
        Ok(())
    }

    // --- Navigation ---

    fn wire_nav_links(
        &mut self,
        window: &Window,
        document: &Document,
        elements: &PageElements,
        gap: f64,
        motion: ScrollMotion,
    ) -> Result<(), PageError> {
        for link in &elements.nav_links {
            let Some(href) = link.get_attribute("href") else {
                continue;
            };
            if fragment_id(&href).is_none() {
                continue;
            }
            let window = window.clone();
            let document = document.clone();
            let navbar = elements.navbar.clone();
            let clicked = link.clone();
            self.listeners.push(Listener::new(link, "click", move |event: Event| {
                let Some(id) = fragment_id(&href) else {
                    return;
                };
                // Missing target: keep the browser's native jump.
                let Some(target) = document.get_element_by_id(id) else {
                    return;
                };
                event.prevent_default();
                let top = fragment_scroll_top(
                    target.get_bounding_client_rect().top(),
                    scroll_y(&window),
                    offset_height(navbar.as_ref()),
                    gap,
                );
                scroll_to(&window, top, motion);
                if let Some(link) = clicked.dyn_ref::<HtmlElement>() {
                    if let Err(err) = link.blur() {
                        log::debug!("blur failed: {err:?}");
                    }
                }
            })?);
        }
        Ok(())
    }

    fn wire_active_sections(&mut self, elements: &PageElements, config: &PageConfig) -> Result<(), PageError> {
        if elements.sections.is_empty() {
            log::debug!("no identified sections; active link tracking disabled");
            return Ok(());
        }

        let links = elements.nav_links.clone();
        let mut tracker =
            ActiveLinkTracker::new(links.iter().map(|link| link.get_attribute("href").unwrap_or_default()));

        let mut watcher = IntersectionWatcher::new(&config.observers.active_section, move |batch, _| {
            let ids: Vec<(String, bool)> =
                batch.iter().map(|entry| (entry.target.id(), entry.is_intersecting)).collect();
            let touched = tracker.apply_entries(
                ids.iter()
                    .map(|(id, intersecting)| IntersectionEntry::new(id.as_str(), *intersecting)),
            );
            if touched {
                if let Err(err) = render_links(&links, &tracker.link_states()) {
                    log::warn!("active link update: {err}");
                }
                log::trace!("active section: {:?}", tracker.active_id());
            }
        })?;
        for section in &elements.sections {
            watcher.handle().observe(section);
        }
        self.section_watcher = Some(watcher);
        Ok(())
    }

    // --- Reveal ---

    fn wire_reveal(&mut self, document: &Document, elements: &PageElements, config: &PageConfig) -> Result<(), PageError> {
        let selectors = &config.selectors;
        let mut targets = elements.sections.clone();
        targets.extend(query(document, &selectors.profile_image)?);
        targets.extend(query(document, &selectors.featured)?);
        targets.extend(elements.project_cards.iter().cloned());
        targets.extend(query(document, &selectors.contacts)?);

        let animator = RevealAnimator::new(targets);
        if animator.is_empty() {
            log::debug!("no reveal targets");
            return Ok(());
        }
        for target in animator.targets() {
            set_class(target, CLASS_REVEAL, true)?;
        }
        self.reveal = Rc::new(RefCell::new(animator));

        let reveal = Rc::clone(&self.reveal);
        let mut watcher = IntersectionWatcher::new(&config.observers.reveal, move |batch, handle| {
            let mut reveal = reveal.borrow_mut();
            for target in reveal.handle_entries(batch, handle) {
                if let Err(err) = set_class(target, CLASS_IN_VIEW, true) {
                    log::warn!("reveal: {err}");
                }
            }
            if reveal.pending() == 0 {
                handle.disconnect();
                log::debug!("all reveal targets shown; observer disconnected");
            }
        })?;
        self.reveal.borrow().observe_all(watcher.handle());
        self.reveal_watcher = Some(watcher);
        Ok(())
    }

    // --- Scroll-derived state ---

    fn wire_scroll_state(
        &mut self,
        window: &Window,
        document: &Document,
        elements: &PageElements,
        thresholds: ScrollThresholds,
        motion: ScrollMotion,
    ) -> Result<(), PageError> {
        let body = document.body().ok_or(PageError::NoBody)?;
        let button = create_button(document, CLASS_SCROLL_TOP, BACK_TO_TOP_GLYPH)?;
        set_attribute(&button, ARIA_LABEL, BACK_TO_TOP_LABEL)?;
        body.append_child(&button)
            .map_err(|err| PageError::js("append_child", &err))?;
        self.created.push(button.clone());

        let top_window = window.clone();
        self.listeners.push(Listener::new(&button, "click", move |_| {
            scroll_to(&top_window, 0.0, motion);
        })?);

        let view = ScrollView { window: window.clone(), navbar: elements.navbar.clone(), button, thresholds };
        view.sync()?;
        self.listeners.push(Listener::new(window, "scroll", move |_| {
            if let Err(err) = view.sync() {
                log::warn!("scroll state: {err}");
            }
        })?);
        Ok(())
    }

    // --- Project cards ---

    fn wire_project_cards(&mut self, elements: &PageElements) -> Result<(), PageError> {
        for card_el in &elements.project_cards {
            let primary = query_in(card_el, "a")?.and_then(|link| link.dyn_ref::<HtmlElement>().cloned());
            let Some(card) = ProjectCard::new(primary) else {
                continue;
            };
            if !card_el.has_attribute("tabindex") {
                set_attribute(card_el, "tabindex", "0")?;
            }
            let card = Rc::new(card);

            let on_click = Rc::clone(&card);
            self.listeners.push(Listener::new(card_el, "click", move |event: Event| {
                if let Some(link) = on_click.on_click(event_origin(&event)) {
                    link.click();
                }
            })?);

            let on_key = Rc::clone(&card);
            self.listeners.push(Listener::new(card_el, "keydown", move |event: Event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let outcome = on_key.on_key(&key_event.key(), event_origin(&event));
                if outcome.prevent_default {
                    event.prevent_default();
                }
                if let Some(link) = outcome.activate {
                    link.click();
                }
            })?);
        }
        Ok(())
    }

    // --- Copy email ---

    fn wire_copy_email(&mut self, window: &Window, document: &Document, config: &PageConfig) -> Result<(), PageError> {
        let Some(link) = query(document, &config.selectors.email_link)? else {
            log::debug!("no mailto link; copy button skipped");
            return Ok(());
        };
        let button = create_button(document, CLASS_COPY_EMAIL, COPY_EMAIL_LABEL)?;
        link.after_with_node_1(&button)
            .map_err(|err| PageError::js("after", &err))?;
        self.created.push(button.clone());

        let state = Rc::new(RefCell::new(CopyEmailButton::new(config.timing.copy_revert_ms)));
        let revert_ms = config.timing.copy_revert_ms;
        let timer = Rc::clone(&self.copy_timer);
        let window = window.clone();
        let target = button.clone();
        self.listeners.push(Listener::new(&button, "click", move |_| {
            let text = email_text(&link.text_content().unwrap_or_default()).to_owned();
            let window = window.clone();
            let button = target.clone();
            let state = Rc::clone(&state);
            let timer = Rc::clone(&timer);
            wasm_bindgen_futures::spawn_local(async move {
                let result = write_clipboard(&window, &text).await;
                let deadline = state.borrow_mut().finish(result, js_sys::Date::now());
                render_copy_button(&button, &state.borrow());

                // Replacing the slot drops, and so cancels, any older revert.
                *timer.borrow_mut() = deadline.map(|deadline| {
                    let state = Rc::clone(&state);
                    Timeout::new(revert_ms, move || {
                        if state.borrow_mut().tick(js_sys::Date::now().max(deadline)) {
                            render_copy_button(&button, &state.borrow());
                        }
                    })
                });
            });
        })?);
        Ok(())
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        self.listeners.clear();
        self.section_watcher = None;
        self.reveal_watcher = None;
        *self.copy_timer.borrow_mut() = None;
        for element in self.created.drain(..) {
            element.remove();
        }
        let reveal = self.reveal.borrow();
        for target in reveal.targets() {
            if !reveal.is_revealed(target) {
                if let Err(err) = set_class(target, CLASS_REVEAL, false) {
                    log::warn!("teardown: {err}");
                }
            }
        }
    }
}

struct ThemeView {
    host: Element,
    icon: Option<Element>,
    text: Option<Element>,
}

impl ThemeView {
    fn render(&self, theme: Theme, copy: ToggleCopy) -> Result<(), PageError> {
        set_attribute(&self.host, THEME_ATTRIBUTE, theme.as_str())?;
        if let (Some(icon), Some(text)) = (&self.icon, &self.text) {
            icon.set_text_content(Some(copy.icon));
            text.set_text_content(Some(copy.label));
        }
        Ok(())
    }
}

struct ScrollView {
    window: Window,
    navbar: Option<Element>,
    button: Element,
    thresholds: ScrollThresholds,
}

impl ScrollView {
    fn sync(&self) -> Result<(), PageError> {
        let state = ScrollState::at(scroll_y(&self.window), &self.thresholds);
        if let Some(navbar) = &self.navbar {
            set_class(navbar, CLASS_SCROLLED, state.navbar_scrolled)?;
        }
        set_class(&self.button, CLASS_VISIBLE, state.back_to_top_visible)
    }
}

fn render_links(links: &[Element], states: &[bool]) -> Result<(), PageError> {
    for (link, active) in links.iter().zip(states) {
        set_class(link, CLASS_ACTIVE, *active)?;
        set_attribute(link, ARIA_CURRENT, if *active { "true" } else { "false" })?;
    }
    Ok(())
}

fn render_copy_button(button: &Element, state: &CopyEmailButton) {
    button.set_text_content(Some(state.label()));
    if let Err(err) = set_class(button, CLASS_COPIED, state.is_copied()) {
        log::warn!("copy button: {err}");
    }
}

/// Whether `event` started on (or inside) an anchor.
fn event_origin(event: &Event) -> EventOrigin {
    let closest = event
        .target()
        .and_then(|target| target.dyn_ref::<Element>().cloned())
        .map(|element| element.closest("a"));
    match closest {
        Some(Ok(Some(anchor))) => EventOrigin::from_anchor_tag(Some(anchor.tag_name().as_str())),
        _ => EventOrigin::Card,
    }
}

async fn write_clipboard(window: &Window, text: &str) -> Result<(), CopyError> {
    let navigator = window.navigator();
    let clipboard = match js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value.unchecked_into::<web_sys::Clipboard>(),
        _ => return Err(CopyError::Unavailable),
    };
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| CopyError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}"))))
}
