//! Browser bindings: bootstraps the page, wires DOM events into the carousel.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, TouchEvent, WheelEvent, Window};

use crate::carousel::{Carousel, TransitionId};
use crate::config::ShowcaseConfig;
use crate::device::{DeviceInfo, Presentation};
use crate::error::{Result, ShowcaseError};
use crate::input::{Command, InputEvent, InputInterpreter};
use crate::motion::Transition;
use crate::page::{BoxedPage, PageFactory};
use crate::slot::Slot;
use crate::window::ActiveWindow;

pub mod dom;
mod listener;
mod render;
mod shaders;

use dom::{SlotElement, Track};
use listener::{EventListener, Timeout};
use render::ShaderPage;

// Extra time past the transition duration before the completion is forced.
const SETTLE_GRACE_MS: u32 = 200;

impl From<JsValue> for ShowcaseError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

impl From<ShowcaseError> for JsValue {
    fn from(err: ShowcaseError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

thread_local! {
    static SESSION: RefCell<Option<Rc<RefCell<Session>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();

    let config = ShowcaseConfig::embedded()?;
    config.validate(shaders::CATALOG.len())?;
    let session = Session::boot(config)?;
    SESSION.with(|cell| *cell.borrow_mut() = Some(session));
    Ok(())
}

/// Tear the site down: removes every listener and timer and releases all pages.
#[wasm_bindgen]
pub fn shutdown() {
    if let Some(session) = SESSION.with(|cell| cell.borrow_mut().take()) {
        drop(session);
        info!("showcase shut down");
    }
}

pub(crate) fn inner_size(window: &Window) -> Result<(f64, f64)> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w, h))
}

fn page_factories() -> Vec<PageFactory<Element>> {
    shaders::CATALOG
        .iter()
        .map(|source| {
            Rc::new(move || ShaderPage::create(source).map(|p| Box::new(p) as BoxedPage<Element>))
                as PageFactory<Element>
        })
        .collect()
}

fn device_info(window: &Window) -> DeviceInfo {
    let navigator = window.navigator();
    let has_touch = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart"))
        .unwrap_or(false)
        || navigator.max_touch_points() > 0;
    DeviceInfo {
        user_agent: navigator.user_agent().unwrap_or_default(),
        inner_width: window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0),
        has_touch,
    }
}

enum Stage {
    Carousel(Carousel<SlotElement, Track>),
    Single {
        slot: Slot<SlotElement>,
        factories: Vec<PageFactory<Element>>,
    },
}

struct Session {
    stage: Stage,
    interpreter: InputInterpreter,
    transition_ms: u32,
    wheel_timer: Option<Timeout>,
    settle_timer: Option<Timeout>,
    listeners: Vec<EventListener>,
}

impl Session {
    fn boot(config: ShowcaseConfig) -> Result<Rc<RefCell<Self>>> {
        let window = web_sys::window().ok_or_else(|| ShowcaseError::dom("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| ShowcaseError::dom("no document"))?;
        let app = document
            .query_selector("#app")?
            .ok_or_else(|| ShowcaseError::dom("#app not found"))?;

        let factories = page_factories();
        let presentation = Presentation::choose(device_info(&window).is_mobile(), &config.mobile);
        info!("presentation: {presentation:?}, {} pages", factories.len());

        let stage = match presentation {
            Presentation::Single { page } => {
                let mount = SlotElement::new(&document)?;
                app.append_child(mount.element())?;
                let mut slot = Slot::new(0, page, mount);
                if let Err(e) = slot.load(&factories) {
                    warn!("page {page} left blank: {e}");
                }
                Stage::Single { slot, factories }
            }
            Presentation::Carousel => {
                let container = dom::create_html(&document, "div", "pages-container")?;
                let mounts = (0..factories.len() + 2)
                    .map(|_| {
                        let mount = SlotElement::new(&document)?;
                        container.append_child(mount.element())?;
                        Ok(mount)
                    })
                    .collect::<Result<Vec<_>>>()?;
                app.append_child(&container)?;

                let mut carousel = Carousel::new(
                    factories,
                    mounts,
                    Track::new(container),
                    ActiveWindow::new(config.carousel.window_radius),
                    Transition::new(config.carousel.transition_ms),
                )?;
                carousel.start();
                Stage::Carousel(carousel)
            }
        };

        if let Some(footer) = dom::render_footer(&document, &config.footer)? {
            app.append_child(&footer)?;
        }

        let session = Rc::new(RefCell::new(Self {
            stage,
            interpreter: InputInterpreter::new(&config.carousel),
            transition_ms: config.carousel.transition_ms,
            wheel_timer: None,
            settle_timer: None,
            listeners: Vec::new(),
        }));
        let listeners = bind_listeners(&session, &window, &document)?;
        session.borrow_mut().listeners = listeners;
        Ok(session)
    }

    fn handle(&mut self, event: InputEvent, this: &Weak<RefCell<Session>>) {
        let wheel = matches!(event, InputEvent::Wheel { .. });
        let Some(command) = self.interpreter.interpret(event) else {
            if let Some(deadline) = self.interpreter.wheel_deadline_ms().filter(|_| wheel) {
                self.arm_wheel_timer(deadline, this);
            }
            return;
        };

        match &mut self.stage {
            Stage::Carousel(carousel) => {
                let before = carousel.in_flight();
                carousel.apply(command);
                let after = carousel.in_flight();
                if let Some(id) = after.filter(|id| before != Some(*id)) {
                    self.arm_settle_timer(id, this);
                }
            }
            Stage::Single { slot, factories } => match command {
                Command::Resize { width, height } => slot.resize(width, height),
                Command::Visibility { visible: true } => {
                    if let Err(e) = slot.load(factories) {
                        warn!("page {} left blank: {e}", slot.source());
                    }
                }
                Command::Visibility { visible: false } => slot.pause(),
                Command::Navigate(_) | Command::TransitionEnd => {}
            },
        }
    }

    /// Replaces any timer left from earlier in the burst.
    fn arm_wheel_timer(&mut self, deadline_ms: f64, this: &Weak<RefCell<Session>>) {
        let this = this.clone();
        let timer = Timeout::new(self.interpreter.wheel_delay_ms(), move || {
            dispatch(&this, InputEvent::WheelSettled { at_ms: deadline_ms });
        });
        match timer {
            Ok(timer) => self.wheel_timer = Some(timer),
            Err(e) => warn!("wheel debounce timer not armed: {e}"),
        }
    }

    /// Completes `id` if `transitionend` never arrives.
    fn arm_settle_timer(&mut self, id: TransitionId, this: &Weak<RefCell<Session>>) {
        let this = this.clone();
        let timer = Timeout::new(self.transition_ms + SETTLE_GRACE_MS, move || {
            with_session(&this, |session| {
                if let Stage::Carousel(carousel) = &mut session.stage {
                    if carousel.finish_transition(id) {
                        warn!("transition {id:?} completed by fallback timer");
                    }
                }
            });
        });
        match timer {
            Ok(timer) => self.settle_timer = Some(timer),
            Err(e) => warn!("transition fallback timer not armed: {e}"),
        }
    }
}

fn with_session(this: &Weak<RefCell<Session>>, f: impl FnOnce(&mut Session)) {
    let Some(session) = this.upgrade() else {
        return;
    };
    match session.try_borrow_mut() {
        Ok(mut session) => f(&mut session),
        Err(_) => warn!("event dropped: session busy"),
    };
}

fn dispatch(this: &Weak<RefCell<Session>>, event: InputEvent) {
    with_session(this, |session| session.handle(event, this));
}

fn bind_listeners(
    session: &Rc<RefCell<Session>>,
    window: &Window,
    document: &Document,
) -> Result<Vec<EventListener>> {
    let win: &EventTarget = window.as_ref();
    let weak = Rc::downgrade(session);
    let mut listeners = Vec::new();

    listeners.push(EventListener::new(win, "resize", {
        let weak = weak.clone();
        let window = window.clone();
        move |_: Event| {
            if let Ok((width, height)) = inner_size(&window) {
                dispatch(&weak, InputEvent::Resize { width, height });
            }
        }
    })?);

    listeners.push(EventListener::new(document.as_ref(), "visibilitychange", {
        let weak = weak.clone();
        let document = document.clone();
        move |_: Event| {
            let visible = !document.hidden();
            dispatch(&weak, InputEvent::Visibility { visible });
        }
    })?);

    let track = match &session.borrow().stage {
        Stage::Carousel(carousel) => carousel.viewport().element().clone(),
        Stage::Single { .. } => return Ok(listeners),
    };

    listeners.push(EventListener::with_passive(win, "wheel", false, {
        let weak = weak.clone();
        move |event: Event| {
            event.prevent_default();
            if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                dispatch(
                    &weak,
                    InputEvent::Wheel {
                        delta_y: wheel.delta_y(),
                        at_ms: event.time_stamp(),
                    },
                );
            }
        }
    })?);

    listeners.push(EventListener::new(win, "keydown", {
        let weak = weak.clone();
        move |event: Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                dispatch(&weak, InputEvent::Key(key.key()));
            }
        }
    })?);

    listeners.push(EventListener::new(win, "touchstart", {
        let weak = weak.clone();
        move |event: Event| {
            let touch = event
                .dyn_ref::<TouchEvent>()
                .and_then(|t| t.touches().get(0));
            if let Some(touch) = touch {
                dispatch(&weak, InputEvent::TouchStart { y: f64::from(touch.client_y()) });
            }
        }
    })?);

    listeners.push(EventListener::new(win, "touchend", {
        let weak = weak.clone();
        move |event: Event| {
            let touch = event
                .dyn_ref::<TouchEvent>()
                .and_then(|t| t.changed_touches().get(0));
            if let Some(touch) = touch {
                dispatch(&weak, InputEvent::TouchEnd { y: f64::from(touch.client_y()) });
            }
        }
    })?);

    let track_target: EventTarget = track.clone().into();
    listeners.push(EventListener::new(&track_target, "transitionend", {
        let weak = weak.clone();
        let track_target = track_target.clone();
        move |event: Event| {
            // Ignore transitions bubbling up from page content.
            if event.target().is_some_and(|t| t == track_target) {
                dispatch(&weak, InputEvent::TransitionEnd);
            }
        }
    })?);

    Ok(listeners)
}
