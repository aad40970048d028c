//! Scoped DOM listeners and timers: registration lives exactly as long as the
//! guard value.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, AddEventListenerOptions, Event, EventTarget};

use crate::error::{Result, ShowcaseError};

pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, kind: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::with_passive(target, kind, true, callback)
    }

    /// Non-passive listeners may call `prevent_default`.
    pub fn with_passive<F>(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        callback: F,
    ) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
            .ok();
    }
}

/// One-shot `setTimeout`, cleared if dropped before it fires.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(delay_ms: u32, callback: F) -> Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let window = window().ok_or_else(|| ShowcaseError::dom("no window"))?;
        let callback: Closure<dyn FnMut()> = Closure::once(callback);
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
