use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement};

/// A DOM listener that detaches itself when dropped. Effects return these
/// from their cleanup so every exit path removes the handler.
pub struct EventBinding {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    pub fn on_window<F>(kind: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        Self::new(&window, kind, handler)
    }

    pub fn on_document<F>(kind: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let document = web_sys::window()?.document()?;
        Self::new(&document, kind, handler)
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Inline style properties of one element.
pub trait StyleSink {
    fn property(&self, name: &str) -> String;
    fn set_property(&self, name: &str, value: &str);
    fn remove_property(&self, name: &str);
}

/// The document body's inline style. A no-op when there is no body.
pub struct BodyStyle;

impl StyleSink for BodyStyle {
    fn property(&self, name: &str) -> String {
        body()
            .and_then(|b| b.style().get_property_value(name).ok())
            .unwrap_or_default()
    }

    fn set_property(&self, name: &str, value: &str) {
        if let Some(body) = body() {
            let _ = body.style().set_property(name, value);
        }
    }

    fn remove_property(&self, name: &str) {
        if let Some(body) = body() {
            let _ = body.style().remove_property(name);
        }
    }
}

/// Disables page scrolling for as long as it is held. Dropping it puts back
/// whatever `overflow` the element had before.
pub struct ScrollLock<S: StyleSink = BodyStyle> {
    sink: S,
    previous: String,
}

impl<S: StyleSink> ScrollLock<S> {
    pub fn hold(sink: S) -> Self {
        let previous = sink.property("overflow");
        sink.set_property("overflow", "hidden");
        log::debug!("Scroll lock acquired");
        Self { sink, previous }
    }

    /// Holds a lock only when `locked` is set.
    pub fn hold_while(locked: bool, sink: S) -> Option<Self> {
        locked.then(|| Self::hold(sink))
    }
}

impl<S: StyleSink> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        if self.previous.is_empty() {
            self.sink.remove_property("overflow");
        } else {
            self.sink.set_property("overflow", &self.previous);
        }
        log::debug!("Scroll lock released");
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn smooth_scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let mut options = web_sys::ScrollToOptions::new();
        options.top(0.0);
        options.behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    pub(crate) struct MemoryStyle(Rc<RefCell<HashMap<String, String>>>);

    impl MemoryStyle {
        pub(crate) fn overflow(&self) -> Option<String> {
            self.0.borrow().get("overflow").cloned()
        }
    }

    impl StyleSink for MemoryStyle {
        fn property(&self, name: &str) -> String {
            self.0.borrow().get(name).cloned().unwrap_or_default()
        }

        fn set_property(&self, name: &str, value: &str) {
            self.0.borrow_mut().insert(name.to_string(), value.to_string());
        }

        fn remove_property(&self, name: &str) {
            self.0.borrow_mut().remove(name);
        }
    }

    #[test]
    fn scroll_lock_hides_overflow_while_held() {
        let style = MemoryStyle::default();
        let lock = ScrollLock::hold(style.clone());
        assert_eq!(style.overflow().as_deref(), Some("hidden"));
        drop(lock);
        assert_eq!(style.overflow(), None);
    }

    #[test]
    fn scroll_lock_restores_previous_overflow() {
        let style = MemoryStyle::default();
        style.set_property("overflow", "scroll");
        {
            let _lock = ScrollLock::hold(style.clone());
            assert_eq!(style.overflow().as_deref(), Some("hidden"));
        }
        assert_eq!(style.overflow().as_deref(), Some("scroll"));
    }
}
