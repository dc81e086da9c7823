use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use js_sys::Reflect;
use stylist::GlobalStyle;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::cursor_state::{tracking_plan, CursorState, DeviceProbe, HoverTarget, Point};
use crate::components::dom::EventBinding;

const TICK_MS: u32 = 16;

const HIDE_SYSTEM_CURSOR: &str = r#"
body, body * {
    cursor: none !important;
}
@media (hover: none) and (pointer: coarse) {
    body, body * {
        cursor: auto !important;
    }
}
"#;

fn probe_device() -> DeviceProbe {
    let Some(window) = web_sys::window() else {
        return DeviceProbe::default();
    };
    let coarse_pointer = window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false);
    let touch_events = Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    DeviceProbe {
        touch_events,
        max_touch_points: window.navigator().max_touch_points(),
        coarse_pointer,
    }
}

fn hover_target(event: &Event) -> Option<HoverTarget> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    Some(HoverTarget {
        tag: element.tag_name(),
        inside_link_or_button: element.closest("a, button").ok().flatten().is_some(),
        class_name: element.class_name(),
        data_cursor_hover: element.get_attribute("data-cursor-hover"),
    })
}

fn place(node: &NodeRef, at: Point) {
    if let Some(el) = node.cast::<HtmlElement>() {
        let _ = el
            .style()
            .set_property("transform", &format!("translate3d({}px, {}px, 0)", at.x, at.y));
    }
}

/// Somewhere a document-wide stylesheet can be mounted.
trait StyleRegistry {
    type Handle;
    fn register(&self, css: &str) -> Option<Self::Handle>;
    fn unregister(&self, handle: Self::Handle);
}

struct Stylist;

impl StyleRegistry for Stylist {
    type Handle = GlobalStyle;

    fn register(&self, css: &str) -> Option<GlobalStyle> {
        GlobalStyle::new(css)
            .map_err(|e| log::warn!("Could not hide system cursor: {}", e))
            .ok()
    }

    fn unregister(&self, handle: GlobalStyle) {
        handle.unregister();
    }
}

/// Hides the system cursor while held.
struct SystemCursorHidden<R: StyleRegistry = Stylist> {
    registry: R,
    sheet: Option<R::Handle>,
}

impl<R: StyleRegistry> SystemCursorHidden<R> {
    fn acquire(registry: R) -> Self {
        let sheet = registry.register(HIDE_SYSTEM_CURSOR);
        Self { registry, sheet }
    }
}

impl<R: StyleRegistry> Drop for SystemCursorHidden<R> {
    fn drop(&mut self) {
        if let Some(sheet) = self.sheet.take() {
            self.registry.unregister(sheet);
        }
    }
}

/// Everything the tracker holds on to while it runs on a pointer device.
struct Tracking {
    _bindings: Vec<EventBinding>,
    _ticker: Interval,
    _cursor: SystemCursorHidden,
}

fn bind(
    kind: &'static str,
    state: Rc<RefCell<CursorState>>,
    redraw: UseForceUpdateHandle,
    dot: NodeRef,
) -> Option<EventBinding> {
    match kind {
        "mousemove" => EventBinding::on_window(kind, move |e: Event| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                let mut s = state.borrow_mut();
                s.pointer_moved(e.client_x() as f64, e.client_y() as f64);
                place(&dot, s.position);
            }
        }),
        "mousedown" | "mouseup" => {
            let clicking = kind == "mousedown";
            EventBinding::on_window(kind, move |_| {
                let changed = {
                    let mut s = state.borrow_mut();
                    let changed = s.clicking != clicking;
                    s.clicking = clicking;
                    changed
                };
                if changed {
                    redraw.force_update();
                }
            })
        }
        "mouseover" | "mouseout" => {
            let entering = kind == "mouseover";
            EventBinding::on_document(kind, move |e: Event| {
                let changed = {
                    let mut s = state.borrow_mut();
                    let before = s.hovering;
                    let target = if entering { hover_target(&e) } else { None };
                    s.hover_changed(target.as_ref());
                    before != s.hovering
                };
                if changed {
                    redraw.force_update();
                }
            })
        }
        "mouseenter" | "mouseleave" => {
            let visible = kind == "mouseenter";
            EventBinding::on_document(kind, move |_| {
                state.borrow_mut().visible = visible;
                redraw.force_update();
            })
        }
        other => {
            log::warn!("Cursor tracker has no handler for {}", other);
            None
        }
    }
}

fn start_tracking(
    events: &'static [&'static str],
    state: Rc<RefCell<CursorState>>,
    redraw: UseForceUpdateHandle,
    dot: NodeRef,
    ring: NodeRef,
) -> Tracking {
    let bindings = events
        .iter()
        .filter_map(|&kind| bind(kind, state.clone(), redraw.clone(), dot.clone()))
        .collect();

    let ticker = Interval::new(TICK_MS, move || {
        let mut s = state.borrow_mut();
        if !s.ring_settled() {
            s.tick(TICK_MS as f64 / 1000.0);
            place(&ring, s.ring());
        }
    });

    Tracking {
        _bindings: bindings,
        _ticker: ticker,
        _cursor: SystemCursorHidden::acquire(Stylist),
    }
}

/// Custom pointer follower: a dot at the raw pointer and a ring trailing
/// it on a spring. Renders nothing on touch devices.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let probe = use_state_eq(probe_device);
    let state = use_mut_ref(CursorState::default);
    let redraw = use_force_update();
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();

    {
        let probe = probe.clone();
        use_event_with_window("resize", move |_: Event| probe.set(probe_device()));
    }

    let plan = tracking_plan(*probe);

    {
        let state = state.clone();
        let redraw = redraw.clone();
        let dot = dot_ref.clone();
        let ring = ring_ref.clone();
        use_effect_with_deps(
            move |plan: &Option<&'static [&'static str]>| {
                let tracking = match *plan {
                    Some(events) => Some(start_tracking(events, state, redraw, dot, ring)),
                    None => {
                        log::info!("Touch device detected, custom cursor disabled");
                        None
                    }
                };
                move || drop(tracking)
            },
            plan,
        );
    }

    if plan.is_none() {
        return html! {};
    }

    let s = *state.borrow();
    let ring_size = s.ring_size();
    let dot_size = s.dot_size();
    let opacity = if s.visible { 1 } else { 0 };

    html! {
        <>
            <div class="cursor-anchor" ref={ring_ref}>
                <div
                    class={classes!("cursor-ring", s.hovering.then(|| "hovering"))}
                    style={format!("width: {0}px; height: {0}px; opacity: {1};", ring_size, opacity)}
                ></div>
            </div>
            <div class="cursor-anchor" ref={dot_ref}>
                <div
                    class="cursor-dot"
                    style={format!("width: {0}px; height: {0}px; opacity: {1};", dot_size, opacity)}
                ></div>
            </div>
            <style>
                {r#"
                .cursor-anchor {
                    position: fixed;
                    top: 0;
                    left: 0;
                    pointer-events: none;
                    z-index: 9999;
                    transform: translate3d(-100px, -100px, 0);
                }
                .cursor-ring {
                    transform: translate(-50%, -50%);
                    border-radius: 50%;
                    border: 2px solid rgba(250, 255, 1, 0.6);
                    background: transparent;
                    transition: width 0.15s ease-out, height 0.15s ease-out, opacity 0.15s ease-out, border-color 0.2s, background-color 0.2s;
                }
                .cursor-ring.hovering {
                    border-color: #faff01;
                    background: rgba(250, 255, 1, 0.1);
                }
                .cursor-dot {
                    transform: translate(-50%, -50%);
                    border-radius: 50%;
                    background: #faff01;
                    transition: width 0.1s, height 0.1s, opacity 0.1s;
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Sheets {
        mounted: Rc<RefCell<Vec<String>>>,
        broken: bool,
    }

    impl StyleRegistry for Sheets {
        type Handle = String;

        fn register(&self, css: &str) -> Option<String> {
            if self.broken {
                return None;
            }
            self.mounted.borrow_mut().push(css.to_string());
            Some(css.to_string())
        }

        fn unregister(&self, handle: String) {
            self.mounted.borrow_mut().retain(|css| *css != handle);
        }
    }

    #[test]
    fn system_cursor_comes_back_on_drop() {
        let sheets = Sheets::default();
        let hidden = SystemCursorHidden::acquire(sheets.clone());
        assert_eq!(sheets.mounted.borrow().len(), 1);
        assert!(sheets.mounted.borrow()[0].contains("cursor: none"));
        drop(hidden);
        assert!(sheets.mounted.borrow().is_empty());
    }

    #[test]
    fn failed_registration_drops_cleanly() {
        let sheets = Sheets { broken: true, ..Default::default() };
        let hidden = SystemCursorHidden::acquire(sheets.clone());
        assert!(hidden.sheet.is_none());
        drop(hidden);
        assert!(sheets.mounted.borrow().is_empty());
    }

    #[test]
    fn touch_plan_never_hides_the_system_cursor() {
        let sheets = Sheets::default();
        let touch = DeviceProbe { touch_events: true, ..Default::default() };
        let hidden = tracking_plan(touch).map(|_| SystemCursorHidden::acquire(sheets.clone()));
        assert!(hidden.is_none());
        assert!(sheets.mounted.borrow().is_empty());
    }
}
