/// What the device probe saw. Any one touch signal classifies the device
/// as touch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceProbe {
    /// `ontouchstart` is defined on the window.
    pub touch_events: bool,
    pub max_touch_points: i32,
    pub coarse_pointer: bool,
}

impl DeviceProbe {
    pub fn is_touch(&self) -> bool {
        self.touch_events || self.max_touch_points > 0 || self.coarse_pointer
    }
}

/// DOM events the tracker subscribes to on a pointer device.
pub const POINTER_EVENTS: &[&str] = &[
    "mousemove",
    "mousedown",
    "mouseup",
    "mouseover",
    "mouseout",
    "mouseenter",
    "mouseleave",
];

/// Events to track, or `None` on touch devices. `None` means no listeners,
/// no ticker, the system cursor left alone and nothing rendered.
pub fn tracking_plan(probe: DeviceProbe) -> Option<&'static [&'static str]> {
    if probe.is_touch() {
        None
    } else {
        Some(POINTER_EVENTS)
    }
}

/// The parts of a hovered element that decide whether it is interactive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverTarget {
    /// Upper-case tag name, as the DOM reports it.
    pub tag: String,
    /// The element sits inside an `a` or `button`.
    pub inside_link_or_button: bool,
    pub class_name: String,
    pub data_cursor_hover: Option<String>,
}

impl HoverTarget {
    pub fn is_interactive(&self) -> bool {
        matches!(self.tag.as_str(), "A" | "BUTTON")
            || self.inside_link_or_button
            || self.class_name.split_whitespace().any(|c| c == "cursor-pointer")
            || self.data_cursor_hover.as_deref() == Some("true")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Damped spring pulling a value toward a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub position: f64,
    pub velocity: f64,
}

impl Spring {
    pub fn new(position: f64) -> Self {
        Self {
            stiffness: 300.0,
            damping: 20.0,
            mass: 1.0,
            position,
            velocity: 0.0,
        }
    }

    /// Advances by `dt` seconds using semi-implicit Euler. Long frames are
    /// split so a stalled tab does not make the spring explode.
    pub fn step(&mut self, target: f64, dt: f64) {
        const MAX_STEP: f64 = 1.0 / 120.0;
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -self.stiffness * (self.position - target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (self.position - target).abs() < 0.01 && self.velocity.abs() < 0.01
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    /// Latest raw pointer position; the dot is drawn here.
    pub position: Point,
    ring_x: Spring,
    ring_y: Spring,
    pub hovering: bool,
    pub clicking: bool,
    pub visible: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        // Parked off screen until the first move event.
        Self {
            position: Point { x: -100.0, y: -100.0 },
            ring_x: Spring::new(-100.0),
            ring_y: Spring::new(-100.0),
            hovering: false,
            clicking: false,
            visible: true,
        }
    }
}

impl CursorState {
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.position = Point { x, y };
    }

    pub fn tick(&mut self, dt: f64) {
        self.ring_x.step(self.position.x, dt);
        self.ring_y.step(self.position.y, dt);
    }

    pub fn ring(&self) -> Point {
        Point {
            x: self.ring_x.position,
            y: self.ring_y.position,
        }
    }

    pub fn ring_settled(&self) -> bool {
        self.ring_x.is_settled(self.position.x) && self.ring_y.is_settled(self.position.y)
    }

    pub fn hover_changed(&mut self, target: Option<&HoverTarget>) {
        self.hovering = target.map_or(false, HoverTarget::is_interactive);
    }

    pub fn ring_size(&self) -> u32 {
        if self.hovering {
            60
        } else if self.clicking {
            24
        } else {
            32
        }
    }

    pub fn dot_size(&self) -> u32 {
        if self.hovering {
            8
        } else if self.clicking {
            4
        } else {
            6
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_classification() {
        assert!(!DeviceProbe::default().is_touch());
        assert!(DeviceProbe { touch_events: true, ..Default::default() }.is_touch());
        assert!(DeviceProbe { max_touch_points: 5, ..Default::default() }.is_touch());
        assert!(DeviceProbe { coarse_pointer: true, ..Default::default() }.is_touch());
    }

    #[test]
    fn touch_devices_are_not_tracked() {
        let probes = [
            DeviceProbe { touch_events: true, ..Default::default() },
            DeviceProbe { max_touch_points: 1, ..Default::default() },
            DeviceProbe { coarse_pointer: true, ..Default::default() },
        ];
        for probe in probes {
            assert_eq!(tracking_plan(probe), None, "{:?}", probe);
        }
    }

    #[test]
    fn pointer_devices_track_every_pointer_event() {
        let events = tracking_plan(DeviceProbe::default()).unwrap();
        assert_eq!(events, POINTER_EVENTS);
        assert!(events.contains(&"mousemove"));
        assert!(events.contains(&"mouseleave"));
    }

    #[test]
    fn interactive_predicate() {
        let target = |tag: &str| HoverTarget { tag: tag.to_string(), ..Default::default() };
        assert!(target("A").is_interactive());
        assert!(target("BUTTON").is_interactive());
        assert!(!target("DIV").is_interactive());
        assert!(HoverTarget { inside_link_or_button: true, ..target("SPAN") }.is_interactive());
        assert!(HoverTarget { class_name: "card cursor-pointer".into(), ..target("DIV") }.is_interactive());
        assert!(!HoverTarget { class_name: "cursor-pointer-ish".into(), ..target("DIV") }.is_interactive());
        assert!(HoverTarget { data_cursor_hover: Some("true".into()), ..target("DIV") }.is_interactive());
        assert!(!HoverTarget { data_cursor_hover: Some("false".into()), ..target("DIV") }.is_interactive());
    }

    #[test]
    fn spring_converges_without_overshooting_far() {
        let mut spring = Spring::new(0.0);
        let mut max = 0.0f64;
        for _ in 0..120 {
            spring.step(100.0, 1.0 / 60.0);
            max = max.max(spring.position);
        }
        assert!(spring.is_settled(100.0), "position {}", spring.position);
        assert!(max < 115.0);
    }

    #[test]
    fn long_frames_stay_stable() {
        let mut spring = Spring::new(0.0);
        spring.step(50.0, 5.0);
        assert!((spring.position - 50.0).abs() < 0.5);
    }

    #[test]
    fn dot_follows_raw_ring_trails() {
        let mut state = CursorState::default();
        state.pointer_moved(200.0, 300.0);
        assert_eq!(state.position, Point { x: 200.0, y: 300.0 });
        state.tick(1.0 / 60.0);
        let ring = state.ring();
        assert!(ring.x < 200.0 && ring.x > -100.0);
        assert!(!state.ring_settled());
        for _ in 0..240 {
            state.tick(1.0 / 60.0);
        }
        assert!(state.ring_settled());
    }

    #[test]
    fn sizes_follow_hover_then_click() {
        let mut state = CursorState::default();
        assert_eq!((state.ring_size(), state.dot_size()), (32, 6));
        state.clicking = true;
        assert_eq!((state.ring_size(), state.dot_size()), (24, 4));
        state.hover_changed(Some(&HoverTarget { tag: "A".into(), ..Default::default() }));
        assert_eq!((state.ring_size(), state.dot_size()), (60, 8));
        state.hover_changed(None);
        assert!(!state.hovering);
        assert!(state.clicking);
    }
}
