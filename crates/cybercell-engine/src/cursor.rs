//! Pointer-following decoration: a glow marker and a trail marker, each
//! chasing the pointer through a damped spring.
//!
//! The effect only learns about the pointer through listeners on an
//! [`EventBus`]. Mounting installs exactly two of them and unmounting (or
//! dropping the effect) removes both.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::events::{EventBus, EventKind, PointerEvent, Subscription};

/// Largest integration step. Stiff springs diverge under coarse explicit
/// steps, so long frames are split.
const MAX_STEP_SECS: f32 = 1.0 / 240.0;

/// Distance and velocity under which a spring counts as at rest.
const REST_EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }
}

/// One-dimensional damped spring chasing a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn step(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }
}

/// Static description of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub spring: SpringConfig,
    /// Added to the pointer coordinates so the marker centers on it
    pub offset: f32,
    /// Scale target while the pointer is over an interactive element
    pub hover_scale: f32,
}

/// Larger, softer marker that grows over interactive elements.
pub const GLOW: MarkerSpec = MarkerSpec {
    spring: SpringConfig::new(500.0, 28.0),
    offset: -10.0,
    hover_scale: 1.5,
};

/// Small marker that sticks close to the pointer.
pub const TRAIL: MarkerSpec = MarkerSpec {
    spring: SpringConfig::new(800.0, 35.0),
    offset: -2.0,
    hover_scale: 1.0,
};

#[derive(Debug, Clone, Copy)]
struct Marker {
    spec: MarkerSpec,
    x: Spring,
    y: Spring,
    scale: Spring,
}

impl Marker {
    fn new(spec: MarkerSpec) -> Self {
        Self {
            spec,
            x: Spring::new(spec.spring, spec.offset),
            y: Spring::new(spec.spring, spec.offset),
            scale: Spring::new(spec.spring, 1.0),
        }
    }

    fn aim(&mut self, pointer: (f32, f32), hovering: bool) {
        self.x.set_target(pointer.0 + self.spec.offset);
        self.y.set_target(pointer.1 + self.spec.offset);
        self.scale
            .set_target(if hovering { self.spec.hover_scale } else { 1.0 });
    }

    fn step(&mut self, dt: Duration) {
        self.x.step(dt);
        self.y.step(dt);
        self.scale.step(dt);
    }

    fn snapshot(&self) -> MarkerSnapshot {
        MarkerSnapshot {
            x: self.x.value(),
            y: self.y.value(),
            scale: self.scale.value(),
            offset: self.spec.offset,
        }
    }

    fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled() && self.scale.is_settled()
    }
}

/// Marker position at one instant. `x`/`y` are the offset corner; the
/// marker is drawn centered on [`MarkerSnapshot::center`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerSnapshot {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub offset: f32,
}

impl MarkerSnapshot {
    pub fn center(&self) -> (f32, f32) {
        (self.x - self.offset, self.y - self.offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorSnapshot {
    pub pointer: (f32, f32),
    pub hovering: bool,
    pub glow: MarkerSnapshot,
    pub trail: MarkerSnapshot,
}

#[derive(Debug)]
struct CursorState {
    pointer: (f32, f32),
    hovering: bool,
    glow: Marker,
    trail: Marker,
}

impl CursorState {
    fn new() -> Self {
        Self {
            pointer: (0.0, 0.0),
            hovering: false,
            glow: Marker::new(GLOW),
            trail: Marker::new(TRAIL),
        }
    }

    fn retarget(&mut self) {
        self.glow.aim(self.pointer, self.hovering);
        self.trail.aim(self.pointer, self.hovering);
    }
}

/// A mounted cursor-follow effect.
pub struct CursorEffect {
    state: Rc<RefCell<CursorState>>,
    subscriptions: Vec<Subscription>,
}

impl CursorEffect {
    /// Install the move and over listeners on `bus`.
    pub fn mount(bus: &EventBus) -> Self {
        let state = Rc::new(RefCell::new(CursorState::new()));

        let weak = Rc::downgrade(&state);
        let on_move = bus.subscribe(EventKind::PointerMove, move |event| {
            if let PointerEvent::Move { x, y } = event {
                with_state(&weak, |s| {
                    s.pointer = (*x, *y);
                    s.retarget();
                });
            }
        });

        let weak = Rc::downgrade(&state);
        let on_over = bus.subscribe(EventKind::PointerOver, move |event| {
            if let PointerEvent::Over { target } = event {
                let hovering = target.is_interactive();
                with_state(&weak, |s| {
                    s.hovering = hovering;
                    s.retarget();
                });
            }
        });

        debug!(listeners = 2, "cursor effect mounted");
        Self {
            state,
            subscriptions: vec![on_move, on_over],
        }
    }

    /// Remove both listeners. Equivalent to dropping the effect.
    pub fn unmount(self) {}

    pub fn step(&self, dt: Duration) {
        let mut state = self.state.borrow_mut();
        state.glow.step(dt);
        state.trail.step(dt);
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        let state = self.state.borrow();
        CursorSnapshot {
            pointer: state.pointer,
            hovering: state.hovering,
            glow: state.glow.snapshot(),
            trail: state.trail.snapshot(),
        }
    }

    pub fn is_settled(&self) -> bool {
        let state = self.state.borrow();
        state.glow.is_settled() && state.trail.is_settled()
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl Drop for CursorEffect {
    fn drop(&mut self) {
        self.subscriptions.clear();
        debug!("cursor effect unmounted");
    }
}

fn with_state(state: &Weak<RefCell<CursorState>>, f: impl FnOnce(&mut CursorState)) {
    if let Some(state) = state.upgrade() {
        f(&mut state.borrow_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ElementTag, HoverTarget};

    fn settle(effect: &CursorEffect) {
        for _ in 0..200 {
            effect.step(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_spring_converges_to_target() {
        let mut spring = Spring::new(GLOW.spring, 0.0);
        spring.set_target(100.0);
        for _ in 0..120 {
            spring.step(Duration::from_millis(16));
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn test_spring_stable_under_coarse_frames() {
        let mut spring = Spring::new(TRAIL.spring, 0.0);
        spring.set_target(50.0);
        for _ in 0..20 {
            spring.step(Duration::from_millis(250));
            assert!(spring.value().is_finite());
            assert!(spring.value() < 60.0);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn test_trail_leads_glow() {
        let bus = EventBus::new();
        let effect = CursorEffect::mount(&bus);
        bus.dispatch(&PointerEvent::Move { x: 100.0, y: 40.0 });
        effect.step(Duration::from_millis(50));

        let snap = effect.snapshot();
        let glow_gap = 100.0 - snap.glow.center().0;
        let trail_gap = 100.0 - snap.trail.center().0;
        assert!(trail_gap < glow_gap, "trail {trail_gap} glow {glow_gap}");
    }

    #[test]
    fn test_markers_center_on_pointer() {
        let bus = EventBus::new();
        let effect = CursorEffect::mount(&bus);
        bus.dispatch(&PointerEvent::Move { x: 30.0, y: 12.0 });
        settle(&effect);

        let snap = effect.snapshot();
        assert_eq!((snap.glow.x, snap.glow.y), (20.0, 2.0));
        assert_eq!((snap.trail.x, snap.trail.y), (28.0, 10.0));
        assert_eq!(snap.glow.center(), (30.0, 12.0));
    }

    #[test]
    fn test_hover_scales_glow_only() {
        let bus = EventBus::new();
        let effect = CursorEffect::mount(&bus);
        bus.dispatch(&PointerEvent::Over {
            target: HoverTarget::new(ElementTag::Button),
        });
        settle(&effect);

        let snap = effect.snapshot();
        assert!(snap.hovering);
        assert_eq!(snap.glow.scale, 1.5);
        assert_eq!(snap.trail.scale, 1.0);

        bus.dispatch(&PointerEvent::Over {
            target: HoverTarget::background(),
        });
        settle(&effect);
        assert_eq!(effect.snapshot().glow.scale, 1.0);
    }

    #[test]
    fn test_mount_installs_two_listeners() {
        let bus = EventBus::new();
        let effect = CursorEffect::mount(&bus);
        assert_eq!(effect.listener_count(), 2);
        assert_eq!(bus.listener_count_for(EventKind::PointerMove), 1);
        assert_eq!(bus.listener_count_for(EventKind::PointerOver), 1);

        effect.unmount();
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_events_after_unmount_are_not_delivered() {
        let bus = EventBus::new();
        let effect = CursorEffect::mount(&bus);
        drop(effect);
        assert_eq!(bus.dispatch(&PointerEvent::Move { x: 5.0, y: 5.0 }), 0);
    }

    #[test]
    fn test_remount_starts_fresh() {
        let bus = EventBus::new();
        let first = CursorEffect::mount(&bus);
        bus.dispatch(&PointerEvent::Move { x: 70.0, y: 70.0 });
        first.unmount();

        let second = CursorEffect::mount(&bus);
        assert_eq!(bus.listener_count(), 2);
        assert_eq!(second.snapshot().pointer, (0.0, 0.0));
    }
}
