//! Motion parameters and the carousel slide transition.
//!
//! Spring constants are plain configuration. [`SpringValue`] integrates them
//! so renderers without an animation engine can still drive the slide.

use std::time::Duration;

use crate::pagination::Direction;

/// Distance a window travels while sliding in or out
pub const SLIDE_OFFSET: f32 = 50.0;

/// Opacity fade used by slides and staggered reveals
pub const FADE_DURATION: Duration = Duration::from_millis(200);

pub const ITEM_STAGGER: Duration = Duration::from_millis(100);
pub const EXPERIENCE_STAGGER: Duration = Duration::from_millis(200);
pub const HERO_SKILLS_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringConfig {
    pub const CAROUSEL: SpringConfig = SpringConfig::new(300.0, 30.0);

    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }
}

const REST_DELTA: f32 = 0.5;
const REST_SPEED: f32 = 0.5;
// keeps integration stable when a frame arrives late
const MAX_STEP: f32 = 1.0 / 120.0;

/// A unit-mass spring chasing `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringValue {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    config: SpringConfig,
}

impl SpringValue {
    pub fn new(position: f32, config: SpringConfig) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            config,
        }
    }

    /// Jump without animating
    pub fn snap(&mut self, position: f32) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    pub fn step(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 && !self.is_at_rest() {
            let h = remaining.min(MAX_STEP);
            let force = -self.config.stiffness * (self.position - self.target)
                - self.config.damping * self.velocity;
            self.velocity += force * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest() {
            self.snap(self.target);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    /// The previous window is leaving; `from_page` is still drawn
    Exiting { from_page: usize },
    /// The current window is sliding in or its items are still revealing
    Entering,
    Settled,
}

/// Exit-then-enter slide keyed by navigation direction. Only one window is
/// visible at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideTransition {
    phase: SlidePhase,
    direction: Direction,
    offset: SpringValue,
    fade: Duration,
    since_enter: Duration,
}

impl Default for SlideTransition {
    fn default() -> Self {
        Self::mounted()
    }
}

impl SlideTransition {
    /// Freshly mounted window: no slide, items reveal in stagger order
    pub fn mounted() -> Self {
        Self {
            phase: SlidePhase::Entering,
            direction: Direction::None,
            offset: SpringValue::new(0.0, SpringConfig::CAROUSEL),
            fade: FADE_DURATION,
            since_enter: Duration::ZERO,
        }
    }

    pub fn settled() -> Self {
        Self {
            phase: SlidePhase::Settled,
            fade: FADE_DURATION,
            since_enter: Duration::MAX,
            ..Self::mounted()
        }
    }

    /// Start sliding after an accepted navigation away from `from_page`.
    /// A window already on its way out keeps going; the page it shows stays.
    pub fn begin(&mut self, direction: Direction, from_page: usize) {
        self.direction = direction;
        self.offset.target = -direction.sign() * SLIDE_OFFSET;
        if !matches!(self.phase, SlidePhase::Exiting { .. }) {
            self.phase = SlidePhase::Exiting { from_page };
            self.fade = Duration::ZERO;
        }
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Page to draw instead of the current one while exiting
    pub fn outgoing_page(&self) -> Option<usize> {
        match self.phase {
            SlidePhase::Exiting { from_page } => Some(from_page),
            SlidePhase::Entering | SlidePhase::Settled => None,
        }
    }

    /// Horizontal offset of the visible window
    pub fn offset(&self) -> f32 {
        self.offset.position
    }

    /// Opacity of the visible window as a whole
    pub fn opacity(&self) -> f32 {
        let progress = fade_progress(self.fade);
        match self.phase {
            SlidePhase::Exiting { .. } => 1.0 - progress,
            SlidePhase::Entering | SlidePhase::Settled => progress,
        }
    }

    /// Opacity of the item at `index_in_window` given its stagger
    pub fn item_opacity(&self, index_in_window: usize) -> f32 {
        if matches!(self.phase, SlidePhase::Exiting { .. }) {
            return 1.0;
        }
        reveal_progress(self.since_enter, stagger_delay(index_in_window))
    }

    /// Whether another tick would change anything for a window of `window_len` items
    pub fn is_animating(&self, window_len: usize) -> bool {
        match self.phase {
            SlidePhase::Exiting { .. } => true,
            SlidePhase::Entering => {
                let last = window_len.saturating_sub(1);
                !self.offset.is_at_rest()
                    || self.fade < FADE_DURATION
                    || self.since_enter < stagger_delay(last) + FADE_DURATION
            }
            SlidePhase::Settled => false,
        }
    }

    pub fn tick(&mut self, dt: Duration, window_len: usize) {
        match self.phase {
            SlidePhase::Exiting { .. } => {
                self.fade = self.fade.saturating_add(dt);
                self.offset.step(dt);
                if self.fade >= FADE_DURATION {
                    self.enter();
                }
            }
            SlidePhase::Entering => {
                self.fade = self.fade.saturating_add(dt);
                self.since_enter = self.since_enter.saturating_add(dt);
                self.offset.step(dt);
                if !self.is_animating(window_len) {
                    self.phase = SlidePhase::Settled;
                }
            }
            SlidePhase::Settled => {}
        }
    }

    fn enter(&mut self) {
        self.phase = SlidePhase::Entering;
        self.fade = Duration::ZERO;
        self.since_enter = Duration::ZERO;
        self.offset.snap(self.direction.sign() * SLIDE_OFFSET);
        self.offset.target = 0.0;
    }
}

fn fade_progress(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}

/// 0.0 before `delay`, then fades to 1.0 over [`FADE_DURATION`]
pub fn reveal_progress(elapsed: Duration, delay: Duration) -> f32 {
    fade_progress(elapsed.saturating_sub(delay))
}

/// Delay for the item at `index_in_window`, counted within the window
pub fn stagger_delay(index_in_window: usize) -> Duration {
    ITEM_STAGGER * index_in_window as u32
}

pub fn experience_delay(index: usize) -> Duration {
    EXPERIENCE_STAGGER * index as u32
}

pub fn hero_skill_delay(index: usize) -> Duration {
    HERO_SKILLS_DELAY + ITEM_STAGGER * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_until_settled(transition: &mut SlideTransition, window_len: usize) -> usize {
        let mut frames = 0;
        while transition.is_animating(window_len) {
            transition.tick(FRAME, window_len);
            frames += 1;
            assert!(frames < 1_000, "transition never settled");
        }
        frames
    }

    #[test]
    fn test_forward_slide_phases() {
        let mut transition = SlideTransition::settled();
        transition.begin(Direction::Forward, 1);
        assert_eq!(transition.outgoing_page(), Some(1));
        assert_eq!(transition.opacity(), 1.0);

        transition.tick(Duration::from_millis(100), 3);
        assert!(transition.offset() < 0.0, "outgoing window moves against travel");
        assert!(transition.opacity() < 1.0);

        transition.tick(Duration::from_millis(100), 3);
        assert_eq!(transition.phase(), SlidePhase::Entering);
        assert_eq!(transition.outgoing_page(), None);
        assert_eq!(transition.offset(), SLIDE_OFFSET);
        assert_eq!(transition.opacity(), 0.0);

        run_until_settled(&mut transition, 3);
        assert_eq!(transition.phase(), SlidePhase::Settled);
        assert_eq!(transition.offset(), 0.0);
        assert_eq!(transition.opacity(), 1.0);
    }

    #[test]
    fn test_backward_slide_enters_from_negative_offset() {
        let mut transition = SlideTransition::settled();
        transition.begin(Direction::Backward, 3);
        transition.tick(FADE_DURATION, 3);
        assert_eq!(transition.offset(), -SLIDE_OFFSET);
        assert_eq!(transition.direction(), Direction::Backward);
    }

    #[test]
    fn test_mounted_window_reveals_in_stagger_order() {
        let mut transition = SlideTransition::mounted();
        assert_eq!(transition.offset(), 0.0);
        transition.tick(Duration::from_millis(150), 3);
        let first = transition.item_opacity(0);
        let second = transition.item_opacity(1);
        let third = transition.item_opacity(2);
        assert!(first > second);
        assert!(second > 0.0);
        assert_eq!(third, 0.0);

        run_until_settled(&mut transition, 3);
        assert_eq!(transition.item_opacity(2), 1.0);
    }

    #[test]
    fn test_settled_is_static() {
        let transition = SlideTransition::settled();
        assert!(!transition.is_animating(3));
        assert_eq!(transition.opacity(), 1.0);
        assert_eq!(transition.item_opacity(5), 1.0);
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(stagger_delay(0), Duration::ZERO);
        assert_eq!(stagger_delay(2), Duration::from_millis(200));
        assert_eq!(experience_delay(3), Duration::from_millis(600));
        assert_eq!(hero_skill_delay(0), Duration::from_millis(800));
        assert_eq!(hero_skill_delay(2), Duration::from_millis(1000));
        assert_eq!(reveal_progress(Duration::from_millis(50), stagger_delay(1)), 0.0);
        assert_eq!(reveal_progress(Duration::from_millis(400), stagger_delay(1)), 1.0);
    }

    #[test]
    fn test_carousel_spring_preset() {
        assert_eq!(SpringConfig::CAROUSEL.stiffness, 300.0);
        assert_eq!(SpringConfig::CAROUSEL.damping, 30.0);
    }

    #[test]
    fn test_spring_comes_to_rest() {
        let mut spring = SpringValue::new(SLIDE_OFFSET, SpringConfig::CAROUSEL);
        spring.target = 0.0;
        for _ in 0..200 {
            spring.step(FRAME);
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.position, 0.0);
    }

    #[test]
    fn test_navigation_while_exiting_keeps_outgoing_page() {
        let mut transition = SlideTransition::settled();
        transition.begin(Direction::Forward, 1);
        transition.tick(Duration::from_millis(50), 3);
        let faded = transition.opacity();

        // page 2 was never drawn, page 1 keeps sliding out
        transition.begin(Direction::Backward, 3);
        assert_eq!(transition.outgoing_page(), Some(1));
        assert_eq!(transition.direction(), Direction::Backward);
        assert_eq!(transition.opacity(), faded);

        transition.tick(Duration::from_millis(150), 3);
        assert_eq!(transition.phase(), SlidePhase::Entering);
        assert_eq!(transition.offset(), -SLIDE_OFFSET);
    }
}
