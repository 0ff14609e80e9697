//! Page-turn motion: poses, a damped spring, and the exit-then-enter turn.
//!
//! Pure data driven by `tick(dt)`. The effects layer owns the clock and
//! calls `tick` with real elapsed time; tests call it with fixed steps.
//!
//! A turn replaces, never stacks: the outgoing page plays its exit to
//! completion, then the incoming page mounts and springs into place. At
//! every instant exactly one page is mounted.

use std::time::Duration;

use crate::config::MotionConfig;
use crate::navigator::Navigation;
use crate::types::{Direction, Page};

/// Largest integration step. Frames longer than this are subdivided.
const MAX_SPRING_STEP: f32 = 1.0 / 240.0;
/// Longest interval one `Spring::step` integrates.
const MAX_SPRING_DT: f32 = 1.0;

/// Offset (percent of width) below which the position spring may rest.
const OFFSET_REST_DELTA: f32 = 0.1;
/// Rotation (degrees) below which the rotation spring may rest.
const ROTATION_REST_DELTA: f32 = 0.05;
/// Speed below which either spring may rest.
const REST_SPEED: f32 = 0.5;

// ============================================================================
// POSE
// ============================================================================

/// Where a page sits on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Horizontal offset in percent of the page width. Positive is right.
    pub offset: f32,
    /// Rotation about the vertical axis, in degrees.
    pub rotation: f32,
    /// 0.0 is invisible, 1.0 fully drawn.
    pub opacity: f32,
}

impl Pose {
    /// Settled in place and fully visible.
    pub const REST: Pose = Pose {
        offset: 0.0,
        rotation: 0.0,
        opacity: 1.0,
    };

    /// Starting pose of a page arriving in `direction`.
    ///
    /// Forward pages come in from the right (+100%, +25°),
    /// backward pages from the left (−100%, −25°).
    pub fn entering(direction: Direction) -> Pose {
        let s = direction.sign();
        Pose {
            offset: 100.0 * s,
            rotation: 25.0 * s,
            opacity: 0.0,
        }
    }

    /// Final pose of a page leaving while the book moves in `direction`.
    ///
    /// Forward exits slide half a page left (−50%, −15°), backward mirrors it.
    pub fn exited(direction: Direction) -> Pose {
        let s = direction.sign();
        Pose {
            offset: -50.0 * s,
            rotation: -15.0 * s,
            opacity: 0.0,
        }
    }

    fn lerp(a: Pose, b: Pose, t: f32) -> Pose {
        let t = t.clamp(0.0, 1.0);
        Pose {
            offset: a.offset + (b.offset - a.offset) * t,
            rotation: a.rotation + (b.rotation - a.rotation) * t,
            opacity: a.opacity + (b.opacity - a.opacity) * t,
        }
    }
}

// ============================================================================
// SPRING
// ============================================================================

/// One-dimensional damped spring pulling `position` toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub position: f32,
    pub velocity: f32,
}

impl Spring {
    pub fn new(motion: &MotionConfig, from: f32) -> Self {
        Spring {
            stiffness: motion.stiffness,
            damping: motion.damping,
            mass: motion.mass.max(f32::EPSILON),
            position: from,
            velocity: 0.0,
        }
    }

    /// Advance by `dt` seconds using semi-implicit Euler.
    ///
    /// `dt` is capped at `MAX_SPRING_DT`; a longer gap (a suspended host,
    /// say) advances the spring by the cap only.
    pub fn step(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_SPRING_DT) } else { 0.0 };
        if dt == 0.0 {
            return;
        }
        let substeps = (dt / MAX_SPRING_STEP).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        for _ in 0..substeps {
            let accel = (-self.stiffness * self.position - self.damping * self.velocity) / self.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
    }

    /// True (and snapped to zero) once both displacement and speed are small.
    pub fn settle(&mut self, rest_delta: f32) -> bool {
        if self.position.abs() < rest_delta && self.velocity.abs() < REST_SPEED {
            self.position = 0.0;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }
}

// ============================================================================
// PAGE TURN
// ============================================================================

/// The single page currently on screen and how it is posed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mounted {
    pub page: Page,
    pub pose: Pose,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    /// Outgoing page fading and sliding out over a fixed duration.
    Exiting { page: Page, elapsed: Duration },
    /// Incoming page springing into place while fading in.
    Entering {
        offset: Spring,
        rotation: Spring,
        faded: Duration,
    },
    Settled,
}

/// Animation state for one navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTurn {
    direction: Direction,
    incoming: Page,
    phase: Phase,
    motion: MotionConfig,
}

impl PageTurn {
    /// A page already at rest, no animation pending.
    pub fn settled(page: Page, motion: &MotionConfig) -> Self {
        PageTurn {
            direction: Direction::Forward,
            incoming: page,
            phase: Phase::Settled,
            motion: motion.clone(),
        }
    }

    /// Begin turning from whatever is mounted now to `nav.page`.
    ///
    /// `outgoing` is the page on screen at the moment of navigation, which
    /// may differ from `nav.from` when a turn is interrupted mid-flight.
    /// Re-selecting the mounted page does not animate.
    pub fn start(outgoing: Page, nav: &Navigation, motion: &MotionConfig) -> Self {
        let phase = if !motion.enabled || outgoing == nav.page {
            Phase::Settled
        } else {
            Phase::Exiting {
                page: outgoing,
                elapsed: Duration::ZERO,
            }
        };
        PageTurn {
            direction: nav.direction,
            incoming: nav.page,
            phase,
            motion: motion.clone(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The page this turn ends on.
    pub fn incoming(&self) -> Page {
        self.incoming
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// Advance the animation by `dt`. Time left over after the exit
    /// completes carries into the entrance.
    pub fn tick(&mut self, dt: Duration) {
        let mut left = dt;
        loop {
            match &mut self.phase {
                Phase::Settled => return,
                Phase::Exiting { elapsed, .. } => {
                    let total = self.motion.exit();
                    let needed = total.saturating_sub(*elapsed);
                    if left < needed {
                        *elapsed += left;
                        return;
                    }
                    left -= needed;
                    self.phase = self.entrance();
                }
                Phase::Entering {
                    offset,
                    rotation,
                    faded,
                } => {
                    let secs = left.as_secs_f32();
                    offset.step(secs);
                    rotation.step(secs);
                    *faded += left;

                    let offset_done = offset.settle(OFFSET_REST_DELTA);
                    let rotation_done = rotation.settle(ROTATION_REST_DELTA);
                    let fade_done = *faded >= self.motion.fade_in();
                    if offset_done && rotation_done && fade_done {
                        self.phase = Phase::Settled;
                    }
                    return;
                }
            }
        }
    }

    /// The one page on screen right now and its pose.
    pub fn mounted(&self) -> Mounted {
        match &self.phase {
            Phase::Settled => Mounted {
                page: self.incoming,
                pose: Pose::REST,
            },
            Phase::Exiting { page, elapsed } => {
                let t = progress(*elapsed, self.motion.exit());
                Mounted {
                    page: *page,
                    pose: Pose::lerp(Pose::REST, Pose::exited(self.direction), t),
                }
            }
            Phase::Entering {
                offset,
                rotation,
                faded,
            } => Mounted {
                page: self.incoming,
                pose: Pose {
                    offset: offset.position,
                    rotation: rotation.position,
                    opacity: progress(*faded, self.motion.fade_in()),
                },
            },
        }
    }

    fn entrance(&self) -> Phase {
        let from = Pose::entering(self.direction);
        Phase::Entering {
            offset: Spring::new(&self.motion, from.offset),
            rotation: Spring::new(&self.motion, from.rotation),
            faded: Duration::ZERO,
        }
    }
}

/// Fraction of `total` covered by `elapsed`, clamped to 0..=1.
fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================
