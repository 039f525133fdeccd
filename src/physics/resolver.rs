//! Per-kind side policy for resolving actor/obstacle overlaps.
//!
//! [`resolve_contact`] handles one pair: it bails out unless the boxes
//! strictly overlap, asks the configured [`SideClassifier`] which side was
//! struck and applies the policy of the obstacle kind:
//!
//! | Kind | Bottom | Left / Top / Right |
//! |---|---|---|
//! | Wall, Static | land: snap onto top, `vy = 0`, grant jump | snap flush to the struck edge |
//! | Moving | as Static, then carried along x by the platform's last displacement | as Static; Left / Right carried along y, Top along x |
//! | Directional | land only if penetration < tolerance, zero `vy` only when falling | ignored |
//! | Transparent | land, zero `vy` only when falling | Top: snap onto top if penetration < transparent tolerance |
//!
//! A moving platform only carries along the struck edge, so the snapped edge
//! stays flush with the platform's new position. Penetration is
//! `actor.bottom - obstacle.top`. Velocity is only touched by landings.

use glam::Vec2;
use smallvec::SmallVec;

use crate::components::boxcollider::Aabb;
use crate::components::obstacle::ObstacleKind;
use crate::physics::side::{CollisionSide, SideClassifier, SideStrategy};

/// Actor state the resolver reads and corrects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mover {
    /// Top-left corner of the actor's box.
    pub min: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub can_jump: bool,
}

impl Mover {
    pub fn new(aabb: Aabb, velocity: Vec2, can_jump: bool) -> Self {
        Self {
            min: aabb.min,
            size: aabb.size(),
            velocity,
            can_jump,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            min: self.min,
            max: self.min + self.size,
        }
    }

    fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Put the actor's bottom edge on `obstacle`'s top edge.
    fn snap_onto(&mut self, obstacle: &Aabb) {
        self.min.y = obstacle.top() - self.size.y;
    }

    fn land(&mut self, obstacle: &Aabb, only_when_falling: bool) {
        self.snap_onto(obstacle);
        self.can_jump = true;
        if !only_when_falling || self.velocity.y > 0.0 {
            self.velocity.y = 0.0;
        }
    }
}

/// Resolver tuning shared by every group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolveSettings {
    pub classifier: SideStrategy,
    /// Landing depth below which a transparent platform catches an actor
    /// classified on its `Top` side.
    pub transparent_tolerance: f32,
}

impl Default for ResolveSettings {
    fn default() -> Self {
        Self {
            classifier: SideStrategy::Bearing,
            transparent_tolerance: 10.0,
        }
    }
}

/// Resolve one actor/obstacle pair. Returns [`CollisionSide::None`] when the
/// boxes do not overlap.
pub fn resolve_contact(
    mover: &mut Mover,
    obstacle: &Aabb,
    kind: &ObstacleKind,
    settings: &ResolveSettings,
) -> CollisionSide {
    let actor = mover.aabb();
    if !actor.overlaps(obstacle) {
        return CollisionSide::None;
    }
    let side = settings.classifier.classify(&actor, obstacle);
    let penetration = mover.bottom() - obstacle.top();

    match kind {
        ObstacleKind::Wall | ObstacleKind::Static => resolve_solid(mover, obstacle, side),
        ObstacleKind::Moving(oscillator) => {
            resolve_solid(mover, obstacle, side);
            mover.min += carry_along(side, oscillator.last_delta);
        }
        ObstacleKind::Directional { tolerance } => {
            if side == CollisionSide::Bottom && penetration < *tolerance {
                mover.land(obstacle, true);
            }
        }
        ObstacleKind::Transparent => match side {
            CollisionSide::Bottom => mover.land(obstacle, true),
            CollisionSide::Top if penetration < settings.transparent_tolerance => {
                mover.snap_onto(obstacle);
            }
            _ => {}
        },
    }
    side
}

fn resolve_solid(mover: &mut Mover, obstacle: &Aabb, side: CollisionSide) {
    match side {
        CollisionSide::Bottom => mover.land(obstacle, false),
        CollisionSide::Left => mover.min.x = obstacle.right(),
        CollisionSide::Top => mover.min.y = obstacle.bottom(),
        CollisionSide::Right => mover.min.x = obstacle.left() - mover.size.x,
        CollisionSide::None => {}
    }
}

/// The part of a platform's displacement parallel to the struck edge.
fn carry_along(side: CollisionSide, delta: Vec2) -> Vec2 {
    match side {
        CollisionSide::Bottom | CollisionSide::Top => Vec2::new(delta.x, 0.0),
        CollisionSide::Left | CollisionSide::Right => Vec2::new(0.0, delta.y),
        CollisionSide::None => Vec2::ZERO,
    }
}

/// Resolve an actor against one obstacle group, in iteration order.
///
/// Later obstacles may override corrections made by earlier ones. Returns
/// the sides of every overlapping pair.
pub fn resolve<'a>(
    mover: &mut Mover,
    obstacles: impl IntoIterator<Item = (&'a Aabb, &'a ObstacleKind)>,
    settings: &ResolveSettings,
) -> SmallVec<[CollisionSide; 4]> {
    let mut sides = SmallVec::new();
    for (aabb, kind) in obstacles {
        let side = resolve_contact(mover, aabb, kind, settings);
        if side != CollisionSide::None {
            sides.push(side);
        }
    }
    sides
}
