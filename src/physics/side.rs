//! Collision side classification.
//!
//! A [`SideClassifier`] looks at two overlapping boxes and names the side of
//! the *actor* that struck the obstacle:
//!
//! - [`CollisionSide::Bottom`] – the actor's bottom met the obstacle's top (landing)
//! - [`CollisionSide::Top`] – the actor's top met the obstacle's underside
//! - [`CollisionSide::Left`] – the actor's left met the obstacle's right side
//! - [`CollisionSide::Right`] – the actor's right met the obstacle's left side
//!
//! [`BearingClassifier`] is the default. It measures angles around the
//! obstacle centre from the top-left corner vector, so the four corner
//! bearings split the circle into the four sides whatever the obstacle's
//! aspect ratio. [`MinimumTranslationClassifier`] picks the axis of least
//! penetration instead. [`SideStrategy`] selects one of them from
//! configuration.

use std::str::FromStr;

use glam::Vec2;

use crate::components::boxcollider::Aabb;

/// Side of the actor involved in a collision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollisionSide {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
}

/// Names the struck side for a pair of boxes already known to overlap.
pub trait SideClassifier {
    fn classify(&self, actor: &Aabb, obstacle: &Aabb) -> CollisionSide;
}

/// Corner-bearing classifier.
///
/// Boundary handling: a bearing equal to the top-left or top-right corner
/// bearing counts as `Bottom`, equal to the bottom-right as `Left`, equal to
/// the bottom-left as `Right`. Coincident centres count as `Bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BearingClassifier;

/// Corner bearings of a box, in degrees from the top-left corner vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerBearings {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl BearingClassifier {
    /// Bearings of the four corners of `obstacle` around its centre.
    pub fn corner_bearings(obstacle: &Aabb) -> CornerBearings {
        let half = obstacle.size() * 0.5;
        let reference = angle_of(Vec2::new(-half.x, -half.y));
        CornerBearings {
            top_left: 0.0,
            top_right: bearing(Vec2::new(half.x, -half.y), reference),
            bottom_right: bearing(Vec2::new(half.x, half.y), reference),
            bottom_left: bearing(Vec2::new(-half.x, half.y), reference),
        }
    }

    /// Bearing of the actor centre seen from the obstacle centre.
    pub fn actor_bearing(actor: &Aabb, obstacle: &Aabb) -> f32 {
        let half = obstacle.size() * 0.5;
        let reference = angle_of(Vec2::new(-half.x, -half.y));
        bearing(actor.center() - obstacle.center(), reference)
    }
}

impl SideClassifier for BearingClassifier {
    fn classify(&self, actor: &Aabb, obstacle: &Aabb) -> CollisionSide {
        if actor.center() == obstacle.center() {
            return CollisionSide::Bottom;
        }
        let corners = Self::corner_bearings(obstacle);
        let phi = Self::actor_bearing(actor, obstacle);
        if phi <= corners.top_right {
            CollisionSide::Bottom
        } else if phi <= corners.bottom_right {
            CollisionSide::Left
        } else if phi < corners.bottom_left {
            CollisionSide::Top
        } else {
            CollisionSide::Right
        }
    }
}

/// Least-penetration classifier. Equal penetration on both axes resolves
/// vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinimumTranslationClassifier;

impl SideClassifier for MinimumTranslationClassifier {
    fn classify(&self, actor: &Aabb, obstacle: &Aabb) -> CollisionSide {
        let overlap_x = actor.right().min(obstacle.right()) - actor.left().max(obstacle.left());
        let overlap_y = actor.bottom().min(obstacle.bottom()) - actor.top().max(obstacle.top());
        let (a, o) = (actor.center(), obstacle.center());
        if overlap_x < overlap_y {
            if a.x >= o.x {
                CollisionSide::Left
            } else {
                CollisionSide::Right
            }
        } else if a.y <= o.y {
            CollisionSide::Bottom
        } else {
            CollisionSide::Top
        }
    }
}

/// Classifier choice, selectable from the `[collision]` config section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SideStrategy {
    #[default]
    Bearing,
    MinimumTranslation,
}

impl SideClassifier for SideStrategy {
    fn classify(&self, actor: &Aabb, obstacle: &Aabb) -> CollisionSide {
        match self {
            SideStrategy::Bearing => BearingClassifier.classify(actor, obstacle),
            SideStrategy::MinimumTranslation => {
                MinimumTranslationClassifier.classify(actor, obstacle)
            }
        }
    }
}

impl FromStr for SideStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bearing" => Ok(SideStrategy::Bearing),
            "mtv" | "minimum_translation" => Ok(SideStrategy::MinimumTranslation),
            other => Err(format!("Unknown collision classifier: {}", other)),
        }
    }
}

fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

/// Angle of `v` relative to `reference` (degrees), reduced into [0, 360).
fn bearing(v: Vec2, reference: f32) -> f32 {
    let reduced = (angle_of(v) - reference).rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360
    if reduced >= 360.0 { 0.0 } else { reduced }
}
