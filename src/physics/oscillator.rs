//! Two-waypoint oscillator driving moving platforms.
//!
//! Each axis travels independently between `a` and `b`. Travel starts
//! [`Travel::Forward`] (towards `b`) at `a`. Before moving, an axis that has
//! reached its bound is clamped to it and turned around; after moving, the
//! result is clamped back into `[a, b]` so the platform never leaves its
//! track. An axis with `a == b` never moves.
//!
//! The displacement actually applied during the last [`Oscillator::step`]
//! is kept in `last_delta`; the collision resolver adds it to riders.

use glam::Vec2;

/// Direction of travel along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Travel {
    /// Towards waypoint `b`.
    #[default]
    Forward,
    /// Towards waypoint `a`.
    Reverse,
}

impl Travel {
    fn flipped(self) -> Self {
        match self {
            Travel::Forward => Travel::Reverse,
            Travel::Reverse => Travel::Forward,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    pub a: Vec2,
    pub b: Vec2,
    /// Distance covered per tick on each axis; the sign comes from travel.
    pub speed: Vec2,
    pub travel_x: Travel,
    pub travel_y: Travel,
    /// Displacement applied by the last step.
    pub last_delta: Vec2,
}

impl Oscillator {
    pub fn new(a: Vec2, b: Vec2, speed: Vec2) -> Self {
        Self {
            a,
            b,
            speed: speed.abs(),
            travel_x: Travel::Forward,
            travel_y: Travel::Forward,
            last_delta: Vec2::ZERO,
        }
    }

    /// A tick without a step: the platform stays put and carries nobody.
    pub fn rest(&mut self) {
        self.last_delta = Vec2::ZERO;
    }

    /// Advance `position` by one tick and return the applied displacement.
    pub fn step(&mut self, position: &mut Vec2) -> Vec2 {
        let before = *position;
        self.travel_x = step_axis(&mut position.x, self.a.x, self.b.x, self.speed.x, self.travel_x);
        self.travel_y = step_axis(&mut position.y, self.a.y, self.b.y, self.speed.y, self.travel_y);
        self.last_delta = *position - before;
        self.last_delta
    }
}

/// Signed velocity along one axis; zero for a degenerate track.
fn axis_velocity(a: f32, b: f32, speed: f32, travel: Travel) -> f32 {
    if a == b {
        return 0.0;
    }
    let towards_b = (b - a).signum();
    match travel {
        Travel::Forward => speed * towards_b,
        Travel::Reverse => -speed * towards_b,
    }
}

/// True when `pos` sits on or beyond `bound`, looking along `dir`.
fn reached(pos: f32, bound: f32, dir: f32) -> bool {
    (pos - bound) * dir >= 0.0
}

fn step_axis(pos: &mut f32, a: f32, b: f32, speed: f32, mut travel: Travel) -> Travel {
    if a == b {
        *pos = a;
        return travel;
    }
    let towards_b = (b - a).signum();
    match travel {
        Travel::Forward if reached(*pos, b, towards_b) => {
            *pos = b;
            travel = travel.flipped();
        }
        Travel::Reverse if reached(*pos, a, -towards_b) => {
            *pos = a;
            travel = travel.flipped();
        }
        _ => {}
    }
    *pos += axis_velocity(a, b, speed, travel);
    *pos = pos.clamp(a.min(b), a.max(b));
    travel
}
