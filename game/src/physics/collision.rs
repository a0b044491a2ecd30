// game/src/physics/collision.rs
use engine_core::tiles::rect::Rect;

/// Sides on which the last physics step was stopped by a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collisions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Collisions {
    pub fn reset(&mut self) {
        *self = Collisions::default();
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Axis of a single sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Resolve one axis of movement.
///
/// `rect` is the entity box after it has been displaced by `delta` along
/// `axis`. Every obstacle that overlaps the box pushes it back out against
/// the direction of travel, in slice order, so later obstacles see the box
/// already corrected by earlier ones. Flags accumulate and are never cleared
/// here.
///
/// Returns the corrected coordinate on `axis` if any obstacle overlapped.
pub fn resolve_axis(
    mut rect: Rect,
    delta: f32,
    axis: Axis,
    obstacles: &[Rect],
    collisions: &mut Collisions,
) -> Option<i32> {
    let mut resolved = None;

    for obstacle in obstacles {
        if !rect.overlaps(obstacle) {
            continue;
        }

        match axis {
            Axis::X => {
                if delta > 0.0 {
                    rect.set_right(obstacle.left());
                    collisions.right = true;
                } else if delta < 0.0 {
                    rect.set_left(obstacle.right());
                    collisions.left = true;
                }
                resolved = Some(rect.x);
            }
            Axis::Y => {
                if delta > 0.0 {
                    rect.set_bottom(obstacle.top());
                    collisions.down = true;
                } else if delta < 0.0 {
                    rect.set_top(obstacle.bottom());
                    collisions.up = true;
                }
                resolved = Some(rect.y);
            }
        }
    }
    resolved
}
