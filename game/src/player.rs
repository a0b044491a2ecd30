// game/src/player.rs
use glam::{IVec2, Vec2};
use engine_core::tiles::{tile_rules::TileRules, tilemap::TileMap};
use crate::{constants::*, entity::PhysicsEntity};

/// The player body plus jump, wall slide and dash state.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: PhysicsEntity,
    /// Ticks since the player last stood on the ground.
    pub air_time: u32,
    pub jumps: u32,
    pub wall_slide: bool,
    /// Dash countdown, signed by direction. Zero when not dashing.
    pub dashing: i32,
}

impl Player {
    pub fn new(pos: Vec2, size: IVec2) -> Self {
        Self {
            body: PhysicsEntity::new("player", pos, size),
            air_time: 0,
            jumps: MAX_JUMPS,
            wall_slide: false,
            dashing: 0,
        }
    }

    pub fn update(&mut self, tilemap: &TileMap, rules: &TileRules, movement: Vec2) {
        self.body.update(tilemap, rules, movement);

        self.air_time += 1;
        if self.body.collisions.down {
            self.air_time = 0;
            self.jumps = MAX_JUMPS;
        }

        let collisions = self.body.collisions;
        self.wall_slide = (collisions.left || collisions.right)
            && self.air_time > WALL_SLIDE_MIN_AIR_TIME;
        if self.wall_slide {
            self.body.velocity.y = self.body.velocity.y.min(WALL_SLIDE_MAX_FALL);
            // Face the wall being slid down.
            self.body.flip = !collisions.right;
        }

        self.update_dash();
        self.apply_friction();
    }

    fn update_dash(&mut self) {
        if self.dashing > 0 {
            self.dashing -= 1;
        } else if self.dashing < 0 {
            self.dashing += 1;
        }

        if self.is_dashing() {
            let direction = self.dashing.signum() as f32;
            self.body.velocity.x = direction * DASH_SPEED;
            if self.dashing.abs() == DASH_ACTIVE_TICKS + 1 {
                self.body.velocity.x *= DASH_END_DAMPING;
            }
        }
    }

    fn apply_friction(&mut self) {
        let vx = self.body.velocity.x;
        self.body.velocity.x = if vx > 0.0 {
            (vx - HORIZONTAL_FRICTION).max(0.0)
        } else {
            (vx + HORIZONTAL_FRICTION).min(0.0)
        };
    }

    /// Jump off a wall or the ground. Returns false if no jump was possible.
    pub fn jump(&mut self) -> bool {
        if self.wall_slide {
            // Only when still pushing into the wall.
            let push = self.body.last_movement.x;
            let away = if self.body.flip && push < 0.0 {
                WALL_JUMP_PUSH
            } else if !self.body.flip && push > 0.0 {
                -WALL_JUMP_PUSH
            } else {
                return false;
            };

            self.body.velocity = Vec2::new(away, WALL_JUMP_VELOCITY);
            self.air_time = JUMP_AIR_TIME;
            self.jumps = self.jumps.saturating_sub(1);
            return true;
        }

        if self.jumps > 0 {
            self.body.velocity.y = JUMP_VELOCITY;
            self.jumps -= 1;
            self.air_time = JUMP_AIR_TIME;
            return true;
        }
        false
    }

    /// Start a dash in the facing direction. Returns false if already dashing.
    pub fn dash(&mut self) -> bool {
        if self.dashing != 0 {
            return false;
        }
        self.dashing = if self.body.flip { -DASH_TICKS } else { DASH_TICKS };
        true
    }

    pub fn is_dashing(&self) -> bool {
        self.dashing.abs() > DASH_ACTIVE_TICKS
    }
}
