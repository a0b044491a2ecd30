// game/src/constants.rs

/// Added to vertical velocity every tick.
pub const GRAVITY: f32 = 0.1;
/// Cap on downward velocity.
pub const TERMINAL_VELOCITY: f32 = 5.0;

/// Vertical velocity of a grounded jump.
pub const JUMP_VELOCITY: f32 = -3.0;
/// Horizontal push away from the wall on a wall jump.
pub const WALL_JUMP_PUSH: f32 = 3.5;
/// Vertical velocity of a wall jump.
pub const WALL_JUMP_VELOCITY: f32 = -2.5;
/// Air time set by any jump, so the player counts as airborne straight away.
pub const JUMP_AIR_TIME: u32 = 5;
/// Jumps restored on landing.
pub const MAX_JUMPS: u32 = 1;

/// Airborne ticks before touching a wall starts a slide.
pub const WALL_SLIDE_MIN_AIR_TIME: u32 = 4;
/// Fall speed cap while sliding down a wall.
pub const WALL_SLIDE_MAX_FALL: f32 = 0.5;

/// Length of a dash in ticks.
pub const DASH_TICKS: i32 = 60;
/// The dash moves the player while `|dashing|` is above this.
pub const DASH_ACTIVE_TICKS: i32 = 50;
pub const DASH_SPEED: f32 = 8.0;
/// Speed multiplier on the last moving tick of a dash.
pub const DASH_END_DAMPING: f32 = 0.1;

/// Horizontal velocity lost per tick.
pub const HORIZONTAL_FRICTION: f32 = 0.1;

/// Spawner tiles extracted from a map on load.
pub const PLAYER_SPAWNER: (&str, usize) = ("spawners", 0);
pub const ENEMY_SPAWNER: (&str, usize) = ("spawners", 1);

/// Tree tiles that shed leaves.
pub const LEAF_TREE: (&str, usize) = ("large_decor", 2);
