mod animation;
mod focus;
mod hazard;
mod state;

pub use animation::Stopwatch;
pub use hazard::{HazardOverlay, OverlayFrame};
pub use state::ActorState;

use glam::{Mat4, Vec3};
use hecs::{Entity, World};

use crate::components::{Platform, Scenery};
use crate::engine::time::Millis;
use crate::scene::collision;
use focus::FocusSlot;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// The jump arc adds lift every frame for this long, then hands over to falling.
const JUMP_DURATION_MS: Millis = 200;
const JUMP_LIFT_STEP: f32 = 0.5;

/// The 180° turn spins in fixed steps for this long, then snaps exact.
const TURN_DURATION_MS: Millis = 100;
const TURN_STEP_DEGREES: f32 = 30.0;
const TURN_HALF_DEGREES: f32 = 180.0;

const MAX_HEALTH: i32 = 100;
/// Damage taken each time the actor drops below the death floor.
const FLOOR_DAMAGE: i32 = 10;
/// Guaranteed lethal; applied when the hazard countdown runs out.
const HAZARD_LETHAL_DAMAGE: i32 = 999;
/// Below this Y the actor has fallen out of the world.
const Y_DEATH: f32 = -10.0;

const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Vertical camera offset so the view sits at eye level, off the actor's center.
const EYE_DROP: f32 = 0.3;

// ---------------------------------------------------------------------------
// Draw submissions
// ---------------------------------------------------------------------------

/// Draw work emitted by the actor during its update, consumed opaquely by the
/// renderer after the frame's state is settled.
#[derive(Default)]
pub struct DrawQueue {
    overlays: Vec<OverlayFrame>,
}

impl DrawQueue {
    pub fn clear(&mut self) {
        self.overlays.clear();
    }

    pub fn submit_overlay(&mut self, frame: OverlayFrame) {
        self.overlays.push(frame);
    }

    pub fn overlays(&self) -> &[OverlayFrame] {
        &self.overlays
    }
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// The controllable actor: movement state machine, timed animations, health,
/// interaction focus, and the gumball hazard, advanced once per frame by
/// [`Actor::update_frame`].
pub struct Actor {
    pub position: Vec3,
    /// Accumulated during the jump window, integrated into position every
    /// frame. Gravity and decay are the scene loop's concern, not ours.
    pub velocity: Vec3,
    /// Yaw in degrees on Y. X/Z channels are carried but never written here.
    pub rotation: Vec3,
    radius: f32,
    state: ActorState,
    health: i32,
    is_turning: bool,
    jump_clock: Stopwatch,
    turn_clock: Stopwatch,
    /// Yaw captured when a turn starts, so the spin always lands exactly
    /// opposite regardless of how many step frames ran.
    initial_turn_degree: f32,
    picked_up_coin: bool,
    ship_destroyed: bool,
    focus: FocusSlot,
    coin: Option<Entity>,
    /// Entities conjured against the actor, polled for collision only. The
    /// soft-reset swaps in a fresh roster and abandons these ids to whoever
    /// owns the scene.
    wizard_spawned: Vec<Entity>,
    pub hazard: HazardOverlay,
}

impl Actor {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            rotation: Vec3::ZERO,
            radius,
            state: ActorState::Standing,
            health: MAX_HEALTH,
            is_turning: false,
            jump_clock: Stopwatch::Inactive,
            turn_clock: Stopwatch::Inactive,
            initial_turn_degree: 0.0,
            picked_up_coin: false,
            ship_destroyed: false,
            focus: FocusSlot::default(),
            coin: None,
            wizard_spawned: Vec::new(),
            hazard: HazardOverlay::new(),
        }
    }

    // -- health & damage ----------------------------------------------------

    /// Apply damage. Dropping to zero or below performs the full soft-reset:
    /// back to spawn, Dead for the rest of this frame, health restored, every
    /// animation cancelled, focus and coin released, spawn roster replaced.
    /// The coin-pickup flag survives: it marks progress, not body state.
    pub fn pain(&mut self, hurt: i32) {
        self.health -= hurt;
        if self.health <= 0 {
            self.reset_pos();
            self.state = ActorState::Dead;
            self.health = MAX_HEALTH;
            self.jump_clock.clear();
            self.turn_clock.clear();
            self.is_turning = false;
            self.ship_destroyed = false;
            self.focus.clear();
            self.wizard_spawned = Vec::new();
            self.coin = None;
            self.hazard.reset();
        }
    }

    fn reset_pos(&mut self) {
        self.position = SPAWN_POSITION;
        self.rotation = Vec3::ZERO;
    }

    pub fn is_dead(&self) -> bool {
        self.state == ActorState::Dead
    }

    #[allow(dead_code)]
    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn state(&self) -> ActorState {
        self.state
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    // -- timed animations ---------------------------------------------------

    /// Start the jump arc. Ignored while already airborne, so holding the key
    /// cannot double-jump or restart the arc mid-flight.
    pub fn request_jump(&mut self, now_ms: Millis) {
        if self.state != ActorState::Jumping && self.state != ActorState::Falling {
            self.state = ActorState::Jumping;
            self.jump_clock.start(now_ms);
        }
    }

    /// Start the 180° turn. Ignored while one is already running.
    pub fn turn_around(&mut self, now_ms: Millis) {
        if !self.is_turning {
            self.is_turning = true;
            self.turn_clock.start(now_ms);
            self.initial_turn_degree = self.rotation.y;
        }
    }

    #[allow(dead_code)]
    pub fn is_turning(&self) -> bool {
        self.is_turning
    }

    #[allow(dead_code)]
    pub fn jump_clock(&self) -> Stopwatch {
        self.jump_clock
    }

    #[allow(dead_code)]
    pub fn turn_clock(&self) -> Stopwatch {
        self.turn_clock
    }

    /// Jump evaluation: lift accumulates every frame inside the window
    /// (an accelerating rise, not a single impulse), then Jumping → Falling.
    fn check_jump(&mut self, now_ms: Millis) {
        if self.state != ActorState::Jumping {
            return;
        }
        match self.jump_clock.elapsed_ms(now_ms) {
            Some(elapsed) if elapsed < JUMP_DURATION_MS => self.velocity.y += JUMP_LIFT_STEP,
            _ => self.state = ActorState::Falling,
        }
    }

    /// Turn evaluation: coarse 30° steps inside the window, then the yaw is
    /// set to exactly the captured heading plus 180°.
    fn check_turn(&mut self, now_ms: Millis) {
        if !self.is_turning {
            return;
        }
        match self.turn_clock.elapsed_ms(now_ms) {
            Some(elapsed) if elapsed < TURN_DURATION_MS => self.rotation.y += TURN_STEP_DEGREES,
            _ => {
                self.is_turning = false;
                self.rotation.y = self.initial_turn_degree + TURN_HALF_DEGREES;
            }
        }
    }

    // -- interaction & scenario flags ---------------------------------------

    /// Forwarded to the ownership-guarded focus slot; see [`FocusSlot::request`].
    pub fn set_focus(&mut self, src: Entity, candidate: Option<Entity>) {
        self.focus.request(src, candidate);
    }

    pub fn focus(&self) -> Option<Entity> {
        self.focus.current()
    }

    /// Unguarded, unlike general focus: the tracked coin is simply replaced.
    pub fn bind_coin(&mut self, coin: Option<Entity>) {
        self.coin = coin;
    }

    #[allow(dead_code)]
    pub fn coin(&self) -> Option<Entity> {
        self.coin
    }

    pub fn add_wizard_spawned(&mut self, entity: Entity) {
        self.wizard_spawned.push(entity);
    }

    #[allow(dead_code)]
    pub fn wizard_spawned(&self) -> &[Entity] {
        &self.wizard_spawned
    }

    /// One-way: survives the soft-reset, cleared only by reconstruction.
    pub fn pick_up_coin(&mut self) {
        self.picked_up_coin = true;
    }

    pub fn has_picked_up_coin(&self) -> bool {
        self.picked_up_coin
    }

    #[allow(dead_code)]
    pub fn set_ship_destroyed(&mut self) {
        self.ship_destroyed = true;
    }

    pub fn ship_destroyed(&self) -> bool {
        self.ship_destroyed
    }

    // -- frame orchestrator -------------------------------------------------

    /// Advance the whole controller by one frame and rewrite `matrix` from
    /// the incoming transform into the outgoing camera transform.
    ///
    /// The order is load-bearing: ground classification runs after the jump
    /// evaluation so a still-jumping actor is never downgraded to Falling by
    /// the same frame's collision poll, and before the death-floor check so a
    /// lethal fall is caught the frame it happens.
    pub fn update_frame(
        &mut self,
        now_ms: Millis,
        world: &World,
        matrix: &mut Mat4,
        draws: &mut DrawQueue,
    ) {
        if self.hazard.is_visible() {
            draws.submit_overlay(self.hazard.frame());
        }

        let incoming = *matrix;

        self.check_jump(now_ms);
        self.check_turn(now_ms);

        // Standing/Falling carry no timer; they are recomputed every frame
        // from live collision results. Jumping alone is exempt.
        if self.state != ActorState::Jumping {
            let contact = collision::check_marked::<Scenery>(world, self.position, self.radius)
                || collision::check_marked::<Platform>(world, self.position, self.radius)
                || collision::check_entities(world, &self.wizard_spawned, self.position, self.radius)
                || self
                    .coin
                    .is_some_and(|coin| collision::check_entity(world, coin, self.position, self.radius));
            self.state = if contact {
                ActorState::Standing
            } else {
                ActorState::Falling
            };
        }

        self.position += self.velocity;

        if self.position.y < Y_DEATH {
            self.pain(FLOOR_DAMAGE);
            self.reset_pos();
        }

        // Camera transform: the scene moves opposite the actor, with the view
        // dropped slightly below the actor's center to sit at eye level.
        *matrix = incoming
            * Mat4::from_rotation_y(self.rotation.y.to_radians())
            * Mat4::from_translation(-(self.position + Vec3::new(0.0, EYE_DROP, 0.0)));

        if self.hazard.tick(now_ms) {
            self.pain(HAZARD_LETHAL_DAMAGE);
        }
    }
}
