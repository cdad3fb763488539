mod actor;
mod components;
mod engine;
mod renderer;
mod scene;

use anyhow::{anyhow, Result};
use clap::Parser;
use glam::{Mat4, Vec3};
use hecs::World;
use sdl2::keyboard::Scancode;

use actor::{Actor, ActorState, DrawQueue};
use components::{Collider, Color, LocalTransform};
use engine::input::InputState;
use engine::time::GameClock;
use engine::window::GameWindow;
use renderer::Renderer;
use scene::{interact, load_demo_scene};

// Per-frame locomotion applied outside the actor core: walking input, and
// the gravity/damping the controller deliberately leaves to the scene loop.
const WALK_STEP: f32 = 0.06;
const GRAVITY_STEP: f32 = 0.05;

const ACTOR_RADIUS: f32 = 0.5;
const FOV_DEGREES: f32 = 60.0;

#[derive(Parser)]
#[command(name = "spire", about = "Spire")]
struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,
    /// Window height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let window = GameWindow::new(&sdl, "Spire", args.width, args.height)?;
    let mut renderer = Renderer::init()?;

    let mut world = World::new();
    let mut player = Actor::new(Vec3::new(0.0, 1.0, 0.0), ACTOR_RADIUS);
    let (meshes, cube) = load_demo_scene(&mut world, &mut player);
    log::info!("scene loaded; actor at {:?}", player.position);

    let mut event_pump = sdl.event_pump().map_err(|e| anyhow!(e))?;
    let mut input = InputState::new();
    let clock = GameClock::new();
    let mut draws = DrawQueue::default();

    loop {
        input.update(&mut event_pump);
        if input.quit {
            break;
        }

        let now = clock.now_ms();
        let yaw = player.rotation.y.to_radians();
        let forward = Vec3::new(yaw.sin(), 0.0, -yaw.cos());
        let right = Vec3::new(yaw.cos(), 0.0, yaw.sin());

        if input.was_pressed(Scancode::Space) {
            player.request_jump(now);
        }
        if input.was_pressed(Scancode::X) {
            player.turn_around(now);
        }
        if input.was_pressed(Scancode::E) {
            interact::activate_focus(&mut world, &mut player, now);
        }
        if input.was_pressed(Scancode::B) {
            // Stand-in for the wizard: conjure a block in front of the actor
            // and register it with the actor's collision roster.
            let conjured = world.spawn((
                LocalTransform::new(player.position + forward * 2.5),
                cube,
                Color(Vec3::new(0.4, 0.2, 0.6)),
                Collider::Aabb {
                    half_extents: Vec3::splat(0.5),
                },
            ));
            player.add_wizard_spawned(conjured);
            log::info!("a block flickers into being");
        }

        // Walking is plain per-frame translation, outside the state machine.
        if input.is_key_held(Scancode::W) {
            player.position += forward * WALK_STEP;
        }
        if input.is_key_held(Scancode::S) {
            player.position -= forward * WALK_STEP;
        }
        if input.is_key_held(Scancode::A) {
            player.position -= right * WALK_STEP;
        }
        if input.is_key_held(Scancode::D) {
            player.position += right * WALK_STEP;
        }

        // The external half of the jump arc: pull while airborne, settle on
        // contact. The actor only ever adds lift.
        match player.state() {
            ActorState::Falling => player.velocity.y -= GRAVITY_STEP,
            ActorState::Standing => player.velocity = Vec3::ZERO,
            _ => {}
        }

        interact::focus_system(&world, &mut player);

        let mut view = Mat4::IDENTITY;
        draws.clear();
        player.update_frame(now, &world, &mut view, &mut draws);
        if player.is_dead() {
            log::info!("the actor died and was returned to the spawn point");
        }

        let proj = Mat4::perspective_rh_gl(
            FOV_DEGREES.to_radians(),
            window.aspect_ratio(),
            0.1,
            200.0,
        );
        renderer.draw_scene(&world, &meshes, &view, &proj);
        renderer.draw_overlays(&draws, &proj);
        window.swap();
    }

    Ok(())
}
