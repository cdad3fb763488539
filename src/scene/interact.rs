use hecs::{Entity, World};

use super::collision;
use crate::actor::Actor;
use crate::components::{Collider, Hidden, InteractKind, Interactable};
use crate::engine::time::Millis;

/// Per-frame focus polling, run on behalf of every interactable: each one
/// reports itself to the actor with `Some(self)` while overlapping and `None`
/// once clear. The actor's focus slot applies the ownership guard.
pub fn focus_system(world: &World, actor: &mut Actor) {
    let interactables: Vec<Entity> = world
        .query::<&Interactable>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for entity in interactables {
        let colliding = collision::check_entity(world, entity, actor.position, actor.radius());
        actor.set_focus(entity, colliding.then_some(entity));
    }
}

/// Activate whatever the actor currently focuses. No-op without focus, or if
/// the focused entity has meanwhile lost its interactable component.
pub fn activate_focus(world: &mut World, actor: &mut Actor, now_ms: Millis) {
    let Some(target) = actor.focus() else {
        return;
    };
    let Some(kind) = world.get::<&Interactable>(target).ok().map(|i| i.kind) else {
        return;
    };

    match kind {
        InteractKind::Coin => {
            actor.pick_up_coin();
            actor.bind_coin(None);
            // Stops colliding, so its own focus poll releases the slot next
            // frame; stays spawned so the scene owner can reap it.
            let _ = world.remove_one::<Collider>(target);
            let _ = world.insert_one(target, Hidden);
            log::info!("coin picked up");
        }
        InteractKind::GumballMachine => {
            actor.hazard.show(now_ms);
            log::info!("the gumball machine whirs to life");
        }
        InteractKind::Ship => {
            if actor.ship_destroyed() {
                log::info!("the ship lies in ruins");
            } else if actor.has_picked_up_coin() {
                log::info!("fare paid, the ship lifts off");
            } else {
                log::info!("the ship's fare slot wants a coin");
            }
        }
    }
}
