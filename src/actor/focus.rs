use hecs::Entity;

/// Single-slot "currently focused interactable" with ownership-guarded
/// mutation. Holds an entity id rather than any reference; identity is
/// compared, never dereferenced.
#[derive(Debug, Default)]
pub struct FocusSlot(Option<Entity>);

impl FocusSlot {
    /// Every interactable polls the actor each frame and calls this with
    /// itself as `src`: `Some(self)` while colliding, `None` once clear.
    /// The slot changes only if it is empty or `src` is the current holder,
    /// so a second, simultaneously-colliding object cannot steal focus.
    /// Stacked interactable collisions are not resolved beyond
    /// first-collider-wins; that is a known limitation, not a bug.
    pub fn request(&mut self, src: Entity, candidate: Option<Entity>) {
        if self.0.is_none() || self.0 == Some(src) {
            self.0 = candidate;
        }
    }

    pub fn current(&self) -> Option<Entity> {
        self.0
    }

    /// Unconditional clear, used only by the actor's soft-reset.
    pub fn clear(&mut self) {
        self.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;

    fn two_entities() -> (Entity, Entity) {
        let mut world = World::new();
        (world.spawn(()), world.spawn(()))
    }

    #[test]
    fn lone_collider_takes_the_slot() {
        let (a, _) = two_entities();
        let mut slot = FocusSlot::default();
        slot.request(a, Some(a));
        assert_eq!(slot.current(), Some(a));
    }

    #[test]
    fn second_collider_cannot_steal_focus() {
        let (a, b) = two_entities();
        let mut slot = FocusSlot::default();
        slot.request(a, Some(a));
        slot.request(b, Some(b));
        assert_eq!(slot.current(), Some(a));
    }

    #[test]
    fn only_the_holder_may_release() {
        let (a, b) = two_entities();
        let mut slot = FocusSlot::default();
        slot.request(a, Some(a));
        // b reporting no collision must not clear a's focus.
        slot.request(b, None);
        assert_eq!(slot.current(), Some(a));
        // a reporting no collision releases the slot.
        slot.request(a, None);
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn slot_is_free_again_after_release() {
        let (a, b) = two_entities();
        let mut slot = FocusSlot::default();
        slot.request(a, Some(a));
        slot.request(a, None);
        slot.request(b, Some(b));
        assert_eq!(slot.current(), Some(b));
    }

    #[test]
    fn clear_drops_any_holder() {
        let (a, _) = two_entities();
        let mut slot = FocusSlot::default();
        slot.request(a, Some(a));
        slot.clear();
        assert_eq!(slot.current(), None);
    }
}
