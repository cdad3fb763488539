/// All discrete locomotion states the actor can be in. Exactly one at a time.
///
/// Standing and Falling are recomputed every frame from live collision
/// results; only Jumping carries a timer. Dead is entered exclusively
/// through the damage path and is observed by the scene loop between frames;
/// the next frame's classification folds it back into Standing/Falling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorState {
    /// At least one collision collaborator reported contact this frame.
    Standing,
    /// Ascending during the 200 ms jump window.
    Jumping,
    /// Airborne with no contact (includes walking off an edge).
    Falling,
    /// Health reached zero this frame; the soft-reset has already run.
    Dead,
}
