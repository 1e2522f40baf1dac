//! Scramble: a queue of random outer-layer turns drained on a fixed cadence.

use bevy::prelude::*;
use rand::Rng;

use crate::utils::config::CubeSettings;
use crate::utils::objects::{
    Axis, RandomGen, Screen, ScreenState, ScrambleState, TurnCommand, TurnState,
};

pub struct ScramblePlugin;

impl Plugin for ScramblePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScrambleState>()
            .add_systems(Update, (trigger_scramble, drain_scramble).chain());
    }
}

/// The six scrambleable layers. Middle layers are never drawn.
const OUTER_MOVES: [(Axis, i32); 6] = [
    (Axis::X, 1),
    (Axis::X, -1),
    (Axis::Y, 1),
    (Axis::Y, -1),
    (Axis::Z, 1),
    (Axis::Z, -1),
];

/// Draw `count` uniformly random outer-layer quarter turns.
pub fn draw_moves<R: Rng>(rng: &mut R, count: usize, duration: f32) -> Vec<TurnCommand> {
    (0..count)
        .map(|_| {
            let (axis, index) = OUTER_MOVES[rng.random_range(0..OUTER_MOVES.len())];
            TurnCommand {
                axis,
                index,
                clockwise: rng.random_bool(0.5),
                duration,
            }
        })
        .collect()
}

/// Space on the Showcase screen queues a fresh scramble. Re-triggering
/// while one is still draining is ignored.
pub fn trigger_scramble(
    keyboard: Res<ButtonInput<KeyCode>>,
    screen_state: Res<ScreenState>,
    settings: Res<CubeSettings>,
    mut random_gen: ResMut<RandomGen>,
    mut scramble: ResMut<ScrambleState>,
    time: Res<Time>,
) {
    if screen_state.screen != Screen::Showcase || !keyboard.just_pressed(KeyCode::Space) {
        return;
    }
    if scramble.is_scrambling() {
        return;
    }

    let moves = draw_moves(
        &mut random_gen.random_gen,
        settings.scramble_moves,
        settings.scramble_turn_secs,
    );
    info!("scrambling with {} moves", moves.len());
    scramble.queue = moves.into();
    scramble.next_at = time.elapsed();
}

/// Dispatches the next queued move once the cadence gap has passed and no
/// turn is animating. Moves blocked by an animation wait instead of being
/// dropped, so every drawn move lands.
pub fn drain_scramble(
    mut scramble: ResMut<ScrambleState>,
    turn_state: Res<TurnState>,
    settings: Res<CubeSettings>,
    time: Res<Time>,
    mut turns: MessageWriter<TurnCommand>,
) {
    if scramble.queue.is_empty() || turn_state.is_animating() {
        return;
    }
    if time.elapsed() < scramble.next_at {
        return;
    }

    if let Some(command) = scramble.queue.pop_front() {
        turns.write(command);
        scramble.next_at = time.elapsed() + std::time::Duration::from_secs_f32(settings.scramble_gap_secs);
        if scramble.queue.is_empty() {
            info!("scramble dispatched");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    #[test]
    fn draws_the_requested_number_of_outer_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let moves = draw_moves(&mut rng, 25, 0.15);
        assert_eq!(moves.len(), 25);
        for m in &moves {
            assert!(m.index == 1 || m.index == -1, "middle layer drawn");
            assert!((m.duration - 0.15).abs() < 1e-6);
        }
    }

    #[test]
    fn the_same_seed_draws_the_same_scramble() {
        let mut a = ChaCha8Rng::seed_from_u64(69);
        let mut b = ChaCha8Rng::seed_from_u64(69);
        let ma = draw_moves(&mut a, 25, 0.15);
        let mb = draw_moves(&mut b, 25, 0.15);
        for (x, y) in ma.iter().zip(mb.iter()) {
            assert_eq!(x.axis, y.axis);
            assert_eq!(x.index, y.index);
            assert_eq!(x.clockwise, y.clockwise);
        }
    }

    #[test]
    fn long_draws_touch_every_axis() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let moves = draw_moves(&mut rng, 200, 0.15);
        for axis in Axis::ALL {
            assert!(moves.iter().any(|m| m.axis == axis));
        }
        assert!(moves.iter().any(|m| m.clockwise));
        assert!(moves.iter().any(|m| !m.clockwise));
    }
}
