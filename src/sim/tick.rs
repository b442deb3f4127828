//! Fixed timestep simulation tick
//!
//! One call advances the run by one frame: loss check, wave trigger, input,
//! pickups, enemies, player lasers, enemy lasers. Rendering happens before
//! the tick, from the state as the previous frame left it.

use serde::{Deserialize, Serialize};

use super::collision::collides;
use super::rng::RandomSource;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Logical actions held during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Loss overlay is showing
    Lost,
    /// The run is over
    RunEnded,
}

/// Advance the game state by one frame using the run's own RNG
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let mut rng = state.rng.clone();
    let outcome = tick_with(state, input, &mut rng);
    state.rng = rng;
    outcome
}

/// Advance the game state by one frame, drawing randomness from `rng`
pub fn tick_with<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
) -> TickOutcome {
    match state.phase {
        GamePhase::Ended => return TickOutcome::RunEnded,
        GamePhase::Playing if state.out_of_resources() => {
            log::info!(
                "Run lost at level {} (lives {}, health {})",
                state.level(),
                state.lives,
                state.player.ship.health
            );
            state.phase = GamePhase::Lost;
        }
        _ => {}
    }

    if state.phase == GamePhase::Lost {
        state.lost_ticks += 1;
        if state.lost_ticks > state.lost_display_ticks {
            state.phase = GamePhase::Ended;
            return TickOutcome::RunEnded;
        }
        return TickOutcome::Lost;
    }

    state.time_ticks += 1;

    let GameState {
        atlas,
        waves,
        lives,
        player,
        enemies,
        pickups,
        stats,
        ..
    } = state;
    let atlas = &**atlas;

    waves.update(enemies, rng);

    player.steer(input, atlas);
    if input.fire {
        player.ship.shoot(atlas);
    }

    pickups.retain_mut(|pickup| {
        if !pickup.tick() {
            stats.pickups_expired += 1;
            return false;
        }
        if collides(atlas, &*pickup, &*player) {
            log::debug!("Collected {:?} pickup", pickup.kind);
            pickup.apply(player);
            stats.pickups_collected += 1;
            return false;
        }
        true
    });

    enemies.retain_mut(|enemy| {
        enemy.advance();
        if waves.wants_fire(rng) {
            enemy.ship.shoot(atlas);
        }
        if collides(atlas, &*enemy, &*player) {
            enemy.ram(player, pickups, rng);
            stats.enemies_rammed += 1;
            return false;
        }
        if enemy.escaped(atlas) {
            log::debug!("{:?} enemy escaped, {} lives left", enemy.color, *lives - 1);
            *lives -= 1;
            stats.enemies_escaped += 1;
            return false;
        }
        true
    });

    let velocity = if player.is_shielded() {
        PLAYER_LASER_VELOCITY * SHIELD_LASER_MULTIPLIER
    } else {
        PLAYER_LASER_VELOCITY
    };
    stats.enemies_destroyed += player.advance_lasers(velocity, enemies, pickups, atlas, rng);

    for enemy in enemies.iter_mut() {
        stats.player_hits_taken += enemy
            .ship
            .advance_lasers(ENEMY_LASER_VELOCITY, player, atlas);
    }

    TickOutcome::Running
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::{Enemy, EnemyColor};
    use crate::sim::laser::Laser;
    use crate::sim::pickup::{Pickup, PickupKind};
    use crate::sim::rng::ScriptedRandom;
    use crate::sim::sprites::SpriteId;
    use glam::Vec2;

    /// A far-off enemy keeps the wave director quiet
    fn parked_enemy() -> Enemy {
        Enemy::new(Vec2::new(60.0, -5000.0), EnemyColor::Red, 1)
    }

    fn quiet_rng() -> ScriptedRandom {
        ScriptedRandom::new()
    }

    #[test]
    fn test_first_tick_spawns_first_wave() {
        let mut state = GameState::new(12345);
        assert_eq!(tick(&mut state, &TickInput::default()), TickOutcome::Running);
        assert_eq!(state.level(), 1);
        assert_eq!(state.waves.wave_length, 10);
        assert_eq!(state.enemies.len(), 10);
    }

    #[test]
    fn test_cleared_wave_escalates() {
        let mut state = GameState::new(12345);
        tick(&mut state, &TickInput::default());
        state.enemies.clear();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.level(), 2);
        assert_eq!(state.enemies.len(), 15);
        assert!(state.enemies.iter().all(|e| e.level == 2));
    }

    #[test]
    fn test_escape_on_last_life_latches_loss_next_frame() {
        let mut state = GameState::new(1);
        state.lives = 1;
        // Blue moves 1.0/frame; bottom edge at 710 + 40
        state.enemies.push(Enemy::new(Vec2::new(600.0, 710.0), EnemyColor::Blue, 1));
        state.player.ship.pos = Vec2::new(100.0, 635.0);

        let mut rng = quiet_rng();
        assert_eq!(
            tick_with(&mut state, &TickInput::default(), &mut rng),
            TickOutcome::Running
        );
        assert_eq!(state.lives, 0);
        assert!(state.enemies.is_empty());
        assert!(state.pickups.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);

        assert_eq!(
            tick_with(&mut state, &TickInput::default(), &mut rng),
            TickOutcome::Lost
        );
        assert_eq!(state.phase, GamePhase::Lost);
        // No wave was spawned during the loss frame
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_loss_countdown_ends_run() {
        let mut state = GameState::new(1);
        state.player.ship.health = 0;
        let input = TickInput::default();
        for _ in 0..420 {
            assert_eq!(tick(&mut state, &input), TickOutcome::Lost);
        }
        assert_eq!(tick(&mut state, &input), TickOutcome::RunEnded);
        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(tick(&mut state, &input), TickOutcome::RunEnded);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_loss_countdown_uses_tick_rate() {
        let mut state = GameState::new(1).with_tick_rate(60);
        state.lives = 0;
        let input = TickInput::default();
        let mut lost_frames = 0;
        while tick(&mut state, &input) == TickOutcome::Lost {
            lost_frames += 1;
            assert!(lost_frames <= 180, "loss overlay outlived three seconds");
        }
        assert_eq!(lost_frames, 180);
        assert_eq!(state.phase, GamePhase::Ended);
    }

    #[test]
    fn test_lost_state_freezes_world() {
        let mut state = GameState::new(1);
        state.enemies.push(Enemy::new(Vec2::new(60.0, 100.0), EnemyColor::Red, 1));
        state.lives = 0;
        tick(&mut state, &TickInput::default());
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        assert_eq!(state.enemies[0].ship.pos.y, 100.0);
        assert!(state.player.ship.lasers.is_empty());
    }

    #[test]
    fn test_shield_pickup_collected_on_contact() {
        let mut state = GameState::new(1);
        state.enemies.push(parked_enemy());
        let pos = state.player.ship.pos + Vec2::new(30.0, 30.0);
        state.pickups.push(Pickup::new(pos, PickupKind::Shield));

        tick_with(&mut state, &TickInput::default(), &mut quiet_rng());
        assert!(state.pickups.is_empty());
        assert!(state.player.is_shielded());
        assert_eq!(state.stats.pickups_collected, 1);
    }

    #[test]
    fn test_health_pickup_at_full_health_is_still_consumed() {
        let mut state = GameState::new(1);
        state.enemies.push(parked_enemy());
        let pos = state.player.ship.pos + Vec2::new(30.0, 30.0);
        state.pickups.push(Pickup::new(pos, PickupKind::Health));

        tick_with(&mut state, &TickInput::default(), &mut quiet_rng());
        assert!(state.pickups.is_empty());
        assert_eq!(state.player.ship.health, PLAYER_MAX_HEALTH);
        assert_eq!(state.stats.pickups_collected, 1);
    }

    #[test]
    fn test_expired_pickup_grants_nothing() {
        let mut state = GameState::new(1);
        state.enemies.push(parked_enemy());
        let pos = state.player.ship.pos + Vec2::new(30.0, 30.0);
        let mut pickup = Pickup::new(pos, PickupKind::Shield);
        pickup.age = PICKUP_MAX_AGE;
        state.pickups.push(pickup);

        tick_with(&mut state, &TickInput::default(), &mut quiet_rng());
        assert!(state.pickups.is_empty());
        assert!(!state.player.is_shielded());
        assert_eq!(state.stats.pickups_expired, 1);
    }

    #[test]
    fn test_untouched_pickup_ages() {
        let mut state = GameState::new(1);
        state.enemies.push(parked_enemy());
        state.pickups.push(Pickup::new(Vec2::new(10.0, 10.0), PickupKind::Health));
        for _ in 0..PICKUP_MAX_AGE {
            tick_with(&mut state, &TickInput::default(), &mut quiet_rng());
        }
        assert_eq!(state.pickups.len(), 1);
        assert_eq!(state.pickups[0].age, PICKUP_MAX_AGE);
        tick_with(&mut state, &TickInput::default(), &mut quiet_rng());
        assert!(state.pickups.is_empty());
    }

    #[test]
    fn test_ramming_enemy_hurts_player_and_dies() {
        let mut state = GameState::new(1);
        let at = state.player.ship.pos + Vec2::new(25.0, 20.0);
        state.enemies.push(Enemy::new(at, EnemyColor::Red, 1));
        state.enemies.push(parked_enemy());

        // First unit draw forces a med pack drop
        let mut rng = ScriptedRandom::new().with_units([0.0, 0.5]);
        tick_with(&mut state, &TickInput::default(), &mut rng);
        assert_eq!(state.player.ship.health, 90);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.stats.enemies_rammed, 1);
        assert_eq!(state.pickups.len(), 1);
        assert_eq!(state.pickups[0].kind, PickupKind::Health);
    }

    #[test]
    fn test_shield_absorbs_ramming() {
        let mut state = GameState::new(1);
        state.player.shield.activate();
        let at = state.player.ship.pos + Vec2::new(25.0, 20.0);
        state.enemies.push(Enemy::new(at, EnemyColor::Red, 1));
        state.enemies.push(parked_enemy());
        tick_with(&mut state, &TickInput::default(), &mut quiet_rng());
        assert_eq!(state.player.ship.health, 100);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_enemy_laser_hits_player() {
        let mut state = GameState::new(1);
        let mut shooter = parked_enemy();
        let target = state.player.ship.pos;
        shooter
            .ship
            .lasers
            .push(Laser::new(target + Vec2::new(0.0, -20.0), SpriteId::RedLaser));
        state.enemies.push(shooter);

        tick_with(&mut state, &TickInput::default(), &mut quiet_rng());
        assert_eq!(state.player.ship.health, 90);
        assert!(state.enemies[0].ship.lasers.is_empty());
        assert_eq!(state.stats.player_hits_taken, 1);
    }

    #[test]
    fn test_player_fire_destroys_enemy_above() {
        let mut state = GameState::new(1);
        let above = state.player.ship.pos + Vec2::new(25.0, -60.0);
        state.enemies.push(Enemy::new(above, EnemyColor::Green, 1));
        state.enemies.push(parked_enemy());

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        let mut rng = quiet_rng();
        tick_with(&mut state, &fire, &mut rng);
        for _ in 0..5 {
            tick_with(&mut state, &TickInput::default(), &mut rng);
        }
        assert_eq!(state.stats.enemies_destroyed, 1);
        assert_eq!(state.enemies.len(), 1);
        assert!(state.player.ship.lasers.is_empty());
    }

    #[test]
    fn test_movement_input() {
        let mut state = GameState::new(1);
        state.enemies.push(parked_enemy());
        let start = state.player.ship.pos;
        let input = TickInput {
            left: true,
            up: true,
            ..Default::default()
        };
        tick_with(&mut state, &input, &mut quiet_rng());
        assert_eq!(state.player.ship.pos, start - Vec2::splat(PLAYER_SPEED));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                left: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for frame in 0..600 {
            let input = &inputs[frame % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        for (a, b) in state1.enemies.iter().zip(&state2.enemies) {
            assert_eq!(a.ship.pos, b.ship.pos);
            assert_eq!(a.ship.lasers, b.ship.lasers);
        }
        assert_eq!(state1.summary(), state2.summary());
    }
}
