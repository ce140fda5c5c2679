// Game session: one player driven by keyboard input and the tick clock

use log::trace;
use winit::keyboard::{Key, NamedKey};

use crate::engine::game_loop::TickClock;
use crate::engine::input::{InputRouter, KeyEventKind, KeyboardEvent};
use crate::engine::renderer::Canvas;
use crate::game::player::{Player, PlayerConfig, PlayerError};

/// Key that toggles pause
pub const PAUSE_KEY: NamedKey = NamedKey::Escape;

/// Owns the player, its input routing and the tick clock
pub struct GameSession {
    player: Player,
    router: InputRouter,
    clock: TickClock,
    /// Key releases seen while paused, applied on resume
    pending_releases: Vec<KeyboardEvent>,
}

impl GameSession {
    pub fn new(config: PlayerConfig) -> Result<Self, PlayerError> {
        Ok(Self {
            player: Player::new(config)?,
            router: InputRouter::default(),
            clock: TickClock::new(),
            pending_releases: Vec::new(),
        })
    }

    /// Handle one keyboard event
    ///
    /// While paused, presses are dropped and releases are held back until
    /// the game resumes so the frozen world does not change.
    pub fn handle_key(&mut self, event: &KeyboardEvent) {
        if event.kind == KeyEventKind::KeyDown && event.key == Key::Named(PAUSE_KEY) {
            self.toggle_pause();
            return;
        }

        if self.clock.is_paused() {
            match event.kind {
                KeyEventKind::KeyDown => trace!("Paused, dropping {:?}", event.key),
                KeyEventKind::KeyUp => self.pending_releases.push(event.clone()),
            }
            return;
        }

        self.router.route(event, &mut self.player);
    }

    fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
        if !self.clock.is_paused() {
            for event in std::mem::take(&mut self.pending_releases) {
                self.router.route(&event, &mut self.player);
            }
        }
    }

    /// Run the ticks due this frame, returns how many ran
    pub fn begin_frame(&mut self) -> u32 {
        let ticks = self.clock.begin_frame();
        for _ in 0..ticks {
            self.player.update();
        }
        ticks
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        self.player.draw(canvas);
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::{char_key, named_key};
    use crate::game::player::AnimationKind;

    fn session() -> GameSession {
        GameSession::new(PlayerConfig::default()).unwrap()
    }

    fn press(session: &mut GameSession, key: Key) {
        session.handle_key(&KeyboardEvent::key_down(key, false));
    }

    fn release(session: &mut GameSession, key: Key) {
        session.handle_key(&KeyboardEvent::key_up(key));
    }

    #[test]
    fn test_escape_toggles_pause() {
        let mut session = session();
        press(&mut session, named_key(PAUSE_KEY));
        assert!(session.is_paused());
        press(&mut session, named_key(PAUSE_KEY));
        assert!(!session.is_paused());
    }

    #[test]
    fn test_shoot_ignored_while_paused() {
        let mut session = session();
        press(&mut session, named_key(PAUSE_KEY));

        press(&mut session, char_key("j"));
        assert!(session.player().bullets().is_empty());
        assert!(!session.player().state().is_shooting());

        press(&mut session, named_key(PAUSE_KEY));
        press(&mut session, char_key("j"));
        assert_eq!(session.player().bullets().count(), 1);
    }

    #[test]
    fn test_release_while_paused_keeps_animation() {
        let mut session = session();
        press(&mut session, char_key("d"));
        press(&mut session, char_key("j"));
        session.player.update();
        assert_eq!(
            session.player().animations().current_kind(),
            AnimationKind::Shoot
        );

        press(&mut session, named_key(PAUSE_KEY));
        release(&mut session, char_key("j"));
        release(&mut session, char_key("d"));

        // Frozen until resume
        assert!(session.player().state().is_shooting());
        assert!(session.player().state().is_walking_right());
        assert_eq!(
            session.player().animations().current_kind(),
            AnimationKind::Shoot
        );

        press(&mut session, named_key(PAUSE_KEY));
        assert!(!session.player().state().is_shooting());
        assert!(!session.player().state().is_walking());
    }

    #[test]
    fn test_keys_route_when_running() {
        let mut session = session();
        press(&mut session, char_key("a"));
        assert!(session.player().state().is_walking_left());
        release(&mut session, char_key("a"));
        assert!(!session.player().state().is_walking());
    }
}
