//! Turn and round controller.

use tracing::{debug, info};

use super::Player;
use crate::cards::{assign_bonuses, Deck};
use crate::core::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::{Action, GameConfig, GameRng, GameStatus, PlayerId, PlayerInfo, PlayerMap, State};
use crate::effects::{draw, ActionResolver};
use crate::error::{PlayError, Result};

/// A game in progress.
///
/// Owns the deck and the roster. Callers drive it one turn at a time:
/// `play` for the current player, then `next_player`.
///
/// ## Example
///
/// ```
/// use whale::{Action, Game};
///
/// let mut game = Game::with_seed(2, 42);
/// let me = game.current_player_index();
///
/// let actions = game.current_player().available_actions(game.players());
/// if let Some(Action::PlayWater) = actions.first() {
///     game.play(Action::PlayWater, &[]).unwrap();
/// }
///
/// let next = game.next_player().map(|p| p.id());
/// assert_ne!(next, Some(me));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    deck: Deck,
    players: PlayerMap<Player>,
    round: u32,
    player_index: PlayerId,
    status: GameStatus,
    played_this_turn: bool,
}

impl Game {
    /// Start a game for `player_count` players with a random seed.
    ///
    /// # Panics
    ///
    /// If `player_count` is outside 2-4.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self::with_seed(player_count, rand::random())
    }

    /// Start a reproducible game.
    ///
    /// # Panics
    ///
    /// If `player_count` is outside 2-4.
    #[must_use]
    pub fn with_seed(player_count: usize, seed: u64) -> Self {
        Self::from_config(GameConfig::new(player_count).with_seed(seed))
    }

    /// Start a game from a full configuration.
    ///
    /// Bonuses are dealt from a shuffled pool, the deck is shuffled, then
    /// `initial_card_count` cards per player are dealt round-robin from
    /// seat 0.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        let player_count = config.player_count;
        let mut rng = GameRng::new(config.seed);

        let bonuses = assign_bonuses(player_count, &mut rng);
        let mut players = PlayerMap::new(player_count, |id| Player::new(id, bonuses[id.index()]));

        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        for i in 0..player_count * config.initial_card_count {
            let seat = PlayerId::new((i % player_count) as u8);
            draw(&mut deck, &mut players[seat], 1);
        }

        info!(players = player_count, seed = rng.seed(), "new game");
        Self::from_parts(deck, players)
    }

    /// Resume from an explicit deck and roster, with seat 0 to play in
    /// round 0.
    ///
    /// Useful for setting up positions; nothing is shuffled or dealt.
    ///
    /// # Panics
    ///
    /// If the roster has fewer than 2 or more than 4 seats.
    #[must_use]
    pub fn from_parts(deck: Deck, players: PlayerMap<Player>) -> Self {
        let player_count = players.player_count();
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
            "invalid player count {player_count}: expected {MIN_PLAYERS}-{MAX_PLAYERS}"
        );

        Self {
            deck,
            players,
            round: 0,
            player_index: PlayerId::new(0),
            status: GameStatus::InProgress,
            played_this_turn: false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The full roster. Hands are visible here; hand this only to the
    /// engine's own collaborators, observers get `state()`.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.player_index]
    }

    #[must_use]
    pub fn current_player_index(&self) -> PlayerId {
        self.player_index
    }

    /// Whether the current player has already acted this turn.
    #[must_use]
    pub fn has_played(&self) -> bool {
        self.played_this_turn
    }

    // === Turn flow ===

    /// Play `action` as the current player.
    ///
    /// A turn allows one successful play; a second one fails with
    /// `AlreadyPlayed` until `next_player`. On error nothing changes and
    /// the same player may try again.
    pub fn play(&mut self, action: Action, targets: &[PlayerId]) -> Result<()> {
        if self.is_finished() {
            return Err(PlayError::GameFinished);
        }
        if self.played_this_turn {
            return Err(PlayError::AlreadyPlayed);
        }

        ActionResolver::play(&mut self.deck, &mut self.players, self.player_index, action, targets)?;
        self.played_this_turn = true;
        Ok(())
    }

    /// End the current turn and move to the next player.
    ///
    /// If the player who just acted has reached the win threshold the game
    /// finishes and `None` is returned, now and on every later call.
    /// Players flagged by a Ghost are passed over, consuming the flag; the
    /// win check applies to them as well.
    pub fn next_player(&mut self) -> Option<&Player> {
        loop {
            if self.is_finished() {
                return None;
            }

            if self.players[self.player_index].is_winner() {
                let winner = self.player_index;
                self.status = GameStatus::Finished { winner };
                info!(%winner, round = self.round, "game finished");
                return None;
            }

            self.advance_seat();

            if self.players[self.player_index].take_skip() {
                debug!(player = %self.player_index, "turn skipped");
                continue;
            }

            return Some(&self.players[self.player_index]);
        }
    }

    fn advance_seat(&mut self) {
        self.played_this_turn = false;
        let next = self.player_index.index() + 1;
        if next == self.player_count() {
            self.player_index = PlayerId::new(0);
            self.round += 1;
        } else {
            self.player_index = PlayerId::new(next as u8);
        }
    }

    /// Public snapshot for observers.
    #[must_use]
    pub fn state(&self) -> State {
        State {
            players: PlayerMap::new(self.player_count(), |id| {
                let player = &self.players[id];
                PlayerInfo {
                    card_count: player.hand().len(),
                    water: player.water(),
                    bonus: player.bonus(),
                    bonus_used: player.bonus_used(),
                    skip_next: player.skip_next(),
                }
            }),
            round: self.round,
            player_index: self.player_index,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Bonus, Card};
    use crate::core::constants::{INITIAL_CARD_COUNT, WATER_GAIN, WIN_WATER};

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn table(water: &[u32]) -> Game {
        let players = PlayerMap::new(water.len(), |id| {
            Player::new(id, Bonus::ALL[id.index()]).with_water(water[id.index()])
        });
        Game::from_parts(Deck::new(), players)
    }

    #[test]
    fn test_deal() {
        let game = Game::with_seed(3, 7);

        for player in game.players().values() {
            assert_eq!(player.hand().len(), INITIAL_CARD_COUNT);
            assert_eq!(player.water(), 0);
        }
        assert_eq!(game.deck().len(), Deck::new().len() - 3 * INITIAL_CARD_COUNT);
        assert_eq!(game.current_player_index(), p(0));
        assert_eq!(game.round(), 0);
    }

    #[test]
    fn test_seeded_games_match() {
        let a = Game::with_seed(4, 99);
        let b = Game::with_seed(4, 99);

        assert_eq!(a.players(), b.players());
        assert_eq!(a.deck(), b.deck());
    }

    #[test]
    fn test_short_deck_deals_what_it_has() {
        let config = GameConfig::new(2).with_initial_card_count(30);
        let game = Game::from_config(config);

        let in_hands: usize = game.players().values().map(|p| p.hand().len()).sum();
        assert_eq!(in_hands, Deck::new().len());
        assert!(game.deck().is_empty());
    }

    #[test]
    fn test_round_increments_on_wrap() {
        let mut game = table(&[0, 0, 0]);

        assert_eq!(game.next_player().map(Player::id), Some(p(1)));
        assert_eq!(game.next_player().map(Player::id), Some(p(2)));
        assert_eq!(game.round(), 0);
        assert_eq!(game.next_player().map(Player::id), Some(p(0)));
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn test_skip_passes_over_player() {
        let mut game = table(&[0, 0, 0]);
        game.players[p(1)].set_skip_next();

        assert_eq!(game.next_player().map(Player::id), Some(p(2)));
        assert!(!game.players[p(1)].skip_next());

        // Flag was consumed: next lap visits seat 1 again.
        assert_eq!(game.next_player().map(Player::id), Some(p(0)));
        assert_eq!(game.next_player().map(Player::id), Some(p(1)));
    }

    #[test]
    fn test_skip_across_wrap_counts_round() {
        let mut game = table(&[0, 0]);
        game.players[p(0)].set_skip_next();

        assert_eq!(game.next_player().map(Player::id), Some(p(1)));
        assert_eq!(game.next_player().map(Player::id), Some(p(1)));
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn test_winner_ends_game() {
        let mut game = table(&[WIN_WATER, 0]);

        assert!(game.next_player().is_none());
        assert_eq!(game.status(), GameStatus::Finished { winner: p(0) });
        assert!(game.next_player().is_none());
        assert_eq!(game.play(Action::PlayBonus, &[]), Err(PlayError::GameFinished));
    }

    #[test]
    fn test_only_current_player_is_checked() {
        let mut game = table(&[0, WIN_WATER]);

        assert_eq!(game.next_player().map(Player::id), Some(p(1)));
        assert!(!game.is_finished());
        assert!(game.next_player().is_none());
        assert_eq!(game.winner(), Some(p(1)));
    }

    #[test]
    fn test_skipped_winner_still_wins() {
        let mut game = table(&[0, WIN_WATER, 0]);
        game.players[p(1)].set_skip_next();

        assert!(game.next_player().is_none());
        assert_eq!(game.winner(), Some(p(1)));
    }

    #[test]
    fn test_water_to_win() {
        let players = PlayerMap::new(2, |id| {
            let player = Player::new(id, Bonus::ALL[id.index()]);
            if id == p(0) {
                player.with_water(WIN_WATER - 1).with_cards([Card::Water])
            } else {
                player
            }
        });
        let mut game = Game::from_parts(Deck::new(), players);

        game.play(Action::PlayWater, &[]).unwrap();
        assert!(game.current_player().is_winner());
        assert!(game.next_player().is_none());
        assert!(game.state().status.is_finished());
    }

    #[test]
    fn test_one_play_per_turn() {
        let players = PlayerMap::new(2, |id| {
            Player::new(id, Bonus::ALL[id.index()]).with_cards([Card::Water, Card::Wave])
        });
        let mut game = Game::from_parts(Deck::from_cards([Card::Water; 0]), players);

        assert!(!game.has_played());
        game.play(Action::PlayWater, &[]).unwrap();
        assert!(game.has_played());
        assert_eq!(game.play(Action::PlayWave, &[]), Err(PlayError::AlreadyPlayed));
        assert_eq!(game.play(Action::PlayBonus, &[]), Err(PlayError::AlreadyPlayed));
        assert_eq!(game.players[p(0)].water(), WATER_GAIN);

        game.next_player().unwrap();
        assert!(!game.has_played());
        game.play(Action::PlayWave, &[]).unwrap();
    }

    #[test]
    fn test_failed_play_keeps_the_turn() {
        let mut game = table(&[0, 0]);

        assert!(game.play(Action::PlayWave, &[]).is_err());
        assert!(!game.has_played());
        game.play(Action::PlayBonus, &[]).unwrap();
        assert!(game.has_played());
    }

    #[test]
    fn test_state_hides_hands() {
        let game = Game::with_seed(2, 3);
        let state = game.state();

        assert_eq!(state.players.player_count(), 2);
        for (id, info) in state.players.iter() {
            let player = game.player(id).unwrap();
            assert_eq!(info.card_count, player.hand().len());
            assert_eq!(info.bonus, player.bonus());
        }
        assert_eq!(state.player_index, p(0));
        assert_eq!(state.status, GameStatus::InProgress);
    }

    #[test]
    #[should_panic(expected = "invalid player count")]
    fn test_from_parts_rejects_single_seat() {
        let players = PlayerMap::new(1, |id| Player::new(id, Bonus::Spring));
        let _ = Game::from_parts(Deck::new(), players);
    }
}
