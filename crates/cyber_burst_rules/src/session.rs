//! The authoritative word-chain state machine.
//!
//! A [`Session`] owns every piece of game state. Each operation either
//! applies a change and bumps the revision, or leaves the session untouched
//! and reports why. Callers are expected to serialize access; the session
//! itself holds no locks.

use crate::outcome::{Elimination, Event, Rejection, SessionFault, Transition};
use crate::player::{Player, PlayerId};
use crate::ruleset::{Ruleset, judge};
use crate::snapshot::Snapshot;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Tunable limits for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct SessionSettings {
    /// Seats at the table.
    max_players: usize,
    /// Starting time bank per player, in seconds.
    time_bank_secs: u32,
    /// Highest safe score. Anything above it busts.
    bust_limit: u32,
}

impl SessionSettings {
    /// Score at which a player busts.
    pub fn burst_threshold(&self) -> u32 {
        self.bust_limit.saturating_add(1)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_players: 2,
            time_bank_secs: 180,
            bust_limit: 21,
        }
    }
}

/// Coarse lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Fewer than two players seated.
    Lobby,
    /// Two or more players seated and the game is running.
    Active,
    /// Terminal. No operation leaves this phase.
    Over,
}

/// One game of CyberBurst.
#[derive(Debug)]
pub struct Session {
    ruleset: Arc<dyn Ruleset>,
    settings: SessionSettings,
    players: HashMap<PlayerId, Player>,
    player_order: Vec<PlayerId>,
    current_turn: Option<PlayerId>,
    previous_word: String,
    target_char: char,
    game_over: bool,
    aborted: bool,
    message: String,
    revision: u64,
}

impl Session {
    /// Creates an empty session in the lobby.
    ///
    /// # Errors
    ///
    /// Returns [`SessionFault`] if the ruleset's initial word yields no
    /// target character.
    #[instrument(skip(ruleset), fields(ruleset = ruleset.name()))]
    pub fn new(ruleset: Arc<dyn Ruleset>, settings: SessionSettings) -> Result<Self, SessionFault> {
        let previous_word = ruleset.initial_word().to_string();
        let target_char = ruleset.extract_target_char(&previous_word).ok_or_else(|| {
            SessionFault::new(format!(
                "initial word {previous_word:?} of ruleset {} has no target character",
                ruleset.name()
            ))
        })?;

        info!(%previous_word, %target_char, "Creating new session");
        Ok(Self {
            ruleset,
            settings,
            players: HashMap::new(),
            player_order: Vec::new(),
            current_turn: None,
            previous_word,
            target_char,
            game_over: false,
            aborted: false,
            message: "Waiting for players...".to_string(),
            revision: 0,
        })
    }

    /// Seats a player.
    ///
    /// Rejoining with a known ID or joining a full table changes nothing.
    /// The first player to join holds the first turn.
    #[instrument(skip(self), fields(revision = self.revision))]
    pub fn join(&mut self, player_id: &str, player_name: &str) -> Result<Transition, SessionFault> {
        if self.players.contains_key(player_id) {
            return Ok(Transition::Ignored(Rejection::AlreadyJoined(player_id.to_string())));
        }
        if self.game_over {
            return Ok(Transition::Ignored(Rejection::GameOver));
        }
        if self.players.len() >= self.settings.max_players {
            return Ok(Transition::Ignored(Rejection::LobbyFull(self.players.len())));
        }

        let player = Player::new(
            player_id.to_string(),
            player_name.to_string(),
            self.settings.time_bank_secs,
        );
        info!(name = %player.name(), seat = self.player_order.len(), "Seating player");
        self.players.insert(player_id.to_string(), player);
        self.player_order.push(player_id.to_string());

        let started = self.players.len() == 2;
        if self.players.len() == 1 {
            self.current_turn = Some(player_id.to_string());
            self.message = "Waiting for opponent...".to_string();
        } else if started {
            let first = self.current_player()?;
            self.message = format!("Game Start! {}'s turn.", first.name());
        } else {
            let joined = self.player(player_id)?;
            self.message = format!("{} joined.", joined.name());
        }

        self.touch();
        Ok(Transition::Applied(Event::Joined {
            player_id: player_id.to_string(),
            started,
        }))
    }

    /// Plays a word for `player_id`.
    ///
    /// Out-of-turn, empty or non-chaining words are ignored. A word ending
    /// on a forbidden terminal loses before it is scored; otherwise the word
    /// scores its length, may bust the player, and passes the turn.
    #[instrument(skip(self, word), fields(revision = self.revision))]
    pub fn submit_word(&mut self, player_id: &str, word: &str) -> Result<Transition, SessionFault> {
        if self.game_over {
            return Ok(Transition::Ignored(Rejection::GameOver));
        }
        if self.current_turn.as_deref() != Some(player_id) {
            return Ok(Transition::Ignored(Rejection::NotYourTurn(player_id.to_string())));
        }

        let judgement = judge(self.ruleset.as_ref(), self.target_char, word);
        if judgement.is_empty() {
            return Ok(Transition::Ignored(Rejection::EmptyWord));
        }
        if !*judgement.chains() {
            return Ok(Transition::Ignored(Rejection::BrokenChain {
                word: judgement.word().clone(),
                expected: self.target_char,
            }));
        }
        let Some(next_target) = *judgement.next_target() else {
            return Ok(Transition::Ignored(Rejection::NoTargetChar(judgement.word().clone())));
        };

        let threshold = self.settings.burst_threshold();
        let bust_limit = self.settings.bust_limit;
        let player = self.player_mut(player_id)?;

        if *judgement.forbidden_terminal() {
            player.eliminate();
            let name = player.name().clone();
            warn!(word = %judgement.word(), "Word ends on a forbidden terminal");
            return Ok(self.finish(
                player_id,
                Elimination::TerminalChar,
                format!("GAME OVER! {name} ended with '{next_target}'!"),
            ));
        }

        let points = *judgement.points();
        player.add_score(points);
        let score = *player.score();
        let busted = score >= threshold;
        if busted {
            player.eliminate();
        }
        let name = player.name().clone();
        self.previous_word = judgement.word().clone();
        self.target_char = next_target;
        info!(word = %self.previous_word, points, score, %next_target, "Word accepted");

        if busted {
            return Ok(self.finish(
                player_id,
                Elimination::Burst,
                format!("BURST! {name} exceeded {bust_limit}!"),
            ));
        }

        self.advance_turn()?;
        let next = self.current_player()?;
        self.message = format!("{}'s turn.", next.name());
        self.touch();

        Ok(Transition::Applied(Event::WordAccepted {
            player_id: player_id.to_string(),
            points,
            target_char: next_target,
        }))
    }

    /// Runs the current player's clock down by one second.
    ///
    /// Does nothing in the lobby or once the game is over. A player whose
    /// clock reaches zero loses.
    #[instrument(skip(self), fields(revision = self.revision))]
    pub fn tick(&mut self) -> Result<Transition, SessionFault> {
        if self.game_over {
            return Ok(Transition::Ignored(Rejection::GameOver));
        }
        if self.players.len() < 2 {
            return Ok(Transition::Ignored(Rejection::WaitingForPlayers));
        }

        let player_id = self
            .current_turn
            .clone()
            .ok_or_else(|| SessionFault::new("active session has no current turn"))?;
        let player = self.player_mut(&player_id)?;
        player.decrease_time();
        let time_remaining = *player.time_remaining();

        if time_remaining == 0 {
            player.eliminate();
            let name = player.name().clone();
            return Ok(self.finish(
                &player_id,
                Elimination::Timeout,
                format!("TIME UP! {name} lost!"),
            ));
        }

        self.touch();
        Ok(Transition::Applied(Event::Ticked {
            player_id,
            time_remaining,
        }))
    }

    /// Ends the session after an internal fault.
    ///
    /// Calling this more than once has no further effect.
    #[instrument(skip(self))]
    pub fn abort(&mut self, fault: &SessionFault) {
        if self.aborted {
            return;
        }
        self.aborted = true;
        self.game_over = true;
        self.message = format!("Session aborted: {}", fault.message);
        self.touch();
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.revision,
            self.ordered_players().cloned().collect(),
            self.current_turn.clone(),
            self.previous_word.clone(),
            self.target_char,
            self.message.clone(),
            self.game_over,
        )
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::Over
        } else if self.players.len() < 2 {
            Phase::Lobby
        } else {
            Phase::Active
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Returns true if the session ended because of an internal fault.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// The ruleset in force.
    pub fn ruleset(&self) -> &dyn Ruleset {
        self.ruleset.as_ref()
    }

    /// The limits in force.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Players in join order.
    pub fn ordered_players(&self) -> impl Iterator<Item = &Player> {
        self.player_order.iter().filter_map(|id| self.players.get(id))
    }

    fn player(&self, player_id: &str) -> Result<&Player, SessionFault> {
        self.players
            .get(player_id)
            .ok_or_else(|| SessionFault::new(format!("player {player_id} is not seated")))
    }

    fn player_mut(&mut self, player_id: &str) -> Result<&mut Player, SessionFault> {
        self.players
            .get_mut(player_id)
            .ok_or_else(|| SessionFault::new(format!("player {player_id} is not seated")))
    }

    fn current_player(&self) -> Result<&Player, SessionFault> {
        let id = self
            .current_turn
            .as_deref()
            .ok_or_else(|| SessionFault::new("no current turn"))?;
        self.player(id)
    }

    /// Passes the turn to the next player in join order, wrapping around.
    fn advance_turn(&mut self) -> Result<(), SessionFault> {
        let current = self
            .current_turn
            .as_deref()
            .ok_or_else(|| SessionFault::new("no current turn to advance"))?;
        let index = self
            .player_order
            .iter()
            .position(|id| id == current)
            .ok_or_else(|| SessionFault::new(format!("{current} missing from turn order")))?;
        let next = (index + 1) % self.player_order.len();
        debug!(from = index, to = next, "Advancing turn");
        self.current_turn = Some(self.player_order[next].clone());
        Ok(())
    }

    /// Moves to the terminal phase with `loser` eliminated.
    fn finish(&mut self, loser: &str, reason: Elimination, message: String) -> Transition {
        info!(loser, %reason, "Game over");
        self.game_over = true;
        self.message = message;
        self.touch();
        Transition::Applied(Event::Eliminated {
            player_id: loser.to_string(),
            reason,
        })
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RulesetKind;

    fn latin_session() -> Session {
        Session::new(RulesetKind::Latin.build(), SessionSettings::default()).unwrap()
    }

    fn started(kind: RulesetKind) -> Session {
        let mut session = Session::new(kind.build(), SessionSettings::default()).unwrap();
        session.join("p1", "Alice").unwrap();
        session.join("p2", "Bob").unwrap();
        session
    }

    fn play(session: &mut Session, player_id: &str, word: &str) -> Transition {
        session.submit_word(player_id, word).unwrap()
    }

    #[test]
    fn test_new_session_starts_in_lobby() {
        let session = latin_session();
        let snapshot = session.snapshot();
        assert_eq!(session.phase(), Phase::Lobby);
        assert_eq!(snapshot.previous_word(), "START");
        assert_eq!(*snapshot.target_char(), 't');
        assert_eq!(*snapshot.revision(), 0);
        assert!(snapshot.current_turn_player_id().is_none());
    }

    #[test]
    fn test_first_join_waits_for_opponent() {
        let mut session = latin_session();
        let transition = session.join("p1", "Alice").unwrap();
        assert!(transition.is_applied());
        let snapshot = session.snapshot();
        assert_eq!(snapshot.current_turn_player_id().as_deref(), Some("p1"));
        assert_eq!(snapshot.message(), "Waiting for opponent...");
        assert_eq!(session.phase(), Phase::Lobby);
    }

    #[test]
    fn test_second_join_starts_game() {
        let session = started(RulesetKind::Latin);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.current_turn_player_id().as_deref(), Some("p1"));
        assert_eq!(snapshot.message(), "Game Start! Alice's turn.");
        assert!(!snapshot.game_over());
        assert_eq!(session.phase(), Phase::Active);
    }

    #[test]
    fn test_duplicate_and_overflow_joins_are_ignored() {
        let mut session = started(RulesetKind::Latin);
        let before = session.snapshot();

        assert_eq!(
            session.join("p1", "Alice again").unwrap(),
            Transition::Ignored(Rejection::AlreadyJoined("p1".into()))
        );
        assert_eq!(
            session.join("p3", "Carol").unwrap(),
            Transition::Ignored(Rejection::LobbyFull(2))
        );
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.snapshot().players().len(), 2);
    }

    #[test]
    fn test_accepted_word_scores_and_passes_turn() {
        let mut session = started(RulesetKind::Latin);
        let transition = play(&mut session, "p1", "test");
        assert_eq!(
            transition,
            Transition::Applied(Event::WordAccepted {
                player_id: "p1".into(),
                points: 4,
                target_char: 't',
            })
        );

        let snapshot = session.snapshot();
        assert_eq!(*snapshot.player("p1").unwrap().score(), 4);
        assert_eq!(snapshot.previous_word(), "test");
        assert_eq!(*snapshot.target_char(), 't');
        assert_eq!(snapshot.current_turn_player_id().as_deref(), Some("p2"));
        assert_eq!(snapshot.message(), "Bob's turn.");
    }

    #[test]
    fn test_word_is_normalized_before_checks() {
        let mut session = started(RulesetKind::Latin);
        assert!(play(&mut session, "p1", "  TRACK ").is_applied());
        assert_eq!(session.snapshot().previous_word(), "track");
        assert_eq!(*session.snapshot().target_char(), 'k');
    }

    #[test]
    fn test_invalid_submissions_change_nothing() {
        let mut session = started(RulesetKind::Latin);
        let before = session.snapshot();

        assert_eq!(
            play(&mut session, "p2", "test"),
            Transition::Ignored(Rejection::NotYourTurn("p2".into()))
        );
        assert_eq!(
            play(&mut session, "stranger", "test"),
            Transition::Ignored(Rejection::NotYourTurn("stranger".into()))
        );
        assert_eq!(play(&mut session, "p1", "   "), Transition::Ignored(Rejection::EmptyWord));
        assert_eq!(
            play(&mut session, "p1", "apple"),
            Transition::Ignored(Rejection::BrokenChain {
                word: "apple".into(),
                expected: 't',
            })
        );
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_forbidden_terminal_loses_before_scoring() {
        let mut session = started(RulesetKind::Latin);
        let transition = play(&mut session, "p1", "ten");
        assert_eq!(
            transition,
            Transition::Applied(Event::Eliminated {
                player_id: "p1".into(),
                reason: Elimination::TerminalChar,
            })
        );

        let snapshot = session.snapshot();
        let p1 = snapshot.player("p1").unwrap();
        assert!(*snapshot.game_over());
        assert!(!p1.alive());
        assert_eq!(*p1.score(), 0);
        assert_eq!(snapshot.previous_word(), "START");
        assert_eq!(snapshot.message(), "GAME OVER! Alice ended with 'n'!");
    }

    /// Plays p1 up to 18 points and leaves `f` as the target for p1.
    fn p1_at_eighteen() -> Session {
        let mut session = started(RulesetKind::Latin);
        for (player, word) in [
            ("p1", "test"),
            ("p2", "tot"),
            ("p1", "toast"),
            ("p2", "tat"),
            ("p1", "twist"),
            ("p2", "tit"),
            ("p1", "tilt"),
            ("p2", "turf"),
        ] {
            assert!(play(&mut session, player, word).is_applied(), "{word} rejected");
        }
        let snapshot = session.snapshot();
        assert_eq!(*snapshot.player("p1").unwrap().score(), 18);
        assert_eq!(*snapshot.target_char(), 'f');
        session
    }

    #[test]
    fn test_burst_past_bust_limit() {
        let mut session = p1_at_eighteen();
        let transition = play(&mut session, "p1", "four");
        assert_eq!(
            transition,
            Transition::Applied(Event::Eliminated {
                player_id: "p1".into(),
                reason: Elimination::Burst,
            })
        );

        let snapshot = session.snapshot();
        let p1 = snapshot.player("p1").unwrap();
        assert_eq!(*p1.score(), 22);
        assert!(!p1.alive());
        assert!(*snapshot.game_over());
        assert_eq!(snapshot.message(), "BURST! Alice exceeded 21!");
        assert_eq!(session.phase(), Phase::Over);
    }

    #[test]
    fn test_exactly_bust_limit_is_safe() {
        let mut session = p1_at_eighteen();
        assert!(play(&mut session, "p1", "fat").is_applied());

        let snapshot = session.snapshot();
        assert_eq!(*snapshot.player("p1").unwrap().score(), 21);
        assert!(*snapshot.player("p1").unwrap().alive());
        assert!(!snapshot.game_over());
        assert_eq!(snapshot.current_turn_player_id().as_deref(), Some("p2"));
    }

    #[test]
    fn test_tick_drains_current_player_only() {
        let mut session = started(RulesetKind::Latin);
        let transition = session.tick().unwrap();
        assert_eq!(
            transition,
            Transition::Applied(Event::Ticked {
                player_id: "p1".into(),
                time_remaining: 179,
            })
        );
        let snapshot = session.snapshot();
        assert_eq!(*snapshot.player("p1").unwrap().time_remaining(), 179);
        assert_eq!(*snapshot.player("p2").unwrap().time_remaining(), 180);
    }

    #[test]
    fn test_tick_is_ignored_in_lobby() {
        let mut session = latin_session();
        session.join("p1", "Alice").unwrap();
        assert_eq!(
            session.tick().unwrap(),
            Transition::Ignored(Rejection::WaitingForPlayers)
        );
        assert_eq!(*session.snapshot().players()[0].time_remaining(), 180);
    }

    #[test]
    fn test_timeout_ends_game() {
        let settings = SessionSettings::new(2, 1, 21);
        let mut session = Session::new(RulesetKind::Latin.build(), settings).unwrap();
        session.join("p1", "Alice").unwrap();
        session.join("p2", "Bob").unwrap();

        let transition = session.tick().unwrap();
        assert_eq!(
            transition,
            Transition::Applied(Event::Eliminated {
                player_id: "p1".into(),
                reason: Elimination::Timeout,
            })
        );
        let snapshot = session.snapshot();
        let p1 = snapshot.player("p1").unwrap();
        assert_eq!(*p1.time_remaining(), 0);
        assert!(!p1.alive());
        assert!(*snapshot.game_over());
        assert_eq!(snapshot.message(), "TIME UP! Alice lost!");
    }

    #[test]
    fn test_game_over_is_absorbing() {
        let mut session = started(RulesetKind::Latin);
        play(&mut session, "p1", "ten");
        let over = session.snapshot();

        assert_eq!(play(&mut session, "p1", "test"), Transition::Ignored(Rejection::GameOver));
        assert_eq!(play(&mut session, "p2", "test"), Transition::Ignored(Rejection::GameOver));
        assert_eq!(session.tick().unwrap(), Transition::Ignored(Rejection::GameOver));
        assert!(!session.join("p3", "Carol").unwrap().is_applied());
        assert_eq!(session.snapshot(), over);
    }

    #[test]
    fn test_turns_rotate_in_join_order() {
        let settings = SessionSettings::new(3, 180, 100);
        let mut session = Session::new(RulesetKind::Latin.build(), settings).unwrap();
        session.join("a", "A").unwrap();
        session.join("b", "B").unwrap();
        session.join("c", "C").unwrap();
        assert_eq!(session.snapshot().message(), "C joined.");

        let mut turns = Vec::new();
        for _ in 0..6 {
            let current = session.snapshot().current_turn_player_id().clone().unwrap();
            turns.push(current.clone());
            assert!(play(&mut session, &current, "tot").is_applied());
        }
        assert_eq!(turns, ["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn test_kana_chain_across_scripts() {
        let mut session = started(RulesetKind::Kana);
        assert_eq!(*session.snapshot().target_char(), 'り');

        assert!(play(&mut session, "p1", "リンゴ").is_applied());
        assert_eq!(*session.snapshot().target_char(), 'ご');
        assert!(play(&mut session, "p2", "ごりら").is_applied());
        assert!(play(&mut session, "p1", "ラッシュ").is_applied());
        assert_eq!(*session.snapshot().target_char(), 'ゆ');

        let snapshot = session.snapshot();
        assert_eq!(*snapshot.player("p1").unwrap().score(), 7);
        assert_eq!(*snapshot.player("p2").unwrap().score(), 3);
    }

    #[test]
    fn test_kana_terminal_loses() {
        let mut session = started(RulesetKind::Kana);
        let transition = play(&mut session, "p1", "リモコン");
        assert!(matches!(
            transition,
            Transition::Applied(Event::Eliminated {
                reason: Elimination::TerminalChar,
                ..
            })
        ));
        assert_eq!(session.snapshot().message(), "GAME OVER! Alice ended with 'ん'!");
    }

    #[test]
    fn test_decomposed_kana_keeps_chain_playable() {
        let mut session = started(RulesetKind::Kana);
        assert_eq!(
            play(&mut session, "p1", "りか\u{3099}"),
            Transition::Applied(Event::WordAccepted {
                player_id: "p1".into(),
                points: 2,
                target_char: 'が',
            })
        );
        assert_eq!(session.snapshot().previous_word(), "りが");
        assert!(play(&mut session, "p2", "がっこう").is_applied());
        assert_eq!(*session.snapshot().target_char(), 'う');
    }

    #[test]
    fn test_half_width_katakana_chains() {
        let mut session = started(RulesetKind::Kana);
        assert!(play(&mut session, "p1", "ﾘｽ").is_applied());
        assert_eq!(session.snapshot().previous_word(), "リス");
        assert_eq!(*session.snapshot().target_char(), 'す');

        assert!(play(&mut session, "p2", "ｽｲｶ").is_applied());
        assert_eq!(*session.snapshot().target_char(), 'か');

        let transition = play(&mut session, "p1", "ｶﾒﾝ");
        assert!(matches!(
            transition,
            Transition::Applied(Event::Eliminated {
                reason: Elimination::TerminalChar,
                ..
            })
        ));
    }

    #[test]
    fn test_decomposed_latin_scores_composed_length() {
        let mut session = started(RulesetKind::Latin);
        assert_eq!(
            play(&mut session, "p1", "toupe\u{0301}"),
            Transition::Applied(Event::WordAccepted {
                player_id: "p1".into(),
                points: 5,
                target_char: '\u{e9}',
            })
        );
        assert!(play(&mut session, "p2", "\u{c9}clair").is_applied());
        assert_eq!(*session.snapshot().player("p2").unwrap().score(), 6);
    }

    #[test]
    fn test_abort_ends_session_once() {
        let mut session = started(RulesetKind::Latin);
        let fault = SessionFault::new("test fault");
        session.abort(&fault);
        let aborted = session.snapshot();
        session.abort(&fault);

        assert!(session.is_aborted());
        assert!(*aborted.game_over());
        assert_eq!(aborted.message(), "Session aborted: test fault");
        assert_eq!(session.snapshot(), aborted);
    }

    #[test]
    fn test_revision_only_moves_on_applied_changes() {
        let mut session = started(RulesetKind::Latin);
        let revision = *session.snapshot().revision();
        play(&mut session, "p2", "test");
        assert_eq!(*session.snapshot().revision(), revision);
        play(&mut session, "p1", "test");
        assert_eq!(*session.snapshot().revision(), revision + 1);
    }

    #[test]
    fn test_snapshot_serializes_for_clients() {
        let session = started(RulesetKind::Latin);
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["currentTurnPlayerId"], "p1");
        assert_eq!(json["targetChar"], "t");
        assert_eq!(json["gameOver"], false);
        assert_eq!(json["players"][1]["name"], "Bob");
    }
}
