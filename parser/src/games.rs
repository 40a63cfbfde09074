use std::collections::BTreeMap;

use types::{GameRecord, PlayDraw, Seat};

use crate::{
    names, outcome,
    players::two_players,
    walk::{Boundary, BoundaryRules, WalkState},
    ActionLog, ParseError, ParserConfig,
};

/// Games whose winner could not be read from the log, keyed
/// `{match_id}-{game_num}`, holding the game's actions for manual review.
pub type UndeterminedGames = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSegments {
    pub games: Vec<GameRecord>,
    pub undetermined: UndeterminedGames,
}

#[derive(Debug, Clone, Copy, Default)]
struct GameFacts {
    pd_selector: Seat,
    pd_choice: PlayDraw,
    on_play: Seat,
    on_draw: Seat,
    p1_mulls: u8,
    p2_mulls: u8,
}

#[derive(Debug, Clone, Default)]
struct GameCollector {
    actions: Vec<String>,
}

impl GameCollector {
    fn add_action(&mut self, action: &str) {
        self.actions.push(action.to_string());
    }

    fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.actions)
    }
}

struct Segmenter<'a> {
    match_id: &'a str,
    rules: BoundaryRules,
    config: &'a ParserConfig,
    walk: WalkState,
    facts: GameFacts,
    current: GameCollector,
    segments: GameSegments,
}

impl Segmenter<'_> {
    fn observe(&mut self, action: &str) {
        let boundary = self.rules.classify(action);
        match &boundary {
            Boundary::PlayDrawChoice { selector, choice } => {
                let (on_play, on_draw) = match choice {
                    PlayDraw::Play => (*selector, selector.other()),
                    _ => (selector.other(), *selector),
                };
                self.facts.pd_selector = *selector;
                self.facts.pd_choice = *choice;
                self.facts.on_play = on_play;
                self.facts.on_draw = on_draw;
            }
            Boundary::OpeningHand { player, hand_word } => {
                let mulls = hand_word.and_then(|word| self.config.mulligans_for(word));
                if mulls.is_none() {
                    log::debug!("Unrecognized opening hand in {action:?}");
                }
                match self.rules.seat_of(player) {
                    Seat::P1 => self.facts.p1_mulls = mulls.unwrap_or(0),
                    Seat::P2 => self.facts.p2_mulls = mulls.unwrap_or(0),
                    Seat::NA => {}
                }
            }
            Boundary::Join | Boundary::TurnHeader { .. } | Boundary::Other => {}
        }
        self.walk.observe(&boundary, &self.rules);
    }

    fn finish_game(&mut self) {
        let game_actions = self.current.take();
        let game_num = self.walk.game_num;
        let game_winner =
            outcome::get_winner(&game_actions, self.rules.p1(), self.rules.p2(), self.config);
        log::debug!(
            "Game {game_num} of {} ended after {} actions, winner {game_winner}",
            self.match_id,
            game_actions.len()
        );
        if game_winner == Seat::NA {
            let key = format!("{}-{game_num}", self.match_id);
            log::warn!("Could not determine winner of {key}");
            self.segments.undetermined.insert(key, game_actions);
        }
        self.segments.games.push(GameRecord {
            match_id: self.match_id.to_string(),
            p1: names::to_literal(self.rules.p1()),
            p2: names::to_literal(self.rules.p2()),
            game_num,
            pd_selector: self.facts.pd_selector,
            pd_choice: self.facts.pd_choice,
            on_play: self.facts.on_play,
            on_draw: self.facts.on_draw,
            p1_mulls: self.facts.p1_mulls,
            p2_mulls: self.facts.p2_mulls,
            turns: self.walk.turn_num,
            game_winner,
        });
    }
}

/// Splits a match into games. Every player joining again marks the start of
/// the next game; the final game is flushed at the end of input.
pub fn game_data(
    match_actions: &ActionLog,
    config: &ParserConfig,
) -> Result<GameSegments, ParseError> {
    let players = match_actions.players();
    let (p1, p2) = two_players(&players)?;
    let player_count = players.len();
    let mut join_countdown = player_count;

    let mut segmenter = Segmenter {
        match_id: match_actions.match_id(),
        rules: BoundaryRules::new(&p1, &p2)?,
        config,
        walk: WalkState::default(),
        facts: GameFacts::default(),
        current: GameCollector::default(),
        segments: GameSegments::default(),
    };

    for action in match_actions {
        if action.contains("joined the game") {
            if join_countdown > 0 {
                join_countdown -= 1;
            } else {
                join_countdown = player_count - 1;
                segmenter.finish_game();
            }
        } else {
            segmenter.observe(action);
        }
        segmenter.current.add_action(action);
    }
    segmenter.finish_game();

    Ok(segmenter.segments)
}
