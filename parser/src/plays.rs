use lazy_static::lazy_static;
use regex::Regex;
use types::{ActionKind, PlayRecord, NA};

use crate::{
    names,
    players::two_players,
    walk::{Boundary, BoundaryRules, WalkState},
    ActionLog, ParseError, ParserConfig,
};

lazy_static! {
    static ref CARD: Regex = Regex::new(r"@\[(.+?)@\]").expect("Valid card regex");
    static ref BRACKETED: Regex = Regex::new(r"\[.*?\]").expect("Valid bracket regex");
}

const ATTACKED_BY: &str = "is being attacked by";
const ACTIVATES: &str = "activates an ability of";
const TRIGGERS: &str = "puts triggered ability from";

/// Which part of an action a rule inspects.
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// The verb right after the acting player's name.
    Verb(&'static str),
    /// A phrase anywhere in the action.
    Phrase(&'static str),
}

/// Ordered classification rules. The first matching shape wins; `None`
/// marks a shape that is recognised but never produces a play.
const PLAY_RULES: [(Shape, Option<ActionKind>); 8] = [
    (Shape::Verb("plays"), Some(ActionKind::LandDrop)),
    (Shape::Verb("casts"), Some(ActionKind::Casts)),
    (Shape::Verb("draws"), Some(ActionKind::Draws)),
    (Shape::Verb("chooses"), None),
    (Shape::Phrase(ACTIVATES), Some(ActionKind::ActivatedAbility)),
    (Shape::Verb("discards"), Some(ActionKind::Discards)),
    (Shape::Phrase(ATTACKED_BY), Some(ActionKind::Attacks)),
    (Shape::Phrase(TRIGGERS), Some(ActionKind::Triggers)),
];

pub fn classify_action(action: &str) -> Option<ActionKind> {
    let words: Vec<&str> = action.split_whitespace().collect();
    let verb = *words.get(1)?;
    PLAY_RULES
        .iter()
        .find(|(shape, _)| match shape {
            Shape::Verb(expected) => verb == *expected,
            Shape::Phrase(phrase) => action.contains(phrase),
        })
        .and_then(|(_, kind)| *kind)
}

/// Card names in `@[...@]` references, in order.
pub fn cards_in(text: &str) -> Vec<&str> {
    CARD.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targets {
    pub cards: Vec<String>,
    pub self_target: bool,
    pub opp_target: bool,
}

/// Punctuation the client prints around a player name in a target list.
/// Parse-safe names never end in these characters.
const NAME_PUNCTUATION: [char; 8] = ['.', ',', ';', ':', '!', '?', '(', ')'];

/// Reads what follows "targeting": up to three card references, and whether
/// either player is named outside a bracketed card reference. Parse-safe
/// names are single tokens, so a player is named only by a whole token and
/// a name that prefixes the other player's never matches inside it.
pub fn parse_targets(action: &str, casting_player: &str, other_player: &str) -> Option<Targets> {
    let target_string = action.split("targeting").nth(1)?;
    let without_brackets = BRACKETED.replace_all(target_string, "");
    let named: Vec<&str> = without_brackets
        .split_whitespace()
        .map(|token| token.trim_matches(&NAME_PUNCTUATION[..]))
        .collect();
    let names_player = |player: &str| !player.is_empty() && named.contains(&player);
    Some(Targets {
        cards: cards_in(target_string)
            .into_iter()
            .take(3)
            .map(str::to_string)
            .collect(),
        self_target: names_player(casting_player),
        opp_target: names_player(other_player),
    })
}

/// Object name for an ability with no card reference, read from the text
/// between `start` and `end`. The client sometimes prints a player's name
/// there instead of the source, which is recorded as unknown.
fn fallback_object(action: &str, start: &str, end: &str, rules: &BoundaryRules) -> String {
    let object = action
        .split(start)
        .nth(1)
        .and_then(|rest| rest.split(end).next())
        .unwrap_or(NA);
    if object == rules.p1() || object == rules.p2() {
        NA.to_string()
    } else {
        object.to_string()
    }
}

fn build_play(
    action: &str,
    kind: ActionKind,
    match_id: &str,
    walk: &WalkState,
    rules: &BoundaryRules,
    config: &ParserConfig,
) -> PlayRecord {
    let words: Vec<&str> = action.split_whitespace().collect();
    let actor = words.first().copied().unwrap_or_default();
    let first_card = cards_in(action).first().map(|card| card.to_string());

    let mut play = PlayRecord::new(match_id.to_string(), kind);
    play.casting_player = actor.to_string();
    match kind {
        ActionKind::LandDrop | ActionKind::Casts | ActionKind::Discards => {
            play.primary_card = first_card.unwrap_or_else(|| NA.to_string());
        }
        ActionKind::Draws => {
            play.cards_drawn = config.cards_drawn_for(words.get(2).copied());
        }
        ActionKind::ActivatedAbility => {
            play.primary_card = first_card
                .unwrap_or_else(|| fallback_object(action, "activates an ability of ", " (", rules));
        }
        ActionKind::Triggers => {
            play.primary_card = first_card.unwrap_or_else(|| {
                fallback_object(action, "triggered ability from ", " onto the stack ", rules)
            });
        }
        ActionKind::Attacks => {
            play.casting_player = walk.active_player.clone();
            let attackers = action.split(ATTACKED_BY).nth(1).map_or(0, |rest| cards_in(rest).len());
            play.attackers = attackers as u32;
        }
    }

    let other_player = if play.casting_player == walk.active_player {
        &walk.nonactive_player
    } else {
        &walk.active_player
    };
    if let Some(targets) = parse_targets(action, &play.casting_player, other_player) {
        let mut cards = targets.cards.into_iter();
        play.target1 = cards.next().unwrap_or_else(|| NA.to_string());
        play.target2 = cards.next().unwrap_or_else(|| NA.to_string());
        play.target3 = cards.next().unwrap_or_else(|| NA.to_string());
        play.self_target = targets.self_target;
        play.opp_target = targets.opp_target;
    }

    play.game_num = walk.game_num;
    play.turn_num = walk.turn_num;
    play.casting_player = names::to_literal(&play.casting_player);
    play.active_player = names::to_literal(&walk.active_player);
    play.nonactive_player = names::to_literal(&walk.nonactive_player);
    play
}

/// Classifies every qualifying action of a match into a play record.
pub fn play_data(
    match_actions: &ActionLog,
    config: &ParserConfig,
) -> Result<Vec<PlayRecord>, ParseError> {
    let (p1, p2) = two_players(&match_actions.players())?;
    let rules = BoundaryRules::new(&p1, &p2)?;
    let match_id = match_actions.match_id();

    let mut walk = WalkState::default();
    let mut play_num = 0;
    let mut all_plays = Vec::new();
    for action in match_actions {
        let boundary = rules.classify(action);
        match boundary {
            Boundary::PlayDrawChoice { .. } => {
                walk.observe(&boundary, &rules);
                play_num = 0;
            }
            Boundary::TurnHeader { .. } => walk.observe(&boundary, &rules),
            Boundary::Join | Boundary::OpeningHand { .. } | Boundary::Other => {
                let Some(kind) = classify_action(action) else {
                    continue;
                };
                play_num += 1;
                let mut play = build_play(action, kind, match_id, &walk, &rules, config);
                play.play_num = play_num;
                all_plays.push(play);
            }
        }
    }
    log::debug!("Classified {} plays for {match_id}", all_plays.len());
    Ok(all_plays)
}
