use types::Seat;

use crate::ParserConfig;

fn first_word(action: &str) -> &str {
    action.split_whitespace().next().unwrap_or_default()
}

fn seat_of(player: &str, p1: &str, p2: &str) -> Seat {
    if player == p1 {
        Seat::P1
    } else if player == p2 {
        Seat::P2
    } else {
        Seat::NA
    }
}

/// Decides who won one game from its actions. A loss statement anywhere in
/// the game wins over the final-action heuristics. `p1` and `p2` are
/// parse-safe names. Returns `NA` when nothing decides the game.
pub fn get_winner(game_actions: &[String], p1: &str, p2: &str, config: &ParserConfig) -> Seat {
    let loss = game_actions.iter().find(|action| {
        config
            .loss_sentences
            .iter()
            .any(|sentence| action.contains(sentence.as_str()))
    });
    if let Some(action) = loss {
        return seat_of(first_word(action), p1, p2).other();
    }

    let Some(last_action) = game_actions.last() else {
        return Seat::NA;
    };
    let named = seat_of(first_word(last_action), p1, p2);
    if config
        .maybe_loss_sentences
        .iter()
        .any(|sentence| last_action.contains(sentence.as_str()))
    {
        // lethal damage from the attack
        named.other()
    } else if config
        .win_sentences
        .iter()
        .any(|sentence| last_action.contains(sentence.as_str()))
    {
        named
    } else {
        Seat::NA
    }
}
