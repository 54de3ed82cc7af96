use tracing::info;

use crate::game::{GameSession, GameStatus, MoveResult};

/// Apply `moves` in order, stopping early once the game is over.
///
/// Refused moves are kept in the returned list as `Ignored`, so the result
/// lines up with the input up to the point the game ended.
pub fn replay<A>(session: &mut GameSession<A>, moves: &[usize]) -> Vec<MoveResult> {
    let mut results = Vec::with_capacity(moves.len());
    for (turn, &column) in moves.iter().enumerate() {
        let result = session.apply_move(column);
        info!(turn = turn + 1, column, ?result, "scripted move");
        results.push(result);
        if session.is_terminal() {
            break;
        }
    }
    results
}

/// Human-readable end-of-game line, `None` while the game is running.
pub fn end_message(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(player) => Some(format!("{player} won!")),
        GameStatus::Tied => Some("Tie!".to_string()),
    }
}
