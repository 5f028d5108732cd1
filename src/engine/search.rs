use std::time::Duration;

use crate::amazons::action::Action;
use crate::amazons::board::{Board, Status};
use crate::amazons::consts::{MAX_DEPTH, WIN};
use crate::amazons::errors::EngineError;

use super::evaluator::Evaluator;
use super::timer::Timer;
use super::tree::SearchNode;

/// Alpha-beta minimax over the persistent tree rooted at `node`, from
/// `engine_player`'s perspective. Sets `node.score` and `node.best_action`
/// before returning and reports "remaining depth": `0` if this call and
/// everything below it finished inside the timer, otherwise the shallowest
/// depth at which a timeout cut exploration short (so the outer
/// iterative-deepening loop can tell an interrupted pass from a completed one).
pub fn alpha_beta(
    node: &mut SearchNode,
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    engine_player: u8,
    evaluator: &Evaluator,
    timer: &Timer,
) -> u8 {
    match board.status() {
        Status::Over { winner } => {
            let score = if winner == engine_player { WIN + depth as i32 } else { -(WIN + depth as i32) };
            node.score = Some(score);
            return 0;
        }
        Status::InProgress { to_move } => {
            if depth == 0 {
                node.score = Some(evaluator.evaluate(board, engine_player));
                return 0;
            }

            if !node.is_expanded() {
                node.children = board.actions_for(to_move).into_iter().map(SearchNode::for_action).collect();
            }
            node.order_children(maximizing);

            let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
            let mut best_action = None;
            let mut incomplete_at: Option<u8> = None;

            // The timer is checked after each child, never before the first:
            // a non-terminal node always has at least one legal action, and
            // the spec guarantees the search finds one, so the first child is
            // explored unconditionally even if the timer is already soon at
            // entry (mirrors `players.py`'s post-child timeout check).
            for child in node.children.iter_mut() {
                let action = child.action.expect("non-root nodes always carry their action");
                board.apply(action);
                let child_remaining =
                    alpha_beta(child, board, depth - 1, alpha, beta, !maximizing, engine_player, evaluator, timer);
                board.undo().expect("alpha_beta always undoes what it applies");

                if child_remaining > 0 {
                    incomplete_at = Some(incomplete_at.map_or(child_remaining, |d| d.min(child_remaining)));
                }

                let score = child.score.expect("alpha_beta always sets score before returning");
                let improved = if maximizing { score > best_score } else { score < best_score };
                if improved {
                    best_score = score;
                    best_action = Some(action);
                }
                if maximizing {
                    alpha = alpha.max(best_score);
                } else {
                    beta = beta.min(best_score);
                }
                if beta <= alpha {
                    break;
                }
                if timer.timeouts_soon() {
                    incomplete_at = Some(incomplete_at.map_or(depth, |d| d.min(depth)));
                    break;
                }
            }

            node.score = Some(best_score);
            node.best_action = best_action;
            incomplete_at.unwrap_or(0)
        }
    }
}

/// The memory-enhanced test driver: repeated null-window alpha-beta probes
/// around `f`, each one tightening `lower`/`upper` until they meet at the
/// true minimax value (or the timer cuts the search off first).
pub fn mtdf(
    node: &mut SearchNode,
    board: &mut Board,
    depth: u8,
    f: i32,
    engine_player: u8,
    evaluator: &Evaluator,
    timer: &Timer,
) -> (i32, u8) {
    let mut g = f;
    let mut lower = i32::MIN;
    let mut upper = i32::MAX;
    let mut remaining = 0u8;

    // The first probe always runs, timer or no: `alpha_beta` itself explores
    // at least one child unconditionally, so skipping this call entirely
    // (were the loop guard checked before the body) would leave the root
    // unscored even though a legal action exists.
    loop {
        let beta = g.max(lower + 1);
        remaining = alpha_beta(node, board, depth, beta - 1, beta, true, engine_player, evaluator, timer);
        g = node.score.expect("alpha_beta always sets the root's score");
        if g < beta {
            upper = g;
        } else {
            lower = g;
        }
        if lower >= upper || timer.timeouts_soon() {
            break;
        }
    }
    (g, remaining)
}

/// Iterative deepening: depth 1, 2, 3, ... up to `MAX_DEPTH`, each pass
/// seeded with the previous pass's score and reusing the previous pass's
/// tree for move ordering. Returns the last fully-completed pass's action,
/// falling back to whatever partial progress exists if even depth 1 is
/// interrupted.
pub fn choose_action(
    board: &mut Board,
    root: &mut SearchNode,
    engine_player: u8,
    evaluator: &Evaluator,
    time_budget: Duration,
) -> Result<Action, EngineError> {
    let timer = Timer::new(time_budget);

    let mut committed_action: Option<Action> = None;
    let mut f = 0;
    let mut depth: u8 = 1;

    loop {
        let (score, remaining) = mtdf(root, board, depth, f, engine_player, evaluator, &timer);
        f = score;

        if remaining == 0 {
            committed_action = root.best_action.or(committed_action);
        }

        if remaining != 0 || timer.timeouts_soon() || depth >= MAX_DEPTH {
            break;
        }
        depth += 1;
    }

    committed_action.or(root.best_action).ok_or(EngineError::NoActionFound)
}
