use crate::amazons::action::Action;
use crate::amazons::position::{Position, DIRECTIONS};

use super::Board;

/// The cells reachable from an origin, one ray per compass direction, each
/// ordered by increasing distance. Shared between move generation and the
/// evaluator's mobility term, which only cares about the total count.
#[derive(Clone, Debug, Default)]
pub struct Rays {
    pub by_direction: [Vec<Position>; 8],
}

impl Rays {
    pub fn len(&self) -> usize {
        self.by_direction.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_direction.iter().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.by_direction.iter().flatten().copied()
    }
}

impl Board {
    /// Walks all 8 rays out of `origin` over empty cells, treating `ignore` (if
    /// any) as empty regardless of what actually occupies it — used to let a
    /// queen see past the square she is about to vacate when picking an arrow
    /// target. Results for the `ignore.is_none()` case are memoised keyed on
    /// `origin`, invalidated whenever `apply`/`undo` bump the generation.
    pub fn reachable_from(&mut self, origin: Position, ignore: Option<Position>) -> Rays {
        if ignore.is_none() {
            let idx = self.index_of(&origin);
            if let Some((generation, rays)) = &self.reach_cache[idx] {
                if *generation == self.generation {
                    return rays.clone();
                }
            }
            let rays = self.walk_rays(origin, None);
            self.reach_cache[idx] = Some((self.generation, rays.clone()));
            rays
        } else {
            self.walk_rays(origin, ignore)
        }
    }

    fn walk_rays(&self, origin: Position, ignore: Option<Position>) -> Rays {
        let mut rays = Rays::default();
        for (dir_idx, offset) in DIRECTIONS.iter().enumerate() {
            let mut cursor = origin + *offset;
            while cursor.in_bounds(self.size) {
                let pos = cursor.coerce();
                let passable = self.empty_cells.contains(&pos) || ignore == Some(pos);
                if !passable {
                    break;
                }
                rays.by_direction[dir_idx].push(pos);
                cursor = cursor + *offset;
            }
        }
        rays
    }

    /// Stops at the first reachable cell in any direction; used by `has_moves`,
    /// which only needs to know whether a queen can move at all.
    fn has_reachable_cell(&self, origin: Position, ignore: Option<Position>) -> bool {
        DIRECTIONS.iter().any(|&offset| {
            let cursor = origin + offset;
            cursor.in_bounds(self.size) && {
                let pos = cursor.coerce();
                self.empty_cells.contains(&pos) || ignore == Some(pos)
            }
        })
    }

    /// Lazily enumerates every legal action for `player`: every queen-move
    /// paired with every arrow shot reachable from the queen's destination
    /// (ignoring the now-vacated source). A queen can always shoot back at her
    /// own source at minimum, so this never needs a separate "can she shoot"
    /// check.
    pub fn actions_for(&mut self, player: u8) -> Vec<Action> {
        let queens = self.queens[player as usize].clone();
        let mut actions = Vec::new();
        for source in queens {
            let destinations = self.reachable_from(source, None);
            for destination in destinations.iter() {
                let arrows = self.reachable_from(destination, Some(source));
                for arrow in arrows.iter() {
                    actions.push(Action::new(source, destination, arrow, player));
                }
            }
        }
        actions
    }

    /// True iff `player` has at least one legal action. Equivalent to "some
    /// queen has a reachable destination", since a destination always admits
    /// at least the shoot-back arrow onto the vacated source; memoised per
    /// player and invalidated by the same generation counter as `reachable_from`.
    pub fn has_moves(&mut self, player: u8) -> bool {
        if let Some((generation, result)) = self.has_moves_cache[player as usize] {
            if generation == self.generation {
                return result;
            }
        }
        let result = self.queens[player as usize]
            .clone()
            .into_iter()
            .any(|queen| self.has_reachable_cell(queen, None));
        self.has_moves_cache[player as usize] = Some((self.generation, result));
        result
    }
}
