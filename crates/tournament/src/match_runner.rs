//! Match runner for playing games between engines

use chess_core::{Engine, GameState, GameStatus, Player};
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::results::{GameEnd, GameRecord, GameResult, MatchReport, MatchResult};

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Totals in the report are from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_first = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_first {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let for_engine1 = if engine1_first {
                record.result
            } else {
                record.result.flip()
            };
            result.record(for_engine1);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    player1 = %record.player1,
                    player2 = %record.player2,
                    result = ?record.result,
                    end = ?record.end,
                    plies = record.plies,
                    score = %format!("{}-{}-{}", result.wins, result.losses, result.draws),
                    "game finished"
                );
            }
            games.push(record);
        }

        MatchReport {
            engine1: engine1.name().to_string(),
            engine2: engine2.name().to_string(),
            config: self.config.clone(),
            result,
            games,
        }
    }

    /// Play a single game, returns the record with the result from player 1's
    /// perspective
    pub fn play_game<'a>(
        &self,
        player1: &'a mut dyn Engine,
        player2: &'a mut dyn Engine,
    ) -> GameRecord {
        let mut game = GameState::new();
        player1.new_game();
        player2.new_game();

        let names = (player1.name().to_string(), player2.name().to_string());
        let finish = |result: GameResult, end: GameEnd, plies: u32| GameRecord {
            player1: names.0.clone(),
            player2: names.1.clone(),
            result,
            end,
            plies,
        };
        // Loss for whoever is on move, from player 1's side.
        let loss_for = |p: Player| match p {
            Player::Player1 => GameResult::Loss,
            Player::Player2 => GameResult::Win,
        };

        let mut plies = 0;
        loop {
            match game.checkmate_stalemate_checker() {
                GameStatus::Checkmate { loser } => {
                    return finish(loss_for(loser), GameEnd::Checkmate, plies);
                }
                GameStatus::Stalemate => return finish(GameResult::Draw, GameEnd::Stalemate, plies),
                GameStatus::Ongoing => {}
            }
            if plies >= self.config.max_moves {
                return finish(GameResult::Draw, GameEnd::MoveLimit, plies);
            }

            let mover = game.whose_turn();
            let engine = match mover {
                Player::Player1 => &mut *player1,
                Player::Player2 => &mut *player2,
            };
            let search = engine.search(&game, self.config.depth);

            let Some(mv) = search.best_move else {
                warn!(engine = engine.name(), %mover, "no move in a live position, forfeiting");
                return finish(loss_for(mover), GameEnd::Forfeit, plies);
            };
            if let Err(err) = game.move_piece_with_promotion(mv.from, mv.to, mv.promo, true) {
                warn!(engine = engine.name(), %mover, %mv, %err, "illegal move, forfeiting");
                return finish(loss_for(mover), GameEnd::Forfeit, plies);
            }
            debug!(%mover, %mv, score = search.score, nodes = search.nodes, "played");
            plies += 1;
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2).result
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
