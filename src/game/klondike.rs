//! The game controller.
//!
//! `Klondike` owns the single authoritative `GameState` and is the only
//! thing that mutates it. The presentation layer reads snapshots and sends
//! `MoveRequest`s; every request returns an [`Outcome`] carrying either the
//! new snapshot plus a delta report, or a typed rejection.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::{Klondike, KlondikeConfig, MoveRequest, TableauIndex};
//!
//! let mut game = Klondike::new(KlondikeConfig::default().with_seed(42));
//! assert_eq!(game.state().stock().len(), 24);
//!
//! let drawn = game.request_draw();
//! assert!(drawn.is_applied());
//! assert_eq!(game.state().waste().len(), 1);
//! ```
//!
//! ## Concurrency
//!
//! All operations are synchronous and run to completion. Hosts that
//! dispatch input from several threads should hold the controller behind a
//! single `Mutex` and lock around each request.

use log::{debug, error, trace};
use serde::{Deserialize, Serialize};

use super::deal::shuffled_deal;
use crate::core::{
    DrawReport, GameRng, GameRngState, GameState, KlondikeConfig, MoveReport, MoveRequest, RecycleReport,
};
use crate::rules::{apply_move, draw_from_stock, recycle_stock, Rejection};

/// Result of a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<R> {
    /// The request was applied. `state` is a snapshot taken right after.
    Applied { state: GameState, report: R },
    /// The request was refused and the state is unchanged.
    Rejected(Rejection),
}

/// Outcome of a card move.
pub type MoveOutcome = Outcome<MoveReport>;

/// Outcome of a stock draw.
pub type DrawOutcome = Outcome<DrawReport>;

/// Outcome of a stock recycle.
pub type RecycleOutcome = Outcome<RecycleReport>;

impl<R> Outcome<R> {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }

    /// The snapshot after an applied request.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        match self {
            Outcome::Applied { state, .. } => Some(state),
            Outcome::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<&R> {
        match self {
            Outcome::Applied { report, .. } => Some(report),
            Outcome::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Applied { .. } => None,
            Outcome::Rejected(reason) => Some(*reason),
        }
    }

    /// Convert into a `Result` for `?` propagation.
    pub fn into_result(self) -> Result<(GameState, R), Rejection> {
        match self {
            Outcome::Applied { state, report } => Ok((state, report)),
            Outcome::Rejected(reason) => Err(reason),
        }
    }
}

/// Owns a game of Klondike from deal to finish.
#[derive(Clone, Debug)]
pub struct Klondike {
    config: KlondikeConfig,
    rng: GameRng,
    /// RNG position just before the current game was shuffled.
    deal_start: GameRngState,
    state: GameState,
}

impl Klondike {
    /// Create a controller and deal the first game.
    #[must_use]
    pub fn new(config: KlondikeConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let deal_start = rng.state();
        let state = shuffled_deal(&mut rng);
        debug!("new game, seed {}", rng.seed());

        let game = Self {
            config,
            rng,
            deal_start,
            state,
        };
        game.verify();
        game
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    /// The seed behind every deal of this controller.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Discard the current game and deal a new one from the RNG stream.
    pub fn new_game(&mut self) -> GameState {
        self.deal_start = self.rng.state();
        self.state = shuffled_deal(&mut self.rng);
        debug!("new game dealt");
        self.verify();
        self.state.clone()
    }

    /// Deal the current game again from its opening layout.
    pub fn restart(&mut self) -> GameState {
        let mut rng = GameRng::from_state(&self.deal_start);
        self.state = shuffled_deal(&mut rng);
        self.rng = rng;
        debug!("game restarted");
        self.verify();
        self.state.clone()
    }

    /// Borrow the live state for reading.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned snapshot that later requests will not affect.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// All foundations are complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Validate and apply a card move.
    pub fn request_move(&mut self, request: MoveRequest) -> MoveOutcome {
        match apply_move(&mut self.state, &request) {
            Ok(report) => self.applied(report),
            Err(reason) => {
                trace!("rejected {request:?}: {reason}");
                Outcome::Rejected(reason.into())
            }
        }
    }

    /// Draw the top stock card onto the waste.
    pub fn request_draw(&mut self) -> DrawOutcome {
        match draw_from_stock(&mut self.state) {
            Ok(report) => self.applied(report),
            Err(reason) => {
                trace!("rejected draw: {reason}");
                Outcome::Rejected(reason.into())
            }
        }
    }

    /// Turn the waste back into the stock once the stock is exhausted.
    pub fn request_recycle(&mut self) -> RecycleOutcome {
        match recycle_stock(&mut self.state) {
            Ok(report) => self.applied(report),
            Err(reason) => {
                trace!("rejected recycle: {reason}");
                Outcome::Rejected(reason.into())
            }
        }
    }

    fn applied<R>(&self, report: R) -> Outcome<R> {
        self.verify();
        Outcome::Applied {
            state: self.state.clone(),
            report,
        }
    }

    /// Panic on a broken invariant: continuing would silently corrupt play.
    fn verify(&self) {
        if !self.config.verify_invariants {
            return;
        }
        if let Err(violation) = self.state.check_invariants() {
            error!("engine invariant violated: {violation}");
            panic!("engine invariant violated: {violation}");
        }
    }
}
