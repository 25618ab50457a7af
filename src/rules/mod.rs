//! Klondike rules: legality checks and state transitions.
//!
//! - `validator`: pure legality predicates
//! - `executor`: apply moves, draw, recycle
//! - `rejection`: typed reasons a request was turned down

pub mod rejection;
pub mod validator;
pub mod executor;

pub use rejection::{InvalidMove, Precondition, Rejection};
pub use validator::{
    can_move_to_foundation, can_move_to_tableau, check_move, check_move_to_foundation,
    check_move_to_tableau,
};
pub use executor::{apply_move, draw_from_stock, recycle_stock};
