//! Quiz engine: word selection, answer checking and the round lifecycle

pub mod controller;
pub mod judge;
pub mod round;
pub mod selector;
pub mod session;

pub use controller::QuizController;
pub use judge::{Feedback, Judgment, Tone, Verdict, judge, normalize};
pub use round::{Phase, QuizRound, RoundId};
pub use selector::{Pick, Selector};
pub use session::{Effect, QuizSession, SessionEvent};
