pub mod engine;
pub mod error;

pub use engine::{OnnxEngine, ScoreModel};
pub use error::{AppError, AppResult};
