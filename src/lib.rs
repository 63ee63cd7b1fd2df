#![warn(rust_2018_idioms)]

//! 麻雀の手牌が和了形かどうかを判定し,和了形への分解を全て列挙する.
//!
//! ```
//! let res = agari::evaluate(&[
//!     "P1", "P1", "P1", "P2", "P2", "P2", "P3", "P3", "P3", "P4", "P4", "P4", "D1", "D1",
//! ])
//! .unwrap();
//! assert_eq!(res.len(), 3);
//! assert!(res.iter().all(|r| r.pattern == agari::model::PatternName::Regular));
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod hand;
pub mod model;
pub mod util;

pub use config::AgariConfig;
pub use error::{AgariError, AgariResult};
pub use hand::{evaluate, evaluate_with, Aggregator, Checker};
pub use model::{Decomposition, Group, Hand, PatternName, PatternResult, Tile};
