// 和了形判定のデータモデル
mod decomposition;
mod define;
mod group;
mod hand;
mod tile;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use decomposition::*;
pub use define::*;
pub use group::*;
pub use hand::*;
pub use tile::*;
