// 型エイリアス
pub type Tnum = u8; // 牌の数字部分 (数牌: 1~9, 風牌: 1~4, 三元牌: 1~3)
pub type Index = usize; // その他Index

// Number
pub const KIND: usize = 5; // 牌の種別の数 (筒子,索子,萬子,風牌,三元牌)
pub const TILE: usize = 4; // 同種の牌の数
pub const MAX_HAND_TILES: usize = 14; // 検査対象となる手牌の最大枚数

// Tnum Index
pub const WE: Tnum = 1; // Wind:    East  (東)
pub const WS: Tnum = 2; // Wind:    South (南)
pub const WW: Tnum = 3; // Wind:    West  (西)
pub const WN: Tnum = 4; // Wind:    North (北)
pub const DW: Tnum = 1; // Doragon: White (白)
pub const DG: Tnum = 2; // Doragon: Green (發)
pub const DR: Tnum = 3; // Doragon: Red   (中)
