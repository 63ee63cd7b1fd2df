use serde::{de, ser};

use super::*;
use crate::error::AgariError;

// [TileKind]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Pinzu,
    Souzu,
    Manzu,
    Wind,
    Dragon,
}

use TileKind::*;

// 牌の正準順序 (筒子 < 索子 < 萬子 < 風牌 < 三元牌)
pub const KIND_ORDER: [TileKind; KIND] = [Pinzu, Souzu, Manzu, Wind, Dragon];

impl TileKind {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'P' => Pinzu,
            'S' => Souzu,
            'M' => Manzu,
            'W' => Wind,
            'D' => Dragon,
            _ => return None,
        })
    }

    pub fn to_char(self) -> char {
        match self {
            Pinzu => 'P',
            Souzu => 'S',
            Manzu => 'M',
            Wind => 'W',
            Dragon => 'D',
        }
    }

    // 種別ごとの数字の上限
    #[inline]
    pub fn max_number(self) -> Tnum {
        match self {
            Pinzu | Souzu | Manzu => 9,
            Wind => WN,
            Dragon => DR,
        }
    }

    // 数牌 (筒子,索子,萬子)
    #[inline]
    pub fn is_suit(self) -> bool {
        matches!(self, Pinzu | Souzu | Manzu)
    }

    // 字牌 (風牌,三元牌)
    #[inline]
    pub fn is_honor(self) -> bool {
        !self.is_suit()
    }

    // KIND_ORDERにおける位置
    #[inline]
    pub fn priority(self) -> Index {
        KIND_ORDER.iter().position(|&k| k == self).unwrap_or(KIND)
    }
}

// [Tile]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile(pub TileKind, pub Tnum); // (kind, number) 範囲を検査する場合はTile::new, Tile::from_code

impl Tile {
    // 範囲外の数字は受け付けない
    pub fn new(kind: TileKind, n: Tnum) -> Option<Self> {
        if (1..=kind.max_number()).contains(&n) {
            Some(Self(kind, n))
        } else {
            None
        }
    }

    pub fn from_code(code: &str) -> Result<Self, AgariError> {
        let malformed = |reason: &str| AgariError::MalformedTileCode {
            code: code.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = code.chars();
        let c = chars.next().ok_or_else(|| malformed("empty tile code"))?;
        let kind = TileKind::from_char(c).ok_or_else(|| malformed("unknown tile kind"))?;
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed("tile number is not numeric"));
        }
        let n: Tnum = digits
            .parse()
            .map_err(|_| malformed("tile number is not numeric"))?;
        Self::new(kind, n).ok_or_else(|| malformed("tile number out of range"))
    }

    #[inline]
    pub fn kind(&self) -> TileKind {
        self.0
    }

    #[inline]
    pub fn number(&self) -> Tnum {
        self.1
    }

    // 数牌
    #[inline]
    pub fn is_suit(&self) -> bool {
        self.0.is_suit()
    }

    // 字牌
    #[inline]
    pub fn is_honor(&self) -> bool {
        self.0.is_honor()
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_suit() && (self.1 == 1 || self.1 == 9)
    }

    // 么九牌
    #[inline]
    pub fn is_end(&self) -> bool {
        self.is_honor() || self.is_terminal()
    }

    // 順子を構成する次の牌 (字牌,9牌はNone)
    #[inline]
    pub fn successor(&self) -> Option<Self> {
        if self.is_suit() && self.1 <= 8 {
            Some(Self(self.0, self.1 + 1))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_successor(&self, next: &Self) -> bool {
        self.successor() == Some(*next)
    }
}

impl FromStr for Tile {
    type Err = AgariError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.to_char(), self.1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .priority()
            .cmp(&other.0.priority())
            .then(self.1.cmp(&other.1))
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile code")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_code(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// [Tiles]

// 全34種の牌 (正準順序)
#[rustfmt::skip]
pub static ALL_TILES: [Tile; 34] = [
    Tile(Pinzu, 1), Tile(Pinzu, 2), Tile(Pinzu, 3), Tile(Pinzu, 4), Tile(Pinzu, 5),
    Tile(Pinzu, 6), Tile(Pinzu, 7), Tile(Pinzu, 8), Tile(Pinzu, 9),
    Tile(Souzu, 1), Tile(Souzu, 2), Tile(Souzu, 3), Tile(Souzu, 4), Tile(Souzu, 5),
    Tile(Souzu, 6), Tile(Souzu, 7), Tile(Souzu, 8), Tile(Souzu, 9),
    Tile(Manzu, 1), Tile(Manzu, 2), Tile(Manzu, 3), Tile(Manzu, 4), Tile(Manzu, 5),
    Tile(Manzu, 6), Tile(Manzu, 7), Tile(Manzu, 8), Tile(Manzu, 9),
    Tile(Wind, WE), Tile(Wind, WS), Tile(Wind, WW), Tile(Wind, WN),
    Tile(Dragon, DW), Tile(Dragon, DG), Tile(Dragon, DR),
];

// 么九牌13種 (正準順序)
#[rustfmt::skip]
pub static END_TILES: [Tile; 13] = [
    Tile(Pinzu, 1), Tile(Pinzu, 9), Tile(Souzu, 1), Tile(Souzu, 9), Tile(Manzu, 1), Tile(Manzu, 9),
    Tile(Wind, WE), Tile(Wind, WS), Tile(Wind, WW), Tile(Wind, WN),
    Tile(Dragon, DW), Tile(Dragon, DG), Tile(Dragon, DR),
];

pub fn sort_tiles(tiles: &[Tile]) -> Vec<Tile> {
    let mut v = tiles.to_vec();
    v.sort();
    v
}

pub fn tiles_from_codes(codes: &[&str]) -> Result<Vec<Tile>, AgariError> {
    codes.iter().map(|c| Tile::from_code(c)).collect()
}

// "P1 P1 M2,M3" のような空白またはカンマ区切りの表記をパース
pub fn tiles_from_string(exp: &str) -> Result<Vec<Tile>, AgariError> {
    exp.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Tile::from_code)
        .collect()
}

#[test]
fn test_tile_from_code() {
    assert_eq!(Tile::from_code("P5").unwrap(), Tile(Pinzu, 5));
    assert_eq!(Tile::from_code("W4").unwrap(), Tile(Wind, WN));
    assert_eq!(Tile::from_code("D3").unwrap(), Tile(Dragon, DR));
    assert_eq!("M9".parse::<Tile>().unwrap().to_string(), "M9");

    for code in ["", "X1", "p1", "P", "P0", "P10", "Pa", "W5", "D4", "P-1", "P+1"] {
        match Tile::from_code(code) {
            Err(AgariError::MalformedTileCode { code: c, .. }) => assert_eq!(c, code),
            r => panic!("{} => {:?}", code, r),
        }
    }
}

#[test]
fn test_tile_order() {
    let tiles = tiles_from_string("P1 S2 P8 P8 S6 D3 D2 M2 M5 M2 S5 W2 P7 P6").unwrap();
    let sorted = sort_tiles(&tiles);
    assert_eq!(
        sorted,
        tiles_from_string("P1 P6 P7 P8 P8 S2 S5 S6 M2 M2 M5 W2 D2 D3").unwrap()
    );
    assert_eq!(sort_tiles(&sorted), sorted);

    let mut all = ALL_TILES.to_vec();
    all.reverse();
    assert_eq!(sort_tiles(&all), ALL_TILES.to_vec());
}

#[test]
fn test_successor() {
    let t = |s: &str| Tile::from_code(s).unwrap();
    assert_eq!(t("P1").successor(), Some(t("P2")));
    assert_eq!(t("M8").successor(), Some(t("M9")));
    assert_eq!(t("S9").successor(), None);
    assert_eq!(t("W1").successor(), None);
    assert_eq!(t("D2").successor(), None);
    assert!(t("S3").is_successor(&t("S4")));
    assert!(!t("S3").is_successor(&t("P4")));
    assert!(!t("S3").is_successor(&t("S5")));
    assert!(!t("W1").is_successor(&t("W2")));
}

#[test]
fn test_tile_class() {
    let t = |s: &str| Tile::from_code(s).unwrap();
    assert!(t("P1").is_suit() && t("P1").is_terminal() && t("P1").is_end());
    assert!(t("M5").is_suit() && !t("M5").is_end());
    assert!(t("W3").is_honor() && !t("W3").is_terminal() && t("W3").is_end());
    let ends: Vec<Tile> = ALL_TILES.iter().copied().filter(|t| t.is_end()).collect();
    assert_eq!(ends, END_TILES.to_vec());
}

#[test]
fn test_tile_serde() {
    let tiles = tiles_from_codes(&["P1", "W2", "D3"]).unwrap();
    let json = serde_json::to_string(&tiles).unwrap();
    assert_eq!(json, r#"["P1","W2","D3"]"#);
    let back: Vec<Tile> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tiles);
    assert!(serde_json::from_str::<Tile>(r#""Q1""#).is_err());
}
