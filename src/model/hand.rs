use std::ops::Deref;

use super::*;
use crate::error::AgariError;

// [Hand]
// 検査対象の手牌. 生成時に一度だけ正準順序でソートされ,以降変更されない.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hand(Vec<Tile>);

impl Hand {
    pub fn new(tiles: &[Tile]) -> Self {
        Self(sort_tiles(tiles))
    }

    pub fn from_codes(codes: &[&str]) -> Result<Self, AgariError> {
        Ok(Self::new(&tiles_from_codes(codes)?))
    }

    // 信頼できない入力向け (探索の計算量を抑えるため枚数に上限を設ける)
    pub fn new_bounded(tiles: &[Tile]) -> Result<Self, AgariError> {
        if tiles.len() > MAX_HAND_TILES {
            return Err(AgariError::HandTooLarge {
                len: tiles.len(),
                max: MAX_HAND_TILES,
            });
        }
        Ok(Self::new(tiles))
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }
}

impl Deref for Hand {
    type Target = [Tile];

    fn deref(&self) -> &[Tile] {
        &self.0
    }
}

impl FromStr for Hand {
    type Err = AgariError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(&tiles_from_string(s)?))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", codes.join(" "))
    }
}

#[test]
fn test_hand_sorted() {
    let hand: Hand = "D1 P3 W2 P1 M9 S5 P1".parse().unwrap();
    assert_eq!(hand.to_string(), "P1 P1 P3 S5 M9 W2 D1");
    assert_eq!(Hand::new(hand.tiles()), hand);
    assert_eq!(hand.len(), 7);
}

#[test]
fn test_hand_bounded() {
    let tiles = tiles_from_string("P1 P1 P1 P2 P2 P2 P3 P3 P3 P4 P4 P4 D1 D1").unwrap();
    assert!(Hand::new_bounded(&tiles).is_ok());

    let mut tiles = tiles;
    tiles.push(tiles[0]);
    match Hand::new_bounded(&tiles) {
        Err(AgariError::HandTooLarge { len, max }) => {
            assert_eq!(len, 15);
            assert_eq!(max, MAX_HAND_TILES);
        }
        r => panic!("{:?}", r),
    }
}

#[test]
fn test_hand_from_codes() {
    let hand = Hand::from_codes(&["W1", "P9"]).unwrap();
    assert_eq!(hand.to_string(), "P9 W1");
    assert!(Hand::from_codes(&["W1", "Z9"]).is_err());
    assert!(Hand::new(&[]).is_empty());
}
