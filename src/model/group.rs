use serde::ser::{self, SerializeSeq};

use super::*;

// [基本形判定]
// いずれも空の入力に対して安全に判定を行う

// 雀頭
pub fn is_jantou(tiles: &[Tile]) -> bool {
    tiles.len() == 2 && tiles[0] == tiles[1]
}

// 全て同じ種別か (空の場合はtrue)
pub fn is_same_kind(tiles: &[Tile]) -> bool {
    match tiles.first() {
        Some(t0) => tiles.iter().all(|t| t.kind() == t0.kind()),
        None => true,
    }
}

// 順子 (並び順も考慮)
pub fn is_shuntsu(tiles: &[Tile]) -> bool {
    tiles.len() == 3
        && is_same_kind(tiles)
        && tiles[0].is_suit()
        && tiles[0].is_successor(&tiles[1])
        && tiles[1].is_successor(&tiles[2])
}

// 刻子
pub fn is_koutsu(tiles: &[Tile]) -> bool {
    tiles.len() == 3 && tiles.iter().all(|t| *t == tiles[0])
}

// 槓子
pub fn is_kantsu(tiles: &[Tile]) -> bool {
    tiles.len() == 4 && tiles.iter().all(|t| *t == tiles[0])
}

// 面子
pub fn is_mentsu(tiles: &[Tile]) -> bool {
    is_shuntsu(tiles) || is_koutsu(tiles) || is_kantsu(tiles)
}

// [Group]
// Tileは順子の場合は先頭の牌 (7以下の数牌であること. 直接生成する場合はGroup::runで検査)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Pair(Tile),    // 対子 (雀頭)
    Triplet(Tile), // 刻子
    Run(Tile),     // 順子
    Kantsu(Tile),  // 槓子 (副露のみ, 手牌の分解では生成しない)
    Orphans,       // 国士無双の么九牌13種
}

impl Group {
    // 先頭の牌から順子を生成 (字牌,8,9始まりはNone)
    pub fn run(head: Tile) -> Option<Self> {
        let next = head.successor()?;
        next.successor()?;
        Some(Group::Run(head))
    }

    pub fn from_tiles(tiles: &[Tile]) -> Option<Self> {
        if is_jantou(tiles) {
            Some(Group::Pair(tiles[0]))
        } else if is_koutsu(tiles) {
            Some(Group::Triplet(tiles[0]))
        } else if is_shuntsu(tiles) {
            Some(Group::Run(tiles[0]))
        } else if is_kantsu(tiles) {
            Some(Group::Kantsu(tiles[0]))
        } else if tiles == END_TILES {
            Some(Group::Orphans)
        } else {
            None
        }
    }

    pub fn tiles(&self) -> Vec<Tile> {
        match *self {
            Group::Pair(t) => vec![t; 2],
            Group::Triplet(t) => vec![t; 3],
            Group::Run(t) => {
                let mut v = vec![t];
                let mut cur = t;
                for _ in 0..2 {
                    match cur.successor() {
                        Some(next) => {
                            v.push(next);
                            cur = next;
                        }
                        None => break,
                    }
                }
                v
            }
            Group::Kantsu(t) => vec![t; TILE],
            Group::Orphans => END_TILES.to_vec(),
        }
    }

    #[inline]
    pub fn is_pair(&self) -> bool {
        matches!(self, Group::Pair(_))
    }

    #[inline]
    pub fn is_mentsu(&self) -> bool {
        matches!(self, Group::Triplet(_) | Group::Run(_) | Group::Kantsu(_))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.tiles() {
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

// 牌の列としてシリアライズ ["P1","P2","P3"]
impl ser::Serialize for Group {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let tiles = self.tiles();
        let mut seq = serializer.serialize_seq(Some(tiles.len()))?;
        for t in &tiles {
            seq.serialize_element(t)?;
        }
        seq.end()
    }
}

#[cfg(test)]
fn tiles(exp: &str) -> Vec<Tile> {
    tiles_from_string(exp).unwrap()
}

#[test]
fn test_is_jantou() {
    assert!(is_jantou(&tiles("P1 P1")));
    assert!(is_jantou(&tiles("W1 W1")));
    assert!(!is_jantou(&tiles("P1 M1")));
    assert!(!is_jantou(&tiles("P1 P1 P1")));
    assert!(!is_jantou(&[]));
}

#[test]
fn test_is_same_kind() {
    assert!(is_same_kind(&tiles("P1 P2 P3 P7")));
    assert!(!is_same_kind(&tiles("P1 P2 M3")));
    assert!(is_same_kind(&[]));
}

#[test]
fn test_is_shuntsu() {
    assert!(is_shuntsu(&tiles("P1 P2 P3")));
    assert!(!is_shuntsu(&tiles("P2 P1 P3")));
    assert!(!is_shuntsu(&tiles("P1 M2 M3")));
    assert!(!is_shuntsu(&tiles("P1 P2 P3 P4")));
    assert!(!is_shuntsu(&tiles("W1 W2 W3")));
    assert!(!is_shuntsu(&tiles("D1 D2 D3")));
    assert!(!is_shuntsu(&[]));
}

#[test]
fn test_is_koutsu_kantsu() {
    assert!(is_koutsu(&tiles("P1 P1 P1")));
    assert!(!is_koutsu(&tiles("P1 P1 P2")));
    assert!(!is_koutsu(&tiles("P1 P1 P1 P1")));
    assert!(!is_koutsu(&[]));

    assert!(is_kantsu(&tiles("P1 P1 P1 P1")));
    assert!(!is_kantsu(&tiles("P1 P1 P1")));
    assert!(!is_kantsu(&[]));
}

#[test]
fn test_is_mentsu() {
    assert!(is_mentsu(&tiles("P1 P2 P3")));
    assert!(is_mentsu(&tiles("P1 P1 P1")));
    assert!(is_mentsu(&tiles("P1 P1 P1 P1")));
    assert!(!is_mentsu(&tiles("P1 P1")));
    assert!(!is_mentsu(&[]));
}

#[test]
fn test_group_from_tiles() {
    assert_eq!(Group::from_tiles(&tiles("D1 D1")), Some(Group::Pair(tiles("D1")[0])));
    assert_eq!(Group::from_tiles(&tiles("S7 S8 S9")), Some(Group::Run(tiles("S7")[0])));
    assert_eq!(Group::from_tiles(&tiles("W2 W2 W2 W2")).map(|g| g.tiles().len()), Some(4));
    assert_eq!(Group::from_tiles(&END_TILES), Some(Group::Orphans));
    assert_eq!(Group::from_tiles(&tiles("S7 S9")), None);
    assert_eq!(Group::from_tiles(&[]), None);

    for exp in ["P1 P1", "M4 M4 M4", "S7 S8 S9", "D3 D3 D3 D3"] {
        let g = Group::from_tiles(&tiles(exp)).unwrap();
        assert_eq!(g.tiles(), tiles(exp));
    }
}

#[test]
fn test_group_run() {
    let t = |s: &str| Tile::from_code(s).unwrap();
    assert_eq!(Group::run(t("P7")), Some(Group::Run(t("P7"))));
    assert_eq!(Group::run(t("M1")).map(|g| g.tiles()), Some(tiles("M1 M2 M3")));
    assert_eq!(Group::run(t("P8")), None);
    assert_eq!(Group::run(t("S9")), None);
    assert_eq!(Group::run(t("W1")), None);
    assert_eq!(Group::run(t("D1")), None);
}

#[test]
fn test_group_serialize() {
    let g = Group::Run(tiles("M3")[0]);
    assert_eq!(g.to_string(), "M3M4M5");
    assert_eq!(serde_json::to_string(&g).unwrap(), r#"["M3","M4","M5"]"#);
}
