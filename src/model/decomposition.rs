use std::collections::BTreeMap;

use super::*;

// [Category]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Jantou,  // 雀頭
    Koutsu,  // 刻子
    Shuntsu, // 順子
    Pairs,   // 対子 (七対子)
    Kokushi, // 么九牌13種 (国士無双)
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Jantou => "jantou",
            Category::Koutsu => "koutsu",
            Category::Shuntsu => "shuntsu",
            Category::Pairs => "pairs",
            Category::Kokushi => "kokushi",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// [Decomposition]
// 分類 -> 面子(対子)のリスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Decomposition(BTreeMap<Category, Vec<Group>>);

impl Decomposition {
    // 指定した分類を空のリストで初期化
    pub fn with_categories(categories: &[Category]) -> Self {
        Self(categories.iter().map(|&c| (c, vec![])).collect())
    }

    pub fn push(&mut self, category: Category, group: Group) {
        self.0.entry(category).or_default().push(group);
    }

    pub fn pop(&mut self, category: Category) -> Option<Group> {
        self.0.get_mut(&category).and_then(|v| v.pop())
    }

    pub fn get(&self, category: Category) -> &[Group] {
        self.0.get(&category).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &[Group])> {
        self.0.iter().map(|(&c, v)| (c, v.as_slice()))
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.0.values().flatten()
    }

    pub fn count_pairs(&self) -> usize {
        self.groups().filter(|g| g.is_pair()).count()
    }

    // 含まれる全ての牌 (正準順序)
    pub fn tiles(&self) -> Vec<Tile> {
        let tiles: Vec<Tile> = self.groups().flat_map(|g| g.tiles()).collect();
        sort_tiles(&tiles)
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (c, gs) in self.categories() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            let gs: Vec<String> = gs.iter().map(|g| g.to_string()).collect();
            write!(f, "{}: [{}]", c, gs.join(", "))?;
        }
        Ok(())
    }
}

// [PatternName]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternName {
    Regular,         // 通常形 (4面子1雀頭)
    SevenPairs,      // 七対子
    ThirteenOrphans, // 国士無双
}

impl PatternName {
    pub const ALL: [PatternName; 3] = [
        PatternName::Regular,
        PatternName::SevenPairs,
        PatternName::ThirteenOrphans,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternName::Regular => "regular",
            PatternName::SevenPairs => "seven_pairs",
            PatternName::ThirteenOrphans => "thirteen_orphans",
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// [PatternResult]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternResult {
    pub pattern: PatternName,
    pub decomposition: Decomposition,
}

impl fmt::Display for PatternResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{{}}}", self.pattern, self.decomposition)
    }
}

#[test]
fn test_decomposition() {
    let t = |s: &str| Tile::from_code(s).unwrap();
    let mut d = Decomposition::with_categories(&[Category::Jantou, Category::Shuntsu]);
    assert!(d.get(Category::Jantou).is_empty());
    assert!(d.get(Category::Koutsu).is_empty());

    d.push(Category::Shuntsu, Group::Run(t("P1")));
    d.push(Category::Jantou, Group::Pair(t("D1")));
    d.push(Category::Shuntsu, Group::Run(t("M7")));
    assert_eq!(d.count_pairs(), 1);
    assert_eq!(d.tiles(), tiles_from_string("P1 P2 P3 M7 M8 M9 D1 D1").unwrap());
    assert_eq!(d.to_string(), "jantou: [D1D1], shuntsu: [P1P2P3, M7M8M9]");

    assert_eq!(d.pop(Category::Shuntsu), Some(Group::Run(t("M7"))));
    assert_eq!(d.pop(Category::Koutsu), None);
    assert_eq!(d.get(Category::Shuntsu).len(), 1);
}

#[test]
fn test_pattern_result_json() {
    let t = |s: &str| Tile::from_code(s).unwrap();
    let mut d = Decomposition::with_categories(&[Category::Jantou, Category::Koutsu]);
    d.push(Category::Jantou, Group::Pair(t("W1")));
    let r = PatternResult {
        pattern: PatternName::Regular,
        decomposition: d,
    };
    assert_eq!(
        serde_json::to_string(&r).unwrap(),
        r#"{"pattern":"regular","decomposition":{"jantou":[["W1","W1"]],"koutsu":[]}}"#
    );
    assert_eq!(r.to_string(), "regular {jantou: [W1W1], koutsu: []}");
}
