use tracing::{debug, trace};

use super::kokushi::*;
use super::pairs::*;
use super::parse::*;
use crate::config::AgariConfig;
use crate::error::AgariResult;
use crate::model::*;

// [Checker]
// 和了形1種類の判定器. 同じ手牌に対して複数の分解を返すことがある.
pub trait Checker: Send + Sync {
    fn pattern(&self) -> PatternName;

    fn check(&self, hand: &Hand) -> Vec<Decomposition>;

    fn evaluate(&self, hand: &Hand) -> Vec<PatternResult> {
        let pattern = self.pattern();
        self.check(hand)
            .into_iter()
            .map(|decomposition| PatternResult {
                pattern,
                decomposition,
            })
            .collect()
    }
}

// 通常形
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularChecker;

impl Checker for RegularChecker {
    fn pattern(&self) -> PatternName {
        PatternName::Regular
    }

    fn check(&self, hand: &Hand) -> Vec<Decomposition> {
        parse_into_regular_win(hand)
    }
}

// 七対子
#[derive(Debug, Clone, Copy, Default)]
pub struct SevenPairsChecker {
    pub strict: bool,
}

impl Checker for SevenPairsChecker {
    fn pattern(&self) -> PatternName {
        PatternName::SevenPairs
    }

    fn check(&self, hand: &Hand) -> Vec<Decomposition> {
        parse_into_seven_pairs_win(hand, self.strict)
    }
}

// 国士無双
#[derive(Debug, Clone, Copy, Default)]
pub struct ThirteenOrphansChecker;

impl Checker for ThirteenOrphansChecker {
    fn pattern(&self) -> PatternName {
        PatternName::ThirteenOrphans
    }

    fn check(&self, hand: &Hand) -> Vec<Decomposition> {
        parse_into_kokushi_win(hand)
    }
}

// [Aggregator]
// 登録された判定器を順に実行し,結果を連結して返却 (優先度付けや除外は行わない)
#[derive(Default)]
pub struct Aggregator {
    checkers: Vec<Box<dyn Checker>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self::from_config(&AgariConfig::default())
    }

    pub fn from_config(config: &AgariConfig) -> Self {
        let mut agg = Self::new();
        for &p in &config.patterns {
            agg = match p {
                PatternName::Regular => agg.with(RegularChecker),
                PatternName::SevenPairs => agg.with(SevenPairsChecker {
                    strict: config.strict_seven_pairs,
                }),
                PatternName::ThirteenOrphans => agg.with(ThirteenOrphansChecker),
            };
        }
        agg
    }

    pub fn with(mut self, checker: impl Checker + 'static) -> Self {
        self.checkers.push(Box::new(checker));
        self
    }

    pub fn patterns(&self) -> Vec<PatternName> {
        self.checkers.iter().map(|c| c.pattern()).collect()
    }

    pub fn evaluate(&self, hand: &Hand) -> Vec<PatternResult> {
        let mut res = vec![];
        for c in &self.checkers {
            let mut r = c.evaluate(hand);
            trace!("{}: {} result(s)", c.pattern(), r.len());
            res.append(&mut r);
        }
        debug!("evaluate [{}]: {} result(s)", hand, res.len());
        res
    }
}

// 牌の表記のリストを受け取って全ての和了形の分解を返却
// 牌の表記が不正な場合,または手牌の枚数が上限を超える場合はエラー
pub fn evaluate(codes: &[&str]) -> AgariResult<Vec<PatternResult>> {
    evaluate_with(&Aggregator::standard(), codes)
}

pub fn evaluate_with(agg: &Aggregator, codes: &[&str]) -> AgariResult<Vec<PatternResult>> {
    let tiles = tiles_from_codes(codes)?;
    let hand = Hand::new_bounded(&tiles)?;
    Ok(agg.evaluate(&hand))
}

#[cfg(test)]
fn codes(exp: &str) -> Vec<&str> {
    exp.split_whitespace().collect()
}

#[test]
fn test_evaluate_regular_and_seven_pairs() {
    // 二盃口形は通常形と七対子の両方に該当する
    let res = evaluate(&codes("P1 P1 P2 P2 P3 P3 S4 S4 S5 S5 S6 S6 D1 D1")).unwrap();
    let patterns: Vec<PatternName> = res.iter().map(|r| r.pattern).collect();
    assert!(patterns.contains(&PatternName::Regular));
    assert_eq!(patterns.last(), Some(&PatternName::SevenPairs));
    assert_eq!(
        patterns.iter().filter(|&&p| p == PatternName::SevenPairs).count(),
        1
    );
}

#[test]
fn test_evaluate_kokushi() {
    let res = evaluate(&codes("M1 M9 P1 P9 S1 S9 W1 W2 W3 W4 D1 D2 D3 M1")).unwrap();
    assert_eq!(res.len(), 1);
    assert_eq!(res[0].pattern, PatternName::ThirteenOrphans);
    assert_eq!(
        res[0].decomposition.get(Category::Jantou),
        &[Group::Pair(Tile::from_code("M1").unwrap())]
    );

    let res = evaluate(&codes("M1 M9 P1 P9 S1 S9 W1 W2 W3 W4 D1 D2 D3 P2")).unwrap();
    assert!(res.is_empty());
}

#[test]
fn test_evaluate_errors() {
    assert!(evaluate(&codes("P1 P1 X1")).is_err());
    assert!(evaluate(&codes("P1 P1 P1 P2 P2 P2 P3 P3 P3 P4 P4 P4 D1 D1 D1")).is_err());

    // 空の手牌は七対子(対子0組)のみに該当
    let res = evaluate(&[]).unwrap();
    assert_eq!(res.len(), 1);
    assert_eq!(res[0].pattern, PatternName::SevenPairs);
    assert!(res[0].decomposition.get(Category::Pairs).is_empty());
}

#[test]
fn test_aggregator_config() {
    let hand: Hand = "P1 P1 P1 M2 P1 M2 D1 D1 S2 S2 S4 S4 S3 S3".parse().unwrap();
    assert_eq!(Aggregator::standard().evaluate(&hand).len(), 1);

    let cfg = AgariConfig {
        strict_seven_pairs: true,
        ..Default::default()
    };
    let agg = Aggregator::from_config(&cfg);
    assert_eq!(agg.patterns(), PatternName::ALL.to_vec());
    assert!(agg.evaluate(&hand).is_empty());

    let agg = Aggregator::new().with(ThirteenOrphansChecker);
    assert_eq!(agg.patterns(), vec![PatternName::ThirteenOrphans]);
    assert!(Aggregator::new().evaluate(&hand).is_empty());
}
