use crate::model::*;

use Category::Pairs;

// [七対子]
// ソート済みの手牌を先頭から2枚ずつ区切り,全て対子であれば成立.
// strict: 同じ牌の対子の重複(4枚使い)を認めない

pub fn parse_into_seven_pairs_win(hand: &Hand, strict: bool) -> Vec<Decomposition> {
    if hand.len() % 2 != 0 {
        return vec![];
    }

    let mut d = Decomposition::with_categories(&[Pairs]);
    for c in hand.chunks(2) {
        if c[0] != c[1] {
            return vec![];
        }
        // 同じ牌は隣接するので直前の対子とだけ比較すればよい
        if strict && d.get(Pairs).last() == Some(&Group::Pair(c[0])) {
            return vec![];
        }
        d.push(Pairs, Group::Pair(c[0]));
    }

    vec![d]
}

#[test]
fn test_seven_pairs() {
    let hand: Hand = "P1 P1 S9 S9 M2 M2 M5 M5 W3 W3 D1 D1 D2 D2".parse().unwrap();
    let res = parse_into_seven_pairs_win(&hand, false);
    assert_eq!(res.len(), 1);
    assert_eq!(res[0].get(Pairs).len(), 7);
    assert_eq!(res[0].tiles(), hand.tiles());
    assert_eq!(parse_into_seven_pairs_win(&hand, true), res);
}

#[test]
fn test_seven_pairs_strict() {
    let hand: Hand = "P1 P1 P1 M2 P1 M2 D1 D1 S2 S2 S4 S4 S3 S3".parse().unwrap();
    let res = parse_into_seven_pairs_win(&hand, false);
    assert_eq!(res.len(), 1);
    let pairs: Vec<String> = res[0].get(Pairs).iter().map(|g| g.to_string()).collect();
    assert_eq!(
        pairs,
        vec!["P1P1", "P1P1", "S2S2", "S3S3", "S4S4", "M2M2", "D1D1"]
    );

    assert!(parse_into_seven_pairs_win(&hand, true).is_empty());
}

#[test]
fn test_seven_pairs_not_win() {
    for exp in [
        "P1 P1 S9 S9 M2 M2 M5 M5 W3 W3 D1 D1 D2 D3",
        "P1 P1 P1 S9 S9 M2 M2 M5 M5 W3 W3 D1 D1",
        "P1 P1 P1 S9 S9 S9 M2 M2 M5 M5 W3 W3 D1 D1",
        "P1 P2",
    ] {
        let hand: Hand = exp.parse().unwrap();
        assert!(parse_into_seven_pairs_win(&hand, false).is_empty(), "{}", exp);
    }
}

#[test]
fn test_seven_pairs_empty() {
    // 対子0組の手牌は空の分解を1つ返す
    let res = parse_into_seven_pairs_win(&Hand::new(&[]), false);
    assert_eq!(res.len(), 1);
    assert!(res[0].get(Pairs).is_empty());
    assert_eq!(res[0].categories().count(), 1);
    assert_eq!(parse_into_seven_pairs_win(&Hand::new(&[]), true), res);
}
