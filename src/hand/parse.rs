use tracing::trace;

use crate::model::*;

use Category::*;

// [通常形の分解]
// 先頭の牌を起点に「同じ牌(刻子/雀頭)」と「順子」の2方向に分岐するバックトラック探索.
// 三連刻のように複数の解釈が可能な手牌はそれぞれの分解を全て返却する.
// 同一内容の分解が異なる経路から得られた場合も重複は除去しない.
//
// 3枚以上同じ牌がある場合は必ず刻子として扱い,2枚を雀頭として残りを他の面子に回す
// 分岐は探索しない.

// 手牌が通常形(雀頭1つ+刻子/順子)に分解できる場合,その分解を全て返却
pub fn parse_into_regular_win(hand: &Hand) -> Vec<Decomposition> {
    let mut acc = Decomposition::with_categories(&[Jantou, Koutsu, Shuntsu]);
    let mut res = vec![];
    parse_rest(hand.tiles(), &mut acc, &mut res);
    res
}

// rest: ソート済みかつaccに含まれていない牌
// accは呼び出し前の状態に戻してから返る
fn parse_rest(rest: &[Tile], acc: &mut Decomposition, res: &mut Vec<Decomposition>) {
    let (a, rest) = match rest.split_first() {
        Some((&a, rest)) => (a, rest),
        None => {
            if acc.get(Jantou).len() == 1 {
                trace!("regular: {}", acc);
                res.push(acc.clone());
            }
            return;
        }
    };

    // 刻子・雀頭 (ソート済みなので同じ牌は先頭に連続する)
    if rest.first() == Some(&a) {
        if rest.get(1) == Some(&a) {
            acc.push(Koutsu, Group::Triplet(a));
            parse_rest(&rest[2..], acc, res);
            acc.pop(Koutsu);
        } else if acc.get(Jantou).is_empty() {
            acc.push(Jantou, Group::Pair(a));
            parse_rest(&rest[1..], acc, res);
            acc.pop(Jantou);
        }
    }

    // 順子
    if let Some((b, rest)) = extract_successor(a, rest) {
        if let Some((_, rest)) = extract_successor(b, &rest) {
            acc.push(Shuntsu, Group::Run(a));
            parse_rest(&rest, acc, res);
            acc.pop(Shuntsu);
        }
    }
}

// tilesから順子で次となる牌を1枚抜き出し,(抜き出した牌, 残りの牌)を返却
fn extract_successor(base: Tile, tiles: &[Tile]) -> Option<(Tile, Vec<Tile>)> {
    let next = base.successor()?;
    // nextより後ろの牌は見る必要がない
    let i = tiles
        .iter()
        .take_while(|&&t| t <= next)
        .position(|&t| t == next)?;
    let mut rest = tiles.to_vec();
    rest.remove(i);
    Some((next, rest))
}

#[cfg(test)]
fn decomposition(jantou: &str, koutsu: &[&str], shuntsu: &[&str]) -> Decomposition {
    let t = |s: &str| Tile::from_code(s).unwrap();
    let mut d = Decomposition::with_categories(&[Jantou, Koutsu, Shuntsu]);
    d.push(Jantou, Group::Pair(t(jantou)));
    for &k in koutsu {
        d.push(Koutsu, Group::Triplet(t(k)));
    }
    for &s in shuntsu {
        d.push(Shuntsu, Group::Run(t(s)));
    }
    d
}

#[test]
fn test_regular_ambiguous() {
    let hand: Hand = "P1 P1 P1 P2 P2 P2 P3 P3 P3 P4 P4 P4 D1 D1".parse().unwrap();
    let res = parse_into_regular_win(&hand);

    assert!(res.contains(&decomposition("D1", &["P4"], &["P1", "P1", "P1"])));
    assert!(res.contains(&decomposition("D1", &["P1"], &["P2", "P2", "P2"])));
    assert!(res.contains(&decomposition("D1", &["P1", "P2", "P3", "P4"], &[])));
    for d in &res {
        assert_eq!(d.count_pairs(), 1);
        assert_eq!(d.tiles(), hand.tiles());
    }
}

#[test]
fn test_regular_single() {
    let hand: Hand = "M1 M2 M3 P4 P5 P6 S7 S8 S9 W1 W1 W1 D3 D3".parse().unwrap();
    let res = parse_into_regular_win(&hand);
    assert_eq!(
        res,
        vec![decomposition("D3", &["W1"], &["P4", "S7", "M1"])]
    );
}

#[test]
fn test_regular_pair_inside_run() {
    // 雀頭が順子の間に挟まる形
    let hand: Hand = "S1 S1 S1 S2 S3".parse().unwrap();
    let res = parse_into_regular_win(&hand);
    assert_eq!(res, vec![decomposition("S1", &[], &["S1"])]);

    let hand: Hand = "M2 M3 M3 M3 M4".parse().unwrap();
    let res = parse_into_regular_win(&hand);
    assert_eq!(res, vec![decomposition("M3", &[], &["M2"])]);
}

#[test]
fn test_regular_not_win() {
    for exp in [
        "P1 P2 P3 P4 P5 P6 P7 P8 P9 S1 S2 S3 W1 W2",
        "W1 W2 W3 W1 W2 W3 D1 D2 D3 D1 D2 D3 M5 M5",
        "P8 P9 S1 S1 S1 M2 M3 M4 M5 M6 M7 D2 D2 D2",
        "P1 P1 S1 S1 M1 M1 W1 W1 W2 W2 D1 D1 D2 D2",
        "P1 P1 S1 S1",
        "P1",
    ] {
        let hand: Hand = exp.parse().unwrap();
        assert!(parse_into_regular_win(&hand).is_empty(), "{}", exp);
    }
}

#[test]
fn test_regular_empty() {
    // 雀頭が無いので和了形ではない
    assert!(parse_into_regular_win(&Hand::new(&[])).is_empty());

    let hand: Hand = "W4 W4".parse().unwrap();
    assert_eq!(parse_into_regular_win(&hand), vec![decomposition("W4", &[], &[])]);
}

#[test]
fn test_regular_nine_gates() {
    // 九蓮宝燈形
    let hand: Hand = "M1 M1 M1 M2 M3 M4 M5 M5 M6 M7 M8 M9 M9 M9".parse().unwrap();
    let res = parse_into_regular_win(&hand);
    assert!(res.contains(&decomposition("M5", &["M1", "M9"], &["M2", "M6"])));
    for d in &res {
        assert_eq!(d.tiles(), hand.tiles());
    }
}

#[test]
fn test_regular_duplicated() {
    // 刻子を先に取る経路と順子を先に取る経路から同じ分解が得られる
    let hand: Hand = "M1 M1 M1 M1 M2 M3 M4 M5 M6 M7 M8 M9 M9 M9".parse().unwrap();
    let res = parse_into_regular_win(&hand);
    let d = decomposition("M9", &["M1"], &["M1", "M4", "M7"]);
    assert_eq!(res, vec![d.clone(), d]);
}
