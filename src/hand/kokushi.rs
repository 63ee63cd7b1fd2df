use crate::model::*;

use Category::*;

// [国士無双]
// ソート済みの手牌と么九牌13種を先頭から照合する.
// 隣接する同じ牌は雀頭として一度だけ読み飛ばす.

pub fn parse_into_kokushi_win(hand: &Hand) -> Vec<Decomposition> {
    if hand.len() != MAX_HAND_TILES {
        return vec![];
    }

    let mut pair = None;
    let mut i = 0;
    for &t in END_TILES.iter() {
        if i + 1 < hand.len() && hand[i] == hand[i + 1] {
            if pair.is_some() {
                return vec![]; // 雀頭が2つ以上
            }
            pair = Some(hand[i]);
            i += 1;
        }
        if hand.get(i) != Some(&t) {
            return vec![]; // 么九牌以外 or 不足
        }
        i += 1;
    }

    match pair {
        Some(p) if i == hand.len() => {
            let mut d = Decomposition::with_categories(&[Jantou, Kokushi]);
            d.push(Jantou, Group::Pair(p));
            d.push(Kokushi, Group::Orphans);
            vec![d]
        }
        _ => vec![],
    }
}

#[cfg(test)]
const KOKUSHI: &str = "M1 M9 P1 P9 S1 S9 W1 W2 W3 W4 D1 D2 D3";

#[test]
fn test_kokushi() {
    for extra in END_TILES.iter() {
        let hand: Hand = format!("{} {}", KOKUSHI, extra).parse().unwrap();
        let res = parse_into_kokushi_win(&hand);
        assert_eq!(res.len(), 1, "{}", hand);
        assert_eq!(res[0].get(Jantou), &[Group::Pair(*extra)]);
        assert_eq!(res[0].get(Kokushi), &[Group::Orphans]);
        assert_eq!(res[0].get(Kokushi)[0].tiles(), END_TILES.to_vec());
    }
}

#[test]
fn test_kokushi_not_win() {
    for exp in [
        format!("{} P2", KOKUSHI),
        KOKUSHI.replace("W3", "W1") + " W1",
        KOKUSHI.replace("D3", "D1") + " D2",
        KOKUSHI.to_string(),
        format!("{} M1 M1", KOKUSHI),
        "P1 P1 P1 P2 P2 P2 P3 P3 P3 P4 P4 P4 D1 D1".to_string(),
    ] {
        let hand: Hand = exp.parse().unwrap();
        assert!(parse_into_kokushi_win(&hand).is_empty(), "{}", exp);
    }
    assert!(parse_into_kokushi_win(&Hand::new(&[])).is_empty());
}
