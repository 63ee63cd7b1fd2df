// 和了形判定の不変条件
// 手牌は34種からランダムに選ぶものと,面子+雀頭から組み立てるもの(必ず通常形)の2種類

use agari::hand::{
    parse_into_kokushi_win, parse_into_regular_win, parse_into_seven_pairs_win, Aggregator,
};
use agari::model::*;
use proptest::prelude::*;

fn tile() -> impl Strategy<Value = Tile> {
    (0..ALL_TILES.len()).prop_map(|i| ALL_TILES[i])
}

fn random_hand() -> impl Strategy<Value = Vec<Tile>> {
    prop::collection::vec(tile(), 0..=MAX_HAND_TILES)
}

// 刻子,または1~7始まりの数牌の順子
fn meld() -> impl Strategy<Value = Vec<Tile>> {
    prop_oneof![
        tile().prop_map(|t| vec![t; 3]),
        tile()
            .prop_filter("run head", |t| t.is_suit() && t.number() <= 7)
            .prop_map(|t| Group::Run(t).tiles()),
    ]
}

// 雀頭1つ+面子0~4つ (シャッフル済み)
fn winning_hand() -> impl Strategy<Value = Vec<Tile>> {
    (tile(), prop::collection::vec(meld(), 0..=4))
        .prop_map(|(pair, melds)| {
            let mut tiles = vec![pair, pair];
            for m in melds {
                tiles.extend(m);
            }
            tiles
        })
        .prop_shuffle()
}

proptest! {
    #[test]
    fn regular_covers_hand_exactly(tiles in random_hand()) {
        let hand = Hand::new(&tiles);
        for d in parse_into_regular_win(&hand) {
            prop_assert_eq!(d.tiles(), hand.tiles().to_vec());
            prop_assert_eq!(d.count_pairs(), 1);
            prop_assert_eq!(d.get(Category::Jantou).len(), 1);
            prop_assert!(d.get(Category::Koutsu).iter().all(|g| matches!(g, Group::Triplet(_))));
            prop_assert!(d.get(Category::Shuntsu).iter().all(|g| matches!(g, Group::Run(_))));
        }
    }

    #[test]
    fn regular_finds_constructed_hand(tiles in winning_hand()) {
        let hand = Hand::new(&tiles);
        let res = parse_into_regular_win(&hand);
        prop_assert!(!res.is_empty(), "{}", hand);
        for d in &res {
            prop_assert_eq!(d.tiles(), hand.tiles().to_vec());
            prop_assert_eq!(d.count_pairs(), 1);
        }
    }

    #[test]
    fn evaluate_is_deterministic(tiles in winning_hand()) {
        let agg = Aggregator::standard();
        let hand = Hand::new(&tiles);
        prop_assert_eq!(agg.evaluate(&hand), agg.evaluate(&hand));
    }

    #[test]
    fn evaluate_ignores_input_order(tiles in winning_hand(), seed in any::<u64>()) {
        use rand::{seq::SliceRandom, SeedableRng};

        let mut shuffled = tiles.clone();
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        shuffled.shuffle(&mut rng);

        let agg = Aggregator::standard();
        prop_assert_eq!(agg.evaluate(&Hand::new(&tiles)), agg.evaluate(&Hand::new(&shuffled)));
    }

    #[test]
    fn sorting_is_idempotent(tiles in random_hand()) {
        let sorted = sort_tiles(&tiles);
        prop_assert_eq!(sort_tiles(&sorted), sorted.clone());
        prop_assert_eq!(Hand::new(&sorted), Hand::new(&tiles));
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn seven_pairs_are_pairs(tiles in random_hand(), strict in any::<bool>()) {
        let hand = Hand::new(&tiles);
        let res = parse_into_seven_pairs_win(&hand, strict);
        prop_assert!(res.len() <= 1);
        for d in &res {
            prop_assert_eq!(d.tiles(), hand.tiles().to_vec());
            prop_assert!(d.groups().all(|g| g.is_pair()));
            prop_assert_eq!(d.count_pairs() * 2, hand.len());
        }
    }

    #[test]
    fn kokushi_only_end_tiles(tiles in random_hand()) {
        let hand = Hand::new(&tiles);
        let res = parse_into_kokushi_win(&hand);
        prop_assert!(res.len() <= 1);
        if !res.is_empty() {
            prop_assert_eq!(hand.len(), MAX_HAND_TILES);
            prop_assert!(hand.iter().all(|t| t.is_end()));
        }
    }
}
