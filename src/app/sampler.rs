use std::collections::HashMap;

use rand::prelude::*;
use tracing::info;

use crate::hand::Aggregator;
use crate::model::*;
use crate::util::misc::*;

// [App]
// 牌山からランダムに配った手牌を判定し,和了形ごとの出現回数を集計する
#[derive(Debug)]
pub struct SamplerApp {
    seed: u64,
    n_hand: u32,
    single_suit: bool,
    detail: bool,
}

impl SamplerApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            seed: 0,
            n_hand: 10000,
            single_suit: false,
            detail: false,
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-s" => app.seed = next_value(&mut it, s).unwrap_or_else(error_exit),
                "-n" => app.n_hand = next_value(&mut it, s).unwrap_or_else(error_exit),
                "-1" => app.single_suit = true,
                "-d" => app.detail = true,
                opt => error_exit(format!("unknown option: {}", opt)),
            }
        }

        if app.seed == 0 {
            app.seed = unixtime_now() as u64;
            info!(
                "Random seed is not specified. Unix timestamp '{}' is used as seed.",
                app.seed
            );
        }

        app
    }

    pub fn run(&mut self) {
        let agg = Aggregator::standard();
        let stats = sample(&agg, self.seed, self.n_hand, self.single_suit, self.detail);

        println!("seed: {}, hands: {}", self.seed, self.n_hand);
        for p in agg.patterns() {
            let n = stats.get(&p).copied().unwrap_or(0);
            println!("{}: {}", p, n);
        }
    }
}

pub fn create_wall(single_suit: bool) -> Vec<Tile> {
    let mut wall = vec![];
    for &t in ALL_TILES.iter() {
        if single_suit && t.kind() != TileKind::Pinzu {
            continue;
        }
        for _ in 0..TILE {
            wall.push(t);
        }
    }
    wall
}

// 和了形ごとに該当した手牌の数を返却
pub fn sample(
    agg: &Aggregator,
    seed: u64,
    n_hand: u32,
    single_suit: bool,
    detail: bool,
) -> HashMap<PatternName, u32> {
    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
    let mut wall = create_wall(single_suit);
    let mut stats = HashMap::new();
    for _ in 0..n_hand {
        wall.shuffle(&mut rng);
        let hand = Hand::new(&wall[..MAX_HAND_TILES]);
        let res = agg.evaluate(&hand);

        let mut patterns: Vec<PatternName> = res.iter().map(|r| r.pattern).collect();
        patterns.dedup();
        if detail && !patterns.is_empty() {
            println!("{} {}", hand, vec_to_string(&patterns));
        }
        for p in patterns {
            *stats.entry(p).or_insert(0) += 1;
        }
    }
    stats
}

#[test]
fn test_create_wall() {
    let wall = create_wall(false);
    assert_eq!(wall.len(), 136);
    assert_eq!(vec_count(&wall, &END_TILES[0]), TILE);
    assert_eq!(create_wall(true).len(), 36);
}

#[test]
fn test_sample() {
    let agg = Aggregator::standard();
    let s1 = sample(&agg, 1, 200, true, false);
    let s2 = sample(&agg, 1, 200, true, false);
    assert_eq!(s1, s2);
    assert!(s1.values().all(|&n| n <= 200));
    assert!(!s1.contains_key(&PatternName::ThirteenOrphans));
}

#[test]
fn test_sampler_args() {
    let args: Vec<String> = ["-s", "7", "-n", "20", "-1", "-d"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let app = SamplerApp::new(args);
    assert_eq!(app.seed, 7);
    assert_eq!(app.n_hand, 20);
    assert!(app.single_suit);
    assert!(app.detail);

    // seed未指定の場合は現在時刻
    let app = SamplerApp::new(vec![]);
    assert_ne!(app.seed, 0);
    assert_eq!(app.n_hand, 10000);
    assert!(!app.single_suit && !app.detail);
}
