// 手牌の和了形判定を行うモジュール
mod evaluate;
mod kokushi;
mod pairs;
mod parse;

pub use self::{
    evaluate::{
        evaluate, evaluate_with, Aggregator, Checker, RegularChecker, SevenPairsChecker,
        ThirteenOrphansChecker,
    },
    kokushi::parse_into_kokushi_win,
    pairs::parse_into_seven_pairs_win,
    parse::parse_into_regular_win,
};
