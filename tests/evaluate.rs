use agari::hand::{RegularChecker, SevenPairsChecker};
use agari::model::Category;
use agari::{evaluate, evaluate_with, AgariConfig, AgariError, Aggregator, PatternName};
use pretty_assertions::assert_eq;

fn codes(exp: &str) -> Vec<&str> {
    exp.split_whitespace().collect()
}

#[test]
fn test_evaluate_display() {
    let res = evaluate(&codes("M1 M2 M3 P4 P5 P6 S7 S8 S9 W1 W1 W1 D3 D3")).unwrap();
    let lines: Vec<String> = res.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        lines,
        vec!["regular {jantou: [D3D3], koutsu: [W1W1W1], shuntsu: [P4P5P6, S7S8S9, M1M2M3]}"]
    );
}

#[test]
fn test_evaluate_json() {
    let res = evaluate(&codes("W2 W2 P7 P8 P9")).unwrap();
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "pattern": "regular",
            "decomposition": {
                "jantou": [["W2", "W2"]],
                "koutsu": [],
                "shuntsu": [["P7", "P8", "P9"]],
            },
        }])
    );
}

#[test]
fn test_evaluate_order() {
    // 通常形 -> 七対子 の順で連結される
    let res = evaluate(&codes("S1 S1 S2 S2 S3 S3 M7 M7 M8 M8 M9 M9 D2 D2")).unwrap();
    let patterns: Vec<PatternName> = res.iter().map(|r| r.pattern).collect();
    assert_eq!(
        patterns,
        vec![PatternName::Regular, PatternName::SevenPairs]
    );
    assert_eq!(res[1].decomposition.get(Category::Pairs).len(), 7);
}

#[test]
fn test_evaluate_custom() {
    let exp = codes("P1 P1 P1 M2 P1 M2 D1 D1 S2 S2 S4 S4 S3 S3");

    let agg = Aggregator::new().with(SevenPairsChecker { strict: false });
    assert_eq!(evaluate_with(&agg, &exp).unwrap().len(), 1);

    let agg = Aggregator::new().with(RegularChecker);
    assert!(evaluate_with(&agg, &exp).unwrap().is_empty());

    let cfg = AgariConfig::from_json(r#"{"strict_seven_pairs": true, "patterns": ["seven_pairs"]}"#)
        .unwrap();
    let agg = Aggregator::from_config(&cfg);
    assert!(evaluate_with(&agg, &exp).unwrap().is_empty());
}

#[test]
fn test_evaluate_errors() {
    assert!(matches!(
        evaluate(&codes("P1 P1 Z1")),
        Err(AgariError::MalformedTileCode { .. })
    ));
    assert!(matches!(
        evaluate(&codes("M0 M1")),
        Err(AgariError::MalformedTileCode { .. })
    ));
    assert!(matches!(
        evaluate(&codes("M1 M1 M1 M2 M2 M2 M3 M3 M3 M4 M4 M4 M5 M5 M5")),
        Err(AgariError::HandTooLarge { len: 15, max: 14 })
    ));
}
