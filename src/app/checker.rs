use std::fs::File;
use std::io::{self, BufRead};

use tracing::error;

use crate::config::AgariConfig;
use crate::hand::Aggregator;
use crate::model::*;
use crate::util::misc::*;

#[derive(Debug)]
pub struct CheckerApp {
    args: Vec<String>,
    detail: bool,
    json: bool,
}

impl CheckerApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            detail: false,
            json: false,
        }
    }

    pub fn run(&mut self) {
        if let Err(e) = self.run_args() {
            error!("{}", e);
        }
    }

    fn run_args(&mut self) -> Res {
        let mut file_path = "".to_string();
        let mut config_path = "".to_string();
        let mut strict = false;
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-j" => self.json = true,
                "-s" => strict = true,
                "-f" => file_path = next_value(&mut it, s)?,
                "-c" => config_path = next_value(&mut it, s)?,
                _ => {
                    if s.starts_with('-') {
                        Err(format!("unknown option: {}", s))?;
                    }
                    if !exp.is_empty() {
                        exp.push(' ');
                    }
                    exp.push_str(s);
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            print_usage();
            return Ok(());
        }

        let mut config = if config_path.is_empty() {
            AgariConfig::default()
        } else {
            AgariConfig::from_file(&config_path)?
        };
        config.strict_seven_pairs |= strict;
        let checker = HandChecker::new(Aggregator::from_config(&config), self.detail, self.json);

        if !exp.is_empty() {
            checker.process_expression(&exp)?;
        } else {
            let verifies = checker.run_from_file(&file_path)?;
            let n_error = vec_count(&verifies, &Verify::Error);
            if n_error != 0 {
                Err(format!("{} verify error(s) in {}", n_error, file_path))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

struct HandChecker {
    agg: Aggregator,
    detail: bool,
    json: bool,
}

impl HandChecker {
    fn new(agg: Aggregator, detail: bool, json: bool) -> Self {
        Self { agg, detail, json }
    }

    fn run_from_file(&self, file_path: &str) -> Res<Vec<Verify>> {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        let mut verifies = vec![];
        for exp in lines.map_while(Result::ok) {
            let e = exp.trim();
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else {
                match self.process_expression(e) {
                    Ok(v) => verifies.push(v),
                    Err(e) => {
                        error!("{}", e);
                        verifies.push(Verify::Error);
                    }
                }
            }
            println!();
        }
        Ok(verifies)
    }

    // "P1 P1 P1 ... D1 D1 | 2" の形式 ('|'以降は期待される結果の数)
    fn process_expression(&self, exp: &str) -> Res<Verify> {
        println!("> {}", exp);

        let exp = exp.split('#').next().unwrap_or(""); // コメント削除
        let mut exps = exp.splitn(2, '|');
        let exp_hand = exps.next().unwrap_or("");
        let expected = match exps.next() {
            Some(n) => Some(n.trim().parse::<usize>()?),
            None => None,
        };

        let tiles = tiles_from_string(exp_hand)?;
        let hand = Hand::new_bounded(&tiles)?;
        if self.detail {
            println!("hand: {}", hand);
        }

        let res = self.agg.evaluate(&hand);
        if self.json {
            println!("{}", serde_json::to_string(&res)?);
        } else if res.is_empty() {
            println!("not win hand");
        } else {
            for r in &res {
                println!("{}", r);
            }
        }

        let verify = match expected {
            Some(n) if n == res.len() => Verify::Ok,
            Some(_) => Verify::Error,
            None => Verify::Skip,
        };
        println!("verify: {:?}", verify);
        Ok(verify)
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run C EXPRESSION [-d] [-j] [-s] [-c CONFIG]
    $ cargo run C -f FILE [-d] [-j] [-s] [-c CONFIG]
Options
    -d: print debug info
    -j: print results as json
    -s: strict seven pairs (no duplicated pairs)
    -c: load pattern config (json) from file
    -f: read expressions from file instead of a commandline expression
"
    );
}

#[test]
fn test_checker() {
    let file_path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/agari_hands.txt");
    let checker = HandChecker::new(Aggregator::standard(), false, false);
    let verifies = checker.run_from_file(file_path).unwrap();
    assert!(!verifies.is_empty());
    assert_eq!(vec_count(&verifies, &Verify::Error), 0);
}

#[test]
fn test_checker_expression() {
    let checker = HandChecker::new(Aggregator::standard(), true, true);
    let v = checker
        .process_expression("P1 P1 P1 M2 P1 M2 D1 D1 S2 S2 S4 S4 S3 S3 | 1")
        .unwrap();
    assert_eq!(v, Verify::Ok);
    let v = checker.process_expression("P1 P2 P3").unwrap();
    assert_eq!(v, Verify::Skip);
    let v = checker.process_expression("P1 P2 P3 | 1").unwrap();
    assert_eq!(v, Verify::Error);
    assert!(checker.process_expression("P1 P2 Q3").is_err());
    assert!(checker.process_expression("P1 P1 | x").is_err());
}

#[test]
fn test_checker_too_large() {
    let checker = HandChecker::new(Aggregator::standard(), false, false);
    assert!(checker
        .process_expression("P1 P1 P1 P2 P2 P2 P3 P3 P3 P4 P4 P4 D1 D1 D1 | 0")
        .is_err());
    let v = checker
        .process_expression("P1 P1 P1 P2 P2 P2 P3 P3 P3 P4 P4 P4 D1 D1 | 3")
        .unwrap();
    assert_eq!(v, Verify::Ok);
}
