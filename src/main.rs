#![warn(rust_2018_idioms)]

use agari::{app, util::log::init_logging};
use tracing::error;

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified");
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "C" => {
            // Checker (和了形判定モード)
            app::CheckerApp::new(args2).run();
        }
        "S" => {
            // Sampler (ランダム配牌の集計モード)
            app::SamplerApp::new(args2).run();
        }
        m => {
            error!("unknown mode: {}", m)
        }
    }
}
