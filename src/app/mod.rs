// mainから直接呼び出すアプリケーションの動作モード(C, Sなど)のモジュール

mod checker;
mod sampler;

pub use checker::CheckerApp;
pub use sampler::SamplerApp;
