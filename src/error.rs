use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgariError {
    // 牌の表記が不正 (種別文字が不明,数字でない,範囲外)
    #[error("malformed tile code '{code}': {reason}")]
    MalformedTileCode { code: String, reason: String },

    // 探索対象として大きすぎる手牌
    #[error("hand has {len} tiles, at most {max} are allowed")]
    HandTooLarge { len: usize, max: usize },

    // 設定ファイルの読み込み・解釈の失敗
    #[error("invalid config: {0}")]
    Config(String),
}

pub type AgariResult<T> = Result<T, AgariError>;
