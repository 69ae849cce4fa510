/// このクレートで発生するエラー
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// 盤面の大きさに0が指定された.
    #[error("grid size must be greater than 0")]
    EmptyGrid,
    /// 試行回数に0が指定された.
    #[error("number of trials must be greater than 0")]
    NoTrials,
    /// 1-indexedの座標が`1..=n`の範囲外.
    #[error("site ({row}, {col}) is outside of 1..={n}")]
    SiteOutOfRange { row: usize, col: usize, n: usize },
    /// 要素の番号が`0..len`の範囲外.
    #[error("index {index} is not less than {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// 整数として読めないトークン.
    #[error("cannot parse `{token}` as an index")]
    Parse { token: String },
    /// 入力の先頭に要素数が無い.
    #[error("input does not start with the number of elements")]
    MissingCount,
}

pub type Result<T> = std::result::Result<T, Error>;
