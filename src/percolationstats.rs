use rand::Rng;

use crate::error::{Error, Result};
use crate::percolation::Percolation;

/// 95%信頼区間に対応する正規分布の分位点
const CONFIDENCE_95: f64 = 1.96;

/// モンテカルロ法によるパーコレーション閾値の推定
///
/// 試行ごとに新しい盤面を作り, パーコレーションが起きるまでランダムにマスを開け,
/// その時点で開いているマスの割合を1回分の閾値として記録する.
#[derive(Clone, Debug)]
pub struct PercolationStats(Box<[f64]>);

impl PercolationStats {
    /// `n`×`n`の盤面で`trials`回試行する. 乱数には`rand::thread_rng()`を使う.
    ///
    /// # Errors
    ///
    /// - `n == 0` のとき [`Error::EmptyGrid`]
    /// - `trials == 0` のとき [`Error::NoTrials`]
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_rng(n, trials, &mut rand::thread_rng())
    }

    /// 乱数生成器を指定して`n`×`n`の盤面で`trials`回試行する.
    ///
    /// # Errors
    ///
    /// - `n == 0` のとき [`Error::EmptyGrid`]
    /// - `trials == 0` のとき [`Error::NoTrials`]
    ///
    /// # Time complexity
    ///
    /// - *O*(`trials` *n*² log *n*) (期待値)
    pub fn with_rng<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyGrid);
        }
        if trials == 0 {
            return Err(Error::NoTrials);
        }
        let sites = (n * n) as f64;
        let thresholds = (0..trials)
            .map(|t| -> Result<f64> {
                let mut perc = Percolation::new(n)?;
                while !perc.percolates() {
                    let row = rng.gen_range(1..=n);
                    let col = rng.gen_range(1..=n);
                    perc.open(row, col)?;
                }
                let threshold = perc.number_of_open_sites() as f64 / sites;
                log::debug!("trial {t}: threshold {threshold}");
                Ok(threshold)
            })
            .collect::<Result<Box<[f64]>>>()?;
        Ok(Self(thresholds))
    }

    /// 各試行で得られた閾値を返す.
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.0
    }

    /// 試行回数を返す.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.0.len()
    }

    /// 閾値の標本平均を返す.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.0.iter().sum::<f64>() / self.trials() as f64
    }

    /// 閾値の標本標準偏差を返す. 試行回数が1回のときは`NaN`になる.
    #[must_use]
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let var = self.0.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / (self.trials() as f64 - 1.0);
        var.sqrt()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }

    /// 95%信頼区間の下端を返す.
    #[must_use]
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// 95%信頼区間の上端を返す.
    #[must_use]
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }
}
