use crate::error::{Error, Result};
use crate::unionfind::{DisjointSet, UnionFind};

/// `n`×`n`の盤面のパーコレーションのモデル
///
/// 各マスは最初は全て閉じていて, 一度開いたマスが閉じることは無い.
/// 座標は1-indexedで`(row, col)`と表す.
///
/// UnionFindには盤面の`n * n`マスに加えて, 一番上の行全体と繋がった仮想的な頂点と,
/// 一番下の行全体と繋がった仮想的な頂点を持たせる.
/// 上下の仮想頂点が同じグループに属することが, 上端から下端まで開いたマスの道があることと同値になる.
///
/// 満たされているかの判定には, 上の仮想頂点だけを持つもう1つのUnionFindを使う.
/// 下の仮想頂点を経由して上と繋がってしまったマスを満たされていると誤判定しないため.
#[derive(Clone)]
pub struct Percolation {
    n: usize,
    open: Box<[bool]>,
    opened: usize,
    uf: UnionFind,
    full: UnionFind,
}

impl Percolation {
    /// 全てのマスが閉じた`n`×`n`の盤面を作る.
    ///
    /// # Errors
    ///
    /// - `n == 0` のとき [`Error::EmptyGrid`]
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*²)
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyGrid);
        }
        let mut uf = UnionFind::new(n * n + 2);
        let mut full = UnionFind::new(n * n + 1);
        let (top, bottom) = (n * n, n * n + 1);
        for col in 0..n {
            uf.union(top, col)?;
            uf.union(bottom, (n - 1) * n + col)?;
            full.union(top, col)?;
        }
        Ok(Self {
            n,
            open: vec![false; n * n].into_boxed_slice(),
            opened: 0,
            uf,
            full,
        })
    }

    /// 盤面の一辺の長さを返す.
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    fn top(&self) -> usize {
        self.n * self.n
    }

    fn bottom(&self) -> usize {
        self.n * self.n + 1
    }

    /// 1-indexedの座標を検査して, UnionFind上の番号に直す.
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        let n = self.n;
        if row == 0 || row > n || col == 0 || col > n {
            return Err(Error::SiteOutOfRange { row, col, n });
        }
        Ok((row - 1) * n + (col - 1))
    }

    /// マス`(row, col)`を開き, 上下左右の既に開いているマスと繋ぐ.
    /// 既に開いていれば何もしない.
    ///
    /// # Errors
    ///
    /// - 座標が範囲外のとき [`Error::SiteOutOfRange`]. このとき盤面は変化しない.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let i = self.index(row, col)?;
        if self.open[i] {
            return Ok(());
        }
        let was_percolating = self.percolates();
        self.open[i] = true;
        self.opened += 1;

        let n = self.n;
        let (r, c) = (row - 1, col - 1);
        let neighbors = [
            (r > 0).then(|| i - n),
            (r + 1 < n).then(|| i + n),
            (c > 0).then(|| i - 1),
            (c + 1 < n).then(|| i + 1),
        ];
        for j in neighbors.into_iter().flatten() {
            if self.open[j] {
                self.uf.union(i, j)?;
                self.full.union(i, j)?;
            }
        }
        if !was_percolating && self.percolates() {
            log::trace!(
                "percolates after opening ({row}, {col}) with {} open sites",
                self.opened
            );
        }
        Ok(())
    }

    /// マス`(row, col)`が開いているか判定する.
    ///
    /// # Errors
    ///
    /// - 座標が範囲外のとき [`Error::SiteOutOfRange`]
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.open[self.index(row, col)?])
    }

    /// マス`(row, col)`が開いていて, 開いたマスを辿って一番上の行に到達できるか判定する.
    ///
    /// 下の仮想頂点を持たない方のUnionFindで, 上の仮想頂点との連結性だけを見る.
    ///
    /// # Errors
    ///
    /// - 座標が範囲外のとき [`Error::SiteOutOfRange`]
    ///
    /// # Time complexity
    ///
    /// - *O*(log(*n*))
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let i = self.index(row, col)?;
        Ok(self.open[i] && self.full.root_imu(i) == self.full.root_imu(self.top()))
    }

    /// 開いているマスの数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn number_of_open_sites(&self) -> usize {
        self.opened
    }

    /// 上端から下端まで開いたマスの道があるか判定する.
    ///
    /// # Time complexity
    ///
    /// - *O*(log(*n*))
    #[must_use]
    pub fn percolates(&self) -> bool {
        // n = 1 だと上端と下端が同じマスなので, 作った時点で仮想頂点同士が繋がっている
        (self.n > 1 || self.opened > 0)
            && self.uf.root_imu(self.top()) == self.uf.root_imu(self.bottom())
    }
}

impl std::fmt::Display for Percolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.open.chunks(self.n) {
            let line = row
                .iter()
                .map(|&o| if o { "0" } else { "X" })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Percolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Percolation")
            .field("n", &self.n)
            .field("opened", &self.opened)
            .field("percolates", &self.percolates())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_site() {
        let mut p = Percolation::new(1).unwrap();
        assert!(!p.percolates());
        assert!(!p.is_full(1, 1).unwrap());
        p.open(1, 1).unwrap();
        assert!(p.percolates());
        assert!(p.is_full(1, 1).unwrap());
        assert_eq!(p.number_of_open_sites(), 1);
    }

    #[test]
    fn bridge() {
        let mut p = Percolation::new(5).unwrap();
        for (r, c) in [(1, 1), (1, 3), (3, 1), (2, 1), (2, 2), (3, 3), (4, 3), (5, 3)] {
            p.open(r, c).unwrap();
            assert!(!p.percolates());
        }
        assert!(p.is_full(3, 1).unwrap());
        assert!(!p.is_full(4, 3).unwrap());
        p.open(3, 2).unwrap();
        assert!(p.percolates());
        assert!(p.is_full(5, 3).unwrap());
        assert_eq!(p.number_of_open_sites(), 9);
        assert_eq!(
            p.to_string(),
            "0 X 0 X X\n0 0 X X X\n0 0 0 X X\nX X 0 X X\nX X 0 X X\n"
        );
    }

    #[test]
    fn no_backwash() {
        let mut p = Percolation::new(3).unwrap();
        for r in 1..=3 {
            p.open(r, 1).unwrap();
        }
        p.open(3, 3).unwrap();
        assert!(p.percolates());
        // (3, 3)は下の仮想頂点を通してしか繋がっていない
        assert!(p.is_open(3, 3).unwrap());
        assert!(!p.is_full(3, 3).unwrap());
        assert!(p.is_full(3, 1).unwrap());
        assert!(!p.is_full(2, 2).unwrap());
    }

    #[test]
    fn open_is_idempotent() {
        let mut p = Percolation::new(4).unwrap();
        p.open(2, 2).unwrap();
        p.open(2, 2).unwrap();
        assert_eq!(p.number_of_open_sites(), 1);
        assert!(p.is_open(2, 2).unwrap());
        assert!(!p.is_open(2, 3).unwrap());
        assert!(!p.is_full(2, 2).unwrap());
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(Percolation::new(0), Err(Error::EmptyGrid)));

        let mut p = Percolation::new(3).unwrap();
        for (r, c) in [(0, 1), (1, 0), (4, 1), (1, 4), (0, 0), (4, 4)] {
            assert!(matches!(
                p.open(r, c),
                Err(Error::SiteOutOfRange { n: 3, .. })
            ));
            assert!(p.is_open(r, c).is_err());
            assert!(p.is_full(r, c).is_err());
        }
        assert_eq!(p.number_of_open_sites(), 0);
        assert!(!p.percolates());
        assert_eq!(p.to_string(), "X X X\nX X X\nX X X\n");
    }

    #[test]
    fn closed_sites_are_never_full() {
        let mut p = Percolation::new(2).unwrap();
        p.open(1, 1).unwrap();
        p.open(2, 1).unwrap();
        assert!(p.percolates());
        assert!(!p.is_full(1, 2).unwrap());
        assert!(!p.is_full(2, 2).unwrap());
    }
}
