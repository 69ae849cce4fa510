use crate::error::{Error, Result};

/// 素集合データ構造が持つべき操作
///
/// `0..len()` の要素を幾つかの互いに素なグループに分割して管理する.
/// 一度マージしたグループが再び分かれることは無い.
pub trait DisjointSet {
    /// 要素の総数を返す.
    #[must_use]
    fn len(&self) -> usize;

    /// 要素が1つも無いか判定する.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 連結成分数を返す.
    #[must_use]
    fn count(&self) -> usize;

    /// 要素`a`が属するグループの代表を返す.
    ///
    /// # Errors
    ///
    /// - `a >= self.len()` のとき [`Error::IndexOutOfRange`]
    fn find(&mut self, a: usize) -> Result<usize>;

    /// 要素`a`が属するグループと要素`b`が属するグループを1つのグループにマージする.
    /// 新しくマージが起きたときに限り`true`を返す.
    ///
    /// # Errors
    ///
    /// - `a`, `b` のどちらかが範囲外のとき [`Error::IndexOutOfRange`]. このとき状態は変化しない.
    fn union(&mut self, a: usize, b: usize) -> Result<bool>;

    /// 要素`a`, `b`が同じグループに属するか判定する.
    ///
    /// # Errors
    ///
    /// - `a`, `b` のどちらかが範囲外のとき [`Error::IndexOutOfRange`]
    fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        check_index(a, self.len())?;
        check_index(b, self.len())?;
        Ok(self.find(a)? == self.find(b)?)
    }
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// 素集合データ構造 (サイズによるマージと経路半減)
///
/// 根には`-(グループの要素数)`を, それ以外には親の番号を持つ.
#[derive(Clone)]
pub struct UnionFind(Box<[isize]>, usize);

impl UnionFind {
    /// `n`個の要素があり, それぞれ別のグループに属しているUnionFindを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self(vec![-1; n].into_boxed_slice(), n)
    }

    /// 要素`a`が属するグループの要素数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn size(&mut self, a: usize) -> Result<usize> {
        let r = self.find(a)?;
        Ok(-self.0[r] as usize)
    }

    /// 要素`a`が属するグループの代表を経路圧縮せずに返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log(*n*))
    pub fn find_imu(&self, a: usize) -> Result<usize> {
        check_index(a, self.len())?;
        Ok(self.root_imu(a))
    }

    /// 要素`a`, `b`が同じグループに属するか経路圧縮せずに判定する.
    ///
    /// # Time complexity
    ///
    /// - *O*(log(*n*))
    pub fn connected_imu(&self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find_imu(a)? == self.find_imu(b)?)
    }

    pub(crate) fn root_imu(&self, mut a: usize) -> usize {
        while self.0[a] >= 0 {
            a = self.0[a] as usize;
        }
        a
    }
}

impl DisjointSet for UnionFind {
    /// # Time complexity
    ///
    /// - *O*(1)
    fn len(&self) -> usize {
        self.0.len()
    }

    /// # Time complexity
    ///
    /// - *O*(1)
    fn count(&self) -> usize {
        self.1
    }

    /// 辿った要素の親を1つ飛ばしに付け替える (経路半減).
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    fn find(&mut self, mut a: usize) -> Result<usize> {
        check_index(a, self.len())?;
        while self.0[a] >= 0 {
            let p = self.0[a] as usize;
            if self.0[p] < 0 {
                return Ok(p);
            }
            self.0[a] = self.0[p];
            a = self.0[a] as usize;
        }
        Ok(a)
    }

    /// 要素数の小さい方の根を大きい方の根の下に付ける. 同じ要素数なら`b`の側を`a`の側の下に付ける.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        check_index(a, self.len())?;
        check_index(b, self.len())?;
        let a = self.find(a)?;
        let b = self.find(b)?;
        if a == b {
            return Ok(false);
        }
        let (root, child) = if self.0[a] > self.0[b] { (b, a) } else { (a, b) };
        self.0[root] += self.0[child];
        self.0[child] = root as isize;
        self.1 -= 1;
        Ok(true)
    }
}

impl std::fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        struct VecSet(Vec<usize>);
        impl std::fmt::Debug for VecSet {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_set().entries(&self.0).finish()
            }
        }

        let mut q = vec![vec![]; self.len()];
        for i in 0..self.len() {
            q[self.root_imu(i)].push(i);
        }
        f.debug_set()
            .entries(
                q.into_iter()
                    .filter_map(|v| if v.is_empty() { None } else { Some(VecSet(v)) }),
            )
            .finish()
    }
}

impl Default for UnionFind {
    fn default() -> Self {
        Self(vec![].into(), 0)
    }
}
