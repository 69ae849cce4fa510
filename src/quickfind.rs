use crate::error::Result;
use crate::unionfind::{check_index, DisjointSet};

/// 各要素にグループの番号を直接持たせる素集合データ構造
///
/// findは速いが, unionのたびに全要素を書き換える.
#[derive(Clone, Debug)]
pub struct QuickFind(Box<[usize]>, usize);

impl QuickFind {
    /// `n`個の要素があり, それぞれ別のグループに属しているQuickFindを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self((0..n).collect(), n)
    }
}

impl DisjointSet for QuickFind {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn count(&self) -> usize {
        self.1
    }

    /// # Time complexity
    ///
    /// - *O*(1)
    fn find(&mut self, a: usize) -> Result<usize> {
        check_index(a, self.len())?;
        Ok(self.0[a])
    }

    /// `a`のグループの番号を`b`のグループの番号に書き換える.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        check_index(a, self.len())?;
        check_index(b, self.len())?;
        let (from, to) = (self.0[a], self.0[b]);
        if from == to {
            return Ok(false);
        }
        self.0.iter_mut().filter(|v| **v == from).for_each(|v| *v = to);
        self.1 -= 1;
        Ok(true)
    }
}
