use crate::error::Result;
use crate::unionfind::{check_index, DisjointSet};

/// 重み付けも経路圧縮もしない素集合森
///
/// 木が一直線に伸びることがあり, findは最悪で *O*(*n*) かかる.
#[derive(Clone, Debug)]
pub struct QuickUnion(Box<[usize]>, usize);

impl QuickUnion {
    /// `n`個の要素があり, それぞれ別のグループに属しているQuickUnionを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self((0..n).collect(), n)
    }
}

impl DisjointSet for QuickUnion {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn count(&self) -> usize {
        self.1
    }

    /// # Time complexity
    ///
    /// - *O*(*n*)
    fn find(&mut self, mut a: usize) -> Result<usize> {
        check_index(a, self.len())?;
        while self.0[a] != a {
            a = self.0[a];
        }
        Ok(a)
    }

    /// `a`の根を`b`の根の子にする.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        check_index(a, self.len())?;
        check_index(b, self.len())?;
        let a = self.find(a)?;
        let b = self.find(b)?;
        if a == b {
            return Ok(false);
        }
        self.0[a] = b;
        self.1 -= 1;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laws() {
        crate::unionfind::tests::laws(QuickUnion::new);
    }

    #[test]
    fn chain() {
        let n = 6;
        let mut qu = QuickUnion::new(n);
        for i in 0..n - 1 {
            qu.union(i, i + 1).unwrap();
        }
        // 0 -> 1 -> ... -> 5 の一本道
        assert_eq!(qu.0.as_ref(), &[1, 2, 3, 4, 5, 5]);
        assert_eq!(qu.find(0).unwrap(), 5);
        assert_eq!(qu.count(), 1);
    }
}
