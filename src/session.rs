use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::unionfind::DisjointSet;

/// 要素数`N`と, それに続く`(p, q)`の組の列を読んで順に繋いでいく.
///
/// 入力は空白区切りの整数. 組ごとに既に繋がっていたかどうかを書き出し,
/// 最後に連結成分数を書き出して返す. 素集合データ構造は`build(N)`で作る.
///
/// # Errors
///
/// - 入出力に失敗したとき [`Error::Io`]
/// - 先頭に要素数が無いとき [`Error::MissingCount`]
/// - 整数でないトークンがあったとき [`Error::Parse`]
/// - 範囲外の要素が与えられたとき [`Error::IndexOutOfRange`]
pub fn replay<R, W, F>(reader: R, mut writer: W, build: F) -> Result<usize>
where
    R: BufRead,
    W: Write,
    F: FnOnce(usize) -> Box<dyn DisjointSet>,
{
    let mut tokens = Tokens::new(reader);
    let n = tokens.next().transpose()?.ok_or(Error::MissingCount)?;
    let mut uf = build(n);
    log::info!("reading pairs over {n} elements");

    while let Some(p) = tokens.next().transpose()? {
        let Some(q) = tokens.next().transpose()? else {
            log::warn!("ignoring unpaired trailing index {p}");
            break;
        };
        if uf.connected(p, q)? {
            writeln!(writer, "{p} {q} already connected")?;
            continue;
        }
        uf.union(p, q)?;
        writeln!(writer, "{p} {q} connected")?;
    }

    let count = uf.count();
    writeln!(writer, "{count} components")?;
    Ok(count)
}

/// 空白区切りの整数を1つずつ読む
struct Tokens<R> {
    reader: R,
    line: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new().into_iter(),
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.line.next() {
                return Some(token.parse().map_err(|_| Error::Parse { token }));
            }
            let mut buf = String::new();
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line = buf
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                        .into_iter()
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuickFind, QuickUnion, UnionFind};

    const TINY: &str = "10\n4 3\n3 8\n6 5\n9 4\n2 1\n8 9\n5 0\n7 2\n6 1\n1 0\n6 7\n";

    fn run(input: &str, build: fn(usize) -> Box<dyn DisjointSet>) -> (usize, String) {
        let mut out = Vec::new();
        let count = replay(input.as_bytes(), &mut out, build).unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[test]
    fn tiny() {
        let (count, out) = run(TINY, |n| Box::new(UnionFind::new(n)));
        assert_eq!(count, 2);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "4 3 connected");
        assert_eq!(lines[5], "8 9 already connected");
        assert_eq!(lines[9], "1 0 already connected");
        assert_eq!(lines[11], "2 components");
    }

    #[test]
    fn same_output_for_every_variant() {
        let (_, weighted) = run(TINY, |n| Box::new(UnionFind::new(n)));
        let (_, quick_find) = run(TINY, |n| Box::new(QuickFind::new(n)));
        let (_, quick_union) = run(TINY, |n| Box::new(QuickUnion::new(n)));
        assert_eq!(weighted, quick_find);
        assert_eq!(weighted, quick_union);
    }

    #[test]
    fn pairs_may_span_lines() {
        let (count, out) = run("3 0\n1 1 2 0\n2", |n| Box::new(UnionFind::new(n)));
        assert_eq!(count, 1);
        assert_eq!(out, "0 1 connected\n1 2 connected\n0 2 already connected\n1 components\n");
    }

    #[test]
    fn errors() {
        let build = |n| Box::new(UnionFind::new(n)) as Box<dyn DisjointSet>;
        assert!(matches!(
            replay("".as_bytes(), Vec::new(), build),
            Err(Error::MissingCount)
        ));
        assert!(matches!(
            replay("3\n0 x\n".as_bytes(), Vec::new(), build),
            Err(Error::Parse { token }) if token == "x"
        ));
        assert!(matches!(
            replay("3\n0 3\n".as_bytes(), Vec::new(), build),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn unpaired_index_is_ignored() {
        let (count, out) = run("2 0 1 1", |n| Box::new(UnionFind::new(n)));
        assert_eq!(count, 1);
        assert_eq!(out, "0 1 connected\n1 components\n");
    }
}
