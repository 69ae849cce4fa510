//! 標準入力から要素数と`(p, q)`の組を読み, 順に繋いだ結果を書き出す.

use clap::{Parser, ValueEnum};
use percolation::{session, DisjointSet, QuickFind, QuickUnion, UnionFind};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    QuickFind,
    QuickUnion,
    Weighted,
}

impl Algorithm {
    fn build(self, n: usize) -> Box<dyn DisjointSet> {
        match self {
            Algorithm::QuickFind => Box::new(QuickFind::new(n)),
            Algorithm::QuickUnion => Box::new(QuickUnion::new(n)),
            Algorithm::Weighted => Box::new(UnionFind::new(n)),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 使う素集合データ構造
    #[arg(short, long, value_enum, default_value_t = Algorithm::Weighted)]
    algorithm: Algorithm,
    /// ログの詳細度 (-v, -vv, ...)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = stderrlog::new().verbosity(args.verbose as usize).init() {
        eprintln!("cannot initialize logger: {e}");
    }

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    if let Err(e) = session::replay(stdin, stdout, |n| args.algorithm.build(n)) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
