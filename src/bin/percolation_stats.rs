//! モンテカルロ法でパーコレーション閾値を推定する.
//! Arguments:
//! - n: 盤面の一辺の長さ
//! - trials: 試行回数

use clap::Parser;
use percolation::PercolationStats;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 盤面の一辺の長さ
    n: usize,
    /// 試行回数
    trials: usize,
    /// 乱数のシード. 省略するとスレッドローカルな乱数を使う
    #[arg(short, long)]
    seed: Option<u64>,
    /// ログの詳細度 (-v, -vv, ...)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = stderrlog::new().verbosity(args.verbose as usize).init() {
        eprintln!("cannot initialize logger: {e}");
    }

    let stats = match args.seed {
        Some(seed) => {
            PercolationStats::with_rng(args.n, args.trials, &mut StdRng::seed_from_u64(seed))
        }
        None => PercolationStats::new(args.n, args.trials),
    };
    let stats = match stats {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("mean                    = {:.16}", stats.mean());
    println!("stddev                  = {:.16}", stats.stddev());
    println!(
        "95% confidence interval = [{:.16}, {:.16}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );
}
