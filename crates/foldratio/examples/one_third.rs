//! Print folding instructions for a ratio (default 1/3).
//!
//! Usage: cargo run -p foldratio --example one_third -- [target] [folds]

use foldratio::plan::get_fold_list;

fn main() {
    let mut args = std::env::args().skip(1);
    let target: f64 = args
        .next()
        .map(|s| s.parse().expect("target must be a number"))
        .unwrap_or(1.0 / 3.0);
    let folds: usize = args
        .next()
        .map(|s| s.parse().expect("folds must be an integer"))
        .unwrap_or(1);

    let plan = get_fold_list(target, folds).expect("valid target and fold count");
    println!("moves={:?}", plan.sequence.moves);
    println!("{}", plan.summary);
    let ins = plan.instructions();
    for (i, frame) in ins.frames.iter().enumerate() {
        println!("step {}:", i + 1);
        for line in frame.step.description_lines() {
            println!("  {}", line.trim());
        }
    }
    println!(
        "landmark at ({:.6}, {:.6}) on the sheet",
        ins.landmark_point.x, ins.landmark_point.y
    );
}
