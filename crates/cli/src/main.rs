use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use foldratio::plan::{fold_list_with, FoldPlan};
use foldratio::solver::{solve_ranked, SolveCfg, DEFAULT_BEAM_WIDTH};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "foldratio-cli")]
#[command(about = "Find fold sequences that mark a ratio on a square sheet")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve for a target and print or write the plan as JSON
    Solve {
        #[command(flatten)]
        search: SearchArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Solve, then print step-by-step instructions (JSON frames with --out)
    Steps {
        #[command(flatten)]
        search: SearchArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the K-best sequences as a table (.csv or .parquet)
    Table {
        #[command(flatten)]
        search: SearchArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug, Serialize)]
struct SearchArgs {
    /// Target ratio in (0, 1)
    #[arg(long)]
    target: f64,
    /// Number of moves
    #[arg(long, default_value_t = 1)]
    folds: usize,
    /// Size of the K-best list
    #[arg(long, default_value_t = DEFAULT_BEAM_WIDTH)]
    beam: usize,
    /// Refuse searches with more leaves than this
    #[arg(long)]
    max_leaves: Option<u64>,
    /// Spread the top-level subtrees over worker threads
    #[arg(long)]
    parallel: bool,
}

impl SearchArgs {
    fn cfg(&self) -> SolveCfg {
        SolveCfg {
            beam_width: self.beam,
            max_leaves: self.max_leaves,
            parallel: self.parallel,
        }
    }

    /// Recorded in provenance sidecars; the library version is added there.
    fn params(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { search, out } => solve(&search, out.as_deref()),
        Action::Steps { search, out } => steps(&search, out.as_deref()),
        Action::Table { search, out } => table(&search, &out),
        Action::Report => report(),
    }
}

fn plan_for(search: &SearchArgs) -> Result<FoldPlan> {
    fold_list_with(search.target, search.folds, &search.cfg())
        .with_context(|| format!("solving for target {}", search.target))
}

fn solve(search: &SearchArgs, out: Option<&Path>) -> Result<()> {
    let plan = plan_for(search)?;
    tracing::info!(moves = ?plan.sequence.moves, difference = plan.sequence.difference, "solve");
    let body = serde_json::to_vec_pretty(&plan)?;
    match out {
        Some(path) => write_artifact(path, &body, search.params()?),
        None => {
            println!("{}", String::from_utf8_lossy(&body));
            Ok(())
        }
    }
}

fn steps(search: &SearchArgs, out: Option<&Path>) -> Result<()> {
    let plan = plan_for(search)?;
    let ins = plan.instructions();
    tracing::info!(frames = ins.frames.len(), "steps");
    if let Some(path) = out {
        let body = serde_json::to_vec_pretty(&ins)?;
        write_artifact(path, &body, search.params()?)?;
    }
    for (i, frame) in ins.frames.iter().enumerate() {
        let label = match frame.source {
            Some(mv) => format!("move {mv}"),
            None => "setup".to_string(),
        };
        println!("{}. ({label})", i + 1);
        for line in frame.step.description_lines() {
            println!("   {}", line.trim());
        }
    }
    println!("{}", plan.summary);
    Ok(())
}

fn table(search: &SearchArgs, out: &Path) -> Result<()> {
    let ranked = solve_ranked(search.target, search.folds, &search.cfg())
        .with_context(|| format!("solving for target {}", search.target))?;
    tracing::info!(rows = ranked.len(), out = %out.display(), "table");
    ensure_parent(out)?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("csv") => table::write_csv(&ranked, out)?,
        Some("parquet") => table::write_parquet(&ranked, out)?,
        _ => bail!("unsupported table extension: {}", out.display()),
    }
    write_sidecar(out, Payload::new(search.params()?))?;
    Ok(())
}

fn report() -> Result<()> {
    tracing::info!("report");
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": foldratio::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_artifact(path: &Path, body: &[u8], params: Value) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    write_sidecar(path, Payload::new(params))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}
