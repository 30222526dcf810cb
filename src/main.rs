use std::io::Write;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info, Level};

use treelab::explain;
use treelab::problem::{self, TreeKind};
use treelab::{Snapshot, Tree};

/// Build, mutate, and print small binary trees.
#[derive(Parser, Debug)]
#[command(version, about = "Step through binary tree construction and deletion.")]
struct Cli {
    /// Print snapshots as JSON instead of drawing them.
    #[arg(long, global = true)]
    json: bool,

    /// Log more. Repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert values one by one into a BST, then delete some.
    Bst {
        #[arg(name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i32>,
        /// A value to delete after building. May be repeated.
        #[arg(short, long = "delete", allow_negative_numbers = true)]
        deletions: Vec<i32>,
    },
    /// Build a balanced tree from the sorted values.
    Balanced {
        #[arg(name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// List the problems, or show the steps of one.
    Problem {
        #[arg(name = "ID")]
        id: Option<String>,
    },
    /// Print the prompt asking about one step of a problem.
    Prompt {
        #[arg(name = "ID")]
        id: String,
        /// Which step of the problem to ask about, starting at 0.
        #[arg(short, long, default_value_t = 0)]
        step: usize,
        #[arg(name = "QUESTION", required = true)]
        question: Vec<String>,
    },
    /// Print the prompt asking how a tree is built from a sequence.
    Solve {
        #[arg(short, long, value_enum, default_value_t = Kind::Bst)]
        kind: Kind,
        #[arg(name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i32>,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum Kind {
    Bst,
    Avl,
}

impl From<Kind> for TreeKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Bst => TreeKind::Bst,
            Kind::Avl => TreeKind::Avl,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    debug!("{:?}", cli);

    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

/// Carries out `cli`'s command, writing everything it prints to `out`.
fn run(cli: Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    match cli.command {
        Command::Bst { values, deletions } => {
            let steps = problem::bst_steps(&values, &deletions);
            write_snapshots(out, &steps, cli.json)?;
        }
        Command::Balanced { values } => {
            let steps = [Snapshot::new("Balanced tree", Tree::balanced(&values))];
            write_snapshots(out, &steps, cli.json)?;
        }
        Command::Problem { id: None } => {
            let problems = problem::problems();
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&problems)?)?;
            } else {
                for p in problems {
                    writeln!(out, "{}\t{}", p.id, p.title)?;
                }
            }
        }
        Command::Problem { id: Some(id) } => {
            let problem = problem::find(&id).with_context(|| format!("no problem with id {id:?}"))?;
            info!("Showing {}", problem.title);
            if !cli.json {
                writeln!(out, "{}\n{}\n", problem.title, problem.description)?;
            }
            write_snapshots(out, &problem.steps(), cli.json)?;
        }
        Command::Prompt { id, step, question } => {
            let problem = problem::find(&id).with_context(|| format!("no problem with id {id:?}"))?;
            let steps = problem.steps();
            let Some(snapshot) = steps.get(step) else {
                bail!("{} has {} steps, there is no step {}", problem.id, steps.len(), step);
            };
            let prompt = explain::structure_prompt(problem.title, &snapshot.root, &question.join(" "))?;
            write!(out, "{}", prompt)?;
        }
        Command::Solve { kind, values } => {
            write!(out, "{}", explain::sequence_prompt(&values, kind.into()))?;
        }
    }

    Ok(())
}

fn write_snapshots(out: &mut dyn Write, steps: &[Snapshot], json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(steps)?)?;
    } else {
        let drawn: Vec<String> = steps.iter().map(Snapshot::to_string).collect();
        write!(out, "{}", drawn.join("\n"))?;
    }
    Ok(())
}
