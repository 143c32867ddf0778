mod aggregate;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::aggregate::PercentileKind;
use crate::input::load_questions;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_aggregate::run_stage2;
use crate::pipeline::stage3_metrics::{MetricsScope, Stage3Inputs, run_stage3};
use crate::pipeline::stage4_report::{ReportMode, write_reports};
use crate::report::text::render_metrics_block;
use crate::report::{InputMeta, MetricsSummary, ToolMeta};

const TOOL_NAME: &str = "caliber-boardsqc";

/// Board-exam scenario scoring from question-level CSV exports
#[derive(Debug, Parser)]
#[command(name = "caliber-boardsqc", version)]
struct Cli {
    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one entered result against a scenario's candidates
    Run {
        /// Per-question candidate scores (.csv or .csv.gz)
        #[arg(long)]
        questions: PathBuf,
        /// Per-scenario summary table (.csv or .csv.gz)
        #[arg(long)]
        summary: PathBuf,
        /// Scenario to compare against
        #[arg(long)]
        scenario: String,
        /// Number of correct answers entered by the user
        #[arg(long)]
        score: f64,
        /// Directory for metrics.json, report.txt and scenarios.tsv
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ReportMode::Scenario)]
        mode: ReportMode,
        #[arg(long = "percentile-kind", value_enum, default_value_t = PercentileKind::Mean)]
        percentile_kind: PercentileKind,
    },
    /// List the scenarios present in the question table
    Scenarios {
        #[arg(long)]
        questions: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    questions: PathBuf,
    summary: PathBuf,
    scenario: String,
    score: f64,
    out_dir: Option<PathBuf>,
    report_mode: ReportMode,
    percentile_kind: PercentileKind,
}

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Run(RunConfig),
    Scenarios { questions: PathBuf },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let result = into_action(cli.command).and_then(|action| match action {
        Action::Run(config) => run(&config),
        Action::Scenarios { questions } => list_scenarios(&questions),
    });
    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn into_action(command: Command) -> Result<Action, String> {
    match command {
        Command::Run {
            questions,
            summary,
            scenario,
            score,
            out,
            mode,
            percentile_kind,
        } => {
            validate_score(score)?;
            Ok(Action::Run(RunConfig {
                questions,
                summary,
                scenario,
                score,
                out_dir: out,
                report_mode: mode,
                percentile_kind,
            }))
        }
        Command::Scenarios { questions } => Ok(Action::Scenarios { questions }),
    }
}

fn validate_score(score: f64) -> Result<(), String> {
    if !score.is_finite() {
        return Err(format!("invalid --score {score}: must be a finite number"));
    }
    if score < 0.0 {
        return Err(format!("invalid --score {score}: must be non-negative"));
    }
    Ok(())
}

fn run(config: &RunConfig) -> Result<(), String> {
    let bundle = run_stage1(&config.questions, &config.summary).map_err(|e| e.to_string())?;
    let questions_path = bundle.questions_path.display().to_string();
    let summary_path = bundle.summary_path.display().to_string();
    let state = run_stage2(bundle);

    let scope = match config.report_mode {
        ReportMode::Scenario => MetricsScope::Selected,
        ReportMode::All => MetricsScope::AllScenarios,
    };
    let stage3 = run_stage3(&Stage3Inputs {
        state: &state,
        scenario: &config.scenario,
        score: config.score,
        kind: config.percentile_kind,
        scope,
    });

    print!("{}", render_metrics_block(&stage3.selected));

    if let Some(out_dir) = &config.out_dir {
        let summary = MetricsSummary {
            tool: ToolMeta {
                name: TOOL_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            input: InputMeta {
                questions: questions_path,
                summary: summary_path,
                state_version: state.version(),
            },
            load: state.stats().clone(),
            selected: stage3.selected,
            scenarios: stage3.per_scenario,
        };
        write_reports(&summary, out_dir).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn list_scenarios(questions: &std::path::Path) -> Result<(), String> {
    let records = load_questions(questions).map_err(|e| e.to_string())?;
    let state = aggregate::load(records, Vec::new());
    for name in state.scenario_names() {
        println!("{name}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
