use super::*;

fn parse(args: &[&str]) -> Result<Action, String> {
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
    into_action(cli.command)
}

const BASE: &[&str] = &[
    "caliber-boardsqc",
    "run",
    "--questions",
    "data.csv",
    "--summary",
    "AverageQuestion.csv",
    "--scenario",
    "Breast - Benign",
];

fn with(extra: &[&'static str]) -> Vec<&'static str> {
    let mut args = BASE.to_vec();
    args.extend_from_slice(extra);
    args
}

#[test]
fn test_parse_run_defaults() {
    let action = parse(&with(&["--score", "12"])).unwrap();
    let Action::Run(config) = action else {
        panic!("expected run action");
    };
    assert_eq!(config.scenario, "Breast - Benign");
    assert_eq!(config.score, 12.0);
    assert_eq!(config.report_mode, ReportMode::Scenario);
    assert_eq!(config.percentile_kind, PercentileKind::Mean);
    assert_eq!(config.out_dir, None);
}

#[test]
fn test_parse_run_all_mode_and_kind() {
    let action = parse(&with(&[
        "--score",
        "3",
        "--mode",
        "all",
        "--percentile-kind",
        "rank",
        "--out",
        "out",
    ]))
    .unwrap();
    let Action::Run(config) = action else {
        panic!("expected run action");
    };
    assert_eq!(config.report_mode, ReportMode::All);
    assert_eq!(config.percentile_kind, PercentileKind::Rank);
    assert_eq!(config.out_dir, Some(PathBuf::from("out")));
}

#[test]
fn test_negative_score_rejected() {
    let err = parse(&with(&["--score=-1"])).unwrap_err();
    assert!(err.contains("non-negative"));
}

#[test]
fn test_nan_score_rejected() {
    assert!(parse(&with(&["--score", "NaN"])).is_err());
}

#[test]
fn test_missing_score_rejected() {
    assert!(parse(BASE).is_err());
}

#[test]
fn test_parse_scenarios_command() {
    let action = parse(&["caliber-boardsqc", "scenarios", "--questions", "q.csv"]).unwrap();
    assert_eq!(
        action,
        Action::Scenarios {
            questions: PathBuf::from("q.csv")
        }
    );
}
