//! CLI probe for the questlog derivation engine.
//!
//! # Responsibility
//! - Load a snapshot document, derive the dashboard, print it.
//! - Keep output deterministic when `--today` is given, for quick local
//!   sanity checks without a running store.

use questlog_core::{
    derive_dashboard, load_snapshot, CalendarDay, DashboardModel, FileSnapshotSource,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (snapshot_path, today) = parse_args(&args)?;

    let source = FileSnapshotSource::open(&snapshot_path).map_err(|err| err.to_string())?;
    let snapshot = load_snapshot(&source).map_err(|err| err.to_string())?;
    let model = derive_dashboard(&snapshot, today).map_err(|err| err.to_string())?;

    print_model(today, &model);
    Ok(())
}

fn parse_args(args: &[String]) -> Result<(String, CalendarDay), String> {
    let mut snapshot_path = None;
    let mut today = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--today" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--today requires a YYYY-MM-DD value".to_string())?;
                today = Some(CalendarDay::parse(value).map_err(|err| err.to_string())?);
            }
            "--help" | "-h" => {
                return Err("usage: questlog_cli <snapshot.json> [--today YYYY-MM-DD]".to_string())
            }
            path if snapshot_path.is_none() => snapshot_path = Some(path.to_string()),
            extra => return Err(format!("unexpected argument `{extra}`")),
        }
    }

    let snapshot_path = snapshot_path
        .ok_or_else(|| "usage: questlog_cli <snapshot.json> [--today YYYY-MM-DD]".to_string())?;
    Ok((snapshot_path, today.unwrap_or_else(CalendarDay::today)))
}

fn print_model(today: CalendarDay, model: &DashboardModel) {
    println!("questlog_core version={}", questlog_core::core_version());
    println!("day={today}");
    println!(
        "today_xp={} tasks={}/{} streak={}",
        model.today_xp, model.tasks_completed_today, model.total_tasks_today, model.streak
    );
    for point in &model.weekly_xp {
        println!("  {} {} xp={}", point.day_label, point.date, point.xp);
    }
    for task in &model.open_tasks {
        let title = task
            .task
            .fields
            .title
            .as_deref()
            .or_else(|| task.definition.as_ref().and_then(|d| d.fields.title.as_deref()))
            .unwrap_or("(untitled)");
        println!("  open: {title} (+{} XP)", task.xp_reward);
    }
    for entry in &model.recent_entries {
        println!(
            "  entry: {} at={}",
            entry.fields.title.as_deref().unwrap_or("(untitled)"),
            entry.fields.occurred_at.as_deref().unwrap_or("-")
        );
    }
}
