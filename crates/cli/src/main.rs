use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dividemerge::api::{
    build_subdivision, build_subdivision_observed, draw_point_set, sort_points, PointCount,
    PointSetCfg, Primitive, ReplayToken, StepLog, Subdivision, MAX_POINTS,
};
use dividemerge::{Point, RegionCfg};
use polars::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::PointSet;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Proximity subdivision runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Subdivide every point set of a CSV/Parquet table and write results JSON
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Side length of the square working region
        #[arg(long, default_value_t = dividemerge::geom2::DEFAULT_BOUND)]
        bound: f64,
        /// Also dump step snapshots per set to this JSON file
        #[arg(long)]
        steps: Option<PathBuf>,
    },
    /// Draw reproducible random point sets into a CSV table
    Generate {
        /// Points per set; uniform in 2..=6 when omitted
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, default_value_t = 1)]
        sets: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = dividemerge::geom2::DEFAULT_BOUND)]
        bound: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            bound,
            steps,
        } => run(&input, &out, bound, steps.as_deref()),
        Action::Generate {
            count,
            sets,
            seed,
            bound,
            out,
        } => generate(count, sets, seed, bound, &out),
        Action::Report => report(),
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Outcome {
    Ok {
        canonical_hull: Vec<[i64; 4]>,
        subdivision: Subdivision,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Serialize)]
struct SetReport {
    set: i64,
    points: Vec<Point>,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Debug, Serialize)]
struct SetSteps {
    set: i64,
    snapshots: Vec<Vec<Primitive>>,
}

/// Subdivide each set independently; a failing set does not stop the batch.
fn process_sets(
    sets: Vec<PointSet>,
    cfg: &RegionCfg,
    want_steps: bool,
) -> (Vec<SetReport>, Vec<SetSteps>) {
    let mut reports = Vec::with_capacity(sets.len());
    let mut steps = Vec::new();
    for set in sets {
        let points = sort_points(&set.points);
        let mut log = StepLog::default();
        let res = if want_steps {
            build_subdivision_observed(&points, cfg, &mut log)
        } else {
            build_subdivision(&points, cfg)
        };
        let outcome = match res {
            Ok(sub) => {
                tracing::info!(
                    set = set.id,
                    points = points.len(),
                    hull = sub.hull.len(),
                    links = sub.chain.len(),
                    stopped_early = ?sub.chain.stopped_early,
                    "set_done"
                );
                Outcome::Ok {
                    canonical_hull: sub.canonical_hull(),
                    subdivision: sub,
                }
            }
            Err(err) => {
                tracing::warn!(set = set.id, points = points.len(), %err, "set_failed");
                Outcome::Failed {
                    error: err.to_string(),
                }
            }
        };
        if want_steps {
            steps.push(SetSteps {
                set: set.id,
                snapshots: log.snapshots,
            });
        }
        reports.push(SetReport {
            set: set.id,
            points,
            outcome,
        });
    }
    (reports, steps)
}

fn run(input: &Path, out: &Path, bound: f64, steps: Option<&Path>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), bound, "run");
    let cfg = RegionCfg::with_bound(bound);
    if !cfg.is_valid() {
        bail!("invalid --bound {bound}");
    }
    let sets = input::load_point_sets(input)?;
    let (reports, snapshots) = process_sets(sets, &cfg, steps.is_some());
    let failed = reports
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Failed { .. }))
        .count();
    let incomplete = reports
        .iter()
        .filter(|r| match &r.outcome {
            Outcome::Ok { subdivision, .. } => !subdivision.chain.is_complete(),
            Outcome::Failed { .. } => false,
        })
        .count();
    tracing::info!(sets = reports.len(), failed, incomplete, "run_done");

    write_json(out, &reports)?;
    let params = serde_json::json!({
        "bound": bound,
        "max_points": MAX_POINTS,
        "sets": reports.len(),
        "failed": failed,
        "incomplete_chains": incomplete,
    });
    provenance::write_sidecar(out, Payload::new(params.clone()).with_input(input))?;

    if let Some(path) = steps {
        write_json(path, &snapshots)?;
        provenance::write_sidecar(path, Payload::new(params).with_input(input))?;
    }
    Ok(())
}

fn generate(count: Option<usize>, sets: u64, seed: u64, bound: f64, out: &Path) -> Result<()> {
    tracing::info!(?count, sets, seed, bound, out = %out.display(), "generate");
    let region = RegionCfg::with_bound(bound);
    if !region.is_valid() {
        bail!("invalid --bound {bound}");
    }
    let cfg = PointSetCfg {
        count: match count {
            Some(n) => PointCount::Fixed(n),
            None => PointCount::Uniform { min: 2, max: MAX_POINTS },
        },
        ..PointSetCfg::default()
    };
    let drawn = (0..sets)
        .map(|index| {
            let points = draw_point_set(cfg, &region, ReplayToken { seed, index })
                .with_context(|| format!("region too small for set {index}"))?;
            Ok(PointSet {
                id: index as i64,
                points,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut df = input::frame_from_point_sets(&drawn)?;
    ensure_parent(out)?;
    let mut file = std::fs::File::create(out)
        .with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "count": count,
        "sets": sets,
        "seed": seed,
        "bound": bound,
    });
    provenance::write_sidecar(out, Payload::new(params))?;
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["params"] = serde_json::json!({ "max_points": MAX_POINTS });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn set(id: i64, pts: &[(f64, f64)]) -> PointSet {
        PointSet {
            id,
            points: pts.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    #[test]
    fn failing_sets_do_not_stop_the_batch() {
        let sets = vec![
            set(0, &[(10.0, 0.0), (0.0, 0.0)]),
            set(1, &[(5.0, 5.0)]),
            set(2, &[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]),
        ];
        let (reports, steps) = process_sets(sets, &RegionCfg::default(), false);
        assert!(steps.is_empty());
        assert_eq!(reports.len(), 3);
        // Input order within a set does not matter; points are sorted first.
        assert_eq!(reports[0].points[0], Point::new(0.0, 0.0));
        assert!(matches!(
            &reports[0].outcome,
            Outcome::Ok { canonical_hull, .. } if canonical_hull.len() == 1
        ));
        assert!(matches!(
            &reports[1].outcome,
            Outcome::Failed { error } if error.contains("insufficient")
        ));
        assert!(matches!(
            &reports[2].outcome,
            Outcome::Ok { subdivision, .. } if subdivision.hull.len() == 3
        ));
    }

    #[test]
    fn steps_are_collected_per_set() {
        let sets = vec![set(7, &[(0.0, 0.0), (10.0, 0.0)])];
        let (_, steps) = process_sets(sets, &RegionCfg::default(), true);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].set, 7);
        assert_eq!(steps[0].snapshots[0], vec![Primitive::Clear]);
    }

    #[test]
    fn run_writes_results_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.csv");
        fs::write(
            &input,
            "set,x,y\n0,0,0\n0,2,6\n0,5,2\n0,15,3\n0,18,7\n0,20,1\n1,3,3\n\
             2,0,0\n2,10,0\n2,20,0\n2,30,0\n",
        )
        .unwrap();
        let out = dir.path().join("out/result.json");
        let steps = dir.path().join("out/steps.json");
        run(&input, &out, 600.0, Some(&steps)).unwrap();

        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed[0]["status"], "ok");
        assert_eq!(parsed[0]["canonical_hull"][1], serde_json::json!([2, 6, 18, 7]));
        assert_eq!(parsed[1]["status"], "failed");
        // Collinear set: the chain stops after its first link.
        assert_eq!(parsed[2]["status"], "ok");
        assert_eq!(parsed[2]["subdivision"]["chain"]["stopped_early"], 0);
        assert_eq!(parsed[0]["subdivision"]["chain"]["stopped_early"], Value::Null);

        let sidecar = dir.path().join("out/result.provenance.json");
        let prov: Value = serde_json::from_slice(&fs::read(&sidecar).unwrap()).unwrap();
        assert_eq!(prov["params"]["failed"], 1);
        assert_eq!(prov["params"]["incomplete_chains"], 1);
        assert!(steps.exists());
    }

    #[test]
    fn generate_then_run_round_trip() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("gen.csv");
        generate(Some(4), 3, 9, 600.0, &csv).unwrap();
        let sets = input::load_point_sets(&csv).unwrap();
        assert_eq!(sets.len(), 3);
        assert!(sets.iter().all(|s| s.points.len() == 4));
        let out = dir.path().join("res.json");
        run(&csv, &out, 600.0, None).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(3));
    }
}
