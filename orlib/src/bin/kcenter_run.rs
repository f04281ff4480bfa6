//! Runs exact and/or farthest-first k-center on an OR-Library p-median instance.
//!
//! usage : kcenter_run --instance pmed1.txt [--algo exact|greedy|both] [--k 5] [--parallel]
//!         [--first 3 | --seed 4657] [--dump centers.csv]
//!
//! Vertices are reported numbered from 1 as in the instance file.

use cpu_time::ProcessTime;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use clap::{Arg, ArgAction, ArgMatches, Command};

use kcenter::prelude::*;
use orlib::io::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Algo {
    Exact,
    Greedy,
    Both,
}

/// Command line parameters
struct RunParams {
    instance: PathBuf,
    algo: Algo,
    // overrides k of instance file
    nb_centers: Option<usize>,
    exact_arg: ExactArg,
    greedy_arg: GreedyArg,
    dump: Option<PathBuf>,
}

fn parse_cmd(matches: &ArgMatches) -> Result<RunParams, anyhow::Error> {
    log::debug!("in parse_cmd");
    let instance = matches
        .get_one::<PathBuf>("instance")
        .ok_or_else(|| anyhow::anyhow!("instance file required"))?
        .clone();
    let algo = match matches.get_one::<String>("algo").map(|s| s.as_str()) {
        Some("exact") => Algo::Exact,
        Some("greedy") => Algo::Greedy,
        Some("both") | None => Algo::Both,
        Some(other) => {
            return Err(anyhow::anyhow!(
                "algo must be exact, greedy or both, got {}",
                other
            ));
        }
    };
    let nb_centers = matches.get_one::<usize>("k").copied();
    let exact_arg = ExactArg::new(matches.get_flag("parallel"));
    let seed = match (
        matches.get_one::<usize>("first"),
        matches.get_one::<u64>("seed"),
    ) {
        (Some(0), _) => return Err(anyhow::anyhow!("first center is numbered from 1")),
        (Some(first), _) => SeedVertex::Fixed(*first - 1),
        (None, Some(seed)) => SeedVertex::Random(*seed),
        (None, None) => SeedVertex::default(),
    };
    let dump = matches.get_one::<PathBuf>("dump").cloned();
    //
    Ok(RunParams {
        instance,
        algo,
        nb_centers,
        exact_arg,
        greedy_arg: GreedyArg::new(seed),
        dump,
    })
} // end of parse_cmd

//=====================================================================

fn report(algo: &str, solution: &Solution, dist: &DistanceMatrix, elapsed: Duration) {
    solution.log();
    let centers: Vec<usize> = solution.get_centers().iter().map(|c| c + 1).collect();
    println!("\n {} centers : {:?}", algo, centers);
    println!(" {} radius : {}", algo, solution.get_radius());
    // farthest vertex served by each center
    let radii: Vec<String> = solution
        .cluster_radii(dist)
        .iter()
        .map(|r| r.to_string())
        .collect();
    println!(" {} radius per center : {:?}", algo, radii);
    println!(" {} sys time(ms) {:?}", algo, elapsed.as_millis());
}

// runs a solver and returns its solution with its wall clock duration
fn timed<F: FnOnce() -> Solution>(f: F) -> (Solution, Duration) {
    let sys_now = SystemTime::now();
    let solution = f();
    (solution, sys_now.elapsed().unwrap_or_default())
}

pub fn main() -> anyhow::Result<()> {
    //
    let _ = env_logger::builder().is_test(true).try_init();
    //
    log::info!("\n\n running kcenter_run");
    //
    let matches = Command::new("kcenter_run")
        .arg_required_else_help(true)
        .arg(
            Arg::new("instance")
                .required(true)
                .long("instance")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help("instance file in OR-Library p-median format"),
        )
        .arg(
            Arg::new("algo")
                .long("algo")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("expecting an algo option exact, greedy or both (default)"),
        )
        .arg(
            Arg::new("k")
                .long("k")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("number of centers, overrides the instance header"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("run exact enumeration with rayon"),
        )
        .arg(
            Arg::new("first")
                .long("first")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("first greedy center, numbered from 1"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u64))
                .conflicts_with("first")
                .help("draw first greedy center at random with this seed"),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help("csv file to dump centers in"),
        )
        .get_matches();
    //
    let params = parse_cmd(&matches)?;
    let instance = read_instance(&params.instance)?;
    let nb_centers = params.nb_centers.unwrap_or(instance.get_nb_centers());
    println!(" value of k : {}", nb_centers);
    //
    let cpu_start = ProcessTime::now();
    let sys_now = SystemTime::now();
    //
    let dist = DistanceMatrix::floyd_warshall(instance.get_graph());
    log::info!(
        "distance matrix built, sys time(ms) {:?} cpu time(ms) {:?}",
        sys_now.elapsed().unwrap_or_default().as_millis(),
        cpu_start.elapsed().as_millis()
    );
    if !dist.is_connected() {
        log::warn!(
            "graph is not connected, nb unreachable pairs : {}",
            dist.get_nb_unreachable_pairs()
        );
    }
    let q_dist = dist.quantiles();
    if let (Some(q1), Some(q5), Some(q9)) = (q_dist.query(0.1), q_dist.query(0.5), q_dist.query(0.9)) {
        log::info!(
            "distance quantiles at 0.1 : {:.2e}, 0.5 : {:.2e}, 0.9 : {:.2e}",
            q1.1,
            q5.1,
            q9.1
        );
    }
    // both solvers check their preconditions before running
    let exact = match params.algo {
        Algo::Exact | Algo::Both => Some(ExactSolver::new(&dist, nb_centers)?),
        Algo::Greedy => None,
    };
    let greedy = match params.algo {
        Algo::Greedy | Algo::Both => Some(GreedySelector::new(&dist, nb_centers, params.greedy_arg)?),
        Algo::Exact => None,
    };
    //
    let exact_arg = params.exact_arg;
    let (exact_res, greedy_res) = rayon::join(
        || exact.map(|solver| timed(|| solver.solve_with(&exact_arg))),
        || greedy.map(|selector| timed(|| selector.select())),
    );
    //
    let mut to_dump = Vec::<(&str, &Solution)>::new();
    if let Some((solution, elapsed)) = exact_res.as_ref() {
        report("exact", solution, &dist, *elapsed);
        to_dump.push(("exact", solution));
    }
    if let Some((solution, elapsed)) = greedy_res.as_ref() {
        report("greedy", solution, &dist, *elapsed);
        to_dump.push(("greedy", solution));
    }
    if let (Some((e, _)), Some((g, _))) = (exact_res.as_ref(), greedy_res.as_ref()) {
        if let (Some(re), Some(rg)) = (e.get_radius().finite(), g.get_radius().finite()) {
            if re > 0 {
                println!("\n greedy / exact radius ratio : {:.3}", rg as f64 / re as f64);
            }
        }
    }
    if let Some(path) = params.dump.as_ref() {
        dump_solutions(path, &to_dump)?;
    }
    //
    let cpu_time: Duration = cpu_start.elapsed();
    println!(
        "\n  sys time(ms) {:?} cpu time(ms) {:?}",
        sys_now.elapsed().unwrap_or_default().as_millis(),
        cpu_time.as_millis()
    );
    Ok(())
} // end of main
