//! Reading k-center instances in the OR-Library p-median format and dumping solutions.
//!
//! The first non blank line holds 3 integers : number of vertices, number of edges and number of centers.
//! Each following line describes an edge as `u v w` with u and v numbered from 1.
//! Blank lines are skipped, malformed lines and self loops are logged and skipped.
//! When an edge appears more than once, the last occurrence wins.
//!
//! The graph is stored as a dense matrix, so the number of vertices is bounded by
//! [MAX_NB_VERTICES].

use anyhow::{Context, anyhow};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use kcenter::prelude::*;

/// Largest number of vertices accepted in a header: the n*n adjacency and distance
/// matrices take 16 bytes per entry, i.e. 1 Gb each at this bound.
pub const MAX_NB_VERTICES: usize = 8192;

/// A graph and the number of centers asked for.
pub struct Instance {
    graph: Graph,
    nb_edges_declared: usize,
    nb_edges_read: usize,
    nb_centers: usize,
}

impl Instance {
    pub fn get_graph(&self) -> &Graph {
        &self.graph
    }

    /// number of edges announced in header
    pub fn get_nb_edges_declared(&self) -> usize {
        self.nb_edges_declared
    }

    /// number of edge lines stored in the graph
    pub fn get_nb_edges_read(&self) -> usize {
        self.nb_edges_read
    }

    pub fn get_nb_centers(&self) -> usize {
        self.nb_centers
    }
} // end of impl Instance

/// open and parse an instance file
pub fn read_instance(path: &Path) -> anyhow::Result<Instance> {
    log::info!("reading instance from {:?}", path);
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .with_context(|| format!("cannot open instance file {:?}", path))?;
    parse_instance(BufReader::new(file))
}

/// parse an instance from any buffered reader
pub fn parse_instance<R: BufRead>(reader: R) -> anyhow::Result<Instance> {
    // line numbers are 1-based for messages
    let mut lines = reader.lines().enumerate().map(|(num, line)| (num + 1, line));
    //
    let header = loop {
        let (_, line) = lines
            .next()
            .ok_or_else(|| anyhow!("empty instance, no header line"))?;
        let line = line?;
        if !line.trim().is_empty() {
            break line;
        }
    };
    let header_fields: Vec<&str> = header.split_whitespace().collect();
    if header_fields.len() < 3 {
        return Err(anyhow!(
            "bad header line {:?}, expecting nb_vertices nb_edges nb_centers",
            header.trim()
        ));
    }
    let nb_vertices: usize = header_fields[0]
        .parse()
        .with_context(|| format!("bad number of vertices {:?}", header_fields[0]))?;
    let nb_edges_declared: usize = header_fields[1]
        .parse()
        .with_context(|| format!("bad number of edges {:?}", header_fields[1]))?;
    let nb_centers: usize = header_fields[2]
        .parse()
        .with_context(|| format!("bad number of centers {:?}", header_fields[2]))?;
    log::info!(
        "instance header nb vertices : {}, nb edges : {}, k : {}",
        nb_vertices,
        nb_edges_declared,
        nb_centers
    );
    if nb_vertices > MAX_NB_VERTICES {
        return Err(anyhow!(
            "too many vertices {}, dense matrices are limited to {} vertices",
            nb_vertices,
            MAX_NB_VERTICES
        ));
    }
    //
    let mut graph = Graph::new(nb_vertices);
    let mut nb_edges_read = 0;
    for (num, line) in lines {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((u, v, w)) = parse_edge(line) else {
            log::warn!("skipping malformed line {} : {:?}", num, line);
            continue;
        };
        // vertices are numbered from 1 in file
        if u == 0 || v == 0 {
            log::warn!("skipping line {}, vertex 0 in 1-based numbering : {:?}", num, line);
            continue;
        }
        if u == v {
            log::warn!("skipping self loop line {} : {:?}", num, line);
            continue;
        }
        match graph.add_edge(u - 1, v - 1, w) {
            Ok(()) => nb_edges_read += 1,
            Err(e) => log::warn!("skipping line {} : {}", num, e),
        }
    }
    if nb_edges_read != nb_edges_declared {
        log::warn!(
            "header declares {} edges, {} read",
            nb_edges_declared,
            nb_edges_read
        );
    }
    //
    Ok(Instance {
        graph,
        nb_edges_declared,
        nb_edges_read,
        nb_centers,
    })
} // end of parse_instance

// exactly 3 integer fields
fn parse_edge(line: &str) -> Option<(usize, usize, u64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return None;
    }
    let u = fields[0].parse::<usize>().ok()?;
    let v = fields[1].parse::<usize>().ok()?;
    let w = fields[2].parse::<u64>().ok()?;
    Some((u, v, w))
}

//========================================================================================

/// A row of the solution dump
#[derive(Serialize)]
struct CenterRecord<'a> {
    algo: &'a str,
    rank: usize,
    /// 1-based as in instance file
    vertex: usize,
    radius: String,
}

/// Dumps solutions in a csv file with columns algo,rank,vertex,radius. One row per center,
/// vertices numbered from 1. Returns the number of records written.
pub fn dump_solutions(path: &Path, solutions: &[(&str, &Solution)]) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create dump file {:?}", path))?;
    let mut nb_record = 0;
    for &(algo, solution) in solutions {
        let radius = solution.get_radius().to_string();
        for (rank, c) in solution.get_centers().iter().enumerate() {
            wtr.serialize(CenterRecord {
                algo,
                rank,
                vertex: c + 1,
                radius: radius.clone(),
            })?;
            nb_record += 1;
        }
    }
    wtr.flush()?;
    log::info!("dumped solutions in {:?}, nb_record : {}", path, nb_record);
    Ok(nb_record)
} // end of dump_solutions

//========================================================================================

// end of mod tests
