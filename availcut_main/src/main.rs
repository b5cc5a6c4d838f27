// AvailCut: Availability Separation for Service Function Chain Placement
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.


//! # AvailCut Main
//!
//! Load an instance from its data files, and replay a solution point through the separation
//! engine. The point file is a json object of the form `{ "values": [[[f64]]] }`, indexed by
//! `[demand][section][node]`.

use availcut::callback::{CallbackContext, ReplayContext};
use availcut::instance::Instance;
use availcut::placement::Placement;
use availcut::separation::SeparationEngine;

use clap::{Parser, Subcommand};
use log::*;
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    let instance = Instance::from_files(
        &args.node_file,
        &args.link_file,
        &args.vnf_file,
        &args.demand_file,
    )?;
    instance.log_summary();

    match args.cmd {
        MainCommand::Info => print_instance(&instance),
        MainCommand::Separate { point, candidate, unbounded, no_lifting } => {
            let engine = SeparationEngine::new(instance).with_lifting(!no_lifting);
            let mut context = if unbounded {
                ReplayContext::unbounded_candidate()
            } else {
                let point = read_point(&point)?;
                if point.num_demands() != engine.instance().num_demands() {
                    warn!(
                        "Point has {} demands, but the instance has {}",
                        point.num_demands(),
                        engine.instance().num_demands()
                    );
                }
                if candidate {
                    ReplayContext::candidate(point)
                } else {
                    ReplayContext::relaxation(point)
                }
            };

            info!("Invoke the separation engine in context {:?}", context.id());
            engine.invoke(&mut context)?;

            for (cut, _) in context.user_cuts() {
                println!("user cut: {}", cut);
            }
            for cut in context.rejections() {
                println!("lazy constraint: {}", cut);
            }
            if candidate && !context.is_rejected() {
                println!("candidate accepted");
            }

            let stats = engine.stats();
            info!(
                "{} user cuts, {} lazy constraints, {:.6}s spent in separation",
                stats.user_cuts, stats.lazy_constraints, stats.separation_time
            );
        }
    }
    Ok(())
}

fn print_instance(instance: &Instance) {
    println!("nodes:");
    for node in instance.nodes() {
        println!("    {}", node);
    }
    println!("vnfs:");
    for vnf in instance.vnfs() {
        println!("    {}", vnf);
    }
    println!("demands:");
    for demand in instance.demands() {
        println!("    {}", demand);
    }
}

fn read_point(filename: &str) -> Result<Placement, Box<dyn Error>> {
    info!("Reading {}", filename);
    let file = BufReader::new(File::open(filename)?);
    let point: PointFile = serde_json::from_reader(file)?;
    Ok(Placement::from_values(point.values))
}

/// Solution point, indexed by `[demand][section][node]`
#[derive(Deserialize, Debug)]
struct PointFile {
    values: Vec<Vec<Vec<f64>>>,
}

/// Command line front end of the availability separation. Reads an instance, and either prints it,
/// or replays a relaxation or candidate point through the separation engine.
#[derive(Parser, Debug)]
#[clap(name = "AvailCut (Binary)", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Node table (name x y capacity availability)
    #[clap(short = 'n', long = "nodes")]
    node_file: String,
    /// Link table (name source target delay bandwidth)
    #[clap(short = 'l', long = "links")]
    link_file: String,
    /// VNF table (name consumption cost_0 .. cost_n)
    #[clap(short = 'f', long = "vnfs")]
    vnf_file: String,
    /// Demand table (name source target latency bandwidth availability vnf1,vnf2,...)
    #[clap(short = 'd', long = "demands")]
    demand_file: String,
    /// Action to perform
    #[clap(subcommand)]
    cmd: MainCommand,
}

#[derive(Subcommand, Debug)]
enum MainCommand {
    /// Print the instance
    #[clap(name = "info")]
    Info,
    /// Replay a point through the separation engine
    #[clap(name = "separate")]
    Separate {
        /// Json file containing the point
        #[clap(short = 'p', long, default_value = "point.json")]
        point: String,
        /// Treat the point as integer candidate instead of a relaxation solution
        #[clap(short = 'c', long)]
        candidate: bool,
        /// Replay a candidate context without a concrete point
        #[clap(short = 'u', long)]
        unbounded: bool,
        /// Do not lift the lazy constraints
        #[clap(long)]
        no_lifting: bool,
    },
}
