use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use visualaiz::api::{
    calculate_distance, draw_edge_soup, orientation, parse_point, remove_duplicate_edges,
    turn_eps, EdgeSoupCfg, Point, SampleReplay, Turn,
};

mod io;
mod provenance;

use provenance::{Op, Payload};

#[derive(Parser)]
#[command(name = "visualaiz")]
#[command(about = "Geometry kernel runner: distances, orientation, edge de-duplication")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Log at DEBUG instead of INFO
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Euclidean distance between two points given as `x,y`
    Distance {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
    },
    /// Signed orientation (cross product) of the triple a, b, c and its turn
    Orient {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        c: Point,
        /// Orientation magnitudes up to |eps| count as collinear
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        eps: f64,
    },
    /// Remove duplicate undirected edges from a .json or .csv edge list
    Dedup {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a random edge soup (with repeated and reversed edges)
    Sample {
        #[arg(long, default_value_t = 16)]
        vertices: usize,
        #[arg(long, default_value_t = 64)]
        edges: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 10.0)]
        extent: f64,
        /// Grid spacing for endpoints; 0 disables snapping
        #[arg(long, default_value_t = 1.0)]
        snap: f64,
        #[arg(long, default_value_t = 0.5)]
        reverse_prob: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let tag = cmd.tag.as_deref();
    match cmd.action {
        Action::Distance { a, b } => distance(a, b),
        Action::Orient { a, b, c, eps } => orient(a, b, c, eps),
        Action::Dedup { input, out } => dedup(&input, &out, tag),
        Action::Sample {
            vertices,
            edges,
            seed,
            index,
            extent,
            snap,
            reverse_prob,
            out,
        } => {
            let cfg = EdgeSoupCfg {
                vertices,
                edges,
                reverse_prob,
                extent,
                snap,
            };
            sample(cfg, SampleReplay::new(seed, index), &out, tag)
        }
        Action::Report => report(tag),
    }
}

fn distance(a: Point, b: Point) -> Result<()> {
    let d = calculate_distance(a, b);
    tracing::debug!(ax = a.x, ay = a.y, bx = b.x, by = b.y, d, "distance");
    println!("{d}");
    Ok(())
}

fn turn_label(t: Turn) -> &'static str {
    match t {
        Turn::CounterClockwise => "counter_clockwise",
        Turn::Clockwise => "clockwise",
        Turn::Collinear => "collinear",
    }
}

fn orient(a: Point, b: Point, c: Point, eps: f64) -> Result<()> {
    let o = orientation(a, b, c);
    let t = turn_eps(a, b, c, eps);
    tracing::debug!(o, eps, turn = turn_label(t), "orient");
    let obj = json!({
        "orientation": o,
        "turn": turn_label(t),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn dedup(input: &Path, out: &Path, tag: Option<&str>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "dedup");
    let edges = io::read_edges(input)?;
    let unique = remove_duplicate_edges(&edges);
    tracing::debug!(edges = edges.len(), unique = unique.len(), "dedup_counts");
    io::write_edges(out, &unique)?;

    let payload = Payload::new(
        Op::Dedup,
        unique.len(),
        json!({ "input": input.to_string_lossy() }),
    )
    .with_input(edges.len())
    .with_tag(tag);
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(
        removed = edges.len() - unique.len(),
        provenance = %prov.display(),
        "dedup_done"
    );
    Ok(())
}

fn sample(cfg: EdgeSoupCfg, tok: SampleReplay, out: &Path, tag: Option<&str>) -> Result<()> {
    tracing::info!(
        vertices = cfg.vertices,
        edges = cfg.edges,
        seed = tok.seed,
        index = tok.index,
        out = %out.display(),
        tag = ?tag,
        "sample"
    );
    let soup = draw_edge_soup(cfg, tok);
    io::write_edges(out, &soup)?;

    let payload = Payload::new(
        Op::Sample,
        soup.len(),
        json!({
            "vertices": cfg.vertices,
            "edges": cfg.edges,
            "reverse_prob": cfg.reverse_prob,
            "extent": cfg.extent,
            "snap": cfg.snap,
            "seed": tok.seed,
            "index": tok.index
        }),
    )
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<&str>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": visualaiz::VERSION,
        "tags": tag.into_iter().collect::<Vec<_>>(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
