use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{Family, ProductKind};

#[derive(Parser)]
#[command(name = "polyrank")]
#[command(about = "Build, combine and inspect ranked polytopes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a primitive polytope and write it as JSON
    Build {
        #[command(subcommand)]
        family: FamilyArg,
        /// Output file; stdout when omitted
        #[arg(long, global = true)]
        out: Option<PathBuf>,
    },
    /// Combine polytope files with a product operator
    Product {
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Apex-axis distance between the factors of a pyramid product
        #[arg(long, default_value_t = 1.0)]
        height: f64,
        /// Operand files, combined right to left
        inputs: Vec<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Join same-rank polytope files into a compound
    Compound {
        inputs: Vec<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Grow the pyramid over a polytope by in-place extrusion
    Extrude {
        input: PathBuf,
        #[arg(long, default_value_t = 1.0)]
        height: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print rank, dimension, element counts and construction of a file
    Info { input: PathBuf },
}

#[derive(Subcommand)]
enum FamilyArg {
    Point,
    Dyad,
    Hypercube { d: usize },
    Simplex { d: usize },
    Cross { d: usize },
    Polygon {
        n: usize,
        d: usize,
        #[arg(long, default_value_t = 1.0)]
        edge: f64,
    },
    Antiprism { n: usize, d: usize },
    Cupola { n: usize, d: usize },
    Cuploid { n: usize, d: usize },
    Blend { n: usize, d: usize },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Prism,
    Tegum,
    Pyramid,
}

impl From<FamilyArg> for Family {
    fn from(f: FamilyArg) -> Self {
        match f {
            FamilyArg::Point => Family::Point,
            FamilyArg::Dyad => Family::Dyad,
            FamilyArg::Hypercube { d } => Family::Hypercube(d),
            FamilyArg::Simplex { d } => Family::Simplex(d),
            FamilyArg::Cross { d } => Family::Cross(d),
            FamilyArg::Polygon { n, d, edge } => Family::Polygon { n, d, edge },
            FamilyArg::Antiprism { n, d } => Family::Antiprism { n, d },
            FamilyArg::Cupola { n, d } => Family::Cupola { n, d },
            FamilyArg::Cuploid { n, d } => Family::Cuploid { n, d },
            FamilyArg::Blend { n, d } => Family::Blend { n, d },
        }
    }
}

impl From<KindArg> for ProductKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Prism => ProductKind::Prism,
            KindArg::Tegum => ProductKind::Tegum,
            KindArg::Pyramid => ProductKind::Pyramid,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Build { family, out } => {
            let poly = commands::build(family.into())?;
            commands::emit(&poly, out.as_deref())
        }
        Action::Product {
            kind,
            height,
            inputs,
            out,
        } => {
            let poly = commands::product(kind.into(), height, &inputs)?;
            commands::emit(&poly, out.as_deref())
        }
        Action::Compound { inputs, out } => {
            let poly = commands::compound(&inputs)?;
            commands::emit(&poly, out.as_deref())
        }
        Action::Extrude { input, height, out } => {
            let mut poly = commands::read_polytope(&input)?;
            poly.extrude_apex(height);
            commands::emit(&poly, out.as_deref())
        }
        Action::Info { input } => {
            let poly = commands::read_polytope(&input)?;
            println!("{}", serde_json::to_string_pretty(&commands::info(&poly)?)?);
            Ok(())
        }
    }
}
