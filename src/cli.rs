// src/cli.rs
use std::env;
use std::error::Error;

use crate::config::{self, options::ExportFormat};
use crate::export;
use crate::model::MatchResult;
use crate::progress::Progress;
use crate::search;

pub struct Params {
    pub search: String,
    pub endpoint: Option<String>,
    pub out: Option<String>,
    pub formats: Vec<ExportFormat>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            search: s!(),
            endpoint: None,
            out: None,
            formats: Vec::new(),
        }
    }
}

struct CliProgress;
impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn finish(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;

    let mut state = config::file::load();
    if let Some(ep) = &params.endpoint {
        state.options.endpoint = ep.clone();
    }
    if let Some(out) = &params.out {
        state.options.export.set_dir(out);
    }

    let mut prog = CliProgress;
    let hit = search::run_search(&state.options.endpoint, &params.search, Some(&mut prog))?;

    print_result(&hit.stats);

    for format in &params.formats {
        match format {
            ExportFormat::Json => {
                let path =
                    export::write_json(&state.options.export, &params.search, Some(&hit.raw))?;
                println!("Wrote {}", path.display());
            }
            ExportFormat::Csv => {
                if let Some(path) =
                    export::write_csv(&state.options.export, &params.search, Some(&hit.stats))?
                {
                    println!("Wrote {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn print_result(stats: &MatchResult) {
    for team in &stats.teams {
        println!("{}", team.name);
        for p in &team.players {
            println!("  {} - {} kills - {} damage", p.name, p.kills, p.damage);
        }
    }
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::new();
    let mut have_search = false;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--search" => {
                params.search = args.next().ok_or("Missing match id for --search")?;
                have_search = true;
            }
            "--endpoint" => {
                params.endpoint = Some(args.next().ok_or("Missing value for --endpoint")?);
            }
            "-o" | "--out" => {
                params.out = Some(args.next().ok_or("Missing output directory")?);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.formats = match v.to_ascii_lowercase().as_str() {
                    "json" => vec![ExportFormat::Json],
                    "csv" => vec![ExportFormat::Csv],
                    "both" => vec![ExportFormat::Json, ExportFormat::Csv],
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if !have_search {
        return Err("Specify a match id with -s <id>".into());
    }
    Ok(params)
}
