// src/cli.rs
//
// Command-line front end. Same session/selection machinery as the GUI;
// `--select` stands in for the checkbox column.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, bail};

use crate::{
    config::{
        consts::CONFIG_FILE,
        options::{AppOptions, ExportFormat, load_options},
    },
    csv::to_export_string,
    file,
    matching::{FuzzyScores, ScoreBand},
    search::{FilterField, SearchFilters, SqlDialect, search_query},
    selection::SelectionSnapshot,
    session::Session,
};

#[derive(Parser)]
#[command(name = "cli", version, about = "Search, select and cross-match NYC procurement records")]
pub struct Cli {
    /// Config file (TOML). A missing file means defaults.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the procurement table; optionally select and export rows.
    Search {
        #[command(flatten)]
        filters: FilterArgs,
        /// Result positions to select, e.g. `0,2,5-7`.
        #[arg(long)]
        select: Option<String>,
        /// Output file or directory (trailing `/`). Stdout when omitted.
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long, value_enum)]
        format: Option<Format>,
        #[arg(long)]
        no_headers: bool,
        /// Print the SQL for the filters instead of running them.
        #[arg(long)]
        sql: bool,
        #[arg(long, value_enum)]
        dialect: Option<Dialect>,
    },
    /// Distinct values of one procurement column.
    Distinct { column: String },
    /// Fuzzy scores for two texts.
    Compare { left: String, right: String },
    /// Link selected descriptions to award titles (Jaro-Winkler).
    Link {
        #[command(flatten)]
        filters: FilterArgs,
        /// Result positions to link. All results when omitted.
        #[arg(long)]
        select: Option<String>,
        #[arg(long)]
        threshold: Option<f64>,
        /// Only compare case-insensitively identical strings.
        #[arg(long)]
        block: bool,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Substring of the services description (case-insensitive).
    #[arg(short, long, default_value = "")]
    keyword: String,
    #[arg(long)]
    agency: Option<String>,
    #[arg(long)]
    method: Option<String>,
    #[arg(long)]
    quarter: Option<String>,
    #[arg(long)]
    job_titles: Option<String>,
    #[arg(long)]
    headcount: Option<String>,
}

impl FilterArgs {
    fn to_filters(&self) -> SearchFilters {
        let mut f = SearchFilters::new().with_keyword(&self.keyword);
        let pairs = [
            (FilterField::Agency, &self.agency),
            (FilterField::ProcurementMethod, &self.method),
            (FilterField::FiscalQuarter, &self.quarter),
            (FilterField::JobTitles, &self.job_titles),
            (FilterField::HeadCount, &self.headcount),
        ];
        for (field, value) in pairs {
            if let Some(v) = value { f.set(field, v); }
        }
        f
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format { Csv, Tsv }

#[derive(Clone, Copy, ValueEnum)]
enum Dialect { Sqlite, Mysql }

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut opts = load_options(&cli.config)?;

    match cli.command {
        Command::Search { filters, select, out, format, no_headers, sql, dialect } => {
            if let Some(fmt) = format {
                opts.export.format = match fmt { Format::Csv => ExportFormat::Csv, Format::Tsv => ExportFormat::Tsv };
            }
            if no_headers { opts.export.include_headers = false; }
            if let Some(d) = dialect {
                opts.data.dialect = match d { Dialect::Sqlite => SqlDialect::Sqlite, Dialect::Mysql => SqlDialect::MySql };
            }
            let filters = filters.to_filters();
            if sql {
                let q = search_query(&opts.data.procurement_table, &filters, opts.data.dialect);
                println!("{}", q.sql);
                println!("params: {:?}", q.params);
                return Ok(());
            }
            search(&mut opts, &filters, select.as_deref(), out.as_deref())
        }
        Command::Distinct { column } => {
            let mut session = Session::open(&opts.data)?;
            let mut stdout = io::stdout().lock();
            for v in session.distinct(&column)? {
                writeln!(stdout, "{v}")?;
            }
            Ok(())
        }
        Command::Compare { left, right } => {
            let scores = FuzzyScores::compare(&left, &right);
            for (label, score) in scores.labeled() {
                println!("{label}: {score} ({:?})", ScoreBand::of(score));
            }
            Ok(())
        }
        Command::Link { filters, select, threshold, block } => {
            if let Some(t) = threshold { opts.linkage.threshold = t; }
            if block { opts.linkage.block_exact = true; }
            opts.validate()?;

            let mut session = Session::open(&opts.data)?;
            let len = session.search(&filters.to_filters())?.len();
            let positions = match select {
                Some(s) => parse_positions(&s)?,
                None => (0..len).collect(),
            };
            select_positions(&mut session, &positions);

            let pairs = session.link(&opts.linkage)?;
            eprintln!("{} link(s) at threshold {:.2}", pairs.len(), opts.linkage.threshold);
            let mut stdout = io::stdout().lock();
            for p in pairs {
                writeln!(stdout, "{:.3}\t{}\t{}", p.score, p.description, p.title)?;
            }
            Ok(())
        }
    }
}

fn search(opts: &mut AppOptions, filters: &SearchFilters, select: Option<&str>, out: Option<&str>) -> Result<()> {
    let mut session = Session::open(&opts.data)?;
    let n = session.search(filters)?.len();
    eprintln!("Found {n} row(s)");

    if let Some(o) = out { opts.export.set_path(o); }
    let export = &opts.export;

    let (headers, rows): (Vec<String>, Vec<Vec<String>>) = match select {
        Some(s) => {
            select_positions(&mut session, &parse_positions(s)?);
            let selected = session.selected();
            if out.is_some() {
                let path = file::export_selected(export, selected)?;
                eprintln!("Exported {} row(s) to {}", selected.len(), path.display());
                return Ok(());
            }
            (selected.headers().map(<[String]>::to_vec).unwrap_or_default(), selected.to_rows())
        }
        None => {
            let Some(rs) = session.results() else { bail!("no results") };
            if out.is_some() {
                let path = file::export_rows(export, "search_results", Some(rs.headers()), rs.rows())?;
                eprintln!("Exported {} row(s) to {}", rs.len(), path.display());
                return Ok(());
            }
            (rs.headers().to_vec(), rs.rows().to_vec())
        }
    };

    let txt = to_export_string(Some(headers.as_slice()), &rows, export.include_headers, export.format.delim());
    io::stdout().lock().write_all(txt.as_bytes())?;
    Ok(())
}

fn select_positions(session: &mut Session, positions: &[usize]) {
    let outcome = session.reconcile(positions.iter().copied().collect::<SelectionSnapshot>());
    for a in &outcome.anomalies {
        eprintln!("warning: {a}");
    }
}

/// `0,2,5-7` -> [0, 2, 5, 6, 7]. Sorted, deduplicated.
fn parse_positions(s: &str) -> Result<Vec<usize>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some(dash) = part.find('-') {
            let a: usize = part[..dash].trim().parse()?;
            let b: usize = part[dash + 1..].trim().parse()?;
            if a > b { bail!("Invalid range: {}", part); }
            out.extend(a..=b);
        } else {
            out.push(part.parse()?);
        }
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_ranges_and_dedup() {
        assert_eq!(parse_positions("5-7, 0,2,6").unwrap(), vec![0, 2, 5, 6, 7]);
        assert!(parse_positions("3-1").is_err());
        assert!(parse_positions("x").is_err());
        assert!(parse_positions("").unwrap().is_empty());
    }

    #[test]
    fn filter_args_map_to_fields() {
        let args = FilterArgs {
            keyword: s!("snow"),
            agency: Some(s!("DOT")),
            method: None,
            quarter: Some(s!("")),
            job_titles: None,
            headcount: None,
        };
        let f = args.to_filters();
        assert_eq!(f.keyword, "snow");
        assert_eq!(f.get(FilterField::Agency), Some("DOT"));
        assert_eq!(f.get(FilterField::FiscalQuarter), None);
    }
}
