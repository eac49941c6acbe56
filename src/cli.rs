// src/cli.rs
use std::path::PathBuf;

use crate::{
    cache::SeasonCache,
    config::{
        consts::LOG_FILE,
        options::{ AppOptions, ExportFormat, SourceKind },
    },
    export,
    loader::{ self, SeasonTable },
    progress::Progress,
    season::Season,
    source::{ CsvDirSource, SampleSource, SeasonSource },
    stats::{ PlayerRecord, RoleRules },
    table::{ Column, SortOrder, TableData, ALL_COLUMNS, DISPLAY_COLUMNS },
};

#[derive(Debug, Default)]
pub struct Params {
    pub options: AppOptions,
    pub list_seasons: bool,
    pub player: Option<String>,
    pub out: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub help: bool,
}

/// Progress lines go to stderr so stdout stays a clean table.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_args(std::env::args().skip(1))?;

    if params.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    crate::log::init(params.log.clone().unwrap_or_else(|| PathBuf::from(LOG_FILE)), crate::log::Level::Info);

    if params.list_seasons {
        for s in Season::catalogue() {
            println!("{},{}", s.id, s.label);
        }
        return Ok(());
    }

    let table = load(&params)?;
    let rules = RoleRules::for_options(params.options.analysis.serving_threat);

    if let Some(name) = params.player.as_deref() {
        let rec = table
            .find(name)
            .ok_or_else(|| format!("No player named '{name}' in {}", table.season))?;
        print!("{}", player_report(rec, &rules));
        return Ok(());
    }

    let a = &params.options.analysis;
    if params.out.is_some() {
        let data = TableData::build(&table.records, &rules, &ALL_COLUMNS, a.sort_by, a.sort_order);
        let path = export::write_export(&params.options.export, &data)?;
        eprintln!("Wrote {} players to {}", data.nrows(), path.display());
    } else {
        let data = TableData::build(&table.records, &rules, &DISPLAY_COLUMNS, a.sort_by, a.sort_order);
        println!("{}", table.season);
        print!("{}", data.to_aligned_text());
    }
    Ok(())
}

fn load(params: &Params) -> Result<std::sync::Arc<SeasonTable>, Box<dyn std::error::Error>> {
    let load = &params.options.load;
    let source: Box<dyn SeasonSource> = match &load.source {
        SourceKind::Sample => Box::new(SampleSource),
        SourceKind::CsvDir(dir) => Box::new(CsvDirSource::new(dir.clone())),
    };
    let mut cache = SeasonCache::default();
    let mut prog = StderrProgress;
    Ok(loader::load_season(source.as_ref(), &load.season, &mut cache, Some(&mut prog))?)
}

/// Plain-text counterpart of the GUI's player panel.
pub fn player_report(rec: &PlayerRecord, rules: &RoleRules) -> String {
    let role = rules.classify(rec);
    let opt = |v: Option<f64>, unit: &str| v.map(|x| format!("{x:.0} {unit}")).unwrap_or_else(|| s!("-"));
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", rec.name(), rec.team()));
    out.push_str(&format!("  Position:          {}\n", rec.position()));
    out.push_str(&format!("  Height / weight:   {} / {}\n", opt(rec.height_cm(), "cm"), opt(rec.weight_kg(), "kg")));
    out.push_str(&format!("  Sets played:       {}\n", rec.sets_played()));
    out.push_str(&format!("  Net points / set:  {:.2}\n", rec.net_points_per_set));
    out.push_str(&format!("  Attack success:    {:.2}%\n", rec.attack_success_rate_pct));
    out.push_str(&format!("  Total points:      {}\n", rec.total_points));
    out.push_str(&format!("  Role:              {}\n", role.title()));
    out.push_str(&format!("  {}\n", role.narrative()));
    out
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    let mut format_set = false;

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--list-seasons" => params.list_seasons = true,
            "--season" => {
                let v = args.next().ok_or("Missing value for --season")?;
                params.options.load.season = Season::find(&v)
                    .ok_or_else(|| format!("Unknown season: {} (try --list-seasons)", v))?;}
            "--data-dir" => {
                let v = args.next().ok_or("Missing value for --data-dir")?;
                params.options.load.source = SourceKind::CsvDir(PathBuf::from(v));}
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                params.options.analysis.sort_by = Column::parse(&v)
                    .ok_or_else(|| format!("Unknown column: {}", v))?;}
            "--asc" => params.options.analysis.sort_order = SortOrder::Ascending,
            "--serving-threat" => params.options.analysis.serving_threat = true,
            "--player" => params.player = Some(args.next().ok_or("Missing value for --player")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;
                format_set = true;}
            "--include-headers" => params.options.export.include_headers = true,
            "--no-headers" => params.options.export.include_headers = false,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--log" => params.log = Some(PathBuf::from(args.next().ok_or("Missing value for --log")?)),
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let season = params.options.load.season.clone();
    let export = &mut params.options.export;
    match params.out.as_ref() {
        Some(p) => {
            export.set_path(&p.to_string_lossy());
            // A typed .tsv path picks the format unless --format said otherwise.
            if !format_set && crate::csv::sep_for_path(p) == '\t' {
                export.format = ExportFormat::Tsv;
            }
        }
        None => export.set_default_for_season(&season),
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn defaults_to_sample_source_and_year_17() {
        let p = parse_args(args(&[])).unwrap();
        assert_eq!(p.options.load.season.id, "17");
        assert_eq!(p.options.load.source, SourceKind::Sample);
        assert_eq!(p.options.analysis.sort_by, Column::NetPointsPerSet);
        assert_eq!(p.options.analysis.sort_order, SortOrder::Descending);
        assert!(p.out.is_none());
    }

    #[test]
    fn parses_flags() {
        let p = parse_args(args(&[
            "--season", "19", "--data-dir", "d", "--sort", "attack_points", "--asc",
            "--serving-threat", "--player", "李X志", "--no-headers",
        ]))
        .unwrap();
        assert_eq!(p.options.load.season.id, "19");
        assert_eq!(p.options.load.source, SourceKind::CsvDir(PathBuf::from("d")));
        assert_eq!(p.options.analysis.sort_by, Column::AttackPoints);
        assert_eq!(p.options.analysis.sort_order, SortOrder::Ascending);
        assert!(p.options.analysis.serving_threat);
        assert_eq!(p.player.as_deref(), Some("李X志"));
        assert!(!p.options.export.include_headers);
    }

    #[test]
    fn tsv_out_path_selects_tsv() {
        let p = parse_args(args(&["-o", "out/x.tsv"])).unwrap();
        assert_eq!(p.options.export.format, ExportFormat::Tsv);
        assert_eq!(p.options.export.out_path(), PathBuf::from("out/x.tsv"));
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(parse_args(args(&["--season", "3"])).is_err());
        assert!(parse_args(args(&["--sort", "shoe_size"])).is_err());
        assert!(parse_args(args(&["--format", "xlsx"])).is_err());
        assert!(parse_args(args(&["--season"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }
}
