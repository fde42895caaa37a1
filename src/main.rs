// SPDX-License-Identifier: PMPL-1.0-or-later

//! linguafolio: hierarchical translation resolution with language fallback
//!
//! CLI front end over the i18n engine: resolve dotted keys against a locales
//! directory, switch and persist the active language, list supported
//! languages, show typed project details, and audit bundle coverage.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use linguafolio::i18n::{DirSource, I18n, Lang};
use linguafolio::{audit, details, prefs};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "linguafolio")]
#[command(version)]
#[command(about = "Hierarchical translation resolution with language fallback")]
struct Cli {
    /// Locales directory holding per-language bundles
    #[arg(long, default_value = "locales", global = true)]
    locales_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a dotted translation key through the fallback chain
    Resolve {
        /// Key to resolve, e.g. nav.contact or projects.chronosync.title
        #[arg(value_name = "KEY")]
        key: String,

        /// Resolve under this language instead of the persisted one
        #[arg(short, long)]
        lang: Option<String>,

        /// Literal returned when both the language and English miss
        #[arg(short, long)]
        fallback: Option<String>,
    },

    /// List supported languages
    Languages,

    /// Switch the persisted active language
    Switch {
        /// Language code, e.g. en or fr
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Show a project's details for the active language
    Details {
        /// Project section name, e.g. chronosync
        #[arg(value_name = "PROJECT")]
        project: String,
    },

    /// Audit bundle coverage against English
    Audit {
        /// Save the raw report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { key, lang, fallback } => {
            let i18n = match &lang {
                // --lang is a one-shot override; leave the persisted choice alone
                Some(code) => {
                    let i18n = I18n::new(DirSource::new(&cli.locales_dir));
                    match Lang::from_code(code) {
                        Some(_) => i18n.set_language(code),
                        None => eprintln!(
                            "warning: unsupported language '{}', using {}",
                            code,
                            i18n.language()
                        ),
                    }
                    i18n.preload(i18n.language());
                    i18n
                }
                None => {
                    let i18n = engine(&cli.locales_dir);
                    i18n.init();
                    i18n
                }
            };
            // the fallback chain reads the English tree only once loaded
            if i18n.language() != Lang::En {
                i18n.preload(Lang::En);
            }
            let value = match fallback {
                Some(literal) => i18n.t_or(&key, &literal),
                None => i18n.t(&key),
            };
            println!("{}", value);
        }

        Commands::Languages => {
            let active = persisted_language();
            println!("{}", "Supported languages:".bold());
            for lang in Lang::all() {
                let marker = if *lang == active { "*" } else { " " };
                let line = format!(
                    "{} {} {}  {} ({})  [{}]",
                    marker,
                    lang.flag(),
                    lang.code(),
                    lang.name(),
                    lang.native_name(),
                    lang.direction()
                );
                if *lang == active {
                    println!("{}", line.green());
                } else {
                    println!("{}", line);
                }
            }
        }

        Commands::Switch { code } => match Lang::from_code(&code) {
            Some(lang) => {
                let i18n = engine(&cli.locales_dir);
                i18n.set_language(&code);
                println!(
                    "Active language: {} {} ({})",
                    lang.flag(),
                    lang.name(),
                    lang.native_name()
                );
            }
            None => {
                let supported: Vec<&str> =
                    Lang::all().iter().map(|lang| lang.code()).collect();
                eprintln!(
                    "{} unsupported language '{}' (supported: {})",
                    "error:".red().bold(),
                    code,
                    supported.join(", ")
                );
                std::process::exit(1);
            }
        },

        Commands::Details { project } => {
            let active = persisted_language();
            let all = details::load_with_fallback(&cli.locales_dir, active)?;
            match all.get(&project) {
                Some(record) => print_details(&project, record),
                None => {
                    eprintln!("{} unknown project '{}'", "error:".red().bold(), project);
                    std::process::exit(1);
                }
            }
        }

        Commands::Audit { output } => {
            let source = DirSource::new(&cli.locales_dir);
            let report = audit::run(&source, Some(cli.locales_dir.as_path()));
            audit::print(&report);
            if let Some(path) = output {
                audit::save(&report, &path)?;
            }
        }
    }

    Ok(())
}

fn engine(locales_dir: &Path) -> I18n {
    let source = DirSource::new(locales_dir);
    match prefs::default_path() {
        Some(path) => I18n::with_prefs_file(source, path),
        None => I18n::new(source),
    }
}

fn persisted_language() -> Lang {
    prefs::default_path()
        .as_deref()
        .and_then(prefs::load_language)
        .unwrap_or_default()
}

fn print_details(project: &str, record: &details::ProjectDetails) {
    println!("\n{}", project.bold().cyan());
    println!("  Team ({}):", record.team_size);
    for member in &record.team_members {
        match &member.link {
            Some(link) => println!("    - {} ({}) <{}>", member.name.bold(), member.role, link),
            None => println!("    - {} ({})", member.name.bold(), member.role),
        }
    }
    println!("  Duration: {}", record.duration);
    if let Some(status) = &record.status {
        println!("  Status: {}", status.yellow());
    }
    println!("  Type: {}", record.project_type);
}
