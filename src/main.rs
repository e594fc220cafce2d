// SPDX-License-Identifier: PMPL-1.0-or-later

//! dvdisaster-site: builds the multilingual dvdisaster homepage
//!
//! Loads news, dictionaries and the table of contents (compiled in, or from a
//! directory of A2ML files), checks them and publishes static pages per
//! language.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dvdisaster_site::diagnostics;
use dvdisaster_site::export::{Content, ContentFormat};
use dvdisaster_site::i18n::Lang;
use dvdisaster_site::render::Renderer;
use dvdisaster_site::site::Site;
use dvdisaster_site::storage;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dvdisaster-site")]
#[command(version)]
#[command(about = "Multilingual news, dictionary and table of contents for the dvdisaster homepage")]
#[command(long_about = None)]
struct Cli {
    /// Content directory of .a2ml files (default: built-in content)
    #[arg(short, long, global = true, value_name = "DIR")]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render and write the pages of every (or the given) language
    Build {
        /// Output directory (default: the manifest's output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Languages to publish (default: the manifest's languages)
        #[arg(short, long = "lang", value_name = "LANG")]
        langs: Vec<Lang>,
    },

    /// Check labels, news order and dictionaries
    Check,

    /// Print the table of contents
    Toc {
        /// Language of the labels
        #[arg(short, long)]
        lang: Option<Lang>,

        /// Print the declaration sequence instead of the tree
        #[arg(long)]
        declarations: bool,
    },

    /// List news entries
    News {
        #[arg(short, long)]
        lang: Option<Lang>,

        /// Newest first instead of authoring order
        #[arg(long)]
        sorted: bool,

        /// Show at most N entries
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Look up a dictionary phrase
    Lookup {
        #[arg(value_name = "KEY")]
        key: String,

        #[arg(short, long)]
        lang: Lang,
    },

    /// Export a data set as JSON, YAML or A2ML
    Export {
        #[arg(value_enum)]
        dataset: Dataset,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ContentFormat,

        /// Language of the news feed or dictionary
        #[arg(short, long)]
        lang: Option<Lang>,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Dataset {
    Toc,
    News,
    Dictionary,
}

fn load_site(content: Option<&Path>) -> Result<Site> {
    match content {
        Some(dir) => Site::load(dir).with_context(|| format!("loading content from {}", dir.display())),
        None => Ok(Site::builtin()?),
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let site = load_site(cli.content.as_deref())?;

    match cli.command {
        Commands::Build { output, langs } => {
            let out_dir = output.unwrap_or_else(|| site.manifest.output.clone());
            let langs = if langs.is_empty() {
                site.manifest.languages.clone()
            } else {
                langs
            };
            println!(
                "Publishing {} language(s) to: {}",
                langs.len(),
                out_dir.display()
            );
            let written = storage::publish(&site, &out_dir, &langs)?;
            for path in &written {
                println!("  {} {}", "wrote".green(), path.display());
            }
            println!("{} files written", written.len());
        }

        Commands::Check => {
            diagnostics::run_checks(&site)?;
        }

        Commands::Toc { lang, declarations } => {
            if declarations {
                for declaration in site.toc.to_declarations() {
                    println!("{}", declaration);
                }
            } else {
                let lang = lang.unwrap_or(site.manifest.default_language);
                print_toc(&site, lang);
            }
        }

        Commands::News {
            lang,
            sorted,
            limit,
        } => {
            let lang = lang.unwrap_or(site.manifest.default_language);
            let feed = site
                .news(lang)
                .ok_or_else(|| anyhow!("no {} news feed", lang))?;
            let entries: Vec<_> = if sorted {
                feed.sorted_by_date_desc()
            } else {
                feed.entries().iter().collect()
            };
            println!("{}", feed.headline.bold());
            for entry in entries.into_iter().take(limit.unwrap_or(usize::MAX)) {
                println!("\n{} {}", entry.date.to_string().cyan(), entry.title.bold());
                println!("  {}", entry.summary());
            }
        }

        Commands::Lookup { key, lang } => {
            println!("{}", site.phrase(lang, &key)?);
        }

        Commands::Export {
            dataset,
            format,
            lang,
            output,
        } => {
            let lang = lang.unwrap_or(site.manifest.default_language);
            let content = match dataset {
                Dataset::Toc => Content::Toc(&site.toc),
                Dataset::News => Content::News(
                    site.news(lang)
                        .ok_or_else(|| anyhow!("no {} news feed", lang))?,
                ),
                Dataset::Dictionary => Content::Dictionary(
                    site.dictionary(lang)
                        .ok_or_else(|| anyhow!("no {} dictionary", lang))?,
                ),
            };
            let text = format.serialize(content)?;
            if let Some(output_path) = output {
                fs::write(&output_path, text)
                    .with_context(|| format!("writing {}", output_path.display()))?;
                println!("Export saved to: {}", output_path.display());
            } else {
                print!("{}", text);
            }
        }
    }

    Ok(())
}

fn print_toc(site: &Site, lang: Lang) {
    let renderer = Renderer::new(site, lang);
    for (node, depth) in site.toc.walk() {
        let indent = "  ".repeat(depth);
        match renderer.label(node) {
            Some(label) if node.labels().has(lang) => {
                println!("{}{} {}", indent, node.id().dimmed(), label)
            }
            Some(label) => println!("{}{} {}", indent, node.id().dimmed(), label.yellow()),
            None => println!("{}{} {}", indent, node.id().dimmed(), "(omitted)".red()),
        }
    }
}
