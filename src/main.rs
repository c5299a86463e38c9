use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use seo_lens::analysis::{analyze, analyze_page, validate_best_practices, Severity};
use seo_lens::config::{Config, Page};
use seo_lens::output::ScoredPage;
use seo_lens::page::SeoConfig;

const EXIT_SUCCESS: i32 = 0;
const EXIT_BELOW_THRESHOLD: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze every configured page, worst score first (default if no subcommand)
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Exit with status 1 if any page scores below this
        #[arg(long)]
        min_score: Option<u8>,
    },
    /// Show the full analysis of one page
    Show {
        /// Index number of the page (1-based, as shown in list)
        index: usize,

        #[arg(long)]
        json: bool,
    },
    /// Analyze a standalone page config file
    Check {
        /// YAML file holding a single page's SEO fields
        file: PathBuf,

        /// Body text file (overrides the file's `content` field)
        #[arg(long)]
        content: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
    /// Run the best-practices checklist on one page
    Practices {
        /// Index number of the page (1-based, as shown in list)
        index: usize,
    },
    /// Render the <head> tags for one page
    Head {
        /// Index number of the page (1-based, as shown in list)
        index: usize,

        /// Print the framework metadata object as JSON instead
        #[arg(long)]
        metadata: bool,
    },
    /// Generate sitemap.xml
    Sitemap {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate robots.txt
    Robots {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print site-level JSON-LD (WebSite and Organization)
    Schema,
}

#[derive(Parser, Debug)]
#[command(name = "seo-lens")]
#[command(about = "Page-level SEO analysis and metadata generation", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ./seo-lens.yaml, then ~/.config/seo-lens/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("seo_lens=debug")
        } else {
            EnvFilter::new("seo_lens=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or(Commands::List {
        format: OutputFormat::Table,
        min_score: None,
    });
    let start_time = Instant::now();
    let use_colors = seo_lens::output::should_use_colors();

    match command {
        Commands::List { format, min_score } => {
            let (_, pages) = load_project(cli.config);
            let ranked = rank_pages(&pages);

            match format {
                OutputFormat::Table => {
                    println!(
                        "{}",
                        seo_lens::output::format_scored_table(&ranked, use_colors)
                    );
                }
                OutputFormat::Tsv => println!("{}", seo_lens::output::format_tsv(&ranked)),
                OutputFormat::Json => {
                    let rows: Vec<serde_json::Value> = ranked
                        .iter()
                        .map(|scored| {
                            serde_json::json!({
                                "name": scored.page.name,
                                "score": scored.analysis.score,
                                "errors": scored.analysis.count(Severity::Error),
                                "warnings": scored.analysis.count(Severity::Warning),
                                "title": scored.page.seo.title,
                            })
                        })
                        .collect();
                    print_json(&rows);
                }
            }

            tracing::debug!(
                pages = ranked.len(),
                elapsed = ?start_time.elapsed(),
                "Analyzed pages"
            );

            if let Some(threshold) = min_score {
                let failing: Vec<&ScoredPage> = ranked
                    .iter()
                    .filter(|scored| scored.analysis.score < threshold)
                    .collect();
                if !failing.is_empty() {
                    eprintln!(
                        "{} of {} pages scored below {}:",
                        failing.len(),
                        ranked.len(),
                        threshold
                    );
                    for scored in failing {
                        eprintln!("  - {} ({})", scored.page.name, scored.analysis.score);
                    }
                    std::process::exit(EXIT_BELOW_THRESHOLD);
                }
            }
        }
        Commands::Show { index, json } => {
            let (_, pages) = load_project(cli.config);
            let ranked = rank_pages(&pages);
            let scored = select(&ranked, index);
            if json {
                print_json(&scored.analysis);
            } else {
                println!(
                    "{}",
                    seo_lens::output::format_analysis_detail(
                        &scored.page.name,
                        &scored.analysis,
                        use_colors,
                        cli.verbose
                    )
                );
            }
        }
        Commands::Practices { index } => {
            let (_, pages) = load_project(cli.config);
            let ranked = rank_pages(&pages);
            let scored = select(&ranked, index);
            let checks = validate_best_practices(&scored.page.seo);
            println!("{}", scored.page.name);
            println!(
                "{}",
                seo_lens::output::format_best_practices(&checks, use_colors)
            );
        }
        Commands::Head { index, metadata } => {
            let (config, pages) = load_project(cli.config);
            let ranked = rank_pages(&pages);
            let seo = &select(&ranked, index).page.seo;
            let defaults = config.head_defaults();
            if metadata {
                print_json(&seo_lens::page::generate_metadata(seo, &defaults));
            } else {
                println!("{}", seo_lens::page::render_head_tags(seo, &defaults));
            }
        }
        Commands::Sitemap { output } => {
            let (config, pages) = load_project(cli.config);
            let items = seo_lens::config::sitemap_items(&config, &pages);
            if items.is_empty() {
                tracing::warn!(
                    "No sitemap entries: add a `sitemap` list or give pages a slug or canonical URL"
                );
            }
            let xml = seo_lens::sitemap::generate_sitemap(&items, config.site_url());
            emit(&xml, output.as_deref());
        }
        Commands::Robots { output } => {
            let (config, _) = load_project(cli.config);
            let groups = if config.robots.is_empty() {
                vec![seo_lens::robots::RobotsConfig::default()]
            } else {
                config.robots.clone()
            };
            emit(
                &seo_lens::robots::generate_robots_txt(&groups),
                output.as_deref(),
            );
        }
        Commands::Schema => {
            let (config, _) = load_project(cli.config);
            let Some(site) = config.site.as_ref() else {
                eprintln!("No `site` section in config; nothing to describe.");
                std::process::exit(EXIT_CONFIG);
            };
            let defaults = site.head_defaults();
            let mut blocks = vec![seo_lens::structured_data::website(
                &defaults.site_name,
                &defaults.site_url,
                site.search_url.as_deref(),
            )];
            if let Some(org) = &site.organization {
                blocks.push(seo_lens::structured_data::organization(org));
            }
            for block in &blocks {
                println!("{}", seo_lens::page::structured_data_script(block));
            }
        }
        Commands::Check {
            file,
            content,
            json,
        } => {
            // Standalone check needs no project config
            run_check(&file, content.as_deref(), json, use_colors, cli.verbose);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load, validate and resolve the project config, exiting on failure.
fn load_project(config_path: Option<PathBuf>) -> (Config, Vec<Page>) {
    let config_path = match seo_lens::config::resolve_config_path(config_path) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let config = match seo_lens::config::load_config(Some(config_path.clone())) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = seo_lens::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let base_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let pages = match seo_lens::config::resolve_pages(&config, &base_dir) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_IO);
        }
    };

    tracing::debug!(pages = pages.len(), "Resolved pages");
    (config, pages)
}

/// Analyze every page and sort by score ascending. The sort is stable, so
/// ties keep config order.
fn rank_pages(pages: &[Page]) -> Vec<ScoredPage<'_>> {
    let mut ranked: Vec<ScoredPage> = pages
        .iter()
        .map(|page| ScoredPage {
            page,
            analysis: analyze_page(&page.seo),
        })
        .collect();
    ranked.sort_by_key(|scored| scored.analysis.score);
    ranked
}

fn select<'a, 'p>(ranked: &'a [ScoredPage<'p>], index: usize) -> &'a ScoredPage<'p> {
    if index < 1 || index > ranked.len() {
        eprintln!(
            "Invalid index {}. Must be between 1 and {}.",
            index,
            ranked.len()
        );
        std::process::exit(EXIT_CONFIG);
    }
    &ranked[index - 1]
}

fn run_check(
    file: &Path,
    content_file: Option<&Path>,
    json: bool,
    use_colors: bool,
    verbose: bool,
) {
    let raw = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {}: {}", file.display(), e);
            std::process::exit(EXIT_IO);
        }
    };
    let seo: SeoConfig = match serde_saphyr::from_str(&raw) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to parse {}: {}", file.display(), e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let analysis = match content_file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => analyze(&seo, Some(&text)),
            Err(e) => {
                eprintln!("Failed to read {}: {}", path.display(), e);
                std::process::exit(EXIT_IO);
            }
        },
        None => analyze_page(&seo),
    };

    if json {
        print_json(&analysis);
    } else {
        let name = file.display().to_string();
        println!(
            "{}",
            seo_lens::output::format_analysis_detail(&name, &analysis, use_colors, verbose)
        );
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_IO);
        }
    }
}

/// Print generated text, or save it atomically when a path is given.
fn emit(text: &str, output: Option<&Path>) {
    match output {
        Some(path) => {
            if let Err(e) = seo_lens::output::save_text(path, text) {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_IO);
            }
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
}
