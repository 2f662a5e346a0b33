//! Sitekit CLI
//!
//! Stylesheet compilation, route matching and page rendering for static
//! sites.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use sitekit::Options;
use sitekit_css::BackendRegistry;

/// Command-line interface for sitekit.
#[derive(Parser)]
#[command(name = "sitekit", version, about = "Static site build helpers")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = sitekit::DEFAULT_CONFIG)]
    config: PathBuf,

    /// Build for production (always minify, require every engine)
    #[arg(short, long, global = true)]
    production: bool,

    /// Show what would be written without writing it
    #[arg(short = 'n', long = "dry-run", global = true)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Environment file laid over the configuration
    #[arg(short, long, global = true)]
    environment: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Compile a stylesheet
    Css {
        /// Stylesheet to compile
        file: PathBuf,
        /// Minify the output
        #[arg(long)]
        minify: bool,
        /// Language hint overriding the file extension (css, styl)
        #[arg(long)]
        hint: Option<String>,
        /// Write the CSS here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Match a path against route patterns
    Route {
        /// Concrete path, e.g. /users/20
        path: String,
        /// Pattern to try, in order; defaults to the configured routes
        #[arg(long = "pattern")]
        patterns: Vec<String>,
    },
    /// Show the URL, directory, app directory and slug of a source path
    Parts {
        /// Source path, e.g. docs/glossary/semantic-css.md
        path: PathBuf,
    },
    /// Render a Markdown page
    Page {
        /// Content file to render
        file: PathBuf,
        /// Output file; defaults to the page URL under the output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List stylesheet engines and whether they were found
    Engines,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    sitekit::init_tracing(cli.verbose);

    let options = Options {
        production: cli.production,
        dry_run: cli.dry_run,
    };

    let load_config = || -> Result<sitekit::Config> {
        let config = sitekit::load_config(&cli.config, cli.environment.as_deref())?;
        sitekit::install_engines(&config);
        Ok(config)
    };

    match cli.command {
        Commands::Css {
            file,
            minify,
            hint,
            output,
        } => {
            sitekit::cmd::css::run(
                &load_config()?,
                &options,
                &file,
                minify,
                hint.as_deref(),
                output.as_deref(),
            )?;
        }
        Commands::Route { path, patterns } => {
            sitekit::cmd::route::run(&load_config()?, &path, &patterns)?;
        }
        Commands::Parts { path } => {
            sitekit::cmd::parts::run(&path)?;
        }
        Commands::Page { file, output } => {
            sitekit::cmd::page::run(&load_config()?, &options, &file, output.as_deref())?;
        }
        Commands::Engines => {
            load_config()?;
            sitekit::cmd::engines::run(BackendRegistry::global(), options.production)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_combined_short_flags() {
        let args = ["sitekit", "-pnve", "joku.yaml", "engines"];
        let cli = Cli::parse_from(args);

        assert!(cli.production);
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.environment, Some(PathBuf::from("joku.yaml")));
        assert!(matches!(cli.command, Commands::Engines));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let args = ["sitekit", "engines", "--verbose", "-pnve", "joku.yaml"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.environment, Some(PathBuf::from("joku.yaml")));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sitekit", "engines"]);

        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(!cli.production);
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
        assert!(cli.environment.is_none());
    }

    #[test]
    fn test_cli_css_command_parsing() {
        let args = ["sitekit", "css", "main.styl", "--minify", "-o", "main.css"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Css {
                file,
                minify,
                hint,
                output,
            } => {
                assert_eq!(file, PathBuf::from("main.styl"));
                assert!(minify);
                assert!(hint.is_none());
                assert_eq!(output, Some(PathBuf::from("main.css")));
            }
            _ => panic!("Expected Css command"),
        }
    }

    #[test]
    fn test_cli_route_command_parsing() {
        let args = [
            "sitekit",
            "route",
            "/users/20",
            "--pattern",
            "/fail/:id",
            "--pattern",
            "/:view/:id",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Route { path, patterns } => {
                assert_eq!(path, "/users/20");
                assert_eq!(patterns, vec!["/fail/:id", "/:view/:id"]);
            }
            _ => panic!("Expected Route command"),
        }
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["sitekit", "--config", "docs.toml", "page", "index.md"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, PathBuf::from("docs.toml"));
        match cli.command {
            Commands::Page { file, output } => {
                assert_eq!(file, PathBuf::from("index.md"));
                assert!(output.is_none());
            }
            _ => panic!("Expected Page command"),
        }
    }
}
