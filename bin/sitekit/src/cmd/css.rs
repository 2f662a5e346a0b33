//! Css command - compile one stylesheet

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use sitekit_core::Config;
use sitekit_css::{Coordinator, CssError, StylesheetJob};

use crate::Options;

/// Run the css command.
///
/// The backend follows `hint`, or the file extension when no hint is given.
/// Minification is on when asked for, in production, or when the config
/// says so.
pub fn run(
    config: &Config,
    options: &Options,
    file: &Path,
    minify: bool,
    hint: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let source = fs::read_to_string(file)
        .wrap_err_with(|| format!("failed to read {}", file.display()))?;

    let hint = hint
        .map(str::to_string)
        .or_else(|| file.extension().map(|e| e.to_string_lossy().into_owned()))
        .unwrap_or_default();
    let minify = minify || options.production || config.build.minify;

    let job = StylesheetJob::new(source)
        .with_hint(hint)
        .with_minify(minify);
    tracing::info!(file = %file.display(), hint = %job.extension_or_hint, minify, "compiling stylesheet");

    let css = match Coordinator::global().build(&job) {
        Ok(css) => css,
        Err(CssError::Compile(diagnostic)) => {
            eprintln!(
                "{}:{}:{}: {}",
                file.display(),
                diagnostic.line,
                diagnostic.column,
                diagnostic.message
            );
            eprintln!("{}", diagnostic.excerpt());
            return Err(CssError::Compile(diagnostic))
                .wrap_err_with(|| format!("failed to compile {}", file.display()));
        }
        Err(e) => return Err(e).wrap_err_with(|| format!("failed to compile {}", file.display())),
    };

    match output {
        Some(path) if options.dry_run => {
            println!("would write {} bytes to {}", css.len(), path.display());
        }
        Some(path) => {
            fs::write(path, &css).wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = css.len(), "stylesheet written");
        }
        None => println!("{css}"),
    }

    Ok(())
}
