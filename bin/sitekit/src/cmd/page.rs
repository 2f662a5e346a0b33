//! Page command - render one content file

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use color_eyre::eyre::{Result, WrapErr, bail};
use sitekit_core::Config;
use sitekit_generator::render_page;

use crate::Options;

/// Run the page command.
///
/// Without `output` the page goes under the configured output directory at
/// its resolved URL, which may not climb out of that directory with `..`.
/// Drafts are refused unless the config enables them.
pub fn run(config: &Config, options: &Options, file: &Path, output: Option<&Path>) -> Result<()> {
    let text =
        fs::read_to_string(file).wrap_err_with(|| format!("failed to read {}", file.display()))?;

    let source = file.to_string_lossy();
    let page = render_page(&source, &text, config)
        .wrap_err_with(|| format!("failed to render {}", file.display()))?;

    if page.is_draft() && !config.build.drafts {
        bail!("{} is a draft; set build.drafts to render it", file.display());
    }

    let target = match output {
        Some(path) => path.to_path_buf(),
        None => default_target(&config.build.output_dir, &page.parts.url)?,
    };

    if options.dry_run {
        println!("would write {} bytes to {}", page.html.len(), target.display());
        return Ok(());
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&target, &page.html)
        .wrap_err_with(|| format!("failed to write {}", target.display()))?;

    tracing::info!(source = %file.display(), target = %target.display(), url = %page.parts.url, "page written");
    println!("{}", target.display());

    Ok(())
}

/// Place `url` under `output_dir`, refusing parent components.
fn default_target(output_dir: &str, url: &str) -> Result<PathBuf> {
    let relative = Path::new(url.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        bail!("page URL {url} leaves the output directory; pass --output");
    }
    Ok(Path::new(output_dir).join(relative))
}
