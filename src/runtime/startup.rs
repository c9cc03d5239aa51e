use crate::catalog::{Catalog, builtin_catalog, scan_album};
use crate::config::Settings;
use crate::error::{Error, Result};

use super::cli::Cli;

/// Read the catalog named on the command line, else the configured one.
///
/// An explicitly named file must exist. The default location is optional and
/// the built-in catalog stands in when it is missing.
pub fn load_catalog(cli: &Cli, settings: &Settings) -> Result<Catalog> {
    if let Some(path) = cli.catalog.as_deref().or(settings.catalog.path.as_deref()) {
        return Catalog::load(path);
    }
    match settings.catalog_path() {
        Some(path) if path.is_file() => Catalog::load(&path),
        other => {
            tracing::info!(path = ?other, "no catalog file, using built-in albums");
            Ok(builtin_catalog())
        }
    }
}

/// Resolve the catalog and the slug of the album to open: a scanned
/// directory, the requested slug, or the catalog's first album.
///
/// The slug is checked here so an unknown album fails before the terminal
/// or the audio device is touched.
pub fn resolve_album(cli: &Cli, settings: &Settings) -> Result<(Catalog, String)> {
    if let Some(dir) = cli.dir.as_deref() {
        let album = scan_album(dir, &settings.library)?;
        let slug = album.slug.clone();
        return Ok((Catalog::new(vec![album]), slug));
    }

    let catalog = load_catalog(cli, settings)?;
    let slug = match cli.slug.as_deref() {
        Some(slug) => catalog.find(slug)?.slug.clone(),
        None => catalog
            .first()
            .map(|a| a.slug.clone())
            .ok_or_else(|| Error::NotFound("(empty catalog)".to_string()))?,
    };
    Ok((catalog, slug))
}
