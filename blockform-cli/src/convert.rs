//! Batch conversion between registered formats.

use crate::error::CliError;
use blockform_babel::publish::{publish_with, PublishArtifact, PublishSpec};
use blockform_babel::{Format, FormatError, FormatRegistry};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) struct ConvertRequest<'a> {
    pub inputs: Vec<PathBuf>,
    pub from: Option<&'a str>,
    pub to: &'a str,
    pub compact: bool,
    pub output_dir: Option<PathBuf>,
}

/// Result of converting one input file.
pub(crate) enum Converted {
    Text(String),
    Written(PathBuf),
}

/// Convert every input independently. Results keep the input order.
pub(crate) fn convert_all(
    registry: &FormatRegistry,
    request: &ConvertRequest<'_>,
) -> Result<Vec<(PathBuf, Result<Converted, CliError>)>, CliError> {
    let target = registry
        .get(request.to)
        .map_err(|err| CliError::Validation(err.to_string()))?;
    if !target.supports_serialization() {
        return Err(CliError::Validation(format!(
            "format '{}' cannot be written",
            request.to
        )));
    }
    if let Some(dir) = &request.output_dir {
        fs::create_dir_all(dir)?;
    }

    Ok(request
        .inputs
        .par_iter()
        .map(|path| {
            let result = convert_one(registry, request, target, path);
            if let Err(err) = &result {
                tracing::debug!(path = %path.display(), error = %err, "conversion failed");
            }
            (path.clone(), result)
        })
        .collect())
}

fn convert_one(
    registry: &FormatRegistry,
    request: &ConvertRequest<'_>,
    target: &dyn Format,
    path: &Path,
) -> Result<Converted, CliError> {
    let source_format = resolve_source_format(registry, request.from, path)?;
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format_error = |source: FormatError| CliError::Format {
        path: path.to_path_buf(),
        source,
    };

    let doc = registry.parse(&source, source_format).map_err(format_error)?;
    tracing::debug!(
        path = %path.display(),
        from = source_format,
        to = request.to,
        blocks = doc.len(),
        "converted"
    );

    let mut spec = PublishSpec::new(&doc, request.to);
    if request.compact {
        spec = spec.with_option("indent", "false");
    }
    if let Some(dir) = &request.output_dir {
        spec = spec.with_output_path(output_path(dir, path, target));
    }

    let result = publish_with(registry, spec).map_err(format_error)?;
    Ok(match result.artifact {
        PublishArtifact::InMemory(text) => Converted::Text(text),
        PublishArtifact::File(path) => Converted::Written(path),
    })
}

fn resolve_source_format<'r>(
    registry: &'r FormatRegistry,
    from: Option<&'r str>,
    path: &Path,
) -> Result<&'r str, CliError> {
    if let Some(from) = from {
        return Ok(from);
    }
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    registry
        .find_by_extension(extension)
        .filter(|format| format.supports_parsing())
        .map(|format| format.name())
        .ok_or_else(|| {
            CliError::Validation(format!(
                "{}: cannot infer the input format, pass --from",
                path.display()
            ))
        })
}

/// `<dir>/<input stem>.<first extension of the target format>`
fn output_path(dir: &Path, input: &Path, target: &dyn Format) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let extension = target
        .file_extensions()
        .first()
        .copied()
        .unwrap_or_else(|| target.name());
    dir.join(format!("{stem}.{extension}"))
}
