//! Build orchestration: discover, mirror, generate, write.

use crate::config::BuildConfig;
use crate::discovery::{BuildUnit, discover, mirror_directories};
use crate::error::{BuildError, RejectionReason};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use stubber_codegen::{CodegenError, Generator};
use stubber_schema::parse_schema_file;

/// A schema that produced no artifact.
#[derive(Debug)]
pub struct Rejection {
    /// Schema file path.
    pub schema: PathBuf,
    /// Why the schema was rejected.
    pub reason: RejectionReason,
}

/// Outcome of a build run.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Written artifacts, sorted by path.
    pub generated: Vec<PathBuf>,
    /// Rejected schemas, sorted by path.
    pub rejected: Vec<Rejection>,
}

impl BuildReport {
    /// Returns true if every discovered schema produced an artifact.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// A generated artifact waiting to be written.
struct Artifact {
    path: PathBuf,
    contents: String,
}

/// Runs a build for one configuration.
#[derive(Debug)]
pub struct Builder {
    config: BuildConfig,
}

impl Builder {
    /// Creates a builder.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Runs discovery, mirrors the tree and generates every schema.
    ///
    /// Schemas are generated in parallel. A schema that fails to load or
    /// lacks a name is logged and reported as rejected; the rest of the run
    /// continues. When several schemas map to the same artifact path, the
    /// first in path order is written and the others are rejected, so the
    /// output never depends on scheduling.
    ///
    /// # Errors
    /// Returns `BuildError` if discovery finds nothing, an output directory
    /// cannot be created, or an artifact cannot be written.
    pub fn run(&self) -> Result<BuildReport, BuildError> {
        let config = &self.config;
        let units = discover(config.schema_root(), config.schema_ext())?;
        let schema_count: usize = units.iter().map(|u| u.schemas.len()).sum();
        tracing::info!(
            "Discovered {} schema(s) in {} director(ies) under {}",
            schema_count,
            units.len(),
            config.schema_root().display()
        );

        mirror_directories(&units, config.output_root())?;

        let jobs = build_jobs(&units, config.output_root());
        let outcomes: Vec<_> = jobs
            .par_iter()
            .map(|(schema, output_dir)| self.generate_schema(schema, output_dir))
            .collect();

        let mut report = BuildReport::default();
        let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
        let mut artifacts = Vec::with_capacity(outcomes.len());
        for ((schema, _), outcome) in jobs.iter().zip(outcomes) {
            let artifact = match outcome {
                Ok(artifact) => artifact,
                Err(reason) => {
                    report.rejected.push(Rejection {
                        schema: schema.clone(),
                        reason: reason.into(),
                    });
                    continue;
                }
            };

            if let Some(first) = claimed.get(&artifact.path) {
                let reason = RejectionReason::DuplicateArtifact {
                    path: artifact.path,
                    first: first.to_path_buf(),
                };
                tracing::error!("Rejected {}: {}", schema.display(), reason);
                report.rejected.push(Rejection {
                    schema: schema.clone(),
                    reason,
                });
                continue;
            }
            claimed.insert(artifact.path.clone(), schema);
            artifacts.push(artifact);
        }

        artifacts
            .par_iter()
            .map(write_artifact)
            .collect::<Result<Vec<_>, _>>()?;

        report.generated = artifacts.into_iter().map(|a| a.path).collect();
        report.generated.sort();
        report.rejected.sort_by(|a, b| a.schema.cmp(&b.schema));

        tracing::info!(
            "Build finished: {} generated, {} rejected",
            report.generated.len(),
            report.rejected.len()
        );
        Ok(report)
    }

    /// Generates one schema for its mirrored output directory.
    fn generate_schema(
        &self,
        schema: &Path,
        output_dir: &Path,
    ) -> Result<Artifact, CodegenError> {
        let generator = Generator::new(self.config.target_language())
            .with_author(self.config.author_name());
        parse_schema_file(schema)
            .map_err(CodegenError::from)
            .and_then(|record| generator.generate(&record))
            .map(|file| Artifact {
                path: output_dir.join(&file.file_name),
                contents: file.contents,
            })
            .inspect_err(|reason| tracing::error!("Rejected {}: {}", schema.display(), reason))
    }
}

fn write_artifact(artifact: &Artifact) -> Result<(), BuildError> {
    fs::write(&artifact.path, &artifact.contents)
        .map_err(|e| BuildError::write(&artifact.path, e))?;
    tracing::debug!("Generated {}", artifact.path.display());
    Ok(())
}

/// Pairs every schema with its output directory.
fn build_jobs(units: &[BuildUnit], output_root: &Path) -> Vec<(PathBuf, PathBuf)> {
    units
        .iter()
        .flat_map(|unit| {
            let output_dir = unit.output_dir(output_root);
            unit.schemas
                .iter()
                .map(move |schema| (schema.clone(), output_dir.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_jobs_pairs_output_dirs() {
        let units = vec![
            BuildUnit {
                relative_dir: PathBuf::new(),
                schemas: vec![PathBuf::from("s/a.yaml")],
            },
            BuildUnit {
                relative_dir: PathBuf::from("ui"),
                schemas: vec![PathBuf::from("s/ui/b.yaml"), PathBuf::from("s/ui/c.yaml")],
            },
        ];

        let jobs = build_jobs(&units, Path::new("out"));

        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].1, PathBuf::from("out"));
        assert_eq!(jobs[2], (PathBuf::from("s/ui/c.yaml"), PathBuf::from("out/ui")));
    }

    #[test]
    fn test_build_report_is_clean() {
        let mut report = BuildReport::default();
        assert!(report.is_clean());

        report.rejected.push(Rejection {
            schema: PathBuf::from("bad.yaml"),
            reason: CodegenError::from(stubber_schema::SchemaError::missing_field("name")).into(),
        });
        assert!(!report.is_clean());
    }

    #[test]
    fn test_run_writes_artifacts() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schemas = dir.path().join("schemas");
        fs::create_dir_all(schemas.join("core")).unwrap();
        fs::write(schemas.join("core/widget.yaml"), "name: Widget\n").unwrap();

        let out = dir.path().join("out");
        let report = Builder::new(BuildConfig::new(&schemas, &out))
            .run()
            .expect("Failed to build");

        assert!(report.is_clean());
        assert_eq!(report.generated, vec![out.join("core").join("widget.hpp")]);
    }
}
