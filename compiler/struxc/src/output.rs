//! Commits a [`PipelineOutput`] to disk (spec §6 "Output layout", §7
//! "partial output is never written"). Every file is rendered up front by
//! the pipeline; this module only decides paths and writes bytes, and
//! writes nothing until every path is known to be writable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use struxc_manifest::OutputKind;

use crate::pipeline::PipelineOutput;

const SOURCE_EXT: &str = "cs";
const PROJECT_EXT: &str = "csproj";

pub fn write(output_dir: &Path, project_name: &str, output_kind: OutputKind, result: &PipelineOutput) -> io::Result<()> {
    let mut files: Vec<(PathBuf, &str)> = Vec::new();

    for module in &result.modules {
        files.push((output_dir.join(format!("{}.{SOURCE_EXT}", module.canonical_path)), &module.source));
    }

    if matches!(output_kind, OutputKind::Executable | OutputKind::ConsoleApp) {
        files.push((output_dir.join(format!("Program.{SOURCE_EXT}")), &result.manifest.program_file));
    }

    files.push((output_dir.join(format!("{project_name}.{PROJECT_EXT}")), &result.manifest.project_file));

    if let Some(json_context) = &result.manifest.json_context_file {
        files.push((output_dir.join("AppJsonContext.cs"), json_context));
    }

    files.push((output_dir.join("manifest.json"), &result.manifest.metadata_file));

    for (path, _) in &files {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
    }
    for (path, contents) in &files {
        fs::write(path, contents)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use struxc_manifest::ManifestOutput;

    use crate::pipeline::EmittedModule;

    fn sample_output() -> PipelineOutput {
        PipelineOutput {
            modules: vec![EmittedModule { canonical_path: "src/main".to_string(), source: "// module\n".to_string() }],
            manifest: ManifestOutput {
                project_file: "<Project />".to_string(),
                program_file: "// program\n".to_string(),
                json_context_file: Some("// json\n".to_string()),
                metadata_file: "{}".to_string(),
            },
        }
    }

    #[test]
    fn writes_every_output_layout_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "App", OutputKind::Executable, &sample_output()).unwrap();

        assert!(dir.path().join("src/main.cs").exists());
        assert!(dir.path().join("Program.cs").exists());
        assert!(dir.path().join("App.csproj").exists());
        assert!(dir.path().join("AppJsonContext.cs").exists());
        assert!(dir.path().join("manifest.json").exists());
    }

    #[test]
    fn library_output_skips_program_wrapper() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "App", OutputKind::Library, &sample_output()).unwrap();

        assert!(!dir.path().join("Program.cs").exists());
        assert!(dir.path().join("App.csproj").exists());
    }
}
