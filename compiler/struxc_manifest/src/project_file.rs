//! Project file emission (spec §4.8). External contract only: the shape of
//! the SDK-style project file is a plain string template, the same "external
//! contract, plain string templates" approach the teacher uses wherever it
//! talks to a downstream tool it doesn't otherwise model (`ori_compiler`'s
//! CLI-facing text is built the same way, inline `format!` rather than a
//! templating engine).

use crate::config::{BuildConfig, OptimizeFor, OutputKind, RuntimeReference};

#[must_use]
pub fn render_project_file(config: &BuildConfig) -> String {
    if let Some(verbatim) = &config.user_project_file {
        return verbatim.clone();
    }

    let output_type = match config.output_kind {
        OutputKind::Executable | OutputKind::ConsoleApp => "Exe",
        OutputKind::Library => "Library",
    };
    let optimize = match config.optimize {
        OptimizeFor::Size => "Size",
        OptimizeFor::Speed => "Speed",
    };

    let mut out = String::new();
    out.push_str("<Project Sdk=\"Microsoft.NET.Sdk\">\n\n");
    out.push_str("  <PropertyGroup>\n");
    out.push_str(&format!("    <OutputType>{output_type}</OutputType>\n"));
    out.push_str(&format!("    <TargetFramework>{}</TargetFramework>\n", config.target_framework));
    out.push_str("    <Nullable>enable</Nullable>\n");
    out.push_str("    <ImplicitUsings>disable</ImplicitUsings>\n");
    out.push_str("    <PublishAot>true</PublishAot>\n");
    out.push_str(&format!("    <Optimize{optimize}>true</Optimize{optimize}>\n"));
    if config.strip_symbols {
        out.push_str("    <StripSymbols>true</StripSymbols>\n");
    }
    if config.invariant_globalization {
        out.push_str("    <InvariantGlobalization>true</InvariantGlobalization>\n");
    }
    out.push_str("  </PropertyGroup>\n");

    match &config.runtime {
        RuntimeReference::ProjectReference { path } => {
            out.push_str("\n  <ItemGroup>\n");
            out.push_str(&format!("    <ProjectReference Include=\"{}\" />\n", path.display()));
            out.push_str("  </ItemGroup>\n");
        }
        RuntimeReference::AssemblyReferences { libs } => {
            if !libs.is_empty() {
                out.push_str("\n  <ItemGroup>\n");
                for lib in libs {
                    let name = lib.file_stem().and_then(|s| s.to_str()).unwrap_or("Reference");
                    out.push_str(&format!(
                        "    <Reference Include=\"{name}\">\n      <HintPath>{}</HintPath>\n    </Reference>\n",
                        lib.display()
                    ));
                }
                out.push_str("  </ItemGroup>\n");
            }
        }
    }

    if !config.package_references.is_empty() {
        out.push_str("\n  <ItemGroup>\n");
        for (name, version) in &config.package_references {
            out.push_str(&format!("    <PackageReference Include=\"{name}\" Version=\"{version}\" />\n"));
        }
        out.push_str("  </ItemGroup>\n");
    }

    out.push_str("\n</Project>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn base_config() -> BuildConfig {
        BuildConfig {
            project_name: "App".to_string(),
            output_dir: PathBuf::from("out"),
            output_kind: OutputKind::Executable,
            target_framework: "net9.0".to_string(),
            runtime: RuntimeReference::AssemblyReferences { libs: Vec::new() },
            package_references: Vec::new(),
            strip_symbols: false,
            invariant_globalization: false,
            optimize: OptimizeFor::Speed,
            user_project_file: None,
        }
    }

    #[test]
    fn verbatim_user_file_is_copied_unchanged() {
        let mut config = base_config();
        config.user_project_file = Some("<Project>custom</Project>".to_string());
        assert_eq!(render_project_file(&config), "<Project>custom</Project>");
    }

    #[test]
    fn executable_gets_exe_output_type() {
        let config = base_config();
        let rendered = render_project_file(&config);
        assert!(rendered.contains("<OutputType>Exe</OutputType>"));
        assert!(rendered.contains("<PublishAot>true</PublishAot>"));
    }

    #[test]
    fn strip_and_globalization_flags_thread_through() {
        let mut config = base_config();
        config.strip_symbols = true;
        config.invariant_globalization = true;
        let rendered = render_project_file(&config);
        assert!(rendered.contains("<StripSymbols>true</StripSymbols>"));
        assert!(rendered.contains("<InvariantGlobalization>true</InvariantGlobalization>"));
    }

    #[test]
    fn project_reference_used_when_sibling_project_present() {
        let mut config = base_config();
        config.runtime = RuntimeReference::ProjectReference { path: PathBuf::from("../Runtime/Runtime.csproj") };
        let rendered = render_project_file(&config);
        assert!(rendered.contains("<ProjectReference Include=\"../Runtime/Runtime.csproj\" />"));
    }
}
