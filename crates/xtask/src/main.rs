use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

const DOMAIN_CRATE: &str = "sheetz-domain";

/// Crates the domain must never depend on.
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &[
    "sheetz-player",
    "tracing",
    "directories",
    "web-sys",
    "wasm-bindgen",
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Keep the domain pure: no player, logging or platform dependencies in
/// its manifest, and no I/O in its sources.
fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    let mut violations = forbidden_deps(domain);

    let domain_src = metadata.workspace_root.join("crates/domain/src");
    violations.extend(scan_sources(&domain_src)?);

    if violations.is_empty() {
        println!("arch-check passed");
        Ok(())
    } else {
        for violation in &violations {
            eprintln!("  {violation}");
        }
        anyhow::bail!("arch-check found {} violation(s)", violations.len())
    }
}

fn forbidden_deps(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|dep| FORBIDDEN_DOMAIN_DEPS.contains(&dep.name.as_str()))
        .map(|dep| format!("{} depends on {}", package.name, dep.name))
        .collect()
}

fn scan_sources(dir: &Path) -> anyhow::Result<Vec<String>> {
    let io_use = regex_lite::Regex::new(r"\b(std::(fs|net|process|env)|tracing::)")
        .context("compiling source pattern")?;
    let mut violations = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let source = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                violations.extend(source_violations(&path, &source, &io_use));
            }
        }
    }
    Ok(violations)
}

fn source_violations(path: &Path, source: &str, pattern: &regex_lite::Regex) -> Vec<String> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(index, line)| format!("{}:{}: {}", path.display(), index + 1, line.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_player_dependency() {
        let package = Package {
            name: DOMAIN_CRATE.to_string(),
            dependencies: vec![
                Dependency {
                    name: "serde".to_string(),
                },
                Dependency {
                    name: "sheetz-player".to_string(),
                },
            ],
        };
        assert_eq!(
            forbidden_deps(&package),
            vec!["sheetz-domain depends on sheetz-player".to_string()]
        );
    }

    #[test]
    fn flags_io_in_sources_but_not_comments() {
        let pattern = regex_lite::Regex::new(r"\b(std::(fs|net|process|env)|tracing::)").unwrap();
        let source = "// std::fs is not allowed\nuse std::fs::File;\nlet x = 1;\ntracing::info!(\"x\");\n";
        let found = source_violations(Path::new("lib.rs"), source, &pattern);
        assert_eq!(found.len(), 2);
        assert!(found[0].starts_with("lib.rs:2:"));
    }
}
