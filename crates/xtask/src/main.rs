//! Workspace tasks. Currently one: `arch-check`, which enforces the
//! layering rules source-side where the compiler cannot.

use std::path::{Path, PathBuf};

use anyhow::Context;
use regex_lite::Regex;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// A forbidden import pattern for files under a given source subtree.
struct Rule {
    subtree: &'static str,
    forbidden: &'static str,
    reason: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        subtree: "src/state",
        forbidden: r"crate::(ui|infrastructure)\b",
        reason: "state machines stay pure; they know ports, never adapters or the UI",
    },
    Rule {
        // Tests may pull in the in-memory platform mock; production code
        // must not touch concrete adapters.
        subtree: "src/application",
        forbidden: r"crate::(ui|infrastructure::(http_client|memory|platform::desktop))\b",
        reason: "services talk to the backend through ports only",
    },
    Rule {
        subtree: "src/ui",
        forbidden: r"crate::infrastructure::(http_client|memory|platform::desktop)\b",
        reason: "the UI reaches adapters through injected ports, not directly",
    },
    Rule {
        subtree: "src/ports",
        forbidden: r"crate::(ui|application|infrastructure|state)\b",
        reason: "ports are the innermost boundary and import nothing above it",
    },
];

fn arch_check() -> anyhow::Result<()> {
    let admin_src = workspace_root()?.join("crates/admin");
    let mut violations = Vec::new();

    for rule in RULES {
        let re = Regex::new(rule.forbidden).context("compiling rule pattern")?;
        let root = admin_src.join(rule.subtree);
        for file in rust_files(&root)? {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            for (lineno, line) in text.lines().enumerate() {
                if line.trim_start().starts_with("//") {
                    continue;
                }
                if re.is_match(line) {
                    violations.push(format!(
                        "{}:{}: forbidden import ({})",
                        file.display(),
                        lineno + 1,
                        rule.reason
                    ));
                }
            }
        }
    }

    if violations.is_empty() {
        println!("arch-check: ok");
        Ok(())
    } else {
        for v in &violations {
            eprintln!("{v}");
        }
        anyhow::bail!("arch-check: {} violation(s)", violations.len())
    }
}

fn workspace_root() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;
    if !output.status.success() {
        anyhow::bail!("cargo metadata failed");
    }
    let metadata: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let root = metadata["workspace_root"]
        .as_str()
        .context("workspace_root missing from cargo metadata")?;
    Ok(PathBuf::from(root))
}

fn rust_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    if !root.exists() {
        return Ok(out);
    }
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir)
            .with_context(|| format!("reading directory {}", dir.display()))?
        {
            let path = entry?.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    Ok(out)
}
