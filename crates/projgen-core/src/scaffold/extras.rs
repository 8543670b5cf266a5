//! Opt-in auxiliary files (.env, Dockerfile, CI workflow, ...)

use crate::catalog::{Catalog, ExtraAction};
use crate::error::ScaffoldError;
use crate::options::{default_port, ProjectOptions};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};

/// What the extras step produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtrasOutcome {
    /// Files written, relative to the project directory
    pub written: Vec<PathBuf>,
    /// Setup commands of selected run-command extras, not executed
    pub deferred_commands: Vec<String>,
}

/// Known extra files and the content each one gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtraFile {
    Env,
    Dockerfile,
    Compose,
    Gitignore,
    Workflow,
    Readme,
    Other,
}

impl ExtraFile {
    fn for_path(path: &str) -> Self {
        let lower = path.to_lowercase();
        match lower.as_str() {
            ".env" => ExtraFile::Env,
            "dockerfile" => ExtraFile::Dockerfile,
            "docker-compose.yml" | "docker-compose.yaml" | "compose.yml" | "compose.yaml" => {
                ExtraFile::Compose
            }
            ".gitignore" => ExtraFile::Gitignore,
            "readme.md" => ExtraFile::Readme,
            p if p.starts_with(".github/workflows/") => ExtraFile::Workflow,
            _ => ExtraFile::Other,
        }
    }

    fn contents(self, options: &ProjectOptions) -> String {
        match self {
            ExtraFile::Env => env_file(options),
            ExtraFile::Dockerfile => dockerfile(options),
            ExtraFile::Compose => compose_file(options),
            ExtraFile::Gitignore => gitignore(options),
            ExtraFile::Workflow => ci_workflow(options),
            ExtraFile::Readme => default_readme(options),
            ExtraFile::Other => String::new(),
        }
    }
}

/// Write the files for every recognized extra in `options.extras`, then a
/// default README if the project still has none.
///
/// Run-command extras are collected into [`ExtrasOutcome::deferred_commands`]
/// and never executed here. The first write failure aborts the step.
pub fn generate_extras(
    dest: &Path,
    options: &ProjectOptions,
    catalog: &Catalog,
) -> Result<ExtrasOutcome, ScaffoldError> {
    let mut outcome = ExtrasOutcome::default();
    let mut seen: Vec<&str> = Vec::new();

    for key in &options.extras {
        let Some(extra) = catalog.find_extra(key) else {
            warn!(extra = %key, "unknown extra, skipping");
            continue;
        };
        if seen.contains(&extra.name.as_str()) {
            continue;
        }
        seen.push(&extra.name);

        match &extra.action {
            ExtraAction::CreateFile(path) => {
                let relative = Path::new(path);
                if !is_project_relative(relative) {
                    warn!(extra = %extra.name, path = %path, "extra path escapes the project, skipping");
                    continue;
                }
                let kind = ExtraFile::for_path(path);
                let target = dest.join(relative);
                if kind == ExtraFile::Readme && target.exists() {
                    info!(extra = %extra.name, "README already present, keeping it");
                    continue;
                }
                write_extra(&target, &kind.contents(options))?;
                outcome.written.push(relative.to_path_buf());
            }
            ExtraAction::RunCommand(command) => {
                info!(extra = %extra.name, command = %command, "run-command extra is not executed automatically");
                outcome.deferred_commands.push(command.clone());
            }
        }
    }

    let readme = dest.join("README.md");
    if !readme.exists() {
        write_extra(&readme, &default_readme(options))?;
        outcome.written.push(PathBuf::from("README.md"));
    }

    Ok(outcome)
}

fn is_project_relative(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && path.components().next().is_some()
}

fn write_extra(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    let err = |source| ScaffoldError::Extras {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(err)?;
    }
    fs::write(path, content).map_err(err)
}

fn port(options: &ProjectOptions) -> u16 {
    default_port(&options.framework.language)
}

fn env_file(options: &ProjectOptions) -> String {
    format!("PORT={}\nAPP_NAME={}\n", port(options), options.kebab_name())
}

/// Two-stage build for Go, dependency install for everything else
pub fn dockerfile(options: &ProjectOptions) -> String {
    let port = port(options);
    if options.is_go() {
        format!(
            r#"FROM golang:1.23-alpine AS builder
WORKDIR /app
COPY . .
RUN go build -o app ./...

FROM alpine:3.20
WORKDIR /app
COPY --from=builder /app/app /usr/local/bin/app
EXPOSE {port}
CMD ["/usr/local/bin/app"]
"#
        )
    } else {
        format!(
            r#"FROM node:20-alpine
WORKDIR /app
COPY package*.json ./
RUN npm ci || npm install
COPY . .
EXPOSE {port}
CMD ["npm", "run", "start"]
"#
        )
    }
}

fn compose_file(options: &ProjectOptions) -> String {
    let port = port(options);
    format!(
        r#"services:
  app:
    build: .
    ports:
      - "{port}:{port}"
    environment:
      - PORT={port}
"#
    )
}

fn gitignore(options: &ProjectOptions) -> String {
    let toolchain = if options.is_go() {
        "bin/\napp\n*.exe\n*.test\n"
    } else {
        "node_modules/\ndist/\nbuild/\n*.log\n"
    };
    format!("{toolchain}.env\n.DS_Store\n")
}

fn ci_workflow(options: &ProjectOptions) -> String {
    let steps = if options.is_go() {
        "      - uses: actions/setup-go@v5\n        with:\n          go-version: stable\n      - run: go build ./...\n      - run: go test ./...\n".to_string()
    } else {
        let mut steps = String::from(
            "      - uses: actions/setup-node@v4\n        with:\n          node-version: 20\n",
        );
        if !options.framework.install_cmd.is_empty() {
            steps.push_str(&format!("      - run: {}\n", options.framework.install_cmd));
        }
        if !options.framework.build_cmd.is_empty() {
            steps.push_str(&format!("      - run: {}\n", options.framework.build_cmd));
        }
        steps
    };
    format!(
        "name: CI\n\non:\n  push:\n    branches: [main]\n  pull_request:\n\njobs:\n  build:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n{steps}"
    )
}

fn default_readme(options: &ProjectOptions) -> String {
    format!("# {}\n\nGenerated with projgen\n", options.name)
}
