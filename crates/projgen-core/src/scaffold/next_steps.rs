//! Commands suggested after a successful scaffold

use crate::options::ProjectOptions;
use crate::runtime::Runtime;

/// Build the "what to run next" list for a generated project.
///
/// `deferred` holds setup commands of run-command extras; they are listed
/// right after changing into the project directory.
pub fn next_steps(dir_name: &str, options: &ProjectOptions, deferred: &[String]) -> Vec<String> {
    let mut steps = vec![format!("cd {dir_name}")];
    steps.extend(deferred.iter().cloned());

    let framework = &options.framework;

    if options.is_go() {
        steps.push(if framework.start_cmd.is_empty() {
            "go run ./...".to_string()
        } else {
            framework.start_cmd.clone()
        });
        return steps;
    }

    if options.auto_install && !framework.install_cmd.is_empty() {
        steps.push(framework.install_cmd.clone());
    }
    if !framework.start_cmd.is_empty() {
        steps.push(framework.start_cmd.clone());
        return steps;
    }

    match options.runtime {
        Runtime::Bun => {
            if !options.auto_install {
                steps.push("bun install".to_string());
            }
            steps.push("bun run dev".to_string());
        }
        Runtime::Deno => steps.push("deno task dev".to_string()),
        _ => {
            if !options.auto_install {
                steps.push("npm install".to_string());
            }
            steps.push("npm run dev".to_string());
        }
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn options(framework: &str) -> ProjectOptions {
        let catalog = Catalog::builtin();
        let (category, fw) = catalog.find_framework(framework).unwrap();
        ProjectOptions::new("demo", category, fw.clone())
    }

    #[test]
    fn test_go_uses_start_command() {
        assert_eq!(
            next_steps("demo", &options("go-fiber"), &[]),
            vec!["cd demo", "go run main.go"]
        );
    }

    #[test]
    fn test_go_without_start_command() {
        let mut opts = options("go-fiber");
        opts.framework.start_cmd.clear();
        assert_eq!(next_steps("demo", &opts, &[]), vec!["cd demo", "go run ./..."]);
    }

    #[test]
    fn test_node_with_declared_commands() {
        let steps = next_steps("demo", &options("vite-react-ts"), &[]);
        assert_eq!(steps, vec!["cd demo", "npm install", "npm run dev"]);

        let mut opts = options("vite-react-ts");
        opts.auto_install = false;
        assert_eq!(next_steps("demo", &opts, &[]), vec!["cd demo", "npm run dev"]);
    }

    #[test]
    fn test_runtime_defaults_without_start_command() {
        let mut opts = options("vite-react-ts");
        opts.framework.install_cmd.clear();
        opts.framework.start_cmd.clear();
        opts.auto_install = false;

        opts.runtime = Runtime::Bun;
        assert_eq!(
            next_steps("demo", &opts, &[]),
            vec!["cd demo", "bun install", "bun run dev"]
        );

        opts.runtime = Runtime::Deno;
        assert_eq!(next_steps("demo", &opts, &[]), vec!["cd demo", "deno task dev"]);

        opts.runtime = Runtime::Unknown;
        assert_eq!(
            next_steps("demo", &opts, &[]),
            vec!["cd demo", "npm install", "npm run dev"]
        );
    }

    #[test]
    fn test_deferred_commands_follow_cd() {
        let deferred = vec!["npm install -D prettier".to_string()];
        let steps = next_steps("demo", &options("go-fiber"), &deferred);
        assert_eq!(steps, vec!["cd demo", "npm install -D prettier", "go run main.go"]);
    }
}
