//! Runtime detection for Node.js, Bun, Deno, Go and Python

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::process::Command;
use std::sync::OnceLock;

/// Runtime hint used to pick default ports and run commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Node,
    Bun,
    Deno,
    Go,
    Python,
    #[default]
    Unknown,
}

impl Runtime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Node => "node",
            Runtime::Bun => "bun",
            Runtime::Deno => "deno",
            Runtime::Go => "go",
            Runtime::Python => "python",
            Runtime::Unknown => "unknown",
        }
    }

    /// Parse a runtime token; anything unrecognized is `Unknown`
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "node" | "nodejs" | "node.js" => Runtime::Node,
            "bun" => Runtime::Bun,
            "deno" => Runtime::Deno,
            "go" | "golang" => Runtime::Go,
            "python" | "python3" | "py" => Runtime::Python,
            _ => Runtime::Unknown,
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Runtimes probed by [`detect`], in order of preference
const PREFERRED: &[(&str, Runtime)] = &[
    ("node", Runtime::Node),
    ("bun", Runtime::Bun),
    ("deno", Runtime::Deno),
    ("go", Runtime::Go),
];

/// Tools reported by [`inspect_all`]: name, candidate binaries, version arguments
const TOOLS: &[(&str, &[&str], &[&str])] = &[
    ("node", &["node"], &["--version"]),
    ("npm", &["npm"], &["--version"]),
    ("go", &["go"], &["version"]),
    ("python", &["python", "python3"], &["--version"]),
    ("pip", &["pip", "pip3"], &["--version"]),
    ("bun", &["bun"], &["--version"]),
    ("deno", &["deno"], &["--version"]),
];

fn has(bin: &str) -> bool {
    which::which(bin).is_ok()
}

/// Detect the first available runtime on PATH
pub fn detect() -> Runtime {
    PREFERRED
        .iter()
        .find(|(bin, _)| has(bin))
        .map(|(_, runtime)| *runtime)
        .unwrap_or(Runtime::Unknown)
}

/// Check every known tool and report its version
pub fn inspect_all() -> Vec<RuntimeInfo> {
    TOOLS
        .iter()
        .map(|&(name, bins, args)| check_tool(name, bins, args))
        .collect()
}

fn check_tool(name: &'static str, bins: &[&str], args: &[&str]) -> RuntimeInfo {
    for bin in bins {
        if !has(bin) {
            continue;
        }
        // Found but unparseable still counts as available
        let version = run_version(bin, args).unwrap_or_else(|| "unknown".to_string());
        return RuntimeInfo {
            name,
            version: Some(version),
            available: true,
        };
    }
    RuntimeInfo {
        name,
        version: None,
        available: false,
    }
}

fn run_version(bin: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(bin).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = if stdout.trim().is_empty() {
        String::from_utf8_lossy(&output.stderr).into_owned()
    } else {
        stdout.into_owned()
    };
    parse_version(&text)
}

/// Extract the first `major.minor[.patch]` version from tool output
pub fn parse_version(output: &str) -> Option<String> {
    static VERSION: OnceLock<Option<Regex>> = OnceLock::new();
    let re = VERSION
        .get_or_init(|| Regex::new(r"\d+\.\d+(\.\d+)?").ok())
        .as_ref()?;
    re.find(output).map(|m| m.as_str().to_string())
}

/// Suggestions shown when a tool is missing
pub fn install_tips(name: &str) -> Vec<&'static str> {
    let windows = cfg!(windows);
    match name.to_lowercase().as_str() {
        "node" if windows => vec![
            "winget install OpenJS.NodeJS.LTS",
            "or download from https://nodejs.org/",
        ],
        "node" => vec!["nvm (recommended) or your system package manager", "see https://nodejs.org/"],
        "npm" => vec!["npm ships with Node.js"],
        "go" if windows => vec!["winget install GoLang.Go", "or download from https://go.dev/dl/"],
        "go" => vec!["download from https://go.dev/dl/ or use your system package manager"],
        "python" if windows => vec![
            "winget install Python.Python.3",
            "or download from https://www.python.org/downloads/",
        ],
        "python" => vec!["use your system package manager or https://www.python.org/downloads/"],
        "pip" => vec!["pip ships with Python, or follow the official get-pip.py instructions"],
        "bun" => vec!["see https://bun.sh/docs/installation"],
        "deno" => vec!["see https://docs.deno.com/runtime/getting_started/installation/"],
        _ => vec!["see the tool's official documentation"],
    }
}
