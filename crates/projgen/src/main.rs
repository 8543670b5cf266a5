//! Projgen CLI - interactive project generator

mod logging;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use projgen_core::catalog::ExtraAction;
use projgen_core::report::{ConsoleReporter, LogReporter, Reporter};
use projgen_core::tui::CreateArgs;
use projgen_core::{runtime, Cancellation, Catalog, Preselection, ProjectCategory, Settings};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "projgen")]
#[command(about = "Interactive project generator for frontend, backend and fullstack apps")]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// YAML catalog replacing the built-in frameworks [env: PROJGEN_CATALOG]
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project (default)
    Create(CliCreateArgs),
    /// List the available frameworks, addons and extras
    List,
    /// Report installed runtimes and tools
    Doctor,
}

#[derive(Parser, Debug, Default)]
pub struct CliCreateArgs {
    /// Project name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Framework name (see `projgen list`)
    #[arg(short, long)]
    pub framework: Option<String>,

    /// CSS framework name
    #[arg(long)]
    pub css: Option<String>,

    /// UI library name
    #[arg(long)]
    pub ui: Option<String>,

    /// Extras to add (comma-separated names, display names or file paths)
    #[arg(short, long, value_delimiter = ',')]
    pub extras: Option<Vec<String>>,

    /// Runtime hint (node, bun, deno, go, python); detected when omitted
    #[arg(long)]
    pub runtime: Option<String>,

    /// Skip the framework's dependency install
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Directory the project folder is created in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Root for relative template locations [env: PROJGEN_TEMPLATE_DIR]
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Install stage deadline in seconds [env: PROJGEN_INSTALL_TIMEOUT]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Do not prompt; requires --name and --framework
    #[arg(short, long)]
    pub yes: bool,
}

impl CliCreateArgs {
    fn selection(&self) -> Preselection {
        Preselection {
            name: self.name.clone(),
            framework: self.framework.clone(),
            css_framework: self.css.clone(),
            ui_library: self.ui.clone(),
            extras: self.extras.clone(),
            runtime: self.runtime.clone(),
            no_install: self.no_install,
        }
    }

    fn apply(&self, settings: &mut Settings) {
        if let Some(dir) = &self.template_dir {
            settings.template_root = Some(dir.clone());
        }
        if let Some(secs) = self.timeout.filter(|s| *s > 0) {
            settings.install_timeout = Some(Duration::from_secs(secs));
        }
    }

    fn base_dir(&self) -> Result<PathBuf> {
        let current_dir = std::env::current_dir().context("Failed to read current directory")?;
        Ok(match &self.directory {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => current_dir.join(dir),
            None => current_dir,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    let args = Args::parse();
    logging::init_logging(args.verbose, args.quiet)?;

    // First Ctrl+C cancels the running step, a second one exits
    let (handle, cancel) = Cancellation::pair();
    let interrupted = AtomicBool::new(false);
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        if interrupted.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
        handle.cancel();
    })
    .ok();

    let mut settings = Settings::from_env();
    if let Some(catalog) = &args.catalog {
        settings.catalog = Some(catalog.clone());
    }

    let result = match args.command {
        Some(Command::Create(create_args)) => {
            create(settings, create_args, cancel, args.quiet).await
        }
        Some(Command::List) => list(&settings),
        Some(Command::Doctor) => {
            doctor();
            Ok(())
        }
        // No subcommand provided, default to create behavior (interactive mode)
        None => create(settings, CliCreateArgs::default(), cancel, args.quiet).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

async fn create(
    mut settings: Settings,
    args: CliCreateArgs,
    cancel: Cancellation,
    quiet: bool,
) -> Result<()> {
    args.apply(&mut settings);
    let base_dir = args.base_dir()?;

    if !args.yes {
        let create_args = CreateArgs {
            selection: args.selection(),
            directory: Some(base_dir),
        };
        return projgen_core::run(&settings, create_args, cancel).await;
    }

    let catalog = settings.load_catalog().context("Failed to load catalog")?;
    let options = args.selection().resolve(&catalog)?;

    let reporter: &dyn Reporter = if quiet { &LogReporter } else { &ConsoleReporter };
    let summary = settings
        .scaffolder(&base_dir, catalog)
        .generate(&options, &cancel, reporter)
        .await
        .context("Failed to create project")?;

    if !quiet {
        println!();
        println!(
            "{} {}",
            "Created".green().bold(),
            summary.project_dir.display()
        );
        println!();
        println!("  {}", "Next steps".bold());
        for (i, step) in summary.next_steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step.cyan());
        }
    }

    Ok(())
}

fn list(settings: &Settings) -> Result<()> {
    let catalog = settings.load_catalog().context("Failed to load catalog")?;
    print_catalog(&catalog);
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    for category in ProjectCategory::ALL {
        let frameworks = catalog.frameworks(category);
        if frameworks.is_empty() {
            continue;
        }
        println!("{}", category.display_name().bold());
        for fw in frameworks {
            println!("  {} {}", format!("{:<16}", fw.name).cyan(), fw.display_name);
            if !fw.description.is_empty() {
                println!("  {:<16} {}", "", fw.description.dimmed());
            }
        }
        println!();
    }

    let addons = [
        ("CSS frameworks", &catalog.css_frameworks),
        ("UI libraries", &catalog.ui_libraries),
    ];
    for (title, list) in addons {
        if list.is_empty() {
            continue;
        }
        println!("{}", title.bold());
        for addon in list {
            println!("  {} {}", format!("{:<16}", addon.name).cyan(), addon.display_name);
        }
        println!();
    }

    if !catalog.extras.is_empty() {
        println!("{}", "Extras".bold());
        for extra in &catalog.extras {
            let action = match &extra.action {
                ExtraAction::CreateFile(path) => format!("creates {path}"),
                ExtraAction::RunCommand(command) => format!("suggests `{command}`"),
            };
            println!(
                "  {} {} {}",
                format!("{:<16}", extra.name).cyan(),
                extra.display_name,
                format!("({action})").dimmed()
            );
        }
    }
}

fn doctor() {
    println!("{}", "Runtimes".bold());
    for info in runtime::inspect_all() {
        if info.available {
            println!(
                "  {} {:<8} {}",
                "✓".green(),
                info.name,
                info.version.as_deref().unwrap_or("unknown")
            );
        } else {
            println!("  {} {:<8} {}", "✗".red(), info.name, "not installed".dimmed());
            for tip in runtime::install_tips(info.name) {
                println!("      {}", tip.dimmed());
            }
        }
    }
    println!();
    println!("Preferred runtime: {}", runtime::detect().to_string().cyan());
}
