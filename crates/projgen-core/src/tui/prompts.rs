//! Charm-style CLI prompts using cliclack

use super::reporter::ClackReporter;
use crate::catalog::{AddonDescriptor, Catalog, ProjectCategory};
use crate::config::Settings;
use crate::install::Cancellation;
use crate::naming;
use crate::options::{Preselection, ProjectOptions};
use crate::runtime::{self, Runtime};
use crate::scaffold::{ScaffoldSummary, Structure};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Default project name offered by the name prompt
const DEFAULT_NAME: &str = "my-app";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Answers given up front; their prompts are skipped
    pub selection: Preselection,

    /// Directory the project folder is created in
    pub directory: Option<PathBuf>,
}

/// Run the interactive wizard and scaffold the result
pub async fn run(settings: &Settings, args: CreateArgs, cancel: Cancellation) -> Result<()> {
    cliclack::intro("projgen")?;

    let catalog = settings.load_catalog().context("Failed to load catalog")?;

    // Steps 1-8: collect and confirm the options
    let Some(options) = collect_options(&catalog, &args.selection)? else {
        cliclack::outro_cancel("Nothing was created")?;
        return Ok(());
    };

    // Step 9: generate
    let base_dir = match args.directory {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let scaffolder = settings.scaffolder(&base_dir, catalog);
    let summary = scaffolder
        .generate(&options, &cancel, &ClackReporter)
        .await
        .context("Failed to create project")?;

    // Step 10: show next steps
    print_next_steps(&summary)?;

    Ok(())
}

fn collect_options(catalog: &Catalog, selection: &Preselection) -> Result<Option<ProjectOptions>> {
    // Step 1-2: category and framework
    let mut options = match &selection.framework {
        Some(name) => {
            let options = ProjectOptions::for_framework(catalog, "", name)?;
            cliclack::log::info(format!("Framework: {}", options.framework.display_name))?;
            options
        }
        None => select_framework(catalog)?,
    };

    // Step 3: CSS framework
    let css_choices: Vec<AddonDescriptor> =
        catalog.css_frameworks_for(&options.framework).cloned().collect();
    let css = match &selection.css_framework {
        Some(name) => Some(name.clone()),
        None => select_addon("Select a CSS framework", &css_choices)?,
    };
    if let Some(css) = css {
        options = options.with_css_framework(catalog, &css)?;
    }

    // Step 4: UI library
    let ui_choices: Vec<AddonDescriptor> =
        catalog.ui_libraries_for(&options.framework).cloned().collect();
    let ui = match &selection.ui_library {
        Some(name) => Some(name.clone()),
        None => select_addon("Select a UI library", &ui_choices)?,
    };
    if let Some(ui) = ui {
        options = options.with_ui_library(catalog, &ui)?;
    }

    // Step 5: runtimes
    options.runtime = check_runtimes(selection)?;

    // Step 6: project name
    options.name = match &selection.name {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => cliclack::input("Project name")
            .placeholder(DEFAULT_NAME)
            .default_input(DEFAULT_NAME)
            .validate(|input: &String| {
                if input.trim().is_empty() {
                    Err("Project name is required")
                } else if !naming::is_single_dir_name(&naming::normalize(input)) {
                    Err("Project name must not contain path separators")
                } else {
                    Ok(())
                }
            })
            .interact()?,
    };

    // Step 7: extras
    options.extras = match &selection.extras {
        Some(extras) => extras.clone(),
        None => select_extras(catalog)?,
    };

    // Step 8: install and confirm
    options.auto_install = if selection.no_install {
        false
    } else if options.framework.install_cmd.is_empty() {
        true
    } else {
        cliclack::confirm(format!(
            "Install dependencies now? ({})",
            options.framework.install_cmd
        ))
        .initial_value(true)
        .interact()?
    };

    cliclack::note("Summary", summary(&options))?;
    let confirmed: bool = cliclack::confirm("Create project?")
        .initial_value(true)
        .interact()?;

    Ok(confirmed.then_some(options))
}

fn select_framework(catalog: &Catalog) -> Result<ProjectOptions> {
    let mut select = cliclack::select("Select a project type");
    for category in ProjectCategory::ALL {
        let count = catalog.frameworks(category).len();
        if count > 0 {
            select = select.item(category, category.display_name(), format!("{count} frameworks"));
        }
    }
    let category: ProjectCategory = select.interact()?;

    let frameworks = catalog.frameworks(category);
    let mut select = cliclack::select(format!("Select a {} framework", category));
    for (idx, fw) in frameworks.iter().enumerate() {
        select = select.item(idx, &fw.display_name, &fw.description);
    }
    let idx: usize = select.interact()?;

    let framework = frameworks
        .get(idx)
        .context("Selected framework is out of range")?;
    Ok(ProjectOptions::new("", category, framework.clone()))
}

/// Offer the supported addons plus a "None" choice; nothing to offer skips the prompt
fn select_addon(prompt: &str, choices: &[AddonDescriptor]) -> Result<Option<String>> {
    if choices.is_empty() {
        return Ok(None);
    }

    let mut select = cliclack::select(prompt).item(String::new(), "None", "");
    for addon in choices {
        select = select.item(addon.name.clone(), &addon.display_name, &addon.install_cmd);
    }
    let selected: String = select.interact()?;

    Ok((!selected.is_empty()).then_some(selected))
}

fn check_runtimes(selection: &Preselection) -> Result<Runtime> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    let report = runtime::inspect_all();
    let detected: Vec<String> = report
        .iter()
        .filter(|r| r.available)
        .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
        .collect();

    if detected.is_empty() {
        spinner.stop("No runtimes detected");
    } else {
        spinner.stop(format!("Detected runtimes: {}", detected.join(", ")));
    }

    for missing in report.iter().filter(|r| !r.available) {
        cliclack::log::remark(format!(
            "{} not found: {}",
            missing.name,
            runtime::install_tips(missing.name).join("; ")
        ))?;
    }

    Ok(selection.runtime_hint())
}

fn select_extras(catalog: &Catalog) -> Result<Vec<String>> {
    if catalog.extras.is_empty() {
        return Ok(Vec::new());
    }

    let mut multi = cliclack::multiselect("Select extras (optional)");
    for extra in &catalog.extras {
        multi = multi.item(extra.display_name.clone(), &extra.display_name, "");
    }
    let selected: Vec<String> = multi.required(false).interact()?;

    Ok(selected)
}

fn summary(options: &ProjectOptions) -> String {
    let addon = |a: &Option<AddonDescriptor>| {
        a.as_ref()
            .map(|a| a.display_name.clone())
            .unwrap_or_else(|| "none".to_string())
    };
    let extras = if options.extras.is_empty() {
        "none".to_string()
    } else {
        options.extras.join(", ")
    };

    format!(
        "Name:       {} ({})\n\
         Type:       {}\n\
         Framework:  {}\n\
         CSS:        {}\n\
         UI library: {}\n\
         Runtime:    {}\n\
         Extras:     {}\n\
         Install:    {}",
        options.name,
        options.kebab_name(),
        options.category,
        options.framework.display_name,
        addon(&options.css_framework),
        addon(&options.ui_library),
        options.runtime,
        extras,
        if options.auto_install { "yes" } else { "no" },
    )
}

fn print_next_steps(summary: &ScaffoldSummary) -> Result<()> {
    let origin = match &summary.structure {
        Structure::Template(dir) => format!("from {}", dir.display()),
        Structure::Fallback => "with the basic structure".to_string(),
    };
    cliclack::log::success(format!(
        "Created {} {}",
        summary.project_dir.display(),
        origin
    ))?;

    let failed = summary.install.failures().count();
    if failed > 0 {
        cliclack::log::warning(format!(
            "{failed} install step(s) failed; the project is still usable"
        ))?;
    }

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in summary.next_steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
