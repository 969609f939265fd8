//! `snygg-edit`: inspect and edit the stylesheet of a theme component.
//!
//! ```text
//! snygg-edit --dir my-theme --component night show --level basic
//! snygg-edit -c night add-rule 'key:pressed'
//! snygg-edit -c night set 'key:pressed' background '#112233'
//! snygg-edit -c night set --add @defines --primary '#4caf50'
//! snygg-edit -c night apply edits.json
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use snygg::{Command, Level, Rule, SpecCatalog, Value};
use snygg_editor::{
    EditorConfig, EnglishTranslations, ExtensionManifest, ImeUiCatalog, Preview, StylesheetView,
    Workspace,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "snygg.yaml";

#[derive(Parser, Debug)]
#[command(
    name = "snygg-edit",
    version,
    about = "Inspect and edit snygg keyboard theme stylesheets"
)]
struct Cli {
    /// Extension directory containing extension.json
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Id of the theme component to edit
    #[arg(short, long)]
    component: String,

    /// Editor config file [default: <dir>/snygg.yaml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Level used for names and property filtering
    #[arg(short, long, global = true)]
    level: Option<Level>,

    /// Print machine readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Show the rules and their visible properties
    Show,
    /// Report variable problems; exits non-zero if any are found
    Check,
    /// Add an empty rule
    AddRule { rule: Rule },
    /// Rename a rule, keeping its properties
    RenameRule { from: Rule, to: Rule },
    /// Remove a rule and its properties
    RemoveRule { rule: Rule },
    /// Set a property value
    Set {
        rule: Rule,
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_hyphen_values = true)]
        value: Value,
        /// Fail if the property already exists
        #[arg(long)]
        add: bool,
    },
    /// Remove a property
    Unset {
        rule: Rule,
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Apply a JSON array of commands as one step
    Apply { file: PathBuf },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.dir.join(CONFIG_FILE));
    let config = EditorConfig::load(&config_path)?;
    let manifest = ExtensionManifest::load(&cli.dir)?;
    let meta = manifest.component(&cli.component)?.clone();

    let mut workspace = Workspace::open(&cli.dir, meta, config);
    if let Some(level) = cli.level {
        workspace.set_level(level);
    }

    let commands = match cli.command {
        Cmd::Show => {
            let view = workspace.view(&ImeUiCatalog, &EnglishTranslations);
            print_view(&view, cli.json)?;
            return Ok(ExitCode::SUCCESS);
        }
        Cmd::Check => return check(&workspace, cli.json),
        Cmd::AddRule { rule } => vec![Command::AddRule { rule }],
        Cmd::RenameRule { from, to } => vec![Command::RenameRule { from, to }],
        Cmd::RemoveRule { rule } => vec![Command::RemoveRule { rule }],
        Cmd::Set {
            rule,
            name,
            value,
            add,
        } => {
            warn_if_unsupported(&rule, &name, &value);
            if add {
                vec![Command::AddProperty { rule, name, value }]
            } else {
                vec![Command::SetProperty { rule, name, value }]
            }
        }
        Cmd::Unset { rule, name } => vec![Command::RemoveProperty { rule, name }],
        Cmd::Apply { file } => {
            let input = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            serde_json::from_str(&input)
                .with_context(|| format!("{} is not a list of commands", file.display()))?
        }
    };

    let results = workspace.try_update(|editor| {
        commands
            .into_iter()
            .map(|command| editor.apply(command))
            .collect::<Result<Vec<_>, _>>()
    })?;

    if !results.iter().any(|applied| applied.changed) {
        println!("{}", style("no changes").dim());
        return Ok(ExitCode::SUCCESS);
    }

    let path = workspace.save()?;
    println!("{} {}", style("saved").green(), path.display());
    Ok(ExitCode::SUCCESS)
}

fn check(workspace: &Workspace, json: bool) -> anyhow::Result<ExitCode> {
    let warnings: Vec<String> = workspace
        .editor()
        .check_variables()
        .iter()
        .map(ToString::to_string)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&warnings)?);
    } else if warnings.is_empty() {
        println!("{}", style("no problems found").green());
    } else {
        for warning in &warnings {
            println!("{} {}", style("warning:").yellow().bold(), warning);
        }
    }

    Ok(if warnings.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn warn_if_unsupported(rule: &Rule, name: &str, value: &Value) {
    let element = rule.element();
    let Some(spec) = ImeUiCatalog.property_set_spec(element) else {
        eprintln!(
            "{} '{}' is not a known element",
            style("warning:").yellow().bold(),
            element
        );
        return;
    };
    match spec.property_spec(name) {
        None => eprintln!(
            "{} '{}' is not a known property of '{}'",
            style("warning:").yellow().bold(),
            name,
            element
        ),
        Some(property) if !property.supports(value.encoder()) => eprintln!(
            "{} '{}' does not accept {} values",
            style("warning:").yellow().bold(),
            name,
            value.encoder().category_name().to_lowercase()
        ),
        Some(_) => {}
    }
}

fn print_view(view: &StylesheetView, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    if view.show_empty_hint {
        println!("{}", style("No rules defined yet.").italic());
    }

    for rule in &view.rules {
        let mut header = style(&rule.element).bold().to_string();
        for selector in &rule.selectors {
            header.push(' ');
            header.push_str(&style(selector).cyan().to_string());
        }
        if view.level != Level::Developer {
            header.push_str(&format!("  {}", style(&rule.rule).dim()));
        }
        println!("{}", header);

        if let Some(description) = &rule.description {
            println!("  {}", style(description).italic().dim());
        }
        for line in &rule.attributes {
            println!("  {}", style(line).dim());
        }
        for property in &rule.properties {
            let suffix = match &property.preview {
                Preview::Direct { .. } => String::new(),
                Preview::Linked { target, .. } => {
                    format!(" {}", style(format!("-> {}", target)).dim())
                }
                Preview::Unresolved { .. } => format!(" {}", style("-> undefined").red()),
            };
            println!("  {:<26} {}{}", property.label, property.value, suffix);
        }
        if rule.hidden > 0 {
            println!(
                "  {}",
                style(format!("({} hidden at {} level)", rule.hidden, view.level)).dim()
            );
        }
        println!();
    }
    Ok(())
}
