//! Cyan CLI - Template metadata prompts for CyanPrint

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use cyan_core::tui::CreateArgs;
use cyan_core::{CyanProfile, Descriptor, PresetAnswers, Rule};

#[derive(Parser, Debug)]
#[command(name = "cyan-tools")]
#[command(about = "CLI for scaffolding CyanPrint templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask for template metadata and print the render descriptor
    Create(CliCreateArgs),
    /// Check a single value against a validation rule
    Check(CheckArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliCreateArgs {
    /// CyanPrint username
    #[arg(short, long)]
    pub username: Option<String>,

    /// Template name, unique under your account
    #[arg(short, long)]
    pub name: Option<String>,

    /// Short description of the template
    #[arg(short, long)]
    pub description: Option<String>,

    /// Contact email
    #[arg(short, long)]
    pub email: Option<String>,

    /// Tags to add (repeatable or comma-separated)
    #[arg(short, long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Do not ask for tags
    #[arg(long = "no-tags", conflicts_with = "tags")]
    pub no_tags: bool,

    /// URL of the project's site
    #[arg(short, long)]
    pub project: Option<String>,

    /// URL of the project's source code
    #[arg(short, long)]
    pub source: Option<String>,

    /// Auto-confirm optional prompts (empty description, no tags)
    #[arg(short, long)]
    pub yes: bool,

    /// Output format for the descriptor
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

impl From<&CliCreateArgs> for CreateArgs {
    fn from(args: &CliCreateArgs) -> Self {
        let tags = if args.no_tags {
            Some(Vec::new())
        } else if args.tags.is_empty() {
            None
        } else {
            Some(args.tags.clone())
        };

        CreateArgs {
            presets: PresetAnswers {
                username: args.username.clone(),
                name: args.name.clone(),
                description: args.description.clone(),
                email: args.email.clone(),
                tags,
                project: args.project.clone(),
                source: args.source.clone(),
            },
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Rule to apply
    #[arg(value_enum)]
    pub rule: RuleKind,

    /// Value to check
    pub value: String,

    /// Label used in identifier error messages
    #[arg(short, long, default_value = "Identifier")]
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuleKind {
    Identifier,
    Reference,
    Email,
    Url,
}

impl RuleKind {
    fn rule(self, label: &str) -> Rule {
        match self {
            RuleKind::Identifier => Rule::identifier(label),
            RuleKind::Reference => Rule::Reference,
            RuleKind::Email => Rule::Email,
            RuleKind::Url => Rule::Url,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

fn render(descriptor: &Descriptor, format: Format) -> Result<String> {
    let output = match format {
        Format::Json => serde_json::to_string_pretty(descriptor)?,
        Format::Yaml => serde_yaml::to_string(descriptor)?,
    };
    Ok(output)
}

fn create(args: CliCreateArgs) -> Result<()> {
    let result = cyan_core::run(&CyanProfile, CreateArgs::from(&args));

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    let descriptor = result?;
    println!("{}", render(&descriptor, args.format)?.trim_end());
    Ok(())
}

/// Returns false when the value is rejected
fn check(args: &CheckArgs) -> bool {
    match args.rule.rule(&args.label).validate(&args.value) {
        None => {
            println!("{} {}", "valid".green().bold(), args.value);
            true
        }
        Some(message) => {
            eprintln!("{} {}", "invalid".red().bold(), message);
            false
        }
    }
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::Create(create_args)) => create(create_args),
        Some(Command::Check(check_args)) => {
            if !check(&check_args) {
                std::process::exit(1);
            }
            Ok(())
        }
        // No subcommand provided, default to create behavior (interactive mode)
        None => create(CliCreateArgs::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_create_flags_become_presets() {
        let args = Args::parse_from([
            "cyan-tools",
            "create",
            "--username",
            "alice",
            "--tag",
            "cli,rust",
            "--tag",
            "web",
            "--format",
            "yaml",
        ]);
        let Some(Command::Create(create_args)) = args.command else {
            panic!("expected create command");
        };
        assert_eq!(create_args.format, Format::Yaml);

        let create = CreateArgs::from(&create_args);
        assert_eq!(create.presets.username.as_deref(), Some("alice"));
        assert_eq!(
            create.presets.tags,
            Some(vec!["cli".to_string(), "rust".to_string(), "web".to_string()])
        );
        assert!(create.presets.email.is_none());
    }

    #[test]
    fn test_no_tags_flag() {
        let args = Args::parse_from(["cyan-tools", "create", "--no-tags"]);
        let Some(Command::Create(create_args)) = args.command else {
            panic!("expected create command");
        };
        assert_eq!(CreateArgs::from(&create_args).presets.tags, Some(Vec::new()));
    }

    #[test]
    fn test_no_tags_conflicts_with_tag() {
        let result = Args::try_parse_from(["cyan-tools", "create", "--no-tags", "--tag", "a"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_reference() {
        let args = Args::parse_from(["cyan-tools", "check", "reference", "alice/my-template:0"]);
        let Some(Command::Check(check_args)) = args.command else {
            panic!("expected check command");
        };
        assert!(check(&check_args));

        let args = Args::parse_from(["cyan-tools", "check", "reference", "a:b:c"]);
        let Some(Command::Check(check_args)) = args.command else {
            panic!("expected check command");
        };
        assert!(!check(&check_args));
    }

    #[test]
    fn test_render_formats() {
        let descriptor = Descriptor::default();
        let json = render(&descriptor, Format::Json).unwrap();
        assert!(json.contains("\"plugins\": []"));

        let yaml = render(&descriptor, Format::Yaml).unwrap();
        assert!(yaml.contains("plugins: []"));
    }
}
