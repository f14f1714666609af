//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mkproj",
    bin_name = "mkproj",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Build directory trees from a dash-depth outline",
    long_about = "mkproj creates directories and empty files from an outline where \
                  each leading '-' is one level of nesting. Run without a command \
                  to open the interactive editor.",
    after_help = "EXAMPLES:\n\
        \x20 mkproj                                  # interactive editor in .\n\
        \x20 mkproj create --file layout.txt --root ./app\n\
        \x20 printf 'src\\n-main.go\\n' | mkproj create\n\
        \x20 mkproj tree --root ./app > layout.txt",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Without one, the interactive editor opens.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a tree from an outline file or piped input.
    #[command(
        visible_alias = "c",
        about = "Build a tree from an outline",
        after_help = "EXAMPLES:\n\
            \x20 mkproj create --file layout.txt\n\
            \x20 mkproj create --file layout.txt --root ./out --dry-run\n\
            \x20 cat layout.txt | mkproj create --strict"
    )]
    Create(CreateArgs),

    /// Print an existing tree in outline notation.
    #[command(
        visible_alias = "t",
        about = "Render a directory as an outline",
        after_help = "EXAMPLES:\n\
            \x20 mkproj tree\n\
            \x20 mkproj tree --root ./app --all\n\
            \x20 mkproj tree --root ./app | mkproj create --root ./copy"
    )]
    Tree(TreeArgs),

    /// Compose an outline interactively and build it.
    #[command(
        visible_alias = "e",
        about = "Open the interactive editor",
        after_help = "KEYS:\n\
            \x20 Tab    indent one level        Enter  new line\n\
            \x20 Ctrl-S or F2  build            Esc    quit without changes"
    )]
    Edit(EditArgs),

    /// Initialise an mkproj configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 mkproj init\n\
            \x20 mkproj init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mkproj completions bash > ~/.local/share/bash-completion/completions/mkproj\n\
            \x20 mkproj completions zsh  > ~/.zfunc/_mkproj\n\
            \x20 mkproj completions fish > ~/.config/fish/completions/mkproj.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the mkproj configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mkproj config get defaults.root\n\
            \x20 mkproj config list\n\
            \x20 mkproj config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `mkproj create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Directory to build under (default: `defaults.root` from config).
    #[arg(short = 'r', long = "root", value_name = "DIR", help = "Root directory")]
    pub root: Option<PathBuf>,

    /// Outline file. Piped stdin is read when omitted.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "Outline file to build from"
    )]
    pub file: Option<PathBuf>,

    /// Preview what would be created without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Fail when any line could not be created.
    #[arg(long = "strict", help = "Exit with an error if any line fails")]
    pub strict: bool,
}

// ── tree ──────────────────────────────────────────────────────────────────────

/// Arguments for `mkproj tree`.
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Directory to render (default: `defaults.root` from config).
    #[arg(short = 'r', long = "root", value_name = "DIR", help = "Root directory")]
    pub root: Option<PathBuf>,

    /// Include entries whose name starts with `.`.
    #[arg(short = 'a', long = "all", help = "Include hidden entries")]
    pub all: bool,
}

// ── edit ──────────────────────────────────────────────────────────────────────

/// Arguments for `mkproj edit`.
#[derive(Debug, Args, Default)]
pub struct EditArgs {
    /// Directory to build under (default: `defaults.root` from config).
    #[arg(short = 'r', long = "root", value_name = "DIR", help = "Root directory")]
    pub root: Option<PathBuf>,

    /// Start from the contents of an outline file.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "Preload the editor from an outline file"
    )]
    pub file: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `mkproj init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mkproj completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `mkproj config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.root`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_is_accepted() {
        let cli = Cli::parse_from(["mkproj"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from([
            "mkproj", "create", "--file", "layout.txt", "--root", "out", "--dry-run",
        ]);
        match cli.command {
            Some(Commands::Create(args)) => {
                assert_eq!(args.file, Some(PathBuf::from("layout.txt")));
                assert_eq!(args.root, Some(PathBuf::from("out")));
                assert!(args.dry_run);
                assert!(!args.strict);
            }
            other => panic!("expected Create command, got {other:?}"),
        }
    }

    #[test]
    fn tree_short_flags() {
        let cli = Cli::parse_from(["mkproj", "t", "-a", "-r", "src"]);
        match cli.command {
            Some(Commands::Tree(args)) => {
                assert!(args.all);
                assert_eq!(args.root, Some(PathBuf::from("src")));
            }
            other => panic!("expected Tree command, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mkproj", "tree", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["mkproj", "--quiet", "--verbose", "tree"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_set_is_not_supported() {
        let result = Cli::try_parse_from(["mkproj", "config", "set", "a", "b"]);
        assert!(result.is_err());
    }
}
