use clap::ValueEnum;

/// How `check` prints diagnostics
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Annotated source snippets
    #[default]
    #[value(name = "pretty")]
    Pretty,

    /// One `path:line:column` line per diagnostic
    #[value(name = "compact")]
    Compact,

    /// A JSON array on stdout
    #[value(name = "json")]
    Json,
}
