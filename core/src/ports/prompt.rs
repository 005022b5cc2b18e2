/// How a menu lays out its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One option per line.
    List,
    /// Options flow left to right across the terminal, wrapping into rows.
    Columns,
}

/// The operator's side of the conversation.
pub trait Prompter {
    /// Asks a free-text question. Empty input yields `default`.
    fn ask(&self, question: &str, default: &str) -> anyhow::Result<String>;

    /// Asks for a secret without echoing it.
    fn ask_secret(&self, question: &str) -> anyhow::Result<String>;

    /// Shows `options` numbered from 1 and returns the chosen label.
    ///
    /// Blocks until a valid selection is made.
    fn choose(&self, prompt: &str, options: &[String], layout: Layout) -> anyhow::Result<String>;
}
