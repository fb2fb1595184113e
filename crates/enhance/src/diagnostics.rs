/// Operator-visible diagnostic channel, the page's `console.error`.
///
/// Entries are append-only and mirrored to `log::error!` so they also reach
/// whatever logger the embedder installed.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        log::error!(target: "enhance", "{entry}");
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
