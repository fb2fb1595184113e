/// In-code knobs an embedder hands to the engine. There is no config file;
/// `Default` reproduces the shipped page's behavior.
#[derive(Clone, Debug, Default)]
pub struct EnhanceConfig {
    /// Owner named in the footer's copyright stamp. `None` stamps the year
    /// alone.
    pub copyright_owner: Option<String>,
}
