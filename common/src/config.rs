/// Runtime configuration, built once from the parsed command line
/// and passed down to every workflow.
#[derive(Clone, Debug)]
pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,
    /// 0 = normal output, higher values trim decoration.
    pub quiet: u8,
    /// Skips the live range list refresh and uses the compiled-in list
    /// (or a file, if one was given).
    pub offline: bool,
    /// Substring identifying the CDN provider in DNS-history records,
    /// matched case-insensitively.
    pub provider: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            offline: false,
            provider: String::from("cloudflare"),
        }
    }
}
