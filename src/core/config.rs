use log::LevelFilter;

pub trait Config: Send + Sync {
    /// Base URL of the remote contact collection.
    fn base_url(&self) -> &str;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
