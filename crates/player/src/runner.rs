use crate::application::EditorSession;

/// Configuration types for the player runner.
pub mod config {
    use std::path::PathBuf;
    use std::str::FromStr;

    /// Environment variable selecting the storage backend
    pub const STORAGE_ENV: &str = "FLAMESCORE_STORAGE";

    /// Environment variable overriding the desktop storage file
    pub const STORAGE_PATH_ENV: &str = "FLAMESCORE_STORAGE_PATH";

    /// Where editor state is kept between sessions
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum StorageBackend {
        /// localStorage in the browser, a JSON file on desktop
        #[default]
        Persistent,
        /// Nothing is kept after exit
        Memory,
    }

    impl FromStr for StorageBackend {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "file" | "local" | "persistent" => Ok(Self::Persistent),
                "memory" => Ok(Self::Memory),
                other => Err(format!("unknown storage backend: {other}")),
            }
        }
    }

    #[derive(Clone, Debug, Default)]
    pub struct RunnerConfig {
        pub storage: StorageBackend,
        /// Desktop only; ignored in the browser
        pub storage_path: Option<PathBuf>,
    }

    impl RunnerConfig {
        /// Read the configuration from the process environment
        pub fn from_env() -> Result<Self, String> {
            Self::from_lookup(|name| std::env::var(name).ok())
        }

        /// Build the configuration from any variable lookup
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
            let storage = match lookup(STORAGE_ENV) {
                Some(value) => value.parse()?,
                None => StorageBackend::default(),
            };
            let storage_path = lookup(STORAGE_PATH_ENV)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from);

            Ok(Self {
                storage,
                storage_path,
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let vars: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |name| vars.get(name).cloned()
        }

        #[test]
        fn test_defaults_to_persistent_storage() {
            let config = RunnerConfig::from_lookup(lookup_from(&[])).unwrap();
            assert_eq!(config.storage, StorageBackend::Persistent);
            assert_eq!(config.storage_path, None);
        }

        #[test]
        fn test_reads_backend_and_path() {
            let config = RunnerConfig::from_lookup(lookup_from(&[
                (STORAGE_ENV, " Memory "),
                (STORAGE_PATH_ENV, "/tmp/flamescore.json"),
            ]))
            .unwrap();

            assert_eq!(config.storage, StorageBackend::Memory);
            assert_eq!(
                config.storage_path,
                Some(PathBuf::from("/tmp/flamescore.json"))
            );
        }

        #[test]
        fn test_blank_path_is_ignored() {
            let config =
                RunnerConfig::from_lookup(lookup_from(&[(STORAGE_PATH_ENV, "  ")])).unwrap();
            assert_eq!(config.storage_path, None);
        }

        #[test]
        fn test_unknown_backend_is_an_error() {
            let err = RunnerConfig::from_lookup(lookup_from(&[(STORAGE_ENV, "s3")])).unwrap_err();
            assert_eq!(err, "unknown storage backend: s3");
        }
    }
}

pub struct RunnerDeps {
    pub session: EditorSession,
}

/// Launch the editor UI with an already-loaded session
pub fn run(deps: RunnerDeps) {
    let RunnerDeps { session } = deps;

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!("<style>{}</style>", crate::ui::EDITOR_CSS);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder.with_context(session).launch(crate::ui::app);
}
