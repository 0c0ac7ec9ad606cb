#![deny(missing_docs)]
//! This crate provides the standardized initialization process for entrypoint binaries.
//! This is used to provide consistent behaviour with e.g. tracing configurations

use tracing_subscriber::EnvFilter;

mod environment;

pub use environment::{Environment, UnknownValue};

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct NotifierEntrypoint {
    env: Environment,
}

impl Default for NotifierEntrypoint {
    fn default() -> Self {
        NotifierEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [NotifierEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint {
    env: Environment,
}

impl InitializedEntrypoint {
    /// the environment this binary was initialized for
    pub fn environment(&self) -> Environment {
        self.env
    }
}

impl NotifierEntrypoint {
    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint { env: self.env }
    }
}
