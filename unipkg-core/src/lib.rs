#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod layout;
pub mod policy;
pub mod stats;

pub mod util {
    pub mod sanitize;
}

pub mod detect {
    pub mod embedded;
    pub mod signature;
}

pub mod pathname;

pub mod read {
    pub mod unpack;
}

pub mod index {
    pub mod inmem;
}

pub mod repo;
pub mod repo_fs;

pub mod materialize;
pub mod organize;
pub mod pipeline;

// Re-exports: stable API surface
pub use detect::embedded::find_embedded;
pub use detect::signature::detect;
pub use pathname::resolve;
pub use pipeline::run;
pub use policy::Policy;
pub use stats::Stats;
