//! PostgREST adapters used by the connectivity probe.

mod http_probe_source;

pub use http_probe_source::{PostgrestProbeSource, PostgrestSourceError};
