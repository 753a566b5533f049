//! Demo Controller
//!
//! Three stateless operations back the web page:
//! - [`load_model`] - reports the (simulated) model as ready
//! - [`retrieve`] - renders a placeholder late-interaction retrieval report
//! - [`index_status`] - reports that no index has been built
//!
//! Nothing here loads weights, encodes passages or scores anything. Every
//! output is derived from the fixed strings in [`text`].

pub mod controller;
pub mod text;

pub use controller::{echo_query, index_status, load_model, normalize_top_k, retrieve};
pub use controller::{DEFAULT_TOP_K, MAX_QUERY_ECHO_CHARS, MAX_TOP_K, MIN_TOP_K};
