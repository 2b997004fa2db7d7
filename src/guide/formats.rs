//! Output formats for built trees
//!
//!     - json: pretty-printed JSON, the compatibility surface for downstream consumers
//!     - yaml: the same structure as YAML
//!     - treeviz: one line per node for eyeballing a tree in a terminal or a snapshot
//!
//!     All formats are reachable by name through the [FormatRegistry].

pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
