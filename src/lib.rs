//! # spvheader
//!
//! Turn a compiled shader binary (or any file) into a C/C++ header that holds
//! its bytes as a `constexpr char` array, ready to be `#include`d and handed to
//! `vkCreateShaderModule`.
//!
//! ## Rust usage
//!
//! ```no_run
//! use spvheader::{pipeline, ConvertJob};
//!
//! // shaders/fusion.comp.spv → shaders/fusion.comp.spv.h, array `fusion_comp_spv`
//! let job = ConvertJob::resolve("shaders/fusion.comp.spv", None, None);
//! let report = pipeline::convert(&job).unwrap();
//! println!("{} bytes → {}", report.bytes_written, report.output.display());
//! ```
//!
//! ```
//! let line = spvheader::encode::render_declaration("shader_spv", &[0x00, 0xff, 0x41]);
//! assert_eq!(line, "constexpr char shader_spv[] = { '\\x00', '\\xff', '\\x41' };\n");
//! ```

pub mod encode;
pub mod error;
pub mod pipeline;
pub mod target;
#[cfg(feature = "python")]
mod python;

pub use error::{ConvertError, DecodeError};
pub use pipeline::ConvertReport;
pub use target::ConvertJob;
