//! # JSON API
//!
//! Request bodies of the HTTP service and their conversion into
//! [`RenderRequest`](crate::render::RenderRequest)s.
//!
//! Field names follow the wire format existing clients already send
//! (`len`, `bgColor`, `fgColor`, `fontSize`).
//!
//! ## Example
//!
//! ```
//! use ticker::json_api::JsonText;
//! use ticker::render::RenderRequest;
//!
//! let json = r##"{"text": "+", "fontSize": 6, "fgColor": "#000100", "bgColor": "#010000"}"##;
//! let msg: JsonText = serde_json::from_str(json).unwrap();
//! let request = msg.to_request().unwrap();
//! assert!(matches!(request, RenderRequest::Text { point_size: 6, .. }));
//! ```

mod convert;
mod schema;

pub use schema::{JsonSegment, JsonSpace, JsonText};
