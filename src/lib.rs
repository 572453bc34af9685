//! # route-spline
//!
//! Builds smooth vector paths for transit-map routes. An ordered polyline of
//! route vertices is turned into straight segments and quadratic/cubic Bezier
//! pieces that approximate a smooth curve through the points, optionally
//! clipped against a rectangle (a station icon or label box) so the route
//! either ties into the obstacle or detours around it.
//!
//! ## Architecture
//!
//! 1. **Geometry**: Cohen-Sutherland segment test ([`clip_cohen_sutherland`])
//!    and Bezier control-point interpolation ([`interpolation`])
//! 2. **Builders**: windowed spline construction with per-piece draw/jump
//!    decisions ([`spline`]), plus circle arcs ([`bezier_arc`])
//! 3. **Sinks**: anything implementing [`path_sink::PathSink`]:
//!    [`path_storage::PathStorage`] records vertices, [`svg_path::SvgPathWriter`]
//!    writes SVG path data

// Foundation types & math
pub mod basics;
pub mod error;
pub mod math;

// Geometry primitives
pub mod bezier_arc;
pub mod clip_cohen_sutherland;
pub mod interpolation;

// Path construction
pub mod path_sink;
pub mod path_storage;
pub mod spline;
pub mod svg_path;

pub use basics::{PointD, PointI, Rect, RectI};
pub use error::{Result, SplineError};
pub use path_sink::PathSink;
pub use path_storage::PathStorage;
pub use spline::{build_clipped_spline, build_spline, line_to_clipped, ClipMode, SplineBuilder};
pub use svg_path::SvgPathWriter;
