//! Producers and formatters around the map pipeline: sample grids, domain colors and
//! human-readable renderings of evaluated points.

mod color;
mod grid;
mod table;

pub use color::{Rgb, domain_color, hls_to_rgb};
pub use grid::{
    GridSpec, MAX_GRID_SAMPLES, coordinate_pairs, generate_coordinates, generate_points, linspace,
    split_components,
};
pub use table::{
    Outcome, Row, render_rows_csv, render_rows_json, render_rows_md, render_trace_md,
};
