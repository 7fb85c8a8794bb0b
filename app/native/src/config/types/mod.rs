//! Deserializable configuration shapes.
//!
//! `root` holds the file-level document and its loader, `tiling` the tile
//! layout section.

pub mod root;
pub mod tiling;

pub use root::{ConfigError, TesseraConfig, config_paths, load_config, load_config_from_path};
pub use tiling::{
    AxisDirection, DEFAULT_MASTER_AREA_FACTOR, DEFAULT_RESTORE_DELAY_MS, LayoutAxis, TileConfig,
};
