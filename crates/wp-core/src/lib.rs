pub mod config;
pub mod frame;
pub mod io;
pub mod model;
pub mod store;
pub mod view;

pub use config::{EditorConfig, HIT_RADIUS};
pub use frame::{CoordinateMapper, FrameError, MapFrame};
pub use io::{
    WaypointIoError, read_waypoints_csv, waypoints_from_json, waypoints_to_csv_string,
    waypoints_to_json, write_waypoints_csv,
};
pub use model::*;
pub use store::WaypointStore;
pub use view::ViewTransform;
