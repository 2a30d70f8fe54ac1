pub mod draw;
pub mod hit;
pub mod paint;
pub mod theme;

pub use draw::{DrawList, Marker, build_draw_list};
pub use hit::{hit_test, hit_test_screen};
pub use theme::{PaintTheme, Rgb8};
