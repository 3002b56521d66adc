//! Interactive tag viewer with a few seeded camera poses.
//!
//! Run with: cargo run --example tag_viewer [options.json]

use tagview::*;

fn main() -> Result<()> {
    let options = match std::env::args().nth(1) {
        Some(path) => load_options(path)?,
        None => Options {
            window_width: 800,
            window_height: 600,
            ..Options::default()
        },
    };
    let mut viewer = Viewer::with_options(options);

    viewer.add_camera_node(
        DVec3::new(10.0, 0.0, 6.0),
        DQuat::from_xyzw(1.0, 1.0, 1.0, 1.0),
    )?;
    viewer.add_camera_node(
        DVec3::new(0.0, 10.0, 2.0),
        DQuat::from_xyzw(1.0, 0.0, 1.0, 1.0),
    )?;
    viewer.add_camera_node(DVec3::ZERO, DQuat::from_xyzw(0.0, 0.0, 0.0, 1.0))?;
    viewer.set_tag_origin(DVec3::ZERO, DQuat::from_xyzw(0.0, 0.0, 0.0, 1.0))?;

    show(viewer)
}
