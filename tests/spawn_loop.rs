#![allow(clippy::unwrap_used)]

use posetiles::math::Point2;
use posetiles::pose::{BodyPart, Keypoint, PoseConfig, PoseFrame};
use posetiles::simulation::{SilhouetteSource, Simulation, SimulationState, SpawnConfig};
use posetiles::world::TileStore;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn keypoint(part: BodyPart, x: f64, y: f64) -> Keypoint {
    Keypoint {
        part,
        position: Point2::new(x, y),
        score: 0.9,
    }
}

/// A standing figure in estimator coordinates (640 wide, mirrored on ingest).
fn standing_frame() -> PoseFrame {
    PoseFrame {
        score: 0.8,
        keypoints: vec![
            keypoint(BodyPart::Nose, 320.0, 80.0),
            keypoint(BodyPart::LeftShoulder, 360.0, 150.0),
            keypoint(BodyPart::RightShoulder, 280.0, 150.0),
            keypoint(BodyPart::LeftElbow, 390.0, 220.0),
            keypoint(BodyPart::RightElbow, 250.0, 220.0),
            keypoint(BodyPart::LeftWrist, 400.0, 290.0),
            keypoint(BodyPart::RightWrist, 240.0, 290.0),
            keypoint(BodyPart::LeftHip, 345.0, 300.0),
            keypoint(BodyPart::RightHip, 295.0, 300.0),
            keypoint(BodyPart::LeftKnee, 350.0, 400.0),
            keypoint(BodyPart::RightKnee, 290.0, 400.0),
            keypoint(BodyPart::LeftAnkle, 350.0, 500.0),
            keypoint(BodyPart::RightAnkle, 290.0, 500.0),
        ],
    }
}

#[test]
fn tiles_are_spawned_pushed_out_and_culled() {
    init_tracing();
    let mut sim = Simulation::new(
        SpawnConfig::default(),
        PoseConfig::default(),
        SimulationState::default(),
        TileStore::new(),
    )
    .unwrap();

    let mut spawned = sim.start().spawned;
    let mut culled = 0;
    for _ in 0..20 {
        let tick = sim.advance(300.0);
        spawned += tick.spawn.spawned;
        culled += tick.culled;
    }

    assert_eq!(spawned, 12 * 21);
    assert!(culled > 0);
    assert_eq!(sim.world().len() + culled, spawned);
    // Old tiles keep leaving, so the live count stays far below the total.
    assert!(sim.world().len() < spawned / 2);
}

#[test]
fn pose_driven_skeleton_spawns_around_every_part() {
    init_tracing();
    let mut sim = Simulation::new(
        SpawnConfig::default(),
        PoseConfig::default(),
        SimulationState::new(SilhouetteSource::Skeleton),
        TileStore::new(),
    )
    .unwrap();

    assert_eq!(sim.update_pose(&standing_frame()), 13);
    let report = sim.start();
    assert_eq!(report.skipped_polygons, 0);
    assert_eq!(report.near_ground, 0);
    // Torso plus eight limbs, each with at least four edges.
    assert!(report.spawned >= 9 * 4);
    assert_eq!(sim.world().len(), report.spawned);
}

#[test]
fn unreliable_frame_leaves_pose_untouched() {
    init_tracing();
    let mut sim = Simulation::new(
        SpawnConfig::default(),
        PoseConfig::default(),
        SimulationState::new(SilhouetteSource::PoseBounds { padding: 10.0 }),
        TileStore::new(),
    )
    .unwrap();

    sim.update_pose(&standing_frame());
    let before = sim.state().pose.clone();
    let mut noisy = standing_frame();
    noisy.score = 0.1;
    assert_eq!(sim.update_pose(&noisy), 0);
    assert_eq!(sim.state().pose, before);

    // Mirrored: leftmost estimator x 240 maps to 400, rightmost 400 maps to 240.
    let rect = sim.state().pose.bounding_polygon(10.0).unwrap();
    let (lo, hi) = rect.bounding_box();
    assert!((lo.x - 230.0).abs() < 1e-9);
    assert!((hi.x - 410.0).abs() < 1e-9);
}
