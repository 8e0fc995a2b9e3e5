//! End-to-end checks: emitter → scene → canvas → PNG.

use sparks::prelude::*;
use sparks::RenderError;
use std::fs;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn upward_scene(count: u32) -> EmitterScene {
    EmitterScene::new(
        Emitter::new(
            EmitterConfig::default()
                .with_particle_count(count)
                .with_speed(20.0),
        )
        .with_seed(9),
    )
}

#[test]
fn test_particles_render_at_start_before_appearing() {
    let mut scene = upward_scene(4);
    let mut canvas = Canvas::new(40, 40, BLACK);
    scene.layout(canvas.size());

    canvas.render(&scene, &Sprite::glow(1, [255, 255, 255]), 0.5, BlendMode::Additive);
    assert_ne!(canvas.pixel(20, 20), BLACK);
    assert_eq!(canvas.pixel(20, 10), BLACK);
}

#[test]
fn test_particles_move_after_appearing() {
    let mut scene = upward_scene(4);
    let mut canvas = Canvas::new(40, 40, BLACK);
    scene.layout(canvas.size());
    scene.appear(0.0);

    // Halfway through a cycle the sparks are 10 pixels above the center.
    canvas.render(&scene, &Sprite::glow(1, [255, 255, 255]), 0.5, BlendMode::Additive);
    assert_ne!(canvas.pixel(20, 10), BLACK);
    assert_eq!(canvas.pixel(20, 20), BLACK);

    // A full cycle later they are back at the same point.
    let before = canvas.image().clone();
    canvas.render(&scene, &Sprite::glow(1, [255, 255, 255]), 1.5, BlendMode::Additive);
    assert_eq!(canvas.image(), &before);
}

#[test]
fn test_frame_sequence_with_fixed_clock() {
    let dir = tempfile::tempdir().unwrap();
    let mut scene = EmitterScene::new(Emitter::new(EmitterConfig::sparks()).with_seed(1));
    let mut canvas = Canvas::new(64, 48, BLACK);
    let sprite = Sprite::glow(2, [255, 180, 80]);
    scene.layout(canvas.size());

    let mut time = Time::new();
    time.set_fixed_delta(Some(0.25));
    scene.appear(time.elapsed());

    for frame in 0..4 {
        canvas.render(&scene, &sprite, time.elapsed(), BlendMode::Additive);
        canvas.save(dir.path().join(format!("frame_{frame}.png"))).unwrap();
        time.update();
    }

    assert_eq!(time.elapsed(), 1.0);
    for frame in 0..4 {
        assert!(dir.path().join(format!("frame_{frame}.png")).exists());
    }
}

#[test]
fn test_save_into_missing_directory_fails() {
    let canvas = Canvas::new(2, 2, BLACK);
    let err = canvas.save("no/such/dir/frame.png").unwrap_err();
    assert!(matches!(err, RenderError::Encode { .. }));
}

#[test]
fn test_render_frames_writes_numbered_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/frames");
    let mut scene = EmitterScene::new(Emitter::new(EmitterConfig::sparks()).with_seed(3));
    let mut canvas = Canvas::new(48, 32, BLACK);
    let sequence = FrameSequence {
        frames: 5,
        fps: 4.0,
        blend: BlendMode::Additive,
    };

    let sprite = Sprite::glow(2, [255, 200, 100]);
    let paths = render_frames(&mut scene, &sprite, &mut canvas, &out, &sequence).unwrap();

    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["frame_0000.png", "frame_0001.png", "frame_0002.png", "frame_0003.png", "frame_0004.png"]
    );
    assert!(paths.iter().all(|p| p.starts_with(&out) && p.exists()));
    assert!(scene.particles().iter().all(|p| p.is_active()));

    // Four frames per second: frame 4 closes the loop and matches frame 0.
    assert_eq!(fs::read(&paths[0]).unwrap(), fs::read(&paths[4]).unwrap());
    assert_ne!(fs::read(&paths[0]).unwrap(), fs::read(&paths[2]).unwrap());
}

#[test]
fn test_render_frames_rejects_bad_fps() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("frames");
    let mut scene = upward_scene(1);
    let mut canvas = Canvas::new(8, 8, BLACK);
    let sprite = Sprite::glow(1, [255, 255, 255]);

    for fps in [0.0, -30.0, f64::NAN, f64::INFINITY] {
        let sequence = FrameSequence {
            fps,
            ..FrameSequence::default()
        };
        let err = render_frames(&mut scene, &sprite, &mut canvas, &out, &sequence).unwrap_err();
        assert!(matches!(err, RenderError::InvalidFps(_)), "fps {fps}");
    }
    assert!(!out.exists());
}

#[test]
fn test_render_frames_reports_unusable_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("taken");
    fs::write(&blocker, b"not a directory").unwrap();

    let mut scene = upward_scene(1);
    let mut canvas = Canvas::new(8, 8, BLACK);
    let sequence = FrameSequence {
        frames: 1,
        ..FrameSequence::default()
    };
    let err = render_frames(
        &mut scene,
        &Sprite::glow(1, [255, 255, 255]),
        &mut canvas,
        blocker.join("frames"),
        &sequence,
    )
    .unwrap_err();

    assert!(matches!(err, RenderError::CreateDir { .. }));
    assert!(err.to_string().contains("taken"));
}

#[test]
fn test_zero_frames_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut scene = upward_scene(2);
    let mut canvas = Canvas::new(8, 8, BLACK);
    let sequence = FrameSequence {
        frames: 0,
        ..FrameSequence::default()
    };

    let sprite = Sprite::glow(1, [255, 255, 255]);
    let paths = render_frames(&mut scene, &sprite, &mut canvas, dir.path(), &sequence).unwrap();
    assert!(paths.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
