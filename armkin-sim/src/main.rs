// Copyright (C) 2024 Armkin Project
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::path::PathBuf;

use clap::Parser;

use armkin_core::geometry;
use armkin_core::kinematics::PlanarArm;
use armkin_core::nalgebra::Point2;

mod config;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Armkin Project")]
#[command(version, propagate_version = true)]
#[command(about = "Planar arm kinematics workbench", long_about = None)]
struct Args {
    /// Arm profile file.
    #[arg(short, long)]
    profile: Option<PathBuf>,
    /// Length of link 1 in meters.
    #[arg(long, default_value_t = 1.0)]
    l1: f64,
    /// Length of link 2 in meters.
    #[arg(long, default_value_t = 0.8)]
    l2: f64,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Compute a single pose from two joint angles.
    Pose {
        /// Shoulder angle, absolute from the positive X axis.
        theta1: f64,
        /// Elbow angle, relative to link 1.
        theta2: f64,
        /// Interpret the angles as degrees.
        #[arg(long)]
        degrees: bool,
        /// Print the pose as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Dump the workspace boundary rings as CSV.
    Workspace {
        /// Number of samples per ring.
        #[arg(default_value_t = 360)]
        samples: usize,
        /// Output file, stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Animate a joint sweep between two configurations.
    Sweep {
        /// Start angles in radians: shoulder, elbow.
        #[arg(long, num_args = 2, default_values_t = [0.0, 0.0])]
        from: Vec<f64>,
        /// End angles in radians: shoulder, elbow.
        #[arg(long, num_args = 2, default_values_t = [std::f64::consts::PI, std::f64::consts::FRAC_PI_2])]
        to: Vec<f64>,
        /// Interpret the angles as degrees.
        #[arg(long)]
        degrees: bool,
        /// Number of frames, including both endpoints.
        #[arg(long, default_value_t = 60)]
        frames: usize,
        /// Frame interval in milliseconds.
        #[arg(long, default_value_t = 50)]
        interval: u64,
        /// Randomize the start position.
        #[arg(long)]
        randomize_start: bool,
        /// Write frames to a CSV file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_offset_to_local().ok();
    log_config.set_time_format_rfc2822();
    log_config.set_thread_level(log::LevelFilter::Off);
    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);

    let log_level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let arm = if let Some(path) = &args.profile {
        let profile = config::Profile::load(path)?;

        log::debug!("Loaded arm profile from {}", path.display());

        PlanarArm::new(profile.arm.l1, profile.arm.l2)?
    } else {
        PlanarArm::new(args.l1, args.l2)?
    };

    log::debug!(
        "Arm: l1 {:.2}m; l2 {:.2}m; Reach {:.2}m..{:.2}m",
        arm.l1(),
        arm.l2(),
        arm.reach_min(),
        arm.reach_max()
    );

    match args.command {
        Command::Pose {
            theta1,
            theta2,
            degrees,
            json,
        } => {
            let (theta_1, theta_2) = if degrees {
                (theta1.to_radians(), theta2.to_radians())
            } else {
                (theta1, theta2)
            };

            let pose = arm.pose(theta_1, theta_2);

            if json {
                println!("{}", serde_json::to_string_pretty(&pose)?);
            } else {
                log::info!(
                    "Shoulder {:5.2}rad {:5.2}°; Elbow {:5.2}rad {:5.2}°; {}",
                    theta_1,
                    theta_1.to_degrees(),
                    theta_2,
                    theta_2.to_degrees(),
                    pose
                );
            }
        }
        Command::Workspace { samples, output } => {
            dump_workspace(&arm, samples, output)?;
        }
        Command::Sweep {
            from,
            to,
            degrees,
            frames,
            interval,
            randomize_start,
            output,
        } => {
            let (mut from, mut to) = ((from[0], from[1]), (to[0], to[1]));
            if degrees {
                from = (from.0.to_radians(), from.1.to_radians());
                to = (to.0.to_radians(), to.1.to_radians());
            }

            if randomize_start {
                use rand::Rng;

                let mut rng = rand::thread_rng();
                from = (
                    rng.gen_range(0.0..2.0 * std::f64::consts::PI),
                    rng.gen_range(0.0..2.0 * std::f64::consts::PI),
                );
            }

            sweep(&arm, from, to, frames, interval, output).await?;
        }
    }

    Ok(())
}

fn dump_workspace(arm: &PlanarArm, samples: usize, output: Option<PathBuf>) -> anyhow::Result<()> {
    let boundary = arm.workspace_boundary(samples)?;

    log::debug!(
        "Boundary: outer radius {:.2}m; inner radius {:.2}m; {} samples per ring",
        arm.reach_max(),
        arm.reach_min(),
        samples
    );

    let writer: Box<dyn std::io::Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(["ring", "x", "y"])?;

    for point in &boundary.outer {
        writer.write_record(&ring_record("outer", point))?;
    }
    for point in &boundary.inner {
        writer.write_record(&ring_record("inner", point))?;
    }

    writer.flush()?;

    Ok(())
}

fn ring_record(ring: &str, point: &Point2<f64>) -> [String; 3] {
    [ring.to_string(), point.x.to_string(), point.y.to_string()]
}

/// Joint angle pairs interpolated between two configurations, both
/// endpoints included.
fn sweep_angles(from: (f64, f64), to: (f64, f64), frames: usize) -> Vec<(f64, f64)> {
    let frames = frames.max(2);

    (0..frames)
        .map(|frame| {
            let t = frame as f64 / (frames - 1) as f64;

            (
                geometry::lerp(from.0, to.0, t),
                geometry::lerp(from.1, to.1, t),
            )
        })
        .collect()
}

async fn sweep(
    arm: &PlanarArm,
    from: (f64, f64),
    to: (f64, f64),
    frames: usize,
    interval: u64,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let interval = interval.max(1);

    let mut writer = match output {
        Some(path) => Some(csv::Writer::from_path(path)?),
        None => None,
    };

    if let Some(writer) = writer.as_mut() {
        writer.write_record([
            "frame",
            "theta1",
            "theta2",
            "elbow_x",
            "elbow_y",
            "effector_x",
            "effector_y",
        ])?;
    }

    let mut chain = arm.chain();
    let mut previous = arm.chain();

    let mut tick = tokio::time::interval(std::time::Duration::from_millis(interval));

    for (frame, (theta_1, theta_2)) in sweep_angles(from, to, frames).into_iter().enumerate() {
        tick.tick().await;

        let pose = arm.pose(theta_1, theta_2);

        chain.set_joint_positions(vec![theta_1, theta_2]);

        let travel = if frame == 0 {
            0.0
        } else {
            chain.distance(&previous)
        };
        previous.set_joint_positions(vec![theta_1, theta_2]);

        log::info!(
            "Frame {:3}; Shoulder {:5.2}rad {:5.2}°; Elbow {:5.2}rad {:5.2}°; Travel {:.3}m; {}",
            frame,
            theta_1,
            theta_1.to_degrees(),
            theta_2,
            theta_2.to_degrees(),
            travel,
            pose
        );

        if let Some(writer) = writer.as_mut() {
            writer.write_record(&[
                frame.to_string(),
                theta_1.to_string(),
                theta_2.to_string(),
                pose.elbow.x.to_string(),
                pose.elbow.y.to_string(),
                pose.effector.x.to_string(),
                pose.effector.y.to_string(),
            ])?;
        }
    }

    if let Some(writer) = writer.as_mut() {
        writer.flush()?;
    }

    Ok(())
}
