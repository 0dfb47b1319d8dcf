//! Interfaces of the components surrounding the skeletonizer.
//!
//! The rule-based controller that turns obstacle bearings into motion
//! commands and the transport that delivers camera frames live outside
//! this workspace. Only their boundaries are declared here, plus
//! [`SkeletonSink`], which plugs the skeletonizer into a frame source.

use crate::error::{DiagramError, DiagramResult};
use crate::options::{DiagramOptions, Strategy};
use crate::pipeline::{FRAME_CHANNELS, Skeleton, run};
use voronoi_core::{Pix, PixelDepth, color};

/// Crisp inputs of a decision engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputVariable {
    /// Bearing of the nearest obstacle (radians, 0 straight ahead)
    Obstacle,
    /// Range to the nearest obstacle
    Distance,
    /// Bearing of the goal relative to the heading
    RelAngle,
    /// Distance to the goal
    RelDist,
    /// Which way to pass an obstacle
    Path,
}

/// Outputs of a decision engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputVariable {
    /// Translational speed in `0..=1`
    Speed,
    /// Rotational speed
    Direction,
}

/// Rule set a decision engine is configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    /// React to the nearest obstacle only
    #[default]
    ObstacleAvoidance,
    /// Head for a goal while steering around obstacles
    GoToGoal,
}

impl ControlMode {
    /// Inputs the mode's rules read.
    pub fn inputs(self) -> &'static [InputVariable] {
        match self {
            ControlMode::ObstacleAvoidance => &[InputVariable::Obstacle, InputVariable::Distance],
            ControlMode::GoToGoal => &[
                InputVariable::Path,
                InputVariable::RelAngle,
                InputVariable::RelDist,
                InputVariable::Obstacle,
                InputVariable::Distance,
            ],
        }
    }
}

/// Rule-based controller mapping crisp inputs to motion commands.
pub trait DecisionEngine {
    fn mode(&self) -> ControlMode;

    fn set_input(&mut self, variable: InputVariable, value: f64);

    /// Evaluate the rules on the current inputs.
    fn process(&mut self);

    /// Last defuzzified value, `None` before the first [`process`].
    ///
    /// [`process`]: DecisionEngine::process
    fn output(&self, variable: OutputVariable) -> Option<f64>;
}

/// A camera frame as delivered by the transport
#[derive(Debug, Clone)]
pub struct Frame {
    pub topic: String,
    pub image: Pix,
}

impl Frame {
    pub fn new(topic: impl Into<String>, image: Pix) -> Self {
        Self {
            topic: topic.into(),
            image,
        }
    }

    /// Wrap a packed 8-bit 3-channel buffer, samples kept in byte order.
    ///
    /// A BGR buffer therefore ends up with blue in the most significant
    /// slot and must be skeletonized with `ChannelOrder::Bgr`.
    ///
    /// # Errors
    ///
    /// [`DiagramError::InvalidImageShape`] when `data` does not hold
    /// exactly `width * height * 3` bytes or a dimension is zero.
    pub fn from_packed(
        topic: impl Into<String>,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> DiagramResult<Self> {
        let expected = width as usize * height as usize * FRAME_CHANNELS as usize;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(DiagramError::InvalidImageShape { width, height });
        }
        let mut pm = Pix::new(width, height, PixelDepth::Bit32)?.try_into_mut().unwrap();
        for (i, px) in data.chunks_exact(3).enumerate() {
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            pm.set_pixel_unchecked(x, y, color::compose_rgb(px[0], px[1], px[2]));
        }
        Ok(Self::new(topic, pm.into()))
    }
}

/// Receiver of frames from an event source.
pub trait FrameSink {
    fn deliver(&mut self, frame: &Frame) -> DiagramResult<()>;
}

/// Skeletonizes every delivered frame independently.
///
/// Only the most recent skeleton is kept.
#[derive(Debug, Clone)]
pub struct SkeletonSink {
    strategy: Strategy,
    options: DiagramOptions,
    latest: Option<Skeleton>,
    frames: u64,
}

impl SkeletonSink {
    pub fn new(strategy: Strategy, options: DiagramOptions) -> Self {
        Self {
            strategy,
            options,
            latest: None,
            frames: 0,
        }
    }

    pub fn latest(&self) -> Option<&Skeleton> {
        self.latest.as_ref()
    }

    /// Frames skeletonized so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for SkeletonSink {
    fn deliver(&mut self, frame: &Frame) -> DiagramResult<()> {
        let skeleton = run(self.strategy, &frame.image, &self.options)?;
        log::trace!(
            "{}: frame {} skeletonized, {} pixels",
            frame.topic,
            self.frames,
            skeleton.foreground_count()
        );
        self.latest = Some(skeleton);
        self.frames += 1;
        Ok(())
    }
}
