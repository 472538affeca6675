//! Fluent builder for constructing a [`Session`].

use mz_core::AgentState;
use mz_encode::SchematicEncoder;
use mz_grid::{GridLayout, GridMap};
use mz_motion::MotionController;

use crate::{DecisionPolicy, Session, SessionConfig, SessionError, SessionResult};

/// Fluent builder for [`Session<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                  |
/// |------------------------|------------------------------------------|
/// | `.layout(l)`           | [`GridLayout::reference`]                |
/// | `.start_angle(a)`      | `0.0` (facing −z)                        |
/// | `.agent_active(b)`     | `true`: decisions drive the agent        |
/// | `.schematic_scale(s)`  | 60 px per cell                           |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(config, ScriptedPolicy::from_actions(route))
///     .layout(GridLayout::parse(text, 2.0)?)
///     .build()?;
/// ```
pub struct SessionBuilder<P: DecisionPolicy> {
    config:          SessionConfig,
    policy:          P,
    layout:          Option<GridLayout>,
    start_angle:     f32,
    agent_active:    bool,
    schematic_scale: Option<f32>,
}

impl<P: DecisionPolicy> SessionBuilder<P> {
    pub fn new(config: SessionConfig, policy: P) -> Self {
        Self {
            config,
            policy,
            layout:          None,
            start_angle:     0.0,
            agent_active:    true,
            schematic_scale: None,
        }
    }

    /// Maze to run on.  Its cell size must equal `config.nav.cell_size`.
    pub fn layout(mut self, layout: GridLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Facing angle at the start cell (also used by `restart`).
    pub fn start_angle(mut self, angle: f32) -> Self {
        self.start_angle = angle;
        self
    }

    /// `false` starts in manual mode: continuous drive, no decision cycles.
    pub fn agent_active(mut self, active: bool) -> Self {
        self.agent_active = active;
        self
    }

    pub fn schematic_scale(mut self, scale: f32) -> Self {
        self.schematic_scale = Some(scale);
        self
    }

    /// Validate inputs and return a session idle at the start cell.
    pub fn build(self) -> SessionResult<Session<P>> {
        self.config.validate()?;
        if !self.start_angle.is_finite() {
            return Err(SessionError::Config(format!("start_angle must be finite, got {}", self.start_angle)));
        }

        let layout = self.layout.unwrap_or_else(GridLayout::reference);
        if layout.cell_size() != self.config.nav.cell_size {
            return Err(SessionError::Config(format!(
                "layout cell size {} does not match nav.cell_size {}",
                layout.cell_size(),
                self.config.nav.cell_size,
            )));
        }

        let scale = self.schematic_scale.unwrap_or_else(|| SchematicEncoder::default().scale());
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SessionError::Config(format!("schematic_scale must be positive, got {scale}")));
        }

        let start = AgentState::at_cell(layout.start(), layout.cell_size(), self.start_angle);
        let (controller, handle) = MotionController::new(self.config.nav.clone(), start)?;

        Ok(Session::assemble(
            self.config,
            GridMap::new(layout),
            controller,
            handle,
            self.policy,
            SchematicEncoder::with_scale(scale),
            self.start_angle,
            self.agent_active,
        ))
    }
}
