//! Tick driver: pointer grab/launch handling plus the sub-stepped physics.

use glam::DVec2;
use legion::{Resources, Schedule};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Ball, Board};
use crate::components::BallId;
use crate::config::{PhysicsConfig, ScenarioConfig};
use crate::error::Error;
use crate::events::{EventEmitter, ListenerId};
use crate::frame::Frame;
use crate::scenario;
use crate::systems::{self, SubStep};

/// Edge-triggered button state. `Pressed` and `Released` are reported for
/// exactly one tick; the caller turns them into `Hold` and `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickState {
    #[default]
    None,
    Pressed,
    Hold,
    Released,
}

/// Pointer state sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Input {
    pub pointer: DVec2,
    pub click: ClickState,
}

impl Input {
    pub fn new(x: f64, y: f64, click: ClickState) -> Self {
        Self {
            pointer: DVec2::new(x, y),
            click,
        }
    }
}

/// Read-only view of an ongoing grab, for drawing drag indicators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Holding {
    pub ball: BallId,
    /// Pointer position at press time.
    pub pressed: DVec2,
    /// Pointer position on the latest tick.
    pub pointer: DVec2,
    /// Ball centre relative to the press point.
    pub grab_offset: DVec2,
    /// Pointer travel since press, once it exceeds the drag threshold.
    pub drag: Option<DVec2>,
}

/// Press and release on the same ball without dragging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallClicked {
    pub ball: Ball,
    pub pressed: DVec2,
    pub released: DVec2,
}

pub struct Simulation {
    board: Board,
    config: PhysicsConfig,
    holding: Option<Holding>,
    clicks: EventEmitter<BallClicked>,
    schedule: Schedule,
    resources: Resources,
    tick: u64,
}

impl Simulation {
    /// Empty board with the default tuning.
    pub fn new(width: f64, height: f64) -> Result<Self, Error> {
        Self::with_config(width, height, PhysicsConfig::default())
    }

    pub fn with_config(width: f64, height: f64, config: PhysicsConfig) -> Result<Self, Error> {
        Ok(Self::from_board(Board::new(width, height)?, config))
    }

    pub fn from_board(board: Board, config: PhysicsConfig) -> Self {
        let mut resources = Resources::default();
        resources.insert(board.bounds());
        resources.insert(config);
        resources.insert(SubStep(1.0));

        Self {
            board,
            config,
            holding: None,
            clicks: EventEmitter::new(),
            schedule: systems::physics_schedule(),
            resources,
            tick: 0,
        }
    }

    /// Board seeded with the default randomized scenario.
    pub fn random(width: f64, height: f64) -> Result<Self, Error> {
        Self::random_with(
            width,
            height,
            PhysicsConfig::default(),
            &ScenarioConfig::default(),
            &mut rand::thread_rng(),
        )
    }

    pub fn random_with<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: PhysicsConfig,
        scenario: &ScenarioConfig,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let mut board = Board::new(width, height)?;
        scenario::populate(&mut board, scenario, rng)?;
        Ok(Self::from_board(board, config))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn holding(&self) -> Option<Holding> {
        self.holding
    }

    /// Number of completed `update` calls.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn on_ball_clicked(&mut self, listener: impl FnMut(&BallClicked) + 'static) -> ListenerId {
        self.clicks.subscribe(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.clicks.unsubscribe(id)
    }

    /// Applies `input`, then advances the board by `delta` in
    /// `sub_iterations` equal slices. A non-positive or non-finite
    /// `delta` only applies the input.
    pub fn update(&mut self, input: Input, delta: f64) {
        self.handle_input(input);

        if delta > 0.0 && delta.is_finite() {
            let iterations = self.config.sub_iterations.max(1);
            self.resources.insert(SubStep(delta / iterations as f64));

            for _ in 0..iterations {
                self.schedule
                    .execute(self.board.world_mut(), &mut self.resources);
            }
        }

        self.tick += 1;
    }

    /// Consistent copy of everything a renderer needs.
    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.tick,
            width: self.board.width(),
            height: self.board.height(),
            balls: self.board.balls(),
            holding: self.holding,
        }
    }

    fn handle_input(&mut self, Input { pointer, click }: Input) {
        match click {
            ClickState::Pressed => {
                self.holding = self
                    .board
                    .find_first_collision_by_point(pointer)
                    .and_then(|id| self.board.ball(id))
                    .map(|ball| {
                        debug!("grabbed ball {} at {:?}", ball.id.0, pointer);
                        Holding {
                            ball: ball.id,
                            pressed: pointer,
                            pointer,
                            grab_offset: ball.position - pointer,
                            drag: None,
                        }
                    });
            }
            ClickState::Hold => {
                if let Some(holding) = self.holding.as_mut() {
                    let drag = pointer - holding.pressed;
                    holding.pointer = pointer;
                    holding.drag = (drag.length() > self.config.drag_threshold).then_some(drag);
                }
            }
            // A missed release edge still ends the grab.
            ClickState::Released | ClickState::None => {
                if let Some(holding) = self.holding.take() {
                    self.release(holding, pointer);
                }
            }
        }
    }

    fn release(&mut self, holding: Holding, pointer: DVec2) {
        let Some(ball) = self.board.ball(holding.ball) else {
            debug!("held ball {} vanished before release", holding.ball.0);
            return;
        };

        match holding.drag {
            Some(drag) => {
                let velocity = (ball.velocity + drag) * self.config.launch_scale;
                debug!("launched ball {} with {:?}", ball.id.0, velocity);
                self.board.set_velocity(ball.id, velocity);
            }
            None => {
                debug!("clicked ball {}", ball.id.0);
                self.clicks.emit(&BallClicked {
                    ball,
                    pressed: holding.pressed,
                    released: pointer,
                });
            }
        }
    }
}
