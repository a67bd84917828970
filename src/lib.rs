//! Physics core of a pseudo-billiards toy.
//!
//! Circular balls drift on a bounded board, push each other apart, bounce
//! off the walls with friction, and can be grabbed with a pointer and
//! slung. Rendering is left to the caller: feed [`Simulation::update`] one
//! [`Input`] per tick and draw from [`Simulation::frame`].
//!
//! ```
//! use pseudo_billiards::{Circle, ClickState, Color, Input, Simulation};
//! use glam::DVec2;
//!
//! let mut sim = Simulation::new(800.0, 600.0).unwrap();
//! let id = sim
//!     .board_mut()
//!     .create_ball(Circle::new(DVec2::new(400.0, 300.0), 40.0).unwrap(), Color::RED)
//!     .unwrap();
//! sim.board_mut().set_velocity(id, DVec2::new(6.0, 0.0));
//!
//! sim.update(Input::new(0.0, 0.0, ClickState::None), 1.0);
//! assert!(sim.board().ball(id).unwrap().position.x > 400.0);
//! ```

pub mod board;
pub mod circle;
pub mod collision;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod frame;
pub mod input;
pub mod scenario;
pub mod simulation;
pub mod systems;
pub mod vector;

pub use board::{Ball, Board, Bounds, Wall};
pub use circle::Circle;
pub use components::{BallId, Color};
pub use config::{PhysicsConfig, ScenarioConfig};
pub use error::Error;
pub use events::{EventEmitter, ListenerId};
pub use frame::{Frame, FrameBuffer};
pub use input::InputLatch;
pub use simulation::{BallClicked, ClickState, Holding, Input, Simulation};
pub use vector::Polar;
