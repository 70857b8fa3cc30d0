//! regionfind-paint - Paint with a tracked color region
//!
//! A [`PaintSession`] follows the largest region of a picked color across
//! a stream of frames and paints wherever it goes. The frame source and
//! any window are left to the caller: feed frames with
//! [`PaintSession::process_frame`], forward clicks to
//! [`PaintSession::pick_target`] and key presses to
//! [`PaintSession::handle_key`], and show [`PaintSession::view`].
//!
//! # Examples
//!
//! ```
//! use regionfind_core::{Color, Image};
//! use regionfind_paint::{DisplayMode, KeyCommand, PaintOptions, PaintSession};
//!
//! let mut session = PaintSession::new(64, 48, PaintOptions::default()).unwrap();
//!
//! let mut frame = Image::new_filled(64, 48, Color::WHITE).unwrap().to_mut();
//! for y in 10..20 {
//!     for x in 10..20 {
//!         frame.set_color(x, y, Color::RED).unwrap();
//!     }
//! }
//! session.process_frame(frame.into()).unwrap();
//! session.pick_target(15, 15).unwrap();
//!
//! let next = session.frame().unwrap().clone();
//! let painted = session.process_frame(next).unwrap();
//! assert_eq!(painted, 100);
//!
//! assert_eq!(session.handle_key('p'), KeyCommand::Display(DisplayMode::Painting));
//! let painting = session.view().unwrap().unwrap();
//! assert_eq!(painting.get_color(12, 12), Some(Color::BLUE));
//! ```

pub mod error;
pub mod options;
pub mod session;

pub use error::{PaintError, PaintResult};
pub use options::{DisplayMode, PaintOptions};
pub use session::{KeyCommand, PaintSession};
