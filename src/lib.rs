//! Zebra is a randomised generate-and-repair solver for the classic
//! Einstein/Zebra house riddle: five houses in a row, each with a unique
//! colour and position, each occupied by one person with a unique
//! nationality, beverage, cigar brand and pet, constrained by fifteen
//! clues.
//!
//! Rather than systematic constraint search, the solver draws a fully
//! random arrangement and repairs it in two unequal halves:
//!
//! - **[Forcing](solver::forcing)**: ten of the clues bind a value to a
//!   person who is already identifiable by another attribute. Each is
//!   satisfied on the spot by a single occupancy swap or attribute
//!   transposition, applied in a fixed, load-bearing order.
//! - **[Validation](solver::validity)**: the remaining five clues relate
//!   house *positions* and cannot be repaired directly. They are checked as
//!   a pure predicate; an arrangement that fails any of them is thrown away
//!   and the search draws a fresh one.
//!
//! The [driver](solver::driver) repeats draw → force → validate until an
//! arrangement passes or a fixed budget of attempts is exhausted. The
//! search space is tiny (five entities per dimension), so a valid
//! arrangement typically appears within a few thousand attempts.
//!
//! # Example
//!
//! ```
//! use zebra::puzzle::render::render_arrangement;
//! use zebra::solver::driver::SearchDriver;
//! use zebra::solver::validity::is_valid;
//!
//! let driver = SearchDriver::new();
//! let (solution, stats) = driver.run_seeded(1).unwrap();
//!
//! let solved = solution.expect("the budget dwarfs the expected attempt count");
//! assert!(is_valid(&solved).unwrap());
//! println!(
//!     "solved after {} failed attempts\n{}",
//!     stats.attempts,
//!     render_arrangement(&solved).unwrap()
//! );
//! ```

pub mod error;
pub mod puzzle;
pub mod solver;
