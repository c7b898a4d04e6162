//! Day-horizon service matching for the U-Engine ecosystem.
//!
//! Assigns service providers to service requests over a fixed horizon of
//! discrete days, maximizing the number of requests served with a greedy,
//! priority-ordered heuristic.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Provider`, `ServiceRequest`, `DaySpec`,
//!   `Registry`, `MatchResult`, `Assignment`
//! - **`validation`**: Line admission checks and result integrity checks
//! - **`dispatching`**: Request ordering rules and the rule engine
//! - **`scheduler`**: `GreedyMatcher` and `MatchKpi`
//! - **`input`**: Text loader splitting input into problem instances
//!
//! # Example
//!
//! ```
//! use u_match::input::InstanceLoader;
//! use u_match::scheduler::GreedyMatcher;
//!
//! let input = "service A x\nrequest r1 x 5\nrequest r2 x 5\n";
//! let instances = InstanceLoader::new().parse_str(input);
//!
//! let matcher = GreedyMatcher::default();
//! let counts: Vec<usize> = instances
//!     .iter()
//!     .map(|registry| matcher.run(registry).solved_count())
//!     .collect();
//! assert_eq!(counts, vec![1]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod dispatching;
pub mod input;
pub mod models;
pub mod scheduler;
pub mod validation;
