//! Entity structs for the interview tree.
//!
//! ```text
//! Interview ─┬─ Home?
//!            └─ Household? ── Person* ── Journey* ─┬─ VisitedPlace*
//!                                                  └─ Trip* ── Segment*
//! ```
//!
//! Children are owned by their parent. Every entity keeps the attributes the
//! typed model does not know in a flattened `extra` map, so configured
//! required-field lists may name survey-specific questions.

mod home;
mod household;
mod interview;
mod journey;
mod person;
mod segment;
mod trip;
mod visited_place;

pub use home::Home;
pub use household::Household;
pub use interview::Interview;
pub use journey::Journey;
pub use person::Person;
pub use segment::Segment;
pub use trip::Trip;
pub use visited_place::VisitedPlace;
