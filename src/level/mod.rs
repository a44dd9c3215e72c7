//! Level domain: procedural dressing for the demo room.

mod rubble;

pub use rubble::generate_rubble;
