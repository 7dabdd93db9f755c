//! Step definitions for task board behaviour scenarios.


mod given;
mod then;
mod when;
