//! Ports - Interfaces between the editor and the outside world

pub mod outbound;
