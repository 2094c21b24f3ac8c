//! Ports: usecase と外界の境界になる trait 群

pub mod inbound;
pub mod outbound;
