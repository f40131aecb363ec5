//! 현금흐름 시뮬레이션 관련 모듈 모음.

pub mod simulator;

pub use simulator::*;
