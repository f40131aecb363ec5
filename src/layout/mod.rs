//! 홀 배치(박스 패킹) 관련 모듈 모음.

pub mod planner;

pub use planner::*;
