//! 투자비 산정 관련 모듈 모음.

pub mod estimator;

pub use estimator::*;
