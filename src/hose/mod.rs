//! 정원 호스 유량과 채움 시간 계산.

pub mod garden_hose;
