//! 핵심 계산 로직을 라이브러리로 분리하여 웹 서버와 CLI가 함께 쓴다.

pub mod app;
pub mod config;
pub mod form;
pub mod network;
pub mod parse;
pub mod report;
pub mod telemetry;
pub mod ui_cli;
pub mod web;
