pub mod action;
pub mod app;
pub mod category;
pub mod config;
pub mod domain;
pub mod event;
pub mod filter;
pub mod report;
pub mod theme;
pub mod tui;
pub mod widgets;
