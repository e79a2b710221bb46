//! Dieta core library
//!
//! Domain logic for a diet and fitness coaching backend: metabolic
//! formulas, adaptive TDEE estimation, activity and skinfold calculators,
//! shopping-list aggregation, dashboard summaries, and the 12-week training
//! program generator. Everything here is pure and synchronous; persistence
//! and the HTTP surface live in the calling service.

pub mod dashboard;
pub mod fitness;
pub mod metabolic;
pub mod models;
pub mod nutrition;
pub mod training;
