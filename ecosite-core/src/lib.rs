pub mod catalog;
pub mod error;
pub mod geo;
pub mod impact;
pub mod logger;
pub mod portfolio;
pub mod reference;
pub mod resolver;
pub mod simulation;
