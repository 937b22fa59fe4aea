pub mod alias;
pub mod error;
pub mod marketdata;
pub mod output;
pub mod portfolio;
pub mod pricer;
