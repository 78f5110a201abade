pub mod cnb;

pub use cnb::CnbRateProvider;
