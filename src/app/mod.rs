pub mod ports;
pub mod tallest_use_case;
