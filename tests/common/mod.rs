use buckaroo_ideal::config::{Config, Mode};
use buckaroo_ideal::order::Order;
use iso_currency::Currency;

#[allow(dead_code)]
pub fn dummy_config() -> Config {
    Config::new("MERCHANT1", "SECRET1", Mode::Test)
}

#[allow(dead_code)]
pub fn dummy_order() -> Order {
    Order::new("EETNU-123", 100.0, Currency::EUR)
}
