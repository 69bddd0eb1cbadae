//! Real Las Vegas / Henderson locations used as customer stops.
//!
//! Coordinates sourced from OpenStreetMap.

use route_planner::Point;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Customer {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Customer {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.name, self.lat, self.lng)
    }
}

/// Office the driver leaves from.
pub const DEPOT: Customer = Customer::new("Wynn Las Vegas", 36.1263781, -115.1658180);

pub const STRIP_CUSTOMERS: &[Customer] = &[
    Customer::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Customer::new("Sinatra", 36.1300035, -115.1654850),
    Customer::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Customer::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Customer::new("Spago by Wolfgang Puck", 36.1139368, -115.1741462),
    Customer::new("Bacchanal Buffet", 36.1159581, -115.1762929),
    Customer::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
];

pub const HENDERSON_CUSTOMERS: &[Customer] = &[
    Customer::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Customer::new("Islander's Grill", 36.0335058, -114.9856162),
    Customer::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Customer::new("Sunset Station Area", 36.0614, -115.0631),
];

/// Depot first, then every customer.
pub fn day_route() -> Vec<Point> {
    std::iter::once(&DEPOT)
        .chain(STRIP_CUSTOMERS)
        .chain(HENDERSON_CUSTOMERS)
        .map(Customer::point)
        .collect()
}
