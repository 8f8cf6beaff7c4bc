mod cities;
mod random;

pub use cities::{CITY_GRAPH, City, CityGraph};
pub use random::{random_graph, reference_distances};
